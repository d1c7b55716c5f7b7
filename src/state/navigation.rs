//! Navigation-related state types.
//!
//! This module contains the closed set of pages and the state machine that
//! moves between them while keeping a bounded history.

use super::error::StateError;
use super::history::HistoryRing;
use log::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Maximum number of pages kept in navigation history.
///
pub const MAX_HISTORY: usize = 10;

/// Specifying the different pages.
///
#[derive(Debug, Default, PartialEq, Eq, Hash, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PageId {
    #[default]
    Home,
    Search,
    Collections,
    Insights,
    Analytics,
    Settings,
    Profile,
    About,
    SignIn,
    SignUp,
    Connectors,
}

impl PageId {
    /// Every page, in sidebar order.
    ///
    pub const ALL: [PageId; 11] = [
        PageId::Home,
        PageId::Search,
        PageId::Collections,
        PageId::Insights,
        PageId::Analytics,
        PageId::Connectors,
        PageId::Settings,
        PageId::Profile,
        PageId::About,
        PageId::SignIn,
        PageId::SignUp,
    ];

    /// Return the machine name used in config files and on the command line.
    ///
    pub fn as_str(&self) -> &'static str {
        match self {
            PageId::Home => "home",
            PageId::Search => "search",
            PageId::Collections => "collections",
            PageId::Insights => "insights",
            PageId::Analytics => "analytics",
            PageId::Settings => "settings",
            PageId::Profile => "profile",
            PageId::About => "about",
            PageId::SignIn => "sign-in",
            PageId::SignUp => "sign-up",
            PageId::Connectors => "connectors",
        }
    }

    /// Return the title shown in the sidebar and block headers.
    ///
    pub fn title(&self) -> &'static str {
        match self {
            PageId::Home => "Home",
            PageId::Search => "Search",
            PageId::Collections => "Collections",
            PageId::Insights => "Insights",
            PageId::Analytics => "Analytics",
            PageId::Settings => "Settings",
            PageId::Profile => "Profile",
            PageId::About => "About",
            PageId::SignIn => "Sign in",
            PageId::SignUp => "Sign up",
            PageId::Connectors => "Connectors",
        }
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PageId {
    type Err = StateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        PageId::ALL
            .iter()
            .copied()
            .find(|page| page.as_str() == normalized)
            .ok_or_else(|| StateError::UnknownPage(s.to_string()))
    }
}

/// Tracks the current page, the page before it and a bounded history.
///
/// The history is never empty and its newest entry is always the current
/// page once an operation returns.
///
#[derive(Clone, Debug)]
pub struct NavigationState {
    current_page: PageId,
    previous_page: Option<PageId>,
    history: HistoryRing<PageId>,
}

impl NavigationState {
    /// Return a new state machine seeded with the given page.
    ///
    pub fn new(seed: PageId) -> Self {
        let mut history = HistoryRing::new(MAX_HISTORY);
        history.push(seed);
        NavigationState {
            current_page: seed,
            previous_page: None,
            history,
        }
    }

    pub fn current_page(&self) -> PageId {
        self.current_page
    }

    pub fn previous_page(&self) -> Option<PageId> {
        self.previous_page
    }

    /// Return the history from oldest to newest.
    ///
    pub fn history(&self) -> Vec<PageId> {
        self.history.to_vec()
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Whether a back action would return to an earlier page rather than
    /// the fallback.
    ///
    pub fn can_go_back(&self) -> bool {
        self.history.len() > 1
    }

    /// Move to the given page. With `add_to_history` the page is appended to
    /// history (the oldest entry is dropped beyond capacity); without it the
    /// newest history entry is replaced.
    ///
    pub fn navigate_to(&mut self, page: PageId, add_to_history: bool) {
        debug!(
            "Navigating from '{}' to '{}' (record: {})...",
            self.current_page, page, add_to_history
        );
        self.previous_page = Some(self.current_page);
        self.current_page = page;
        if add_to_history {
            if let Some(evicted) = self.history.push(page) {
                trace!("Dropped '{}' from navigation history.", evicted);
            }
        } else {
            self.history.replace_last(page);
        }
    }

    /// Return to the previous history entry, or land on `fallback` when
    /// there is nothing to go back to.
    ///
    pub fn go_back(&mut self, fallback: PageId) {
        if self.history.len() > 1 {
            let leaving = self.current_page;
            self.history.pop_back();
            self.current_page = self.history.last().copied().unwrap_or(PageId::Home);
            self.previous_page = Some(leaving);
            debug!("Went back from '{}' to '{}'.", leaving, self.current_page);
        } else {
            debug!("History exhausted, falling back to '{}'.", fallback);
            self.navigate_to(fallback, false);
        }
    }
}

impl Default for NavigationState {
    fn default() -> Self {
        NavigationState::new(PageId::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    fn assert_invariants(nav: &NavigationState) {
        assert!(nav.history_len() <= MAX_HISTORY);
        assert!(nav.history_len() >= 1);
        assert_eq!(nav.history().last().copied(), Some(nav.current_page()));
    }

    #[test]
    fn new_seeds_history() {
        let nav = NavigationState::new(PageId::Search);
        assert_eq!(nav.current_page(), PageId::Search);
        assert_eq!(nav.previous_page(), None);
        assert_eq!(nav.history(), vec![PageId::Search]);
        assert!(!nav.can_go_back());
    }

    #[test]
    fn default_seed_is_home() {
        assert_eq!(NavigationState::default().current_page(), PageId::Home);
    }

    #[test]
    fn navigate_to_records_history() {
        let mut nav = NavigationState::default();
        nav.navigate_to(PageId::Search, true);
        nav.navigate_to(PageId::Insights, true);
        assert_eq!(nav.current_page(), PageId::Insights);
        assert_eq!(nav.previous_page(), Some(PageId::Search));
        assert_eq!(
            nav.history(),
            vec![PageId::Home, PageId::Search, PageId::Insights]
        );
        assert!(nav.can_go_back());
    }

    #[test]
    fn navigate_without_history_replaces_newest_entry() {
        let mut nav = NavigationState::default();
        nav.navigate_to(PageId::Search, true);
        nav.navigate_to(PageId::Settings, false);
        assert_eq!(nav.current_page(), PageId::Settings);
        assert_eq!(nav.previous_page(), Some(PageId::Search));
        assert_eq!(nav.history(), vec![PageId::Home, PageId::Settings]);
        assert_invariants(&nav);
    }

    #[test]
    fn history_is_bounded_to_most_recent_entries() {
        let mut nav = NavigationState::default();
        for page in PageId::ALL.iter().cycle().take(25) {
            nav.navigate_to(*page, true);
            assert_invariants(&nav);
        }
        assert_eq!(nav.history_len(), MAX_HISTORY);
    }

    #[test]
    fn random_navigation_keeps_invariants() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut nav = NavigationState::default();
        for _ in 0..500 {
            let page = PageId::ALL[rng.gen_range(0..PageId::ALL.len())];
            match rng.gen_range(0..3) {
                0 => nav.navigate_to(page, true),
                1 => nav.navigate_to(page, false),
                _ => nav.go_back(PageId::Home),
            }
            assert_invariants(&nav);
        }
    }

    #[test]
    fn go_back_pops_current_page() {
        let mut nav = NavigationState::default();
        nav.navigate_to(PageId::Search, true);
        nav.navigate_to(PageId::Profile, true);
        nav.go_back(PageId::Home);
        assert_eq!(nav.current_page(), PageId::Search);
        assert_eq!(nav.previous_page(), Some(PageId::Profile));
        assert_eq!(nav.history(), vec![PageId::Home, PageId::Search]);
    }

    #[test]
    fn go_back_at_single_entry_lands_on_fallback() {
        let mut nav = NavigationState::new(PageId::Profile);
        nav.go_back(PageId::Search);
        assert_eq!(nav.current_page(), PageId::Search);
        assert_eq!(nav.previous_page(), Some(PageId::Profile));
        assert_eq!(nav.history(), vec![PageId::Search]);
    }

    #[test]
    fn page_id_round_trips_through_names() {
        for page in PageId::ALL {
            assert_eq!(page.as_str().parse::<PageId>().unwrap(), page);
        }
        assert_eq!("Sign_In".parse::<PageId>().unwrap(), PageId::SignIn);
    }

    #[test]
    fn page_id_rejects_unknown_names() {
        let error = "dashboard".parse::<PageId>().unwrap_err();
        assert!(error.to_string().contains("dashboard"));
    }

    #[test]
    fn page_id_serializes_kebab_case() {
        let serialized = serde_yaml::to_string(&PageId::SignUp).unwrap();
        assert!(serialized.contains("sign-up"));
    }
}
