//! Fabricated content for the page shells.
//!
//! Search results are generated with `fake` from a seeded RNG, so every run
//! shows the same data. The other pages use small static tables.

use crate::state::PageId;
use crate::utils::text_processing::query_regex;
use fake::faker::lorem::en::{Paragraph, Sentence};
use fake::{Dummy, Fake, Faker};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Seed used for the search results shown by the app.
pub const RESULT_SEED: u64 = 0x5EA2C4;

/// Number of results the search page starts with.
pub const RESULT_COUNT: usize = 40;

/// Where a search result came from.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResultSource {
    Drive,
    Slack,
    Wiki,
    Tracker,
    Mail,
}

impl ResultSource {
    pub const ALL: [ResultSource; 5] = [
        ResultSource::Drive,
        ResultSource::Slack,
        ResultSource::Wiki,
        ResultSource::Tracker,
        ResultSource::Mail,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ResultSource::Drive => "Drive",
            ResultSource::Slack => "Slack",
            ResultSource::Wiki => "Wiki",
            ResultSource::Tracker => "Tracker",
            ResultSource::Mail => "Mail",
        }
    }

    fn host(&self) -> &'static str {
        match self {
            ResultSource::Drive => "drive.example.com/file",
            ResultSource::Slack => "chat.example.com/archives",
            ResultSource::Wiki => "wiki.example.com/page",
            ResultSource::Tracker => "tracker.example.com/issue",
            ResultSource::Mail => "mail.example.com/thread",
        }
    }
}

impl Dummy<Faker> for ResultSource {
    fn dummy_with_rng<R: Rng + ?Sized>(_: &Faker, rng: &mut R) -> Self {
        ResultSource::ALL[rng.gen_range(0..ResultSource::ALL.len())]
    }
}

/// Defines search result data structure.
///
#[derive(Clone, Debug, Dummy, PartialEq, Eq)]
pub struct SearchResult {
    #[dummy(faker = "1000..100000")]
    pub id: u32,
    #[dummy(faker = "Sentence(3..7)")]
    pub title: String,
    #[dummy(faker = "Paragraph(1..3)")]
    pub snippet: String,
    pub source: ResultSource,
    #[dummy(faker = "0..365")]
    pub age_days: u32,
}

impl SearchResult {
    /// Link that "Copy link" puts on the clipboard.
    ///
    pub fn url(&self) -> String {
        format!("https://{}/{}", self.source.host(), self.id)
    }

    /// Short human readable age.
    ///
    pub fn age(&self) -> String {
        match self.age_days {
            0 => "today".to_string(),
            1 => "yesterday".to_string(),
            days if days < 30 => format!("{} days ago", days),
            days => format!("{} months ago", days / 30),
        }
    }
}

/// Generate `count` results from a fixed seed.
///
pub fn generate_results(seed: u64, count: usize) -> Vec<SearchResult> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count).map(|_| Faker.fake_with_rng(&mut rng)).collect()
}

/// Return the indices of results whose title or snippet contain the query,
/// ignoring case. A blank query matches everything.
///
pub fn filter_results(results: &[SearchResult], query: &str) -> Vec<usize> {
    let re = match query_regex(query) {
        Some(re) => re,
        None => return (0..results.len()).collect(),
    };
    results
        .iter()
        .enumerate()
        .filter(|(_, r)| re.is_match(&r.title) || re.is_match(&r.snippet))
        .map(|(i, _)| i)
        .collect()
}

/// Row on a non-search page.
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageItem {
    pub title: String,
    pub detail: String,
    pub enabled: bool,
}

impl PageItem {
    fn new(title: &str, detail: &str, enabled: bool) -> Self {
        PageItem {
            title: title.to_string(),
            detail: detail.to_string(),
            enabled,
        }
    }
}

/// Rows shown on a page body. The search page has none; its body is the
/// result list.
///
pub fn page_items(page: PageId) -> Vec<PageItem> {
    let rows: &[(&str, &str, bool)] = match page {
        PageId::Home => &[
            ("Quarterly planning", "Recent search, 2 days ago", true),
            ("Onboarding checklist", "Recent search, last week", true),
            ("Incident 4112 review", "Pinned", true),
        ],
        PageId::Search => &[],
        PageId::Collections => &[
            ("Design specs", "18 items", true),
            ("Customer calls", "42 items", true),
            ("Reading list", "7 items", false),
        ],
        PageId::Insights => &[
            ("Top query", "\"release notes\" searched 212 times", true),
            ("Zero-result queries", "14 this week", true),
            ("Most opened source", "Wiki", true),
        ],
        PageId::Analytics => &[
            ("Searches per day", "Last 30 days", true),
            ("Click-through rate", "61%", true),
        ],
        PageId::Connectors => &[
            ("Drive", "Synced 5 minutes ago", true),
            ("Slack", "Synced 1 hour ago", true),
            ("Wiki", "Not connected", false),
            ("Tracker", "Synced yesterday", true),
            ("Mail", "Not connected", false),
        ],
        PageId::Settings => &[
            ("Show snippets", "Display a preview under each result", true),
            ("Include archived", "Search archived sources", false),
            ("Compact layout", "Fewer blank lines", false),
        ],
        PageId::Profile => &[
            ("Name", "Demo User", true),
            ("Email", "demo@example.com", true),
            ("Team", "Platform", true),
        ],
        PageId::About => &[
            ("Version", env!("CARGO_PKG_VERSION"), true),
            ("Data", "All content is generated", true),
        ],
        PageId::SignIn => &[
            ("Continue with SSO", "Single sign-on", true),
            ("Continue with email", "Magic link", true),
        ],
        PageId::SignUp => &[
            ("Create workspace", "Start a new workspace", true),
            ("Join workspace", "Use an invite link", true),
        ],
    };
    rows.iter()
        .map(|(title, detail, enabled)| PageItem::new(title, detail, *enabled))
        .collect()
}

/// Daily search counts for the analytics chart.
///
pub fn analytics_series(seed: u64, days: usize) -> Vec<u64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut value: i64 = 120;
    (0..days)
        .map(|_| {
            value = (value + rng.gen_range(-25..=30)).max(10);
            value as u64
        })
        .collect()
}
