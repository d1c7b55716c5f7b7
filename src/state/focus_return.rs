//! Focus return for modal-like surfaces.
//!
//! A surface feeds its open flag into [`FocusReturn::update`] every time the
//! flag may have changed. Opening remembers who held focus and moves focus
//! into the surface; closing hands focus back so it never stays on a widget
//! that is no longer drawn.

use super::focus::{ActiveElement, FocusOptions, FocusRegistry};
use log::*;

/// Reacts to open/closed transitions of one surface.
///
#[derive(Debug, Default)]
pub struct FocusReturn {
    target: Option<String>,
    open: bool,
    holder: Option<ActiveElement>,
    recorded: bool,
}

impl FocusReturn {
    /// Return a controller that focuses `target` when the surface opens.
    ///
    pub fn new(target: Option<String>) -> Self {
        FocusReturn {
            target,
            open: false,
            holder: None,
            recorded: false,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Feed the current open flag. Only transitions have an effect.
    ///
    pub fn update(&mut self, open: bool, registry: &mut FocusRegistry) {
        if open == self.open {
            return;
        }
        self.open = open;

        if open {
            self.holder = registry.active_element();
            debug!(
                "Surface opened, focus was on {:?}.",
                self.holder.as_ref().map(ActiveElement::id)
            );
            let before = registry.history_len();
            if let Some(target) = &self.target {
                registry.set_focus(target, FocusOptions::RECORD);
            }
            self.recorded = registry.history_len() > before;
        } else {
            let recorded = std::mem::take(&mut self.recorded);
            match self.holder.take() {
                Some(holder) if registry.restore(&holder) => {
                    if recorded {
                        registry.forget_previous(holder.id());
                    }
                }
                _ => registry.return_to_previous(),
            }
        }
    }
}
