//! Lazy detail loading state, kept apart from the rendered markup
//!
//! Each rendered item moves through `Unloaded -> Loading -> Loaded | Failed` at most once
//! per page view. The table lives in the component; nodes only reflect it.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;

/// Position of an item in display order, stable for the lifetime of the page view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(pub usize);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DetailState {
    #[default]
    Unloaded,
    Loading,
    /// Rendered HTML of the detail file
    Loaded(String),
    Failed,
}

impl DetailState {
    /// `Loaded` and `Failed` are terminal for the page view
    pub fn is_settled(&self) -> bool {
        matches!(self, DetailState::Loaded(_) | DetailState::Failed)
    }
}

/// Result of activating an item's toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    Shown,
    Hidden,
    /// A fetch is already in flight; the activation was ignored
    Pending,
}

/// What an activation has to do given the current state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Activation {
    /// First activation: fetch and render
    Load,
    /// Fetch in flight
    Busy,
    /// Content settled, only visibility changes
    Ready,
}

#[derive(Debug, Default)]
pub(crate) struct DetailStates {
    states: RefCell<HashMap<ItemId, DetailState>>,
}

impl DetailStates {
    pub(crate) fn get(&self, id: ItemId) -> DetailState {
        self.states.borrow().get(&id).cloned().unwrap_or_default()
    }

    /// Claim the item for loading if nobody has yet
    pub(crate) fn activate(&self, id: ItemId) -> Activation {
        let mut states = self.states.borrow_mut();
        let state = states.entry(id).or_default();
        match state {
            DetailState::Unloaded => {
                *state = DetailState::Loading;
                Activation::Load
            }
            DetailState::Loading => Activation::Busy,
            DetailState::Loaded(_) | DetailState::Failed => Activation::Ready,
        }
    }

    /// Record the outcome of a load started by [`DetailStates::activate`]
    pub(crate) fn settle(&self, id: ItemId, state: DetailState) {
        debug_assert!(state.is_settled());
        let mut states = self.states.borrow_mut();
        if let Some(current) = states.get_mut(&id) {
            if *current == DetailState::Loading {
                *current = state;
            }
        }
    }
}
