//! Search orchestration controller
//!
//! Owns the observable state of the client (query, suggestions, enrichment
//! text, loading flag, error banner) and turns user events into requests
//! for the fetch worker. Responses come back in completion order and are
//! reconciled according to the configured [`ConsistencyMode`].
//!
//! [`ConsistencyMode`]: crate::config::ConsistencyMode

mod controller_events;
mod controller_state;
mod enrichment;
mod mutations;
mod suggestions;

pub use controller_events::PollSummary;
pub use controller_state::{Controller, Phase};

/// Error banner text for a failed search
pub const SEARCH_ERROR_TEXT: &str = "Error fetching suggestions. Please try again later.";

pub const ADD_FAILURE_TEXT: &str = "There was an issue adding the word. Please try again.";

pub const DELETE_FAILURE_TEXT: &str = "There was an issue deleting the word. Please try again.";

pub fn added_message(word: &str) -> String {
    format!("The word \"{}\" has been successfully added.", word)
}

pub fn deleted_message(word: &str) -> String {
    format!("The word \"{}\" has been successfully deleted.", word)
}
