//! Terminal front end
//!
//! Thin layer over [`Controller`](crate::controller::Controller): turns
//! terminal events into controller events and draws the controller state.

mod events;
mod render;
mod state;

pub use state::{App, Focus};
