//! Notification module for triemaster
//!
//! Mutation results are acknowledged through modal notifications: one is
//! shown at a time, later ones wait in a queue, and input is blocked until
//! the user dismisses the visible one.

mod render;
mod state;

pub use render::render_notification;
pub use state::{Notification, NotificationKind, NotificationState};
