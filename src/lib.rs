//! Interactive terminal client for a remote dictionary word store
//!
//! Type a prefix to see matching words, pick one to read a short
//! encyclopedia summary, and add or delete words in the store.

pub mod app;
pub mod config;
pub mod controller;
pub mod error;
pub mod fetch;
pub mod notification;
pub mod query;

#[cfg(test)]
mod test_utils;
