//! Query state and the per-view listing controller.
//!
//! [`query::QueryState`] owns the page/search pair a listing view requests
//! and its URL-query representation. [`controller::ListingController`] runs
//! the event loop that debounces search input, keeps at most one fetch
//! current, and preserves the last good page across failed refreshes.

pub mod controller;
pub mod query;
