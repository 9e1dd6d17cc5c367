//! Item records returned by the catalog API.
//!
//! These are immutable value objects: deserialized once at the client
//! boundary and never modified afterwards.

pub mod book;
pub mod show;
pub mod station;
pub mod topic;
