//! Page-data payloads passed from services to the templates.

pub mod books;
pub mod main;
pub mod shows;
pub mod stations;
pub mod topics;
