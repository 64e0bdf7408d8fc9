//! Per-view state for the dashboard pages: fetched collections with explicit
//! loading/ready/failed lifecycles, client-side filtering and sorting, and
//! the shop's order draft.

pub mod admin;
pub mod client;
pub mod draft;
pub mod shop;
pub mod table;
pub mod view;
