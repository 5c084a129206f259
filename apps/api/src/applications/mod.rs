// Application tracking: status vocabulary, list filtering, per-status counts.

pub mod handlers;
pub mod tracker;
