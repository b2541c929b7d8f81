pub mod actions;
pub mod analytics;
pub mod bookmarks;
pub mod enrich;
pub mod generators;
pub mod log;
pub mod query;
