pub mod apis;
pub mod cache;
