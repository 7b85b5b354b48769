pub mod config;
pub mod error;
pub mod kube;
pub mod logging;
