pub mod config;
pub mod dns;
pub mod domain;
pub mod log;
