pub mod config;
pub mod bodies;
