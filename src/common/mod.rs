pub mod config;
pub mod paths;
pub mod terminal;
