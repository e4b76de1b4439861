pub mod config;
pub mod logging;

pub mod analysis;
pub mod client;
pub mod form;
pub mod render;
