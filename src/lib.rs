pub mod config;
pub mod error;
pub mod gui;
pub mod log_utils;
pub mod math;
pub mod model;
