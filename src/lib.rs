pub mod cli;
pub mod config;
pub mod error;
pub mod game;
pub mod gui;

pub use error::{Error, Result};
