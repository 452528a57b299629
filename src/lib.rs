#![doc = include_str!("../README.md")]

pub mod cli;
pub mod config;
pub mod error;
pub mod selectors;
pub mod suite;
pub mod tools;
pub mod types;


pub use config::*;
pub use error::*;
pub use suite::*;
pub use types::*;
