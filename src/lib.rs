#![doc = include_str!("../README.md")]
pub mod build;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
