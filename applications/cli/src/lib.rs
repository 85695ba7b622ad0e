//! Ohohub command-line client
//!
//! Configuration loading and terminal rendering shared by the `ohohub`
//! binary.

pub mod config;
pub mod display;
