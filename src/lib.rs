//! yt-grab library
//!
//! Core functionality for the yt-grab CLI.

pub mod core;
pub mod error;
pub mod storage;
pub mod types;
pub mod ui;
pub mod utils;
