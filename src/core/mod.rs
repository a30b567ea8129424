//! Core modules: format mapping, probing, downloading, session state

pub mod downloader;
pub mod format;
pub mod probe;
pub mod session;
pub mod ytdlp;
