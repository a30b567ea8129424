//! UI modules: dialoguer prompts, colored output

pub mod prompt;
pub mod render;
