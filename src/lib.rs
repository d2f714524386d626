#[cfg(feature = "cli")]
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::{CliConfig, OutputFormat};

pub use crate::config::output::{CollectSink, JsonSink, LineSink};
pub use crate::core::engine::FinderEngine;
pub use crate::core::finder::{
    find_all_palindromic_substrings, find_checked, is_palindrome, palindromic_substrings,
};
pub use crate::domain::model::{FindReport, PalindromicSubstring};
pub use crate::domain::ports::Sink;
pub use crate::utils::error::{FinderError, Result};
