pub mod output;

#[cfg(feature = "cli")]
use clap::{Parser, ValueEnum};

/// Input used when neither a text argument nor `--stdin` is given.
pub const DEFAULT_TEXT: &str = "aabbajkjyuhuyhkj";

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One match per line
    Text,
    /// A single JSON array with positions
    Json,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "palindrome-finder")]
#[command(about = "Print every palindromic substring of a text")]
pub struct CliConfig {
    /// Text to search
    #[arg(conflicts_with = "stdin")]
    pub text: Option<String>,

    #[arg(long, help = "Read the text from stdin")]
    pub stdin: bool,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    pub fn text_or_default(&self) -> &str {
        self.text.as_deref().unwrap_or(DEFAULT_TEXT)
    }
}
