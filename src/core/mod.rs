pub mod engine;
pub mod finder;

pub use crate::domain::model::{FindReport, PalindromicSubstring};
pub use crate::domain::ports::Sink;
pub use crate::utils::error::Result;
