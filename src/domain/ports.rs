use crate::domain::model::PalindromicSubstring;
use crate::utils::error::Result;

/// Receives matches in enumeration order.
pub trait Sink {
    fn emit(&mut self, found: &PalindromicSubstring) -> Result<()>;

    /// Called once after the last match.
    fn finish(&mut self) -> Result<()> {
        Ok(())
    }
}
