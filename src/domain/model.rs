use serde::{Deserialize, Serialize};

/// A palindromic run of the input, located by inclusive character indices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PalindromicSubstring {
    pub start: usize,
    pub end: usize,
    pub text: String,
}

impl PalindromicSubstring {
    pub fn new(start: usize, end: usize, text: String) -> Self {
        Self { start, end, text }
    }

    /// Length in characters.
    pub fn char_len(&self) -> usize {
        self.end - self.start + 1
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FindReport {
    pub input_chars: usize,
    pub candidates_tested: usize,
    pub matches: usize,
}
