use crate::domain::model::PalindromicSubstring;
use crate::utils::error::Result;
use crate::utils::validation::validate_required_input;
use std::iter::FusedIterator;

/// Returns true if `text` reads the same forwards and backwards,
/// comparing characters rather than bytes. Empty and one-character
/// strings are palindromes.
pub fn is_palindrome(text: &str) -> bool {
    text.chars().eq(text.chars().rev())
}

/// Lazily enumerates every palindromic substring of at least two characters.
///
/// Candidates are visited by start index ascending, then by end index
/// ascending. Repeated texts at different positions are all yielded.
pub fn palindromic_substrings(text: &str) -> PalindromicSubstrings {
    PalindromicSubstrings::new(text)
}

/// Collects the texts of [`palindromic_substrings`] in enumeration order.
pub fn find_all_palindromic_substrings(text: &str) -> Vec<String> {
    palindromic_substrings(text).map(|found| found.text).collect()
}

/// Same as [`find_all_palindromic_substrings`], but fails with
/// `InvalidInput` when no input is given at all.
pub fn find_checked(text: Option<&str>) -> Result<Vec<String>> {
    let text = validate_required_input(text)?;
    Ok(find_all_palindromic_substrings(text))
}

#[derive(Debug, Clone)]
pub struct PalindromicSubstrings {
    chars: Vec<char>,
    start: usize,
    end: usize,
    // Holds chars[start..=end]; extended by one char per step.
    candidate: String,
    tested: usize,
}

impl PalindromicSubstrings {
    fn new(text: &str) -> Self {
        let chars: Vec<char> = text.chars().collect();
        let mut candidate = String::with_capacity(text.len());
        if let Some(&first) = chars.first() {
            candidate.push(first);
        }

        Self {
            chars,
            start: 0,
            end: 0,
            candidate,
            tested: 0,
        }
    }

    /// Number of candidate substrings checked so far.
    pub fn candidates_tested(&self) -> usize {
        self.tested
    }
}

impl Iterator for PalindromicSubstrings {
    type Item = PalindromicSubstring;

    fn next(&mut self) -> Option<Self::Item> {
        while self.start < self.chars.len() {
            self.end += 1;

            if self.end >= self.chars.len() {
                self.start += 1;
                self.end = self.start;
                self.candidate.clear();
                if let Some(&c) = self.chars.get(self.start) {
                    self.candidate.push(c);
                }
                continue;
            }

            self.candidate.push(self.chars[self.end]);
            self.tested += 1;

            if is_palindrome(&self.candidate) {
                return Some(PalindromicSubstring::new(
                    self.start,
                    self.end,
                    self.candidate.clone(),
                ));
            }
        }

        None
    }
}

impl FusedIterator for PalindromicSubstrings {}
