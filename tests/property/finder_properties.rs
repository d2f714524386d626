use palindrome_finder::{find_all_palindromic_substrings, is_palindrome, palindromic_substrings};
use proptest::prelude::*;

/// Straightforward enumeration over char indices, used as an oracle.
fn brute_force(text: &str) -> Vec<(usize, usize)> {
    let chars: Vec<char> = text.chars().collect();
    let mut spans = Vec::new();
    for i in 0..chars.len() {
        for j in i + 1..chars.len() {
            let candidate = &chars[i..=j];
            if candidate.iter().eq(candidate.iter().rev()) {
                spans.push((i, j));
            }
        }
    }
    spans
}

proptest! {
    #[test]
    fn every_match_is_a_palindrome(s in ".{0,40}") {
        for found in find_all_palindromic_substrings(&s) {
            prop_assert!(is_palindrome(&found), "{:?} is not a palindrome", found);
        }
    }

    #[test]
    fn every_match_has_at_least_two_chars(s in ".{0,40}") {
        for found in find_all_palindromic_substrings(&s) {
            prop_assert!(found.chars().count() >= 2);
        }
    }

    #[test]
    fn positions_locate_the_text(s in "[ab日]{0,30}") {
        let chars: Vec<char> = s.chars().collect();
        for found in palindromic_substrings(&s) {
            prop_assert!(found.end > found.start);
            let located: String = chars[found.start..=found.end].iter().collect();
            prop_assert_eq!(located, found.text);
        }
    }

    #[test]
    fn spans_are_strictly_increasing(s in "[abc]{0,30}") {
        let spans: Vec<_> = palindromic_substrings(&s).map(|m| (m.start, m.end)).collect();
        for pair in spans.windows(2) {
            prop_assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn matches_brute_force(s in "[ab]{0,24}") {
        let spans: Vec<_> = palindromic_substrings(&s).map(|m| (m.start, m.end)).collect();
        prop_assert_eq!(spans, brute_force(&s));
    }

    #[test]
    fn repeated_calls_agree(s in ".{0,40}") {
        prop_assert_eq!(
            find_all_palindromic_substrings(&s),
            find_all_palindromic_substrings(&s)
        );
    }

    #[test]
    fn reversal_agrees_with_char_reverse(s in ".{0,20}") {
        let reversed: String = s.chars().rev().collect();
        prop_assert_eq!(is_palindrome(&s), reversed == s);
    }
}
