use crate::core::finder::palindromic_substrings;
use crate::core::{FindReport, Sink};
use crate::utils::error::Result;

pub struct FinderEngine<S: Sink> {
    sink: S,
}

impl<S: Sink> FinderEngine<S> {
    pub fn new(sink: S) -> Self {
        Self { sink }
    }

    pub fn run(&mut self, text: &str) -> Result<FindReport> {
        let input_chars = text.chars().count();
        tracing::info!(
            "Searching {} characters for palindromic substrings",
            input_chars
        );

        let mut found = palindromic_substrings(text);
        let mut matches = 0;
        for substring in found.by_ref() {
            tracing::debug!(
                "Match at {}..={}: {}",
                substring.start,
                substring.end,
                substring.text
            );
            self.sink.emit(&substring)?;
            matches += 1;
        }
        self.sink.finish()?;

        let report = FindReport {
            input_chars,
            candidates_tested: found.candidates_tested(),
            matches,
        };
        tracing::info!(
            "Found {} palindromic substrings ({} candidates tested)",
            report.matches,
            report.candidates_tested
        );

        Ok(report)
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }
}
