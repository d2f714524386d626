use crate::core::{PalindromicSubstring, Sink};
use crate::utils::error::Result;
use std::io::Write;

/// Writes each match on its own line.
#[derive(Debug)]
pub struct LineSink<W: Write> {
    writer: W,
}

impl<W: Write> LineSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Sink for LineSink<W> {
    fn emit(&mut self, found: &PalindromicSubstring) -> Result<()> {
        writeln!(self.writer, "{}", found.text)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

/// Buffers matches and writes them as a single JSON array on finish.
#[derive(Debug)]
pub struct JsonSink<W: Write> {
    writer: W,
    buffered: Vec<PalindromicSubstring>,
}

impl<W: Write> JsonSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            buffered: Vec::new(),
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Sink for JsonSink<W> {
    fn emit(&mut self, found: &PalindromicSubstring) -> Result<()> {
        self.buffered.push(found.clone());
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        serde_json::to_writer(&mut self.writer, &self.buffered)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct CollectSink {
    matches: Vec<PalindromicSubstring>,
}

impl CollectSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn matches(&self) -> &[PalindromicSubstring] {
        &self.matches
    }

    pub fn texts(&self) -> Vec<&str> {
        self.matches.iter().map(|m| m.text.as_str()).collect()
    }

    pub fn into_matches(self) -> Vec<PalindromicSubstring> {
        self.matches
    }
}

impl Sink for CollectSink {
    fn emit(&mut self, found: &PalindromicSubstring) -> Result<()> {
        self.matches.push(found.clone());
        Ok(())
    }
}
