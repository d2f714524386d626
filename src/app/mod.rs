// Wires CLI arguments to the engine. Kept out of main.rs so it can run against
// in-memory readers and writers.

use crate::config::output::{JsonSink, LineSink};
use crate::config::{CliConfig, OutputFormat};
use crate::core::engine::FinderEngine;
use crate::core::FindReport;
use crate::utils::error::Result;
use crate::utils::validation::decode_utf8;
use std::io::{Read, Write};

pub fn run<R: Read, W: Write>(config: &CliConfig, stdin: R, stdout: W) -> Result<FindReport> {
    let text = read_input(config, stdin)?;

    match config.format {
        OutputFormat::Text => FinderEngine::new(LineSink::new(stdout)).run(&text),
        OutputFormat::Json => FinderEngine::new(JsonSink::new(stdout)).run(&text),
    }
}

fn read_input<R: Read>(config: &CliConfig, mut stdin: R) -> Result<String> {
    if !config.stdin {
        return Ok(config.text_or_default().to_string());
    }

    let mut bytes = Vec::new();
    stdin.read_to_end(&mut bytes)?;
    tracing::debug!("Read {} bytes from stdin", bytes.len());

    let mut text = decode_utf8(bytes)?;
    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
    Ok(text)
}
