//! `ari decode`: offline event decoding

use anyhow::{bail, Result};
use ari_client::Event;
use std::io::BufRead;

use crate::output::Output;

/// Result of decoding one non-blank input line.
#[derive(Debug)]
pub enum Outcome {
    Decoded(Event),
    Failed { line: usize, reason: String },
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub decoded: usize,
    pub failed: usize,
}

/// Decode every line of `reader`, handing each outcome to `emit`.
///
/// Lines that are not valid UTF-8 fail on their own and decoding continues.
/// A read error fails the line it happened on and ends the input.
pub fn decode<R, F>(reader: R, mut emit: F) -> Result<Summary>
where
    R: BufRead,
    F: FnMut(Outcome) -> Result<()>,
{
    let mut summary = Summary::default();

    for (index, chunk) in reader.split(b'\n').enumerate() {
        let line = index + 1;

        let bytes = match chunk {
            Ok(bytes) => bytes,
            Err(e) => {
                summary.failed += 1;
                emit(Outcome::Failed {
                    line,
                    reason: format!("read error: {e}"),
                })?;
                break;
            }
        };

        let text = match String::from_utf8(bytes) {
            Ok(text) => text,
            Err(e) => {
                summary.failed += 1;
                emit(Outcome::Failed {
                    line,
                    reason: format!("invalid UTF-8: {}", e.utf8_error()),
                })?;
                continue;
            }
        };

        let text = text.trim_end_matches('\r');
        if text.trim().is_empty() {
            continue;
        }

        match Event::parse(text) {
            Ok(event) => {
                summary.decoded += 1;
                emit(Outcome::Decoded(event))?;
            }
            Err(e) => {
                summary.failed += 1;
                emit(Outcome::Failed {
                    line,
                    reason: e.to_string(),
                })?;
            }
        }
    }

    Ok(summary)
}

pub fn run<R: BufRead>(reader: R, out: &Output) -> Result<()> {
    let summary = decode(reader, |outcome| {
        match outcome {
            Outcome::Decoded(event) if out.is_json() => out.value(event.payload())?,
            Outcome::Decoded(event) => {
                let id = event.event_id().unwrap_or_else(|| "-".to_string());
                out.row(event.event_type().as_str(), &id);
            }
            Outcome::Failed { line, reason } => {
                out.print_warning(&format!("line {line} skipped: {reason}"));
            }
        }
        Ok(())
    })?;

    tracing::info!(
        decoded = summary.decoded,
        failed = summary.failed,
        "Decode finished"
    );
    if summary.failed > 0 {
        bail!(
            "{} of {} messages failed to decode",
            summary.failed,
            summary.decoded + summary.failed
        );
    }
    Ok(())
}
