//! Host-side decoding of the controller's slot reports
//!
//! The controller prints the new slot index after every transition. A host
//! listening on the other end of the serial line only cares about lines that
//! are exactly one of those indices; banners and noise are skipped.

use crate::core::slot::Slot;
use anyhow::Result;
use std::io::{BufRead, Write};
use tracing::{debug, info};

pub fn decode_report(line: &str) -> Option<Slot> {
    match line.trim() {
        "0" => Some(Slot::ALL[0]),
        "1" => Some(Slot::ALL[1]),
        "2" => Some(Slot::ALL[2]),
        "3" => Some(Slot::ALL[3]),
        _ => None,
    }
}

/// Frame label of the lamp named by a report line.
pub fn frame_for(line: &str) -> Option<&'static str> {
    decode_report(line).map(Slot::frame_name)
}

/// Copies every valid report from `reader` to `writer` as a frame label,
/// one per line. Returns how many frames were written.
/// Lines that are not valid UTF-8 (line noise while a serial device
/// attaches) are skipped like any other non-report line.
pub fn translate<R: BufRead, W: Write>(mut reader: R, mut writer: W) -> Result<usize> {
    let mut written = 0;
    let mut raw = Vec::new();
    loop {
        raw.clear();
        if reader.read_until(b'\n', &mut raw)? == 0 {
            break;
        }
        let line = String::from_utf8_lossy(&raw);
        match frame_for(&line) {
            Some(frame) => {
                writeln!(writer, "{frame}")?;
                writer.flush()?;
                written += 1;
            }
            None => debug!(line = line.trim(), "skipping non-report line"),
        }
    }
    info!(frames = written, "report stream ended");
    Ok(written)
}
