//! Change log rendering.
//!
//! The text layout is one block per original lead:
//!
//! ```text
//! original entry {"_id": "1", ...}
//! updated entry: {"_id": "1", ...}
//! updated column email from a@x.com to a2@x.com
//! -------------------------
//! ```

use std::io;

use leadmerge_resolve::ChangeEntry;
use serde::Serialize;
use serde_json::ser::Formatter;

use crate::config::LogFormat;
use crate::error::IoResult;

/// Line closing every block of the text log.
pub const LOG_SEPARATOR: &str = "-------------------------";

/// Single-line JSON with `", "` between items and `": "` after keys.
struct SpacedFormatter;

impl Formatter for SpacedFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }
}

/// Serialize `value` on one line with spaced separators.
pub fn to_spaced_json<T: Serialize + ?Sized>(value: &T) -> IoResult<String> {
    let mut buf = Vec::new();
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, SpacedFormatter);
    value.serialize(&mut ser)?;
    // serde_json only emits valid UTF-8.
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Render the full change log for `entries` in the requested layout.
pub fn render_change_log(entries: &[ChangeEntry], format: LogFormat) -> IoResult<String> {
    let mut out = String::new();
    for entry in entries {
        match format {
            LogFormat::Text => render_text_block(&mut out, entry)?,
            LogFormat::Json => {
                out.push_str(&serde_json::to_string(entry)?);
                out.push('\n');
            }
        }
    }
    Ok(out)
}

fn render_text_block(out: &mut String, entry: &ChangeEntry) -> IoResult<()> {
    out.push_str("original entry ");
    out.push_str(&to_spaced_json(&entry.original)?);
    out.push('\n');
    out.push_str("updated entry: ");
    out.push_str(&to_spaced_json(&entry.resolved)?);
    out.push('\n');
    for change in &entry.changes {
        out.push_str(&change.to_string());
        out.push('\n');
    }
    out.push_str(LOG_SEPARATOR);
    out.push('\n');
    Ok(())
}
