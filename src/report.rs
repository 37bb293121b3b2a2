use crate::counter::WordCounts;
use crate::error::{Result, WordCountError};
use std::borrow::Cow;
use std::io::Write;
use std::path::{Component, Path, PathBuf};

/// Extension every report file name ends with
pub const REPORT_EXTENSION: &str = ".html";

/// Directory reports are written to unless the caller picks another one
pub const DEFAULT_OUTPUT_DIR: &str = "data";

/// Normalize a report file name: add `.html` if missing, then place it under
/// `dir`. A name that already starts with `dir` is not prefixed twice.
///
/// Only plain name components are kept, so roots, drive prefixes and `..`
/// can never move the report outside `dir`.
pub fn output_path(name: &str, dir: &Path) -> PathBuf {
    let file_name = if name.ends_with(REPORT_EXTENSION) {
        name.to_string()
    } else {
        format!("{}{}", name, REPORT_EXTENSION)
    };

    let path = PathBuf::from(file_name);
    let relative: PathBuf = path
        .strip_prefix(dir)
        .unwrap_or(path.as_path())
        .components()
        .filter_map(|component| match component {
            Component::Normal(part) => Some(part),
            _ => None,
        })
        .collect();

    dir.join(relative)
}

/// Replacement for characters XML 1.0 does not allow in documents
const REPLACEMENT_CHAR: char = '\u{FFFD}';

#[inline]
fn is_xml_char(ch: char) -> bool {
    !ch.is_ascii_control() || matches!(ch, '\t' | '\n' | '\r' | '\u{7f}')
}

/// Escape text for use inside XHTML element content.
///
/// Markup characters become entities and every non-ASCII character becomes a
/// numeric character reference, so the output is pure ASCII and reads the
/// same under the declared ISO-8859-1 encoding. Control characters that XML
/// 1.0 forbids are replaced with U+FFFD.
pub fn escape_xml(text: &str) -> Cow<'_, str> {
    let needs_escape = |ch: char| {
        matches!(ch, '&' | '<' | '>' | '"' | '\'') || !ch.is_ascii() || !is_xml_char(ch)
    };
    if !text.chars().any(needs_escape) {
        return Cow::Borrowed(text);
    }

    let mut escaped = String::with_capacity(text.len() + 8);
    for ch in text.chars() {
        let ch = if is_xml_char(ch) { ch } else { REPLACEMENT_CHAR };
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ if !ch.is_ascii() => escaped.push_str(&format!("&#{};", ch as u32)),
            _ => escaped.push(ch),
        }
    }
    Cow::Owned(escaped)
}

/// Write the XHTML word count table.
///
/// `words` gives the row order; each count is looked up in `counts`. A word
/// that is not in `counts` means the two were not built from the same input
/// and yields [`WordCountError::MissingWord`].
pub fn render_report<W: Write>(
    writer: &mut W,
    source_name: &str,
    words: &[String],
    counts: &WordCounts,
) -> Result<()> {
    writeln!(writer, "<?xml version='1.0' encoding='ISO-8859-1' ?>")?;
    writeln!(
        writer,
        "<!DOCTYPE html PUBLIC '-//W3C//DTD XHTML 1.0 Strict//EN' \
         'http://www.w3.org/TR/xhtml1/DTD/xhtml1-strict.dtd'>"
    )?;
    writeln!(writer, "<html xmlns='http://www.w3.org/1999/xhtml'>")?;
    writeln!(writer, "<head>")?;
    writeln!(
        writer,
        "<meta http-equiv='Content-Type' content='text/html; charset=UTF-8' />"
    )?;
    writeln!(writer, "<title>WordCounts</title>")?;
    writeln!(writer, "</head>")?;
    writeln!(writer, "<body>")?;
    writeln!(writer, "<h1>Words Counted in {}</h1>", escape_xml(source_name))?;
    writeln!(
        writer,
        "<hr style=\"height:2px;color:purple;background-color:purple\"></hr>"
    )?;

    writeln!(writer, "<table border=\"1\">")?;
    writeln!(writer, "<tr>")?;
    writeln!(writer, "<th>Words</th>")?;
    writeln!(writer, "<th>Counts</th>")?;
    writeln!(writer, "</tr>")?;

    for word in words {
        let count = counts
            .get(word)
            .ok_or_else(|| WordCountError::MissingWord(word.clone()))?;

        writeln!(writer, "<tr>")?;
        writeln!(writer, "<td>{}</td>", escape_xml(word))?;
        writeln!(writer, "<td>{}</td>", count)?;
        writeln!(writer, "</tr>")?;
    }

    writeln!(writer, "</table>")?;
    writeln!(writer, "</body>")?;
    writeln!(writer, "</html>")?;

    Ok(())
}
