use crate::counter::WordCounts;
use crate::error::{Result, WordCountError};
use crate::ordering::sorted_words;
use crate::report::{output_path, render_report, DEFAULT_OUTPUT_DIR};
use crate::tokenizer::SeparatorSet;
use memmap2::Mmap;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Configuration for a report run
#[derive(Debug, Clone)]
pub struct ReportConfig {
    /// Text file to count
    pub input: PathBuf,

    /// Report file name, normalized with `output_path`
    pub output_name: String,

    /// Directory the report is placed in
    pub output_dir: PathBuf,
}

impl ReportConfig {
    pub fn new(input: impl Into<PathBuf>, output_name: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            output_name: output_name.into(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
        }
    }
}

/// Outcome of a report run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Where the report was written
    pub output: PathBuf,

    /// Word tokens counted
    pub total_words: usize,

    /// Distinct words (rows in the report)
    pub distinct_words: usize,

    /// Lines read from the input
    pub lines: usize,
}

/// Read a whole input file as text using memory mapping
pub fn read_input(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(WordCountError::InputNotFound(path.display().to_string()));
    }

    let file = File::open(path)?;
    let metadata = file.metadata()?;

    // Mapping a zero-length file fails on some platforms
    if metadata.len() == 0 {
        return Ok(String::new());
    }

    let mmap = unsafe { Mmap::map(&file)? };

    let text = match std::str::from_utf8(&mmap) {
        Ok(text) => text.to_string(),
        Err(e) => {
            warn!(
                path = %path.display(),
                valid_up_to = e.valid_up_to(),
                "input is not valid UTF-8, replacing invalid bytes"
            );
            String::from_utf8_lossy(&mmap).into_owned()
        }
    };

    Ok(text)
}

/// Split text into lines ended by `\n`, `\r\n` or a lone `\r`.
///
/// Terminators are not part of the yielded lines and a trailing terminator
/// does not produce an empty last line.
pub fn input_lines(text: &str) -> InputLines<'_> {
    InputLines { rest: text }
}

/// Iterator over the lines of an input text
pub struct InputLines<'a> {
    rest: &'a str,
}

impl<'a> Iterator for InputLines<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        if self.rest.is_empty() {
            return None;
        }

        let Some(end) = self.rest.find(['\r', '\n']) else {
            let line = self.rest;
            self.rest = "";
            return Some(line);
        };

        let line = &self.rest[..end];
        let terminator = if self.rest[end..].starts_with("\r\n") { 2 } else { 1 };
        self.rest = &self.rest[end + terminator..];
        Some(line)
    }
}

/// Count the words of a file, line by line
pub fn count_file(path: &Path, separators: &SeparatorSet) -> Result<WordCounts> {
    let text = read_input(path)?;
    let counts = WordCounts::from_lines(input_lines(&text), separators);

    debug!(
        path = %path.display(),
        lines = counts.lines(),
        total = counts.total(),
        distinct = counts.len(),
        "counted input"
    );

    Ok(counts)
}

/// Count a file and return (word, count) pairs in report order
pub fn list_words(path: &Path) -> Result<Vec<(String, usize)>> {
    let separators = SeparatorSet::default();
    let counts = count_file(path, &separators)?;

    sorted_words(&counts)
        .into_iter()
        .map(|word| match counts.get(&word) {
            Some(count) => Ok((word, count)),
            None => Err(WordCountError::MissingWord(word)),
        })
        .collect()
}

/// Count the input file and write its XHTML report
pub fn run(config: &ReportConfig) -> Result<RunSummary> {
    let separators = SeparatorSet::default();

    info!(input = %config.input.display(), "counting words");
    let counts = count_file(&config.input, &separators)?;
    let words = sorted_words(&counts);

    let output = output_path(&config.output_name, &config.output_dir);
    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let file = File::create(&output)?;
    let mut writer = BufWriter::new(file);
    render_report(
        &mut writer,
        &config.input.display().to_string(),
        &words,
        &counts,
    )?;
    writer.flush()?;

    info!(
        output = %output.display(),
        rows = words.len(),
        "wrote report"
    );

    Ok(RunSummary {
        output,
        total_words: counts.total(),
        distinct_words: words.len(),
        lines: counts.lines(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn config_in(temp_dir: &TempDir, input: &Path, output_name: &str) -> ReportConfig {
        let mut config = ReportConfig::new(input, output_name);
        config.output_dir = temp_dir.path().join("data");
        config
    }

    #[test]
    fn test_default_output_dir() {
        let config = ReportConfig::new("words.txt", "words");
        assert_eq!(config.output_dir, PathBuf::from("data"));
    }

    #[test]
    fn test_read_input_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let result = read_input(&temp_dir.path().join("nope.txt"));
        assert!(matches!(result, Err(WordCountError::InputNotFound(_))));
    }

    #[test]
    fn test_read_input_empty_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("empty.txt");
        std::fs::write(&path, "").unwrap();

        assert_eq!(read_input(&path).unwrap(), "");
    }

    #[test]
    fn test_read_input_invalid_utf8() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("latin1.txt");
        std::fs::write(&path, b"caf\xe9 bar").unwrap();

        let text = read_input(&path).unwrap();
        assert_eq!(text, "caf\u{FFFD} bar");
    }

    #[test]
    fn test_count_file_per_line() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("input.txt");
        std::fs::write(&path, "the cat and\r\nthe dog\nthe-end\n").unwrap();

        let counts = count_file(&path, &SeparatorSet::default()).unwrap();
        assert_eq!(counts.lines(), 3);
        assert_eq!(counts.total(), 7);
        assert_eq!(counts.get("the"), Some(3));
        assert_eq!(counts.get("and"), Some(1));
        assert_eq!(counts.get("end"), Some(1));
    }

    #[test]
    fn test_input_lines_terminators() {
        let lines: Vec<_> = input_lines("a\rb\r\nc\nd").collect();
        assert_eq!(lines, vec!["a", "b", "c", "d"]);

        let lines: Vec<_> = input_lines("a\n\nb\n").collect();
        assert_eq!(lines, vec!["a", "", "b"]);

        let lines: Vec<_> = input_lines("\r\r\n").collect();
        assert_eq!(lines, vec!["", ""]);

        assert_eq!(input_lines("").count(), 0);
    }

    #[test]
    fn test_count_file_carriage_return_endings() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("classic-mac.txt");
        std::fs::write(&path, "the cat\rthe dog\r").unwrap();

        let counts = count_file(&path, &SeparatorSet::default()).unwrap();
        assert_eq!(counts.lines(), 2);
        assert_eq!(counts.get("cat"), Some(1));
        assert_eq!(counts.get("dog"), Some(1));
        assert_eq!(counts.get("cat\rthe"), None);
        assert_eq!(counts.get("dog\r"), None);
    }

    #[test]
    fn test_list_words() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("input.txt");
        std::fs::write(&path, "Banana apple, banana.\napple-Apple\n").unwrap();

        let listed = list_words(&path).unwrap();
        assert_eq!(
            listed,
            vec![
                ("apple".to_string(), 2),
                ("Apple".to_string(), 1),
                ("Banana".to_string(), 1),
                ("banana".to_string(), 1),
            ]
        );
    }

    #[test]
    fn test_run_writes_report() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("input.txt");
        std::fs::write(&input, "the cat and the dog\n").unwrap();

        let config = config_in(&temp_dir, &input, "counts");
        let summary = run(&config).unwrap();

        assert_eq!(summary.output, temp_dir.path().join("data").join("counts.html"));
        assert_eq!(summary.total_words, 5);
        assert_eq!(summary.distinct_words, 4);
        assert_eq!(summary.lines, 1);

        let html = std::fs::read_to_string(&summary.output).unwrap();
        let and = html.find("<td>and</td>").unwrap();
        let cat = html.find("<td>cat</td>").unwrap();
        let dog = html.find("<td>dog</td>").unwrap();
        let the = html.find("<td>the</td>\n<td>2</td>").unwrap();
        assert!(and < cat && cat < dog && dog < the);
    }

    #[test]
    fn test_run_empty_input() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("empty.txt");
        std::fs::write(&input, "").unwrap();

        let config = config_in(&temp_dir, &input, "empty.html");
        let summary = run(&config).unwrap();

        assert_eq!(summary.total_words, 0);
        assert_eq!(summary.distinct_words, 0);

        let html = std::fs::read_to_string(&summary.output).unwrap();
        assert!(html.contains("<th>Counts</th>\n</tr>\n</table>"));
        assert!(!html.contains("<td>"));
    }

    #[test]
    fn test_run_missing_input_writes_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let config = config_in(&temp_dir, &temp_dir.path().join("missing.txt"), "out");

        let result = run(&config);
        assert!(matches!(result, Err(WordCountError::InputNotFound(_))));
        assert!(!temp_dir.path().join("data").exists());
    }
}
