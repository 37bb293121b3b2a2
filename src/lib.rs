//! Word counting with an HTML report
//!
//! Lines of text are split into maximal runs of word characters and
//! separator characters (space, comma, period, hyphen). Word runs are counted
//! case-sensitively, then listed once each in case-insensitive alphabetical
//! order alongside their counts.
//!
//! # Example
//!
//! ```no_run
//! use wordcounter::{run, ReportConfig};
//!
//! let config = ReportConfig::new("notes.txt", "notes");
//! let summary = run(&config).unwrap();
//!
//! println!("{} distinct words -> {}", summary.distinct_words, summary.output.display());
//! ```
//!
//! The core can also be driven on in-memory text:
//!
//! ```
//! use wordcounter::{sorted_words, SeparatorSet, WordCounts};
//!
//! let separators = SeparatorSet::default();
//! let counts = WordCounts::from_lines(["the cat and the dog"], &separators);
//!
//! assert_eq!(counts.get("the"), Some(2));
//! assert_eq!(sorted_words(&counts), ["and", "cat", "dog", "the"]);
//! ```

mod counter;
mod error;
mod ordering;
mod pipeline;
mod report;
mod tokenizer;

// Re-export public API
pub use counter::WordCounts;
pub use error::{Result, WordCountError};
pub use ordering::{compare_ignore_case, dedupe, sort_words, sorted_words};
pub use pipeline::{
    count_file, input_lines, list_words, read_input, run, InputLines, ReportConfig, RunSummary,
};
pub use report::{
    escape_xml, output_path, render_report, DEFAULT_OUTPUT_DIR, REPORT_EXTENSION,
};
pub use tokenizer::{
    next_token, tokenize, words, SeparatorSet, Token, TokenKind, Tokens, DEFAULT_SEPARATORS,
};
