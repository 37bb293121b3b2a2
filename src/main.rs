use clap::{Parser, Subcommand};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::time::Instant;
use tracing_subscriber::EnvFilter;
use wordcounter::{list_words, run, ReportConfig, DEFAULT_OUTPUT_DIR};

#[derive(Parser)]
#[command(name = "wordcounter")]
#[command(about = "Count the words of a text file and report them as an HTML table")]
#[command(version)]
struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write an HTML table of word counts
    Report {
        /// Text file to count (prompted for when omitted)
        input: Option<PathBuf>,

        /// Report file name; `.html` is appended if missing (prompted for when omitted)
        #[arg(short, long)]
        output: Option<String>,

        /// Directory the report is written to
        #[arg(long, default_value = DEFAULT_OUTPUT_DIR)]
        output_dir: PathBuf,
    },

    /// Print word counts in report order
    List {
        /// Text file to count (prompted for when omitted)
        input: Option<PathBuf>,

        /// Maximum rows to print
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Report {
            input,
            output,
            output_dir,
        } => cmd_report(input, output, output_dir),

        Commands::List { input, limit } => cmd_list(input, limit),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Write `message` to `out` and read one line from `input`, without its line ending
fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, message: &str) -> io::Result<String> {
    writeln!(out, "{}", message)?;
    out.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

/// Use the given input path, or prompt for one on stdin with the message sent to `out`
fn input_or_prompt<W: Write>(input: Option<PathBuf>, out: &mut W) -> io::Result<PathBuf> {
    match input {
        Some(path) => Ok(path),
        None => prompt(
            &mut io::stdin().lock(),
            out,
            "Please enter the name of the input file: ",
        )
        .map(PathBuf::from),
    }
}

fn cmd_report(
    input: Option<PathBuf>,
    output: Option<String>,
    output_dir: PathBuf,
) -> wordcounter::Result<()> {
    let mut stdout = io::stdout();
    let input = input_or_prompt(input, &mut stdout)?;
    let output = match output {
        Some(name) => name,
        None => prompt(
            &mut io::stdin().lock(),
            &mut stdout,
            "Please enter the name of the output file: ",
        )?,
    };

    let mut config = ReportConfig::new(input, output);
    config.output_dir = output_dir;

    let start = Instant::now();
    let summary = run(&config)?;

    println!(
        "Counted {} words ({} distinct) on {} lines in {:.3}ms",
        summary.total_words,
        summary.distinct_words,
        summary.lines,
        start.elapsed().as_secs_f64() * 1000.0
    );
    println!("Wrote report to {}", summary.output.display());

    Ok(())
}

fn cmd_list(input: Option<PathBuf>, limit: Option<usize>) -> wordcounter::Result<()> {
    // stdout carries only the word table
    let input = input_or_prompt(input, &mut io::stderr())?;
    let rows = list_words(&input)?;

    let width = rows.iter().map(|(word, _)| word.chars().count()).max().unwrap_or(0);
    for (word, count) in rows.iter().take(limit.unwrap_or(usize::MAX)) {
        println!("{:<width$} {}", word, count, width = width);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_prompt_writes_message_to_given_writer() {
        let mut input = Cursor::new("notes.txt\r\n");
        let mut out = Vec::new();

        let answer = prompt(&mut input, &mut out, "Please enter the name of the input file: ").unwrap();

        assert_eq!(answer, "notes.txt");
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Please enter the name of the input file: \n"
        );
    }

    #[test]
    fn test_given_input_skips_prompt() {
        let mut out = Vec::new();
        let path = input_or_prompt(Some(PathBuf::from("words.txt")), &mut out).unwrap();

        assert_eq!(path, PathBuf::from("words.txt"));
        assert!(out.is_empty());
    }

    #[test]
    fn test_cli_parses_list() {
        let cli = Cli::try_parse_from(["wordcounter", "list", "words.txt", "-l", "5"]).unwrap();
        match cli.command {
            Commands::List { input, limit } => {
                assert_eq!(input, Some(PathBuf::from("words.txt")));
                assert_eq!(limit, Some(5));
            }
            Commands::Report { .. } => panic!("expected list"),
        }
    }
}
