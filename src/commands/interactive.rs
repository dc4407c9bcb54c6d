//! Interactive prompt mode
//!
//! Reads candidate letters line by line and searches the same dictionary for each.

use super::search::{SearchRequest, run_search};
use crate::output::RenderOptions;
use crate::output::formatters::with_thousands;
use crate::runtime::{Runtime, RuntimeReporter};
use crate::search::Descrambler;
use std::io::{self, BufRead, Write};

/// Run the interactive prompt until `quit`, `exit` or end of input
///
/// Every completed search is timed and handed to `reporter`, which prints the
/// runtime line and persists the record. Search and record errors are printed
/// and the prompt continues. Returns the number of searches that completed.
///
/// # Errors
///
/// Returns an error if reading from `input` or writing to `output` fails.
pub fn run_interactive<R: BufRead, W: Write>(
    descrambler: &Descrambler,
    render: RenderOptions,
    reporter: &RuntimeReporter,
    input: R,
    output: &mut W,
) -> io::Result<usize> {
    writeln!(output, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(output, "║              Word Descrambler - Interactive Mode             ║")?;
    writeln!(output, "╚══════════════════════════════════════════════════════════════╝\n")?;
    writeln!(
        output,
        "Searching {} words. Enter candidate letters, or 'quit' to exit.\n",
        with_thousands(descrambler.dictionary().len())
    )?;

    let mut searches = 0;
    let mut lines = input.lines();

    loop {
        write!(output, "Letters: ")?;
        output.flush()?;

        let Some(line) = lines.next() else {
            writeln!(output)?;
            break;
        };
        let letters = line?;
        let letters = letters.trim();

        match letters {
            "" => continue,
            "quit" | "exit" => break,
            _ => {}
        }

        let runtime = Runtime::start();
        let request = SearchRequest::new(letters).with_render(render);
        match run_search(request, descrambler) {
            Ok(report) => {
                searches += 1;
                if let Some(rendered) = &report.rendered {
                    writeln!(output, "Matching Words:")?;
                    write!(output, "{rendered}")?;
                }
                writeln!(
                    output,
                    "{} matches found. ({} guesses)",
                    with_thousands(report.outcome.matches.len()),
                    with_thousands(report.outcome.guesses),
                )?;
                match reporter.finish(&runtime) {
                    Ok(record) => {
                        writeln!(output, "{}\n", record.runtime_string(reporter.use_timedelta))?;
                    }
                    Err(e) => writeln!(output, "❌ {e}\n")?,
                }
            }
            Err(e) => writeln!(output, "❌ {e}\n")?,
        }
    }

    Ok(searches)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Dictionary, SearchConfig};
    use crate::runtime::RuntimeFormat;
    use std::io::Cursor;
    use std::path::PathBuf;

    fn run_with(input: &str, reporter: &RuntimeReporter) -> (usize, String) {
        let dictionary = Dictionary::from_words(["cat", "act", "at", "cats", "stare", "tears"]);
        let descrambler = Descrambler::new(&dictionary, SearchConfig::default());
        let mut output = Vec::new();

        let searches = run_interactive(
            &descrambler,
            RenderOptions::default(),
            reporter,
            Cursor::new(input),
            &mut output,
        )
        .unwrap();

        (searches, String::from_utf8(output).unwrap())
    }

    fn run(input: &str) -> (usize, String) {
        let reporter = RuntimeReporter {
            use_timedelta: true,
            save_path: PathBuf::new(),
            format: None,
        };
        run_with(input, &reporter)
    }

    #[test]
    fn searches_each_line() {
        let (searches, output) = run("cat\nstare\n");

        assert_eq!(searches, 2);
        assert!(output.contains("\tact, cat\n"));
        assert!(output.contains("\tstare, tears\n"));
        assert!(output.contains("2 matches found."));
    }

    #[test]
    fn each_search_reports_runtime() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("last_runtime.json");
        let reporter = RuntimeReporter {
            use_timedelta: false,
            save_path: path.clone(),
            format: Some(RuntimeFormat::Json),
        };

        let (searches, output) = run_with("cat\nstare\n", &reporter);

        assert_eq!(searches, 2);
        assert_eq!(output.matches("Runtime: ").count(), 2);
        assert!(output.contains(" seconds\n"));

        let contents = std::fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&contents).unwrap();
        assert!(value["duration_seconds"].is_number());
    }

    #[test]
    fn failed_searches_write_no_record() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("last_runtime.json");
        let reporter = RuntimeReporter {
            use_timedelta: true,
            save_path: path.clone(),
            format: Some(RuntimeFormat::Json),
        };

        let (searches, output) = run_with("ca\n", &reporter);

        assert_eq!(searches, 0);
        assert!(!output.contains("Runtime: "));
        assert!(!path.exists());
    }

    #[test]
    fn quit_stops_reading() {
        let (searches, output) = run("cat\nquit\nstare\n");

        assert_eq!(searches, 1);
        assert!(!output.contains("tears"));
    }

    #[test]
    fn blank_lines_ignored() {
        let (searches, _) = run("\n   \ncat\n");
        assert_eq!(searches, 1);
    }

    #[test]
    fn errors_do_not_end_session() {
        // Two letters are shorter than the default minimum match length
        let (searches, output) = run("ca\ncat\n");

        assert_eq!(searches, 1);
        assert!(output.contains("Invalid configuration"));
        assert!(output.contains("\tact, cat\n"));
    }

    #[test]
    fn empty_input_exits_cleanly() {
        let (searches, output) = run("");
        assert_eq!(searches, 0);
        assert!(output.contains("Interactive Mode"));
    }
}
