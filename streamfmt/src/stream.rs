//! Stream loop: read NDJSON lines, render each, write to a console.

use std::fs::File;
use std::io::{self, BufRead, BufReader, IsTerminal};
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::{debug, instrument};

use crate::core::event::{RenderState, SkipReason};
use crate::core::render::render_line;
use crate::io::console::{ColorMode, Console, ConsoleWriter, Palette};

/// Runtime options collected from the command line.
#[derive(Debug, Clone, Default)]
pub struct FormatOptions {
    pub color: ColorMode,
    /// NDJSON file to read. `None` reads stdin.
    pub input: Option<PathBuf>,
}

/// Line accounting for one run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct StreamSummary {
    /// Every line read, blank ones included.
    pub lines: usize,
    /// Lines that produced output.
    pub rendered: usize,
    /// Lines dropped because they could not be parsed or rendered.
    pub skipped: usize,
}

/// Render every line of `input` to `console`, bracketed by the banners.
///
/// Malformed lines are skipped. Only failures of `input` or `console`
/// themselves are returned as errors.
#[instrument(skip_all)]
pub fn format_stream<R: BufRead, C: ConsoleWriter>(
    mut input: R,
    console: &mut C,
) -> Result<StreamSummary> {
    console.stream_started().context("write start banner")?;

    let mut state = RenderState::default();
    let mut summary = StreamSummary::default();
    let mut buf = Vec::new();
    loop {
        buf.clear();
        let n = input.read_until(b'\n', &mut buf).context("read input")?;
        if n == 0 {
            break;
        }
        summary.lines += 1;

        let outcome = std::str::from_utf8(&buf)
            .map_err(|_| SkipReason::InvalidUtf8)
            .and_then(|line| render_line(line, &mut state));
        match outcome {
            Ok(Some(rendered)) => {
                console.write_event(&rendered).context("write event")?;
                summary.rendered += 1;
            }
            Ok(None) => {}
            Err(reason) => {
                debug!(line = summary.lines, %reason, "skipping line");
                summary.skipped += 1;
            }
        }
    }

    console.stream_finished().context("write finish banner")?;
    debug!(
        lines = summary.lines,
        rendered = summary.rendered,
        skipped = summary.skipped,
        "input exhausted"
    );
    Ok(summary)
}

/// Open the configured input and render it to stdout.
pub fn run(options: &FormatOptions) -> Result<StreamSummary> {
    let input: Box<dyn BufRead> = match &options.input {
        Some(path) if path.as_os_str() != "-" => {
            let file =
                File::open(path).with_context(|| format!("open input {}", path.display()))?;
            Box::new(BufReader::new(file))
        }
        _ => Box::new(io::stdin().lock()),
    };

    let stdout = io::stdout();
    let colored = options.color.enabled(stdout.is_terminal());
    debug!(colored, input = ?options.input, "starting stream");
    let out = stdout.lock();
    if colored {
        format_stream(input, &mut Console::styled(out, Palette::default()))
    } else {
        format_stream(input, &mut Console::plain(out))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{assistant_line, ndjson, thinking_line, tool_call_line, user_line};
    use serde_json::json;
    use std::io::Cursor;

    fn format_plain(input: &[u8]) -> (String, StreamSummary) {
        let mut console = Console::plain(Vec::new());
        let summary = format_stream(Cursor::new(input), &mut console).expect("format");
        let out = String::from_utf8(console.into_inner()).expect("utf8");
        (out, summary)
    }

    #[test]
    fn renders_assistant_then_tool_between_banners() {
        let input = ndjson(&[
            assistant_line(&["Hello"]),
            tool_call_line(json!({"name": "ls", "arguments": ""})),
        ]);
        let (out, summary) = format_plain(input.as_bytes());
        assert_eq!(
            out,
            "--- Agent Stream Started ---\n\
             \nHello\n\
             🛠  [TOOL]: ls\n\
             \n--- Agent Finished ---\n"
        );
        assert_eq!(
            summary,
            StreamSummary {
                lines: 2,
                rendered: 2,
                skipped: 0
            }
        );
    }

    #[test]
    fn empty_input_prints_only_banners() {
        let (out, summary) = format_plain(b"");
        assert_eq!(
            out,
            "--- Agent Stream Started ---\n\n--- Agent Finished ---\n"
        );
        assert_eq!(summary, StreamSummary::default());
    }

    #[test]
    fn malformed_lines_are_skipped_and_stream_continues() {
        let input = ndjson(&[
            "{oops".to_string(),
            "[1,2,3]".to_string(),
            String::new(),
            json!({"type": "unknown"}).to_string(),
            user_line(),
        ]);
        let (out, summary) = format_plain(input.as_bytes());
        assert_eq!(
            out,
            "--- Agent Stream Started ---\n\
             \n👤 [USER]: Task Received\n\
             \n--- Agent Finished ---\n"
        );
        assert_eq!(
            summary,
            StreamSummary {
                lines: 5,
                rendered: 1,
                skipped: 2
            }
        );
    }

    #[test]
    fn invalid_utf8_line_is_skipped() {
        let mut input = b"\xff\xfe garbage\n".to_vec();
        input.extend_from_slice(thinking_line().as_bytes());
        let (out, summary) = format_plain(&input);
        assert_eq!(
            out,
            "--- Agent Stream Started ---\n.\n--- Agent Finished ---\n"
        );
        assert_eq!(summary.skipped, 1);
        assert_eq!(summary.rendered, 1);
    }

    #[test]
    fn thinking_ticks_share_a_line_until_next_event() {
        let input = ndjson(&[
            thinking_line(),
            thinking_line(),
            thinking_line(),
            assistant_line(&["Plan ready"]),
        ]);
        let (out, _) = format_plain(input.as_bytes());
        assert_eq!(
            out,
            "--- Agent Stream Started ---\n\
             ...\nPlan ready\n\
             \n--- Agent Finished ---\n"
        );
    }

    #[test]
    fn final_line_without_newline_is_rendered() {
        let (out, summary) = format_plain(assistant_line(&["tail"]).as_bytes());
        assert!(out.contains("\ntail\n"));
        assert_eq!(summary.rendered, 1);
    }

    #[test]
    fn crlf_line_endings_are_accepted() {
        let input = format!("{}\r\n", user_line());
        let (_, summary) = format_plain(input.as_bytes());
        assert_eq!(summary.rendered, 1);
    }
}
