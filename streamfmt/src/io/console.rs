//! Console writers for rendered events.
//!
//! [`Console`] owns the output sink and the color palette. With colors
//! disabled it writes the same text without escape sequences, which keeps
//! transcripts greppable when redirected.

use std::io::{self, Write};

use clap::ValueEnum;
use owo_colors::{OwoColorize, Style};

use crate::core::render::Rendered;

pub const START_BANNER: &str = "--- Agent Stream Started ---";
pub const FINISH_BANNER: &str = "--- Agent Finished ---";
pub const TOOL_MARKER: &str = "🛠  [TOOL]: ";
pub const USER_MARKER: &str = "👤 [USER]:";
pub const USER_ANNOUNCEMENT: &str = "Task Received";
pub const THINKING_TICK: &str = ".";

/// Sink for a rendered transcript.
pub trait ConsoleWriter {
    fn stream_started(&mut self) -> io::Result<()>;
    fn write_event(&mut self, rendered: &Rendered) -> io::Result<()>;
    fn stream_finished(&mut self) -> io::Result<()>;
}

/// When to emit ANSI color sequences.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    /// Always color, even when redirected.
    #[default]
    Always,
    /// Never color.
    Never,
    /// Color only when stdout is a terminal.
    Auto,
}

impl ColorMode {
    pub fn enabled(self, is_terminal: bool) -> bool {
        match self {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => is_terminal,
        }
    }
}

/// One style per output channel.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub banner: Style,
    pub assistant: Style,
    pub tool_marker: Style,
    pub tool_value: Style,
    pub thinking: Style,
    pub user: Style,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            banner: Style::new().bright_black(),
            assistant: Style::new().bright_green(),
            tool_marker: Style::new().bright_cyan(),
            tool_value: Style::new().bright_magenta(),
            thinking: Style::new().bright_yellow(),
            user: Style::new().bright_blue(),
        }
    }
}

pub struct Console<W: Write> {
    out: W,
    palette: Option<Palette>,
}

impl<W: Write> Console<W> {
    /// Console that colors every channel with `palette`.
    pub fn styled(out: W, palette: Palette) -> Self {
        Self {
            out,
            palette: Some(palette),
        }
    }

    /// Console that writes bare text.
    pub fn plain(out: W) -> Self {
        Self { out, palette: None }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn paint(&self, text: &str, channel: fn(&Palette) -> Style) -> String {
        match &self.palette {
            Some(palette) => text.style(channel(palette)).to_string(),
            None => text.to_string(),
        }
    }
}

impl<W: Write> ConsoleWriter for Console<W> {
    fn stream_started(&mut self) -> io::Result<()> {
        let banner = self.paint(START_BANNER, |p| p.banner);
        writeln!(self.out, "{banner}")
    }

    fn write_event(&mut self, rendered: &Rendered) -> io::Result<()> {
        match rendered {
            Rendered::Assistant(text) => {
                let text = self.paint(text, |p| p.assistant);
                writeln!(self.out, "\n{text}")
            }
            Rendered::Tool(description) => {
                let marker = self.paint(TOOL_MARKER, |p| p.tool_marker);
                let description = self.paint(description, |p| p.tool_value);
                writeln!(self.out, "{marker}{description}")
            }
            Rendered::ThinkingTick => {
                let tick = self.paint(THINKING_TICK, |p| p.thinking);
                write!(self.out, "{tick}")?;
                // Ticks share a line; push them out before the next event arrives.
                self.out.flush()
            }
            Rendered::UserTurn => {
                let marker = self.paint(USER_MARKER, |p| p.user);
                writeln!(self.out, "\n{marker} {USER_ANNOUNCEMENT}")
            }
        }
    }

    fn stream_finished(&mut self) -> io::Result<()> {
        let banner = self.paint(FINISH_BANNER, |p| p.banner);
        writeln!(self.out, "\n{banner}")?;
        self.out.flush()
    }
}
