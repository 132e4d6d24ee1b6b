//! Console terminal: prints log entries aligned and in truecolor

use colored::Colorize;
use hal_application::TerminalPort;
use hal_domain::{Align, LogEntry};

/// Fallback line width when neither config nor `COLUMNS` provide one.
pub const DEFAULT_WIDTH: usize = 80;

/// [`TerminalPort`] that writes each entry as one line on stdout.
#[derive(Debug, Clone)]
pub struct ConsoleTerminal {
    width: usize,
    color: bool,
}

impl ConsoleTerminal {
    pub fn new(width: usize, color: bool) -> Self {
        Self {
            width: width.max(1),
            color,
        }
    }

    /// Width from `width`, else `$COLUMNS`, else [`DEFAULT_WIDTH`].
    pub fn detect(width: Option<usize>, color: bool) -> Self {
        let width = width
            .or_else(|| {
                std::env::var("COLUMNS")
                    .ok()
                    .and_then(|c| c.trim().parse().ok())
            })
            .unwrap_or(DEFAULT_WIDTH);
        Self::new(width, color)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Left padding that places `text` according to `align`.
    fn padding(&self, text: &str, align: Align) -> usize {
        let len = text.chars().count();
        let free = self.width.saturating_sub(len);
        match align {
            Align::Left => 0,
            Align::Center => free / 2,
            Align::Right => free,
        }
    }

    /// Render one entry as it will appear on screen.
    pub fn format_line(&self, entry: &LogEntry) -> String {
        let pad = " ".repeat(self.padding(&entry.text, entry.align));
        if self.color {
            let c = entry.color;
            format!("{}{}", pad, entry.text.truecolor(c.r, c.g, c.b))
        } else {
            format!("{}{}", pad, entry.text)
        }
    }
}

impl Default for ConsoleTerminal {
    fn default() -> Self {
        Self::new(DEFAULT_WIDTH, true)
    }
}

impl TerminalPort for ConsoleTerminal {
    fn log(&self, entry: LogEntry) {
        println!("{}", self.format_line(&entry));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hal_domain::Color;

    fn plain(width: usize) -> ConsoleTerminal {
        ConsoleTerminal::new(width, false)
    }

    #[test]
    fn test_left_is_unpadded() {
        let line = plain(20).format_line(&LogEntry::left("Is everything OK?", Color::REPLY));
        assert_eq!(line, "Is everything OK?");
    }

    #[test]
    fn test_right_aligns_to_width() {
        let line = plain(20).format_line(&LogEntry::right("HAL9000 joined.", Color::SYSTEM));
        assert_eq!(line, "     HAL9000 joined.");
        assert_eq!(line.chars().count(), 20);
    }

    #[test]
    fn test_center_counts_characters_not_bytes() {
        let line = plain(21).format_line(&LogEntry::center("— Opening x. —", Color::DIVIDER));
        // 14 chars, 7 free columns
        assert_eq!(line, "   — Opening x. —");
    }

    #[test]
    fn test_overlong_text_is_not_truncated() {
        let text = "I'm afraid I can't do that.";
        let line = plain(10).format_line(&LogEntry::right(text, Color::AGENT));
        assert_eq!(line, text);
    }

    #[test]
    fn test_spacer_is_blank() {
        assert!(plain(80).format_line(&LogEntry::spacer()).trim().is_empty());
    }

    #[test]
    fn test_explicit_width_wins() {
        assert_eq!(ConsoleTerminal::detect(Some(42), false).width(), 42);
        assert_eq!(ConsoleTerminal::new(0, false).width(), 1);
    }
}
