use std::io::{self, Write};

use anyhow::Result;
use cellsense_classify::{Suggestion, SuggestionTier};
use cellsense_core::TemplateKind;
use crossterm::{
    execute,
    style::{Color, Print, ResetColor, SetForegroundColor},
};

/// Color scheme for terminal output.
struct Colors;

impl Colors {
    const AUTO_APPLY: Color = Color::Green;
    const CONFIRM: Color = Color::Yellow;
    const IGNORE: Color = Color::DarkGrey;
    const ERROR: Color = Color::Red;
    const DIM: Color = Color::DarkGrey;
    const HEADER: Color = Color::Magenta;
}

fn tier_color(tier: SuggestionTier) -> Color {
    match tier {
        SuggestionTier::AutoApply => Colors::AUTO_APPLY,
        SuggestionTier::Confirm => Colors::CONFIRM,
        SuggestionTier::Ignore => Colors::IGNORE,
    }
}

/// Shorten `text` to at most `max` chars for a table cell.
fn clip(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let head: String = text.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", head)
    }
}

/// Colored terminal output for the CLI commands.
pub struct Terminal;

impl Terminal {
    pub fn new() -> Self {
        Self
    }

    /// Print suggestions as a table, one color per tier.
    pub fn print_suggestions(&self, suggestions: &[Suggestion]) -> Result<()> {
        let mut stdout = io::stdout();
        execute!(
            stdout,
            SetForegroundColor(Colors::HEADER),
            Print(format!(
                "{:<24} {:<10} {:>6} {:<11} {}\n",
                "FIELD", "KIND", "CONF", "TIER", "HINT"
            )),
            SetForegroundColor(Colors::DIM),
            Print(format!("{}\n", "-".repeat(80))),
            ResetColor,
        )?;

        for s in suggestions {
            execute!(
                stdout,
                SetForegroundColor(tier_color(s.tier())),
                Print(format!(
                    "{:<24} {:<10} {:>6.2} {:<11} {}\n",
                    clip(&s.field_name, 24),
                    s.kind.as_str(),
                    s.confidence,
                    s.tier().to_string(),
                    if s.kind.is_none() { "" } else { s.config_hint.as_str() },
                )),
                SetForegroundColor(Colors::DIM),
                Print(format!("{:<24} {}\n", "", s.rationale)),
                ResetColor,
            )?;
        }
        stdout.flush()?;
        Ok(())
    }

    /// Print the header above rendered rows.
    pub fn print_render_header(&self, field: &str, kind: TemplateKind) -> Result<()> {
        let mut stdout = io::stdout();
        execute!(
            stdout,
            SetForegroundColor(Colors::HEADER),
            Print(format!("{} as {}\n", field, kind)),
            ResetColor,
        )?;
        stdout.flush()?;
        Ok(())
    }

    /// Print one rendered row.
    pub fn print_row(&self, index: usize, markup: &str) -> Result<()> {
        let mut stdout = io::stdout();
        execute!(
            stdout,
            SetForegroundColor(Colors::DIM),
            Print(format!("[{}] ", index)),
            ResetColor,
            Print(format!("{}\n", markup)),
        )?;
        stdout.flush()?;
        Ok(())
    }

    /// Print an error message.
    pub fn print_error(&self, msg: &str) -> Result<()> {
        let mut stdout = io::stdout();
        execute!(
            stdout,
            SetForegroundColor(Colors::ERROR),
            Print(format!("Error: {}\n", msg)),
            ResetColor,
        )?;
        stdout.flush()?;
        Ok(())
    }

    /// Print an info message.
    pub fn print_info(&self, msg: &str) -> Result<()> {
        let mut stdout = io::stdout();
        execute!(
            stdout,
            SetForegroundColor(Colors::DIM),
            Print(format!("{}\n", msg)),
            ResetColor,
        )?;
        stdout.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clip() {
        assert_eq!(clip("Status", 24), "Status");
        assert_eq!(clip("a_really_long_field_name_here", 10), "a_reall...");
        assert_eq!(clip("äöüäöüäöüä", 10), "äöüäöüäöüä");
    }

    #[test]
    fn test_tier_colors_differ() {
        assert_ne!(
            tier_color(SuggestionTier::AutoApply),
            tier_color(SuggestionTier::Confirm)
        );
        assert_eq!(tier_color(SuggestionTier::Ignore), Colors::DIM);
    }
}
