//! Terminal rendering of the scoring form

use std::io::{Write, stdout};

use anyhow::Result;
use crossterm::{
    cursor, execute,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{self, ClearType},
};
use tennibot_core::{ScoringSession, format_session_console};

/// Feedback shown under the form after an action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// A rejected action, shown in red
    Alert(String),
    /// Neutral information, shown dimmed
    Info(String),
}

pub struct Display {
    /// Clear the terminal before each frame
    clear: bool,
}

impl Display {
    pub fn new(clear: bool) -> Self {
        Self { clear }
    }

    /// Draw the whole form, an optional notice and the prompt
    pub fn render(&self, session: &ScoringSession, notice: Option<&Notice>) -> Result<()> {
        let mut stdout = stdout();

        if self.clear {
            execute!(
                stdout,
                terminal::Clear(ClearType::All),
                cursor::MoveTo(0, 0)
            )?;
        }

        execute!(stdout, Print(format_session_console(session)))?;

        match notice {
            Some(Notice::Alert(message)) => execute!(
                stdout,
                Print("\n"),
                SetForegroundColor(Color::Red),
                Print(format!("  ! {}\n", message)),
                ResetColor
            )?,
            Some(Notice::Info(message)) => execute!(
                stdout,
                Print("\n"),
                SetForegroundColor(Color::DarkGrey),
                Print(format!("{}\n", indent(message))),
                ResetColor
            )?,
            None => {}
        }

        let hint = if session.is_complete() {
            "next = score next player, q = quit"
        } else {
            "help = commands, Enter = submit shot"
        };
        execute!(
            stdout,
            Print("\n"),
            SetForegroundColor(Color::DarkGrey),
            Print(format!("({})\n", hint)),
            ResetColor,
            Print("> ")
        )?;
        stdout.flush()?;
        Ok(())
    }
}

/// Indent every line of a message to line up with the form
fn indent(message: &str) -> String {
    message
        .lines()
        .map(|line| format!("  {}", line))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indent_every_line() {
        assert_eq!(indent("Shot 1 recorded: 100"), "  Shot 1 recorded: 100");
        assert_eq!(indent("{\n  \"recorded\": 1\n}"), "  {\n    \"recorded\": 1\n  }");
    }
}
