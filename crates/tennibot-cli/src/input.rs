//! Line input parsing
//!
//! Each line typed at the prompt is one user action on the scoring form.

use anyhow::{Result, anyhow, bail};
use tennibot_core::{Criterion, Rating};

pub const HELP: &str = "\
Commands:
  name <text>         set player name (before the first shot)
  p|placement <0-2>   rate placement
  s|speed <0-2>       rate speed
  y|pretty <0-2>      rate prettiness
  count <n>           type a new number of shots
  update              apply the typed number of shots
  submit (or Enter)   record the current shot
  next|reset          score next player (after the last shot)
  json                print the session as JSON
  help                show this help
  q|quit|exit         leave";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    SetName(String),
    Rate(Criterion, Rating),
    EditShotCount(String),
    ConfirmShotCount,
    Submit,
    Reset,
    Json,
    Help,
    Quit,
}

/// Parse one input line into an action
pub fn parse_action(line: &str) -> Result<Action> {
    let line = line.trim();
    let (keyword, rest) = match line.split_once(char::is_whitespace) {
        Some((keyword, rest)) => (keyword, rest.trim()),
        None => (line, ""),
    };

    let action = match keyword.to_lowercase().as_str() {
        "" | "submit" => Action::Submit,
        "name" => Action::SetName(rest.to_string()),
        "p" | "placement" => Action::Rate(Criterion::Placement, parse_rating(rest)?),
        "s" | "speed" => Action::Rate(Criterion::Speed, parse_rating(rest)?),
        "y" | "pretty" => Action::Rate(Criterion::Pretty, parse_rating(rest)?),
        "count" => Action::EditShotCount(rest.to_string()),
        "update" => Action::ConfirmShotCount,
        "next" | "reset" => Action::Reset,
        "json" => Action::Json,
        "help" | "h" | "?" => Action::Help,
        "q" | "quit" | "exit" => Action::Quit,
        other => bail!("Unknown command: {} (type help)", other),
    };
    Ok(action)
}

fn parse_rating(value: &str) -> Result<Rating> {
    value
        .parse::<u8>()
        .ok()
        .and_then(Rating::from_u8)
        .ok_or_else(|| anyhow!("Rating must be 0, 1 or 2, got {:?}", value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ratings() {
        assert_eq!(
            parse_action("p 2").unwrap(),
            Action::Rate(Criterion::Placement, Rating::Two)
        );
        assert_eq!(
            parse_action("speed 0").unwrap(),
            Action::Rate(Criterion::Speed, Rating::Zero)
        );
        assert_eq!(
            parse_action("  Y   1 ").unwrap(),
            Action::Rate(Criterion::Pretty, Rating::One)
        );
    }

    #[test]
    fn test_parse_rating_out_of_range() {
        assert!(parse_action("p 3").is_err());
        assert!(parse_action("speed").is_err());
        assert!(parse_action("pretty two").is_err());
    }

    #[test]
    fn test_parse_name_keeps_inner_spaces() {
        assert_eq!(
            parse_action("name Ana  Maria ").unwrap(),
            Action::SetName("Ana  Maria".to_string())
        );
        assert_eq!(parse_action("name").unwrap(), Action::SetName(String::new()));
    }

    #[test]
    fn test_parse_shot_count_edit() {
        assert_eq!(
            parse_action("count 7").unwrap(),
            Action::EditShotCount("7".to_string())
        );
        assert_eq!(
            parse_action("count abc").unwrap(),
            Action::EditShotCount("abc".to_string())
        );
        assert_eq!(parse_action("update").unwrap(), Action::ConfirmShotCount);
    }

    #[test]
    fn test_empty_line_submits() {
        assert_eq!(parse_action("").unwrap(), Action::Submit);
        assert_eq!(parse_action("   ").unwrap(), Action::Submit);
        assert_eq!(parse_action("submit").unwrap(), Action::Submit);
    }

    #[test]
    fn test_parse_misc() {
        assert_eq!(parse_action("next").unwrap(), Action::Reset);
        assert_eq!(parse_action("QUIT").unwrap(), Action::Quit);
        assert_eq!(parse_action("json").unwrap(), Action::Json);
        assert!(parse_action("serve").is_err());
    }
}
