//! Score command: the interactive scoring form.

use std::io::{self, BufRead};

use anyhow::Result;
use tennibot_core::{ScoringSession, SessionSummary, ShotCount, ShotCountChange, format_score};
use tracing::{debug, info, warn};

use crate::display::{Display, Notice};
use crate::input::{self, Action};

pub struct ScoreOptions {
    pub shots: Option<String>,
    pub player: Option<String>,
    pub clear: bool,
    pub json: bool,
}

/// What the loop does after an action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Continue(Option<Notice>),
    Quit,
}

/// Run the scoring form until quit or end of input
pub fn run(options: ScoreOptions) -> Result<()> {
    let mut session =
        ScoringSession::with_shot_count(resolve_shot_count(options.shots.as_deref()));
    if let Some(player) = options.player {
        session.set_player_name(player)?;
    }

    let display = Display::new(options.clear);
    let mut notice = None;
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        display.render(&session, notice.as_ref())?;

        let Some(line) = lines.next() else {
            debug!("End of input");
            break;
        };
        let line = line?;

        notice = match input::parse_action(&line) {
            Ok(action) => match dispatch(&mut session, action) {
                Step::Continue(notice) => notice,
                Step::Quit => break,
            },
            Err(e) => Some(Notice::Alert(e.to_string())),
        };
    }

    println!();
    if options.json {
        println!("{}", SessionSummary::from_session(&session).to_json_pretty()?);
    }
    info!("Scoring form closed");
    Ok(())
}

/// Apply one action to the session
pub fn dispatch(session: &mut ScoringSession, action: Action) -> Step {
    let notice = match action {
        Action::SetName(name) => session
            .set_player_name(name)
            .err()
            .map(|e| Notice::Alert(e.to_string())),
        Action::Rate(..) | Action::EditShotCount(_) | Action::ConfirmShotCount
            if session.is_complete() =>
        {
            Some(Notice::Alert(
                "All shots are recorded; score the next player first".to_string(),
            ))
        }
        Action::Rate(criterion, rating) => {
            session.set_criterion_score(criterion, rating);
            None
        }
        Action::EditShotCount(text) => {
            session.edit_shot_count_input(text);
            None
        }
        Action::ConfirmShotCount => match session.confirm_shot_count() {
            ShotCountChange::Applied(count) => {
                Some(Notice::Info(format!("Number of shots set to {}", count)))
            }
            // The field already shows the previous value again
            ShotCountChange::Reverted(_) => None,
        },
        Action::Submit => match session.submit_shot() {
            Ok(shot) => Some(Notice::Info(format!(
                "Shot {} recorded: {}",
                session.shots().len(),
                format_score(shot.score())
            ))),
            Err(e) => Some(Notice::Alert(e.to_string())),
        },
        Action::Reset => {
            if session.is_complete() {
                session.reset();
                None
            } else {
                Some(Notice::Alert(format!(
                    "{} shot(s) left before the next player",
                    session.remaining()
                )))
            }
        }
        Action::Json => match SessionSummary::from_session(session).to_json_pretty() {
            Ok(json) => Some(Notice::Info(json)),
            Err(e) => Some(Notice::Alert(e.to_string())),
        },
        Action::Help => Some(Notice::Info(input::HELP.to_string())),
        Action::Quit => return Step::Quit,
    };
    Step::Continue(notice)
}

/// Shot count from the command line, falling back to the default
pub fn resolve_shot_count(raw: Option<&str>) -> ShotCount {
    match raw.map(str::parse::<ShotCount>) {
        Some(Ok(count)) => count,
        Some(Err(e)) => {
            warn!("Ignoring --shots: {}; using {}", e, ShotCount::default());
            ShotCount::default()
        }
        None => ShotCount::default(),
    }
}
