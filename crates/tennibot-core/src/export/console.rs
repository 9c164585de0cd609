//! Console rendering of the scoring form with colored display

use std::fmt::Write as _;

use owo_colors::OwoColorize;

use crate::criteria::{Criterion, Rating};
use crate::session::ScoringSession;
use crate::shot::format_score;

pub const TITLE: &str = "Tennibot Shot Scoring";

/// Format the whole screen: title, the rating form while collecting, then results
pub fn format_session_console(session: &ScoringSession) -> String {
    let mut output = String::new();
    let border = "━".repeat(50);

    let _ = writeln!(output, "{}", border.dimmed());
    let _ = writeln!(output, "  {}", TITLE.bold());
    let _ = writeln!(output, "{}", border.dimmed());

    if !session.is_complete() {
        output.push_str(&format_scoring_form(session));
        let _ = writeln!(output);
    }
    output.push_str(&format_results(session));

    output
}

/// Name and shot-count fields, the three criteria and the submit line
pub fn format_scoring_form(session: &ScoringSession) -> String {
    let mut output = String::new();

    let name = if session.player_name().is_empty() {
        "(enter player name)".dimmed().to_string()
    } else {
        session.player_name().to_string()
    };
    if session.is_name_locked() {
        let _ = writeln!(output, "  PLAYER : {} {}", name, "(locked)".dimmed());
    } else {
        let _ = writeln!(output, "  PLAYER : {}", name);
    }

    let _ = write!(
        output,
        "  SHOTS  : Number of Shots: {}",
        session.shot_count_input()
    );
    if session.has_pending_shot_count() {
        let _ = write!(
            output,
            " {}",
            format!("(current: {}, confirm with update)", session.shot_count()).dimmed()
        );
    }
    let _ = writeln!(output);

    for criterion in Criterion::all() {
        let _ = writeln!(output);
        output.push_str(&format_criterion(
            criterion,
            session.current_shot().get(criterion),
        ));
    }

    let _ = writeln!(output);
    let _ = writeln!(
        output,
        "  {}",
        format!(
            "Submit Shot ({}/{})",
            session.shots().len(),
            session.shot_count()
        )
        .bold()
    );

    output
}

/// One criterion group with the selected option marked
pub fn format_criterion(criterion: Criterion, selected: Option<Rating>) -> String {
    let mut output = String::new();
    let _ = writeln!(output, "  {}", criterion.title().underline());
    for option in criterion.options() {
        let line = format!("{}: {}", option.value, option.label);
        if selected == Some(option.value) {
            let _ = writeln!(output, "    [x] {}", line.cyan());
        } else {
            let _ = writeln!(output, "    [ ] {}", line);
        }
    }
    output
}

/// Results header, per-shot scores, average and the next-player hint
pub fn format_results(session: &ScoringSession) -> String {
    let mut output = String::new();

    let _ = writeln!(output, "  {}", results_title(session).bold());
    for (index, score) in session.shot_scores().enumerate() {
        let _ = writeln!(
            output,
            "    Shot {}: {}",
            index + 1,
            format_colored_score(score)
        );
    }

    if let Some(average) = session.formatted_average() {
        let _ = writeln!(output, "  Average Score: {}", average.bold());
        if session.is_complete() {
            let _ = writeln!(output, "  {}", "Score Next Player".green());
        }
    }

    output
}

/// "Alice's Shots Recorded: 2", or "Shots Recorded: 2" before a name is given
pub fn results_title(session: &ScoringSession) -> String {
    if session.player_name().is_empty() {
        format!("Shots Recorded: {}", session.shots().len())
    } else {
        format!(
            "{}'s Shots Recorded: {}",
            session.player_name(),
            session.shots().len()
        )
    }
}

/// Format a shot score with color by band
fn format_colored_score(score: f64) -> String {
    let text = format_score(score);
    if score >= 100.0 {
        text.truecolor(255, 200, 0).bold().to_string()
    } else if score >= 66.0 {
        text.green().to_string()
    } else if score >= 33.0 {
        text.yellow().to_string()
    } else {
        text.red().to_string()
    }
}
