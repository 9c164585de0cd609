//! Criteria command: print the rating options.

use anyhow::Result;
use tennibot_core::Criterion;
use tennibot_core::export::console::format_criterion;

pub fn run(json: bool) -> Result<()> {
    if json {
        let table: Vec<_> = Criterion::all()
            .map(|criterion| {
                serde_json::json!({
                    "criterion": criterion,
                    "title": criterion.title(),
                    "options": criterion.options(),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&table)?);
    } else {
        for criterion in Criterion::all() {
            print!("{}", format_criterion(criterion, None));
        }
    }
    Ok(())
}
