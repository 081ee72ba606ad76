use dialoguer::{Confirm, Input, MultiSelect, Select};
use tabled::Table;

use crate::{
    curation::{Count, CycleDecision, SeedKind},
    error::Result,
    info,
    types::Track,
    utils, warning,
};

/// Asks how many entries of a ranked table to show.
pub fn ask_for_count(subject: &str) -> Result<Count> {
    let choices = ["TOP 10", "TOP 100", "ALL", "OTHER"];
    let selection = Select::new()
        .with_prompt(format!("How many top {} to show?", subject))
        .items(&choices)
        .default(0)
        .interact()?;

    Ok(match selection {
        0 => Count::Top(10),
        1 => Count::Top(100),
        2 => Count::All,
        _ => {
            let answer: String = Input::new()
                .with_prompt(format!("Top {} to show", subject))
                .validate_with(|input: &String| utils::parse_count(input).map(|_| ()))
                .interact_text()?;
            utils::parse_count(&answer).unwrap_or(Count::All)
        }
    })
}

pub fn ask_for_seed() -> Result<SeedKind> {
    let choices: Vec<String> = SeedKind::ALL
        .iter()
        .map(|k| k.as_str().to_uppercase())
        .collect();
    let selection = Select::new()
        .with_prompt("Recommendations based on")
        .items(&choices)
        .default(0)
        .interact()?;

    Ok(SeedKind::ALL[selection])
}

/// Accept/repeat decisions taken from the terminal.
pub struct PromptDecision;

impl CycleDecision for PromptDecision {
    fn accept(&mut self, recommended: &[Track]) -> Result<Vec<Track>> {
        if recommended.is_empty() {
            warning!("No new tracks recommended for this seed.");
            return Ok(Vec::new());
        }

        let items: Vec<String> = recommended.iter().map(utils::format_track).collect();
        let picked = MultiSelect::new()
            .with_prompt("Recommended tracks. Select which to add to playlist")
            .items(&items)
            .interact()?;

        let accepted: Vec<Track> = picked.into_iter().map(|i| recommended[i].clone()).collect();
        if !accepted.is_empty() {
            info!("Adding {} tracks to playlist...", accepted.len());
            println!("{}", Table::new(utils::track_rows(&accepted)));
        }
        Ok(accepted)
    }

    fn again(&mut self) -> Result<bool> {
        Ok(Confirm::new()
            .with_prompt("Search again for recommendations?")
            .default(false)
            .interact()?)
    }
}
