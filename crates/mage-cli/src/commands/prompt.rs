use mage_forge::{GenerationRequest, prompt};
use mage_mechanics::NarrativeSelections;

pub fn run(concept: &str, xp: i64, selections: &NarrativeSelections) -> Result<(), String> {
    let request = GenerationRequest::new(concept, xp, selections)
        .map_err(|e| super::describe_forge_error(&e))?;
    println!("{}", prompt::render(&request));
    Ok(())
}
