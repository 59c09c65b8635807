use std::path::Path;

use colored::Colorize;
use mage_forge::{
    CollaboratorError, Forge, ForgeConfig, GenerationRequest, Portrait, ReplayCollaborator,
};
use mage_mechanics::NarrativeSelections;

/// Options for one replayed generation.
pub struct ForgeArgs<'a> {
    pub concept: &'a str,
    pub xp: i64,
    pub response: &'a Path,
    pub portrait: Option<&'a str>,
    pub strict: bool,
    pub portraits: bool,
    pub json: bool,
    pub selections: NarrativeSelections,
}

pub fn run(args: ForgeArgs<'_>) -> Result<(), String> {
    let request = GenerationRequest::new(args.concept, args.xp, &args.selections)
        .map_err(|e| super::describe_forge_error(&e))?;
    let reply = super::read_file(args.response)?;

    let replay = ReplayCollaborator::new().with_character(reply);
    let replay = match args.portrait {
        Some(reference) => replay.with_portrait(reference),
        None => replay.with_portrait_failure(CollaboratorError::Rejected(
            "no portrait given".to_string(),
        )),
    };
    let config = ForgeConfig::default()
        .with_strict(args.strict)
        .with_portraits(args.portraits);

    let forged = Forge::new(replay, config)
        .generate(&request)
        .map_err(|e| super::describe_forge_error(&e))?;

    if args.json {
        let json = serde_json::to_string_pretty(&forged)
            .map_err(|e| format!("JSON serialization error: {e}"))?;
        println!("{json}");
        return Ok(());
    }

    let c = &forged.character;
    println!("  {} [{} {}]", c.name.bold(), c.path, c.order.to_string().dimmed());
    println!("  id:       {}", forged.id);
    println!("  portrait: {}", match &forged.portrait {
        Portrait::Ready(reference) => reference.clone(),
        Portrait::Placeholder => "placeholder".dimmed().to_string(),
    });
    if let Some(archetype) = &c.archetype {
        println!("  archetype: {archetype}");
    }
    for issue in &forged.issues {
        let line = issue.to_string();
        if issue.is_error {
            println!("  {}", line.red());
        } else {
            println!("  {}", line.yellow());
        }
    }
    Ok(())
}
