use std::path::Path;

use colored::Colorize;
use mage_core::Catalogs;
use mage_mechanics::{DerivedTraits, validate_character};

pub fn run(file: &Path) -> Result<(), String> {
    let character = super::load_character(file)?;
    let issues = validate_character(&character, &Catalogs::standard());

    println!(
        "  {} ({} {}, {} XP spent)",
        character.name.bold(),
        character.path,
        character.order,
        character.xp
    );

    let errors = issues.iter().filter(|i| i.is_error).count();
    let warnings = issues.len() - errors;

    for issue in &issues {
        let line = issue.to_string();
        if issue.is_error {
            println!("  {}", line.red());
        } else {
            println!("  {}", line.yellow());
        }
    }

    if errors > 0 {
        return Err(format!(
            "{errors} error{}, {warnings} warning{}",
            if errors == 1 { "" } else { "s" },
            if warnings == 1 { "" } else { "s" },
        ));
    }

    let derived = DerivedTraits::of(&character);
    println!(
        "  {} Health {}, Willpower {}, Defense {}, Mana {}",
        "All checks passed.".green(),
        derived.health,
        derived.willpower,
        derived.defense,
        derived.mana
    );
    if warnings > 0 {
        println!(
            "  {warnings} warning{}",
            if warnings == 1 { "" } else { "s" }
        );
    }
    Ok(())
}
