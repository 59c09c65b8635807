use std::path::Path;

use colored::Colorize;
use mage_mechanics::{PurchaseIntent, plan_advancement};

pub fn run(file: &Path, xp: u32, purchases: &Path, output: Option<&Path>) -> Result<(), String> {
    let character = super::load_character(file)?;
    let text = super::read_file(purchases)?;
    let intents: Vec<PurchaseIntent> = serde_json::from_str(&text)
        .map_err(|e| format!("{} is not a purchase list: {e}", purchases.display()))?;

    let plan = plan_advancement(&character, xp, &intents).map_err(|e| e.to_string())?;
    let advanced = plan.apply(&character);

    for step in &plan.steps {
        println!("  {}", step.log_entry);
    }
    println!(
        "  {} {} XP spent ({} total)",
        "Advanced.".green(),
        plan.total(),
        advanced.xp
    );

    if let Some(path) = output {
        let json = serde_json::to_string_pretty(&advanced)
            .map_err(|e| format!("JSON serialization error: {e}"))?;
        super::write_file(path, &json)?;
        println!("  Wrote {}", path.display());
    }
    Ok(())
}
