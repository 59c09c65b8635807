use comfy_table::{ContentArrangement, Table};
use mage_core::{Axis, Catalogs};

pub fn run(axis: &str) -> Result<(), String> {
    let axis: Axis = axis.parse().map_err(|e| {
        format!("{e}. Use: tarot, archetype, advantages, disadvantage, dark-secret")
    })?;
    let catalog = Catalogs::standard().for_axis(axis);

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["#", axis.label()]);
    for (i, option) in catalog.options.iter().enumerate() {
        table.add_row(vec![(i + 1).to_string(), option.to_string()]);
    }

    println!("{table}");
    println!();
    println!("  {} options", catalog.len());
    Ok(())
}
