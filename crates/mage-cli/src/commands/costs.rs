use comfy_table::{ContentArrangement, Table};
use mage_mechanics::XP_COSTS;

pub fn run() -> Result<(), String> {
    let costs = &XP_COSTS;
    let gnosis_note = format!("requires Gnosis {}+", costs.inferior_min_gnosis);
    let rows = [
        ("Attribute", costs.attribute, "per dot"),
        ("Skill", costs.skill, "per dot"),
        ("Skill Specialty", costs.specialty, "per specialty"),
        ("Ruling Arcanum", costs.ruling_arcanum, "per dot"),
        ("Common Arcanum", costs.common_arcanum, "per dot"),
        ("Inferior Arcanum", costs.inferior_arcanum, gnosis_note.as_str()),
        ("Wisdom", costs.wisdom, "per dot"),
        ("Gnosis", costs.gnosis, "per dot"),
        ("Rote", costs.rote, "per rote"),
    ];

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Trait", "XP", "Note"]);
    for (name, cost, note) in rows {
        table.add_row(vec![name.to_string(), cost.to_string(), note.to_string()]);
    }
    println!("{table}");
    Ok(())
}
