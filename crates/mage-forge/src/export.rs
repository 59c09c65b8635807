//! Plain-text character sheet export.

use mage_core::{Arcanum, Attribute, Character, Rated, Skill};
use mage_mechanics::DerivedTraits;

/// Render a character as a plain-text sheet.
///
/// Sections are headed `== Title ==`; a section with nothing to list is
/// left out entirely.
pub fn to_plain_text(character: &Character) -> String {
    let mut out = String::from("== Mage: The Awakening 2E Character ==\n\n");

    let mut identity = vec![
        format!("Name: {}", character.name),
        format!("Concept: {}", character.concept),
        format!("Path: {}", character.path),
        format!("Order: {}", character.order),
    ];
    identity.extend(labelled("Tarot Theme", character.tarot_card.as_deref()));
    identity.extend(labelled("Archetype", character.archetype.as_deref()));
    identity.extend(labelled("Occupation", character.occupation.as_deref()));
    if character.xp > 0 {
        identity.push(format!("Total Experience Spent: {}", character.xp));
    }
    out.push_str(&identity.join("\n"));
    out.push_str("\n\n");

    let derived = DerivedTraits::of(character);
    out.push_str(&section(
        "Traits",
        &[
            format!("Gnosis: {}", character.gnosis),
            format!("Wisdom: {}", character.wisdom),
            format!("Health: {}", derived.health),
            format!("Willpower: {}", derived.willpower),
            format!("Size: {}", derived.size),
            format!("Speed: {}", derived.speed),
            format!("Defense: {}", derived.defense),
            format!("Initiative: {}", derived.initiative),
            format!("Max Mana: {}", derived.mana),
        ],
    ));

    let narrative: Vec<String> = labelled("Dark Secret", character.dark_secret.as_deref())
        .into_iter()
        .chain(labelled("Disadvantage", character.disadvantage.as_deref()))
        .collect();
    out.push_str(&section("Narrative Traits", &narrative));
    out.push_str(&section("Advantages", &bullets(character.advantage_list())));

    let attributes: Vec<String> = Attribute::ALL
        .iter()
        .map(|a| format!("{}: {}", a.label(), character.attributes.get(*a)))
        .collect();
    out.push_str(&section("Attributes", &attributes));

    let mut skills = nonzero(Skill::ALL, |s| character.skills.get(s));
    if !character.specialties.is_empty() {
        skills.push(String::new());
        skills.push("Specialties:".to_string());
        skills.extend(bullets(&character.specialties));
    }
    out.push_str(&section("Skills", &skills));

    out.push_str(&section(
        "Arcana",
        &nonzero(Arcanum::ALL, |a| character.arcana.get(a)),
    ));
    out.push_str(&section("Rotes", &bullets(&character.rotes)));

    out
}

/// Download name for an exported sheet: `Vesper_Hale_mechanics.txt`.
pub fn file_name(character: &Character) -> String {
    let stem: Vec<&str> = character.name.split_whitespace().collect();
    if stem.is_empty() {
        return "character_mechanics.txt".to_string();
    }
    format!("{}_mechanics.txt", stem.join("_"))
}

fn section(title: &str, lines: &[String]) -> String {
    if lines.is_empty() {
        return String::new();
    }
    format!("== {title} ==\n{}\n\n", lines.join("\n"))
}

fn labelled(label: &str, value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(|v| format!("{label}: {v}"))
}

fn bullets(items: &[String]) -> Vec<String> {
    items.iter().map(|i| format!("- {i}")).collect()
}

fn nonzero<K: Rated>(all: &[K], rating: impl Fn(K) -> u8) -> Vec<String> {
    all.iter()
        .filter_map(|k| {
            let value = rating(*k);
            (value > 0).then(|| format!("{}: {value}", k.label()))
        })
        .collect()
}
