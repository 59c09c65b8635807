//! The instruction text sent to the generative collaborator.
//!
//! The prompt tells the collaborator everything the rules engine will
//! later check: priority allocations, the Arcana split, starting Gnosis
//! and Wisdom, and (when experience is spent) the cost table and log
//! format. Deferred narrative axes carry their full catalog so the
//! collaborator picks from exactly that list.

use mage_core::catalog::Catalog;
use mage_core::character::{STARTING_GNOSIS, STARTING_WISDOM};
use mage_core::{Arcanum, Attribute, Order, Path, Rated, Skill};
use mage_mechanics::narrative::MAX_ADVANTAGES;
use mage_mechanics::{Choice, XP_COSTS};

use crate::request::GenerationRequest;

/// Render the full generation prompt for a request.
pub fn render(request: &GenerationRequest) -> String {
    let narrative = request.narrative();
    let mut lines: Vec<String> = vec![
        "You are an expert storyteller and rules master for the tabletop RPG \
         \"Mage: The Awakening 2nd Edition\"."
            .to_string(),
        "Generate a complete, rules-compliant character from the user's concept and \
         narrative seeds, then advance them with the experience points given below."
            .to_string(),
        String::new(),
        "**Narrative Elements:**".to_string(),
        "Establish these first. They define the character's identity and should shape \
         every later choice."
            .to_string(),
    ];

    lines.push(match &narrative.tarot_card {
        Choice::Fixed(card) => format!(
            "- **Tarot Card**: The character's theme is the **{card}** card. Decide if it is \
             upright or reversed and state card and orientation in 'tarotCard'."
        ),
        Choice::Deferred(deck) => format!(
            "- **Tarot Card**: Choose one card from this list: {}. Decide if it is upright or \
             reversed and state card and orientation in 'tarotCard'.",
            options(deck)
        ),
    });
    lines.push(single_axis("Archetype", "archetype", &narrative.archetype));
    lines.push(
        "- **Occupation**: From the tarot card and archetype, choose a fitting modern-day \
         occupation for 'occupation'."
            .to_string(),
    );
    lines.push(single_axis("Dark Secret", "darkSecret", &narrative.dark_secret));
    lines.push(single_axis("Disadvantage", "disadvantage", &narrative.disadvantage));
    lines.push(match &narrative.advantages {
        Choice::Fixed(picks) => format!(
            "- **Advantages**: The character has these advantages: {}. Put exactly these \
             values in 'advantages' as a JSON array.",
            picks.join(", ")
        ),
        Choice::Deferred(catalog) => format!(
            "- **Advantages**: Choose exactly {MAX_ADVANTAGES} advantages from this list: {}. \
             Put them in 'advantages' as a JSON array of strings.",
            options(catalog)
        ),
    });

    lines.push(String::new());
    lines.push("**User Concept:**".to_string());
    lines.push(format!("\"{}\"", request.concept()));
    lines.push(String::new());
    lines.push("**Character Creation Rules** (follow in order):".to_string());
    lines.extend(identity_rules());
    lines.extend(path_and_order_rules());
    lines.extend(attribute_rules());
    lines.extend(skill_rules());
    lines.extend(arcana_rules());
    lines.extend(advancement_rules(request.xp()));
    lines.push(String::new());
    lines.extend(output_format());

    lines.join("\n")
}

fn single_axis(title: &str, field: &str, choice: &Choice<String>) -> String {
    match choice {
        Choice::Fixed(value) => format!(
            "- **{title}**: The character's {} is **{value}**. Put it in '{field}'.",
            title.to_lowercase()
        ),
        Choice::Deferred(catalog) => format!(
            "- **{title}**: Choose one from this list: {}. Put it in '{field}'.",
            options(catalog)
        ),
    }
}

fn options(catalog: &Catalog) -> String {
    catalog.options.join(", ")
}

fn identity_rules() -> Vec<String> {
    vec![
        "1. **Name, Nimbus, Description, Aspirations**: Create a fitting name. Describe the \
         Nimbus in 2-3 sentences. Write a 1-2 sentence physical description suitable for a \
         portrait. Give three distinct, actionable aspirations."
            .to_string(),
    ]
}

fn path_and_order_rules() -> Vec<String> {
    let paths: Vec<&str> = Path::ALL.iter().map(|p| p.name()).collect();
    let orders: Vec<&str> = Order::ALL.iter().map(|o| o.name()).collect();
    let antagonists: Vec<&str> = Order::ALL
        .iter()
        .filter(|o| o.is_antagonistic())
        .map(|o| o.name())
        .collect();
    vec![
        format!("2. **Path & Order**: Choose a Path: {}.", paths.join(", ")),
        format!(
            "   Choose an Order: {}. {} are antagonists; choose them only if the concept \
             strongly implies it.",
            orders.join(", "),
            antagonists.join(" and ")
        ),
    ]
}

fn attribute_rules() -> Vec<String> {
    vec![
        "3. **Attributes (5/4/3)**: All 9 attributes start at 1. Rank Mental, Physical and \
         Social as primary, secondary and tertiary, then add 5, 4 and 3 dots among their \
         attributes. No attribute may exceed 5."
            .to_string(),
    ]
}

fn skill_rules() -> Vec<String> {
    vec![
        "4. **Skills (11/7/4)**: All 24 skills start at 0. Rank Mental, Physical and Social \
         independently of attributes, then add 11, 7 and 4 dots among their skills. No skill \
         may exceed 5."
            .to_string(),
        "   Specialties are strings of the form \"Skill (Specialty)\", e.g. \"Occult (Ghosts)\"."
            .to_string(),
    ]
}

fn arcana_rules() -> Vec<String> {
    let mut lines = vec![
        "5. **Arcana (4 dots)**: Put 3 dots into the Path's two Ruling Arcana, split 2 and 1. \
         Put the last dot into any other Arcanum."
            .to_string(),
    ];
    lines.extend(Path::ALL.iter().map(|path| {
        let [first, second] = path.ruling_arcana();
        format!(
            "   - {}: Ruling Arcana are {first} and {second}. Inferior Arcanum is {}.",
            path.name(),
            path.inferior_arcanum()
        )
    }));
    lines.push(format!(
        "6. **Gnosis and Wisdom**: Gnosis starts at {STARTING_GNOSIS}. Wisdom starts at \
         {STARTING_WISDOM}."
    ));
    lines.push(
        "7. **Rotes**: Choose three rotes the character can cast with their Arcana.".to_string(),
    );
    lines.push("8. **Merits**: Summarize merits as short keywords in 'meritKeywords'.".to_string());
    lines
}

fn advancement_rules(xp: u32) -> Vec<String> {
    if xp == 0 {
        return vec![
            "9. **No Advancement**: 0 XP was given, so this is a starting character. Set \
             \"xp\" to 0 and \"xpLog\" to []."
                .to_string(),
        ];
    }
    let example = "Intelligence from 3 to 4 (4 XP)";
    vec![
        format!(
            "9. **Advancement ({xp} XP)**: After building the starting character, spend \
             exactly {xp} XP. Costs are per new dot:"
        ),
        XP_COSTS.rules_summary(),
        "   Ratings bought with XP may exceed creation limits, up to 5 for Attributes, Skills \
         and Arcana and 10 for Gnosis and Wisdom."
            .to_string(),
        format!(
            "   Log every purchase in 'xpLog', one string each, ending with its cost in \
             parentheses, e.g. \"{example}\". The costs MUST total exactly {xp}. Set \"xp\" \
             to {xp}."
        ),
    ]
}

fn output_format() -> Vec<String> {
    vec![
        "**Output**: Reply with one JSON object and nothing else. Fields: name, path, order, \
         attributes, skills, arcana, gnosis, wisdom, meritKeywords, specialties, aspirations, \
         description, nimbus, rotes, xp, xpLog, tarotCard, archetype, occupation, darkSecret, \
         disadvantage, advantages."
            .to_string(),
        format!("   'attributes' keys: {}.", wire_keys(Attribute::ALL)),
        format!("   'skills' keys: {}.", wire_keys(Skill::ALL)),
        format!("   'arcana' keys: {}.", wire_keys(Arcanum::ALL)),
        "   Every key must be present with an integer rating.".to_string(),
    ]
}

/// JSON key for a trait label: "Animal Ken" becomes "animalKen".
fn wire_key(label: &str) -> String {
    let joined: String = label.split_whitespace().collect();
    let mut chars = joined.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn wire_keys<T: Rated>(all: &[T]) -> String {
    all.iter()
        .map(|t| wire_key(t.label()))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use mage_mechanics::{AdvantageSelection, NarrativeSelections};

    fn request(xp: i64, selections: NarrativeSelections) -> GenerationRequest {
        GenerationRequest::new("a disgraced cartographer", xp, &selections).unwrap()
    }

    #[test]
    fn deferred_axes_list_their_catalog() {
        let prompt = render(&request(0, NarrativeSelections::default()));
        assert!(prompt.contains("Choose one from this list: The Innocent"));
        assert!(prompt.contains("Choose exactly 3 advantages from this list:"));
        assert!(prompt.contains("The Tower"));
        assert!(prompt.contains("\"a disgraced cartographer\""));
    }

    #[test]
    fn fixed_axes_pass_through() {
        let selections = NarrativeSelections {
            archetype: "The Sage".to_string(),
            advantages: AdvantageSelection::from_picks(&["Fame", "Safehouse"]),
            ..NarrativeSelections::default()
        };
        let prompt = render(&request(0, selections));
        assert!(prompt.contains("The character's archetype is **The Sage**."));
        assert!(prompt.contains("The character has these advantages: Fame, Safehouse."));
    }

    #[test]
    fn zero_xp_means_no_advancement() {
        let prompt = render(&request(0, NarrativeSelections::default()));
        assert!(prompt.contains("**No Advancement**"));
        assert!(!prompt.contains("Costs are per new dot"));
    }

    #[test]
    fn xp_section_embeds_costs() {
        let prompt = render(&request(15, NarrativeSelections::default()));
        assert!(prompt.contains("spend exactly 15 XP"));
        assert!(prompt.contains("- Inferior Arcanum: 5 XP per new dot (must have Gnosis 3+)."));
        assert!(prompt.contains("MUST total exactly 15"));
    }

    #[test]
    fn arcana_table_and_keys() {
        let prompt = render(&request(0, NarrativeSelections::default()));
        assert!(prompt.contains("- Thyrsus: Ruling Arcana are Life and Spirit. Inferior Arcanum is Mind."));
        assert!(prompt.contains("animalKen"));
        assert!(prompt.contains("Seers of the Throne and Banishers are antagonists"));
    }

    #[test]
    fn wire_key_camel_cases() {
        assert_eq!(wire_key("Animal Ken"), "animalKen");
        assert_eq!(wire_key("Wits"), "wits");
    }
}
