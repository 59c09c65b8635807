//! Recorded collaborator replies shared by the crate's tests.

/// A legal starting Obrimos, as the collaborator returns it.
pub const VESPER: &str = r#"{
  "name": "Vesper Hale",
  "path": "Obrimos",
  "order": "Silver Ladder",
  "attributes": {
    "intelligence": 3, "wits": 3, "resolve": 2,
    "strength": 2, "dexterity": 3, "stamina": 2,
    "presence": 2, "manipulation": 2, "composure": 2
  },
  "skills": {
    "academics": 3, "computer": 0, "crafts": 0, "investigation": 4,
    "medicine": 0, "occult": 4, "politics": 0, "science": 0,
    "athletics": 3, "brawl": 4, "drive": 0, "firearms": 0,
    "larceny": 0, "stealth": 0, "survival": 0, "weaponry": 0,
    "animalKen": 0, "empathy": 0, "expression": 0, "intimidation": 0,
    "persuasion": 4, "socialise": 0, "streetwise": 0, "subterfuge": 0
  },
  "arcana": {
    "death": 0, "fate": 0, "forces": 2, "life": 0, "matter": 0,
    "mind": 1, "prime": 1, "space": 0, "spirit": 0, "time": 0
  },
  "gnosis": 1,
  "wisdom": 7,
  "meritKeywords": "Status (Consilium), Mentor",
  "specialties": ["Occult (Angels)"],
  "aspirations": ["Expose the false prophet", "Earn a seat on the Consilium", "Find her brother"],
  "description": "A gaunt woman in a storm-grey coat, eyes ringed with static.",
  "nimbus": "The air smells of ozone and every light in the room brightens.",
  "rotes": ["Kinetic Blow", "Supernal Vision"],
  "xp": 0,
  "xpLog": [],
  "tarotCard": "The Tower (Reversed)",
  "archetype": "The Sage",
  "occupation": "Electrician",
  "darkSecret": "Pact with a Spirit",
  "disadvantage": "Obsession",
  "advantages": ["Fame", "Safehouse"]
}"#;
