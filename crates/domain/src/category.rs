use strum::{AsRefStr, Display, EnumIter, EnumString};

#[derive(AsRefStr, Display, EnumIter, EnumString, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[strum(serialize_all = "lowercase")]
pub enum Category {
    Petto,
    Schiena,
    Spalle,
    Braccia,
    Gambe,
    Core,
    Generale,
}

/// Keyword groups in matching order. A name containing `press` counts towards shoulders only if
/// it is not a bench exercise, which is already caught by the chest group.
const CATEGORY_KEYWORDS: [(Category, &[&str]); 6] = [
    (
        Category::Petto,
        &["panca", "chest", "petto", "push up", "flessioni", "dips"],
    ),
    (
        Category::Schiena,
        &[
            "trazioni", "pull", "row", "lat", "dorsali", "schiena", "stacco",
        ],
    ),
    (
        Category::Spalle,
        &["spalle", "shoulder", "military", "alzate", "press"],
    ),
    (
        Category::Braccia,
        &[
            "curl",
            "bicipiti",
            "tricipiti",
            "braccia",
            "french",
            "bicep",
        ],
    ),
    (
        Category::Gambe,
        &[
            "squat",
            "gambe",
            "leg",
            "affondi",
            "lunge",
            "coscia",
            "polpacci",
            "quadricipiti",
            "corsa",
            "camminata",
            "jogging",
            "running",
            "cyclette",
            "bici",
            "tapis",
        ],
    ),
    (
        Category::Core,
        &["plank", "addominali", "abs", "core", "crunch"],
    ),
];

/// Assigns the muscle group an exercise belongs to, judging by keywords in its name.
#[must_use]
pub fn categorize(name: &str) -> Category {
    let name = name.to_lowercase();
    CATEGORY_KEYWORDS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|keyword| name.contains(keyword)))
        .map_or(Category::Generale, |(category, _)| *category)
}
