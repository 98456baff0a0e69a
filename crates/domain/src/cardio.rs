use std::sync::LazyLock;

use regex::Regex;

pub const CARDIO_KEYWORDS: [&str; 13] = [
    "cardio",
    "corsa",
    "camminata",
    "cyclette",
    "tapis roulant",
    "ellittica",
    "bike",
    "run",
    "walk",
    "step",
    "nuoto",
    "jogging",
    "rowing",
];

/// Duration assumed for a cardio exercise when none was given.
pub const DEFAULT_DURATION_MINUTES: u32 = 20;

static DURATION: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?i)([0-9]+)\s*(?:minuti|min|m)\b").ok());

/// Whether a word of `name` starts with one of the cardio keywords, ignoring case.
///
/// Keywords must begin a word, so `running` counts but `crunch` does not.
#[must_use]
pub fn is_cardio_name(name: &str) -> bool {
    let name = name.to_lowercase();
    CARDIO_KEYWORDS.iter().any(|keyword| {
        name.match_indices(keyword).any(|(index, _)| {
            name[..index]
                .chars()
                .next_back()
                .is_none_or(|c| !c.is_alphanumeric())
        })
    })
}

/// Finds a duration like `20 min`, `15 minuti` or `30m` anywhere in `text`.
#[must_use]
pub fn parse_duration_minutes(text: &str) -> Option<u32> {
    DURATION
        .as_ref()?
        .captures(text)
        .and_then(|captures| captures[1].parse().ok())
        .filter(|minutes| *minutes > 0)
}
