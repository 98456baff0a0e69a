/// Keywords identifying gym equipment and the label they are reported with.
///
/// Lookup is ordered, the first keyword contained in the name wins.
pub const MACHINE_LABELS: [(&str, &str); 25] = [
    ("chest press", "Chest Press"),
    ("pectoral", "Chest Press"),
    ("pec deck", "Pec Deck"),
    ("leg press", "Leg Press"),
    ("leg curl", "Leg Curl"),
    ("leg extension", "Leg Extension"),
    ("lat machine", "Lat Machine"),
    ("lat pulldown", "Lat Pulldown"),
    ("pull down", "Lat Pulldown"),
    ("seated row", "Seated Row"),
    ("shoulder press", "Shoulder Press"),
    ("smith machine", "Smith Machine"),
    ("hack squat", "Hack Squat"),
    ("calf raise", "Calf Raise Machine"),
    ("cable", "Cable Machine"),
    ("preacher", "Preacher Bench"),
    ("tricep dip", "Tricep Dip Machine"),
    ("leg abduction", "Leg Abduction Machine"),
    ("leg adduction", "Leg Adduction Machine"),
    ("tapis roulant", "Tapis Roulant"),
    ("cyclette", "Cyclette"),
    ("ellittica", "Ellittica"),
    ("rowing", "Rowing Machine"),
    ("back extension", "Back Extension Machine"),
    ("abdominal", "Abdominal Machine"),
];

/// Machine names recognised between the exercise name and the set scheme of a line, e.g. the
/// `leg press` in `Squat leg press 3x12`.
pub const MACHINE_KEYWORDS: [&str; 19] = [
    "chest press",
    "leg press",
    "lat machine",
    "shoulder press",
    "leg curl",
    "leg extension",
    "cable",
    "smith machine",
    "hack squat",
    "pec deck",
    "seated row",
    "pull down",
    "calf raise machine",
    "abdominal machine",
    "back extension",
    "preacher curl",
    "tricep dip machine",
    "leg abduction",
    "leg adduction",
];

/// Returns the machine label for the first keyword contained in `name`, ignoring case.
#[must_use]
pub fn machine_label(name: &str) -> Option<&'static str> {
    let name = name.to_lowercase();
    MACHINE_LABELS
        .iter()
        .find(|(keyword, _)| name.contains(keyword))
        .map(|(_, label)| *label)
}

/// Like [`machine_label`], but yields an empty string if no keyword matches.
#[must_use]
pub fn machine_from_name(name: &str) -> String {
    machine_label(name).unwrap_or_default().to_string()
}
