//! Turns free-form workout descriptions into exercise records.
//!
//! Every line of the text is handled on its own. The [`PATTERNS`] are tried in order and the
//! first one that matches a line produces its record. Lines no pattern understands still become
//! a record named after the cleaned line, so nothing the user typed silently disappears.

use std::sync::LazyLock;

use log::debug;
use regex::{Captures, Regex};

use crate::{
    DEFAULT_CARDIO_REST_TIME, DEFAULT_REPS, DEFAULT_REST_TIME, ExerciseName, ExerciseRecord,
    ExerciseSet,
    machine::{MACHINE_KEYWORDS, machine_from_name, machine_label},
    name::is_name_letter,
    notes::CARDIO_TAG,
};

/// Trimmed lines shorter than this are considered noise.
pub const MIN_LINE_LENGTH: usize = 3;

/// Highest number of sets a single `N x M` or `N serie` prescription may ask for.
pub const MAX_SETS: u32 = 100;

const WEIGHT: &str = r"(?:\s*-?\s*([0-9]+(?:\.[0-9]+)?)\s*kg)?";
const REST: &str = r"(?:\s*-?\s*recupero\s*([0-9]+)\s*(secondi|sec|s|minuti|min|m)?)?";
const SET_LABEL: &str = r"(?:serie|seri|sets|set)";
const REPS_LABEL: &str = r"(?:ripetizioni|rip|reps|rep)";

static MACHINE_SETS_REPS: LazyLock<Option<Regex>> = LazyLock::new(|| {
    let machines = MACHINE_KEYWORDS
        .iter()
        .map(|keyword| regex::escape(keyword))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(
        r"(?i)^(.+?)\s+({machines})\s+([0-9]+)\s*[x×]\s*([0-9]+){WEIGHT}{REST}"
    ))
    .ok()
});

static SETS_REPS: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?i)^(.+?)\s+([0-9]+)\s*[x×]\s*([0-9]+){WEIGHT}{REST}"
    ))
    .ok()
});

static LABELED_FIELDS: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?i)^(.+?)\s*\b{SET_LABEL}\b:?\s*([0-9]+)(?:\s*{REPS_LABEL}:?\s*([0-9]+))?(?:\s*peso:?\s*([0-9]+(?:\.[0-9]+)?)\s*kg)?{REST}"
    ))
    .ok()
});

static SET_LIST: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?i)^(.+?)\s+((?:[0-9]+\s*[x×]\s*[0-9]+(?:\s*,\s*)?)+){WEIGHT}{REST}"
    ))
    .ok()
});

static SET_GROUP: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"([0-9]+)\s*[x×]\s*([0-9]+)").ok());

static LIST_CONTINUATION: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^\s*,\s*[0-9]+\s*[x×]\s*[0-9]+").ok());

static CARDIO_DURATION: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?i)^(.+?)\s+([0-9]+)\s*(?:minuti|minutes|minute|min)\b{REST}"
    ))
    .ok()
});

static SERIES_REPETITIONS: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?i)^(.+?)\s+([0-9]+)\s*{SET_LABEL}\s+([0-9]+)\s*{REPS_LABEL}\b{WEIGHT}{REST}"
    ))
    .ok()
});

/// A way of writing down an exercise on a single line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractionPattern {
    /// `Squat leg press 3x12 - 40kg recupero 90s`
    MachineSetsReps,
    /// `Panca piana 4x8 - 60kg recupero 90s`
    SetsReps,
    /// `Panca piana serie: 4 rip: 8 peso: 60kg`
    LabeledFields,
    /// `Stacco da terra 1x10, 1x8, 1x6 - 80kg`
    SetList,
    /// `Corsa 20 min recupero 2min`
    CardioDuration,
    /// `Squat 3 serie 12 ripetizioni`
    SeriesRepetitions,
}

/// Patterns in the order they are tried, most specific first.
pub const PATTERNS: [ExtractionPattern; 6] = [
    ExtractionPattern::MachineSetsReps,
    ExtractionPattern::SetsReps,
    ExtractionPattern::LabeledFields,
    ExtractionPattern::SetList,
    ExtractionPattern::CardioDuration,
    ExtractionPattern::SeriesRepetitions,
];

impl ExtractionPattern {
    fn regex(self) -> Option<&'static Regex> {
        match self {
            ExtractionPattern::MachineSetsReps => MACHINE_SETS_REPS.as_ref(),
            ExtractionPattern::SetsReps => SETS_REPS.as_ref(),
            ExtractionPattern::LabeledFields => LABELED_FIELDS.as_ref(),
            ExtractionPattern::SetList => SET_LIST.as_ref(),
            ExtractionPattern::CardioDuration => CARDIO_DURATION.as_ref(),
            ExtractionPattern::SeriesRepetitions => SERIES_REPETITIONS.as_ref(),
        }
    }

    /// Applies the pattern to a trimmed line.
    ///
    /// Returns `None` if the line does not match or one of the captured numbers is unusable.
    #[must_use]
    pub fn extract(self, line: &str) -> Option<ExerciseRecord> {
        let captures = self.regex()?.captures(line)?;
        let prescription = match self {
            ExtractionPattern::MachineSetsReps => {
                if continues_as_list(line, &captures) {
                    return None;
                }
                Prescription {
                    machine: machine_label(&captures[2]),
                    ..Prescription::uniform(
                        &captures[1],
                        set_count(&captures[3])?,
                        count(&captures[4])?,
                        weight(&captures, 5)?,
                        rest_time(&captures, 6, 7, DEFAULT_REST_TIME)?,
                    )?
                }
            }
            ExtractionPattern::SetsReps => {
                if continues_as_list(line, &captures) {
                    return None;
                }
                Prescription::uniform(
                    &captures[1],
                    set_count(&captures[2])?,
                    count(&captures[3])?,
                    weight(&captures, 4)?,
                    rest_time(&captures, 5, 6, DEFAULT_REST_TIME)?,
                )?
            }
            ExtractionPattern::LabeledFields => {
                let name = captures[1].trim();
                if name.ends_with(|c: char| c.is_ascii_digit()) {
                    return None;
                }
                let reps = match captures.get(3) {
                    Some(reps) => count(reps.as_str())?,
                    None => DEFAULT_REPS,
                };
                Prescription::uniform(
                    name,
                    set_count(&captures[2])?,
                    reps,
                    weight(&captures, 4)?,
                    rest_time(&captures, 5, 6, DEFAULT_REST_TIME)?,
                )?
            }
            ExtractionPattern::SetList => {
                let target_weight = weight(&captures, 3)?;
                let sets = SET_GROUP
                    .as_ref()?
                    .captures_iter(&captures[2])
                    .zip(1..)
                    .map(|(group, set_number)| {
                        Some(ExerciseSet::new(set_number, count(&group[2])?, target_weight))
                    })
                    .collect::<Option<Vec<_>>>()?;
                if sets.is_empty() {
                    return None;
                }
                Prescription {
                    name: ExerciseName::new(&captures[1]).ok()?,
                    machine: None,
                    sets,
                    rest_time: rest_time(&captures, 4, 5, DEFAULT_REST_TIME)?,
                    cardio: false,
                }
            }
            ExtractionPattern::CardioDuration => Prescription {
                name: ExerciseName::new(&captures[1]).ok()?,
                machine: None,
                sets: vec![ExerciseSet::duration(count(&captures[2])?)],
                rest_time: rest_time(&captures, 3, 4, DEFAULT_CARDIO_REST_TIME)?,
                cardio: true,
            },
            ExtractionPattern::SeriesRepetitions => Prescription::uniform(
                &captures[1],
                set_count(&captures[2])?,
                count(&captures[3])?,
                weight(&captures, 4)?,
                rest_time(&captures, 5, 6, DEFAULT_REST_TIME)?,
            )?,
        };
        Some(prescription.into_record())
    }
}

/// What a matched line prescribes, before it is turned into a record.
struct Prescription {
    name: ExerciseName,
    machine: Option<&'static str>,
    sets: Vec<ExerciseSet>,
    rest_time: u32,
    cardio: bool,
}

impl Prescription {
    fn uniform(
        name: &str,
        num_sets: u32,
        reps: u32,
        target_weight: Option<f64>,
        rest_time: u32,
    ) -> Option<Self> {
        Some(Self {
            name: ExerciseName::new(name).ok()?,
            machine: None,
            sets: ExerciseSet::uniform(num_sets, reps, target_weight),
            rest_time,
            cardio: false,
        })
    }

    fn into_record(self) -> ExerciseRecord {
        let machine = self.machine.map_or_else(
            || machine_from_name(self.name.as_str()),
            ToString::to_string,
        );
        ExerciseRecord {
            name: self.name,
            machine,
            sets: self.sets,
            rest_time: self.rest_time,
            notes: if self.cardio {
                CARDIO_TAG.to_string()
            } else {
                String::new()
            },
            day: None,
        }
    }
}

/// A positive count of sets, repetitions or minutes.
fn count(value: &str) -> Option<u32> {
    value.parse().ok().filter(|count| *count > 0)
}

/// A count of sets, which must not exceed [`MAX_SETS`].
fn set_count(value: &str) -> Option<u32> {
    count(value).filter(|count| *count <= MAX_SETS)
}

/// The optional weight in capture group `group`. The outer `None` rejects the match.
#[allow(clippy::option_option)]
fn weight(captures: &Captures, group: usize) -> Option<Option<f64>> {
    match captures.get(group) {
        Some(weight) => weight
            .as_str()
            .parse::<f64>()
            .ok()
            .filter(|weight| weight.is_finite())
            .map(Some),
        None => Some(None),
    }
}

fn rest_time(captures: &Captures, value: usize, unit: usize, default: u32) -> Option<u32> {
    let Some(value) = captures.get(value) else {
        return Some(default);
    };
    let value: u32 = value.as_str().parse().ok()?;
    match captures.get(unit) {
        Some(unit) if unit.as_str().to_lowercase().starts_with('m') => value.checked_mul(60),
        _ => Some(value),
    }
}

/// Whether a single `NxM` match is just the start of a comma separated list of sets.
fn continues_as_list(line: &str, captures: &Captures) -> bool {
    let end = captures.get(0).map_or(line.len(), |m| m.end());
    LIST_CONTINUATION
        .as_ref()
        .is_some_and(|re| re.is_match(&line[end..]))
}

/// Record for a line no pattern understood, named after the line's letters and digits.
fn fallback(line: &str) -> Option<ExerciseRecord> {
    let cleaned = line
        .chars()
        .filter(|&c| is_name_letter(c) || c.is_ascii_digit() || c.is_whitespace())
        .collect::<String>();
    let cleaned = cleaned.trim();

    if cleaned.chars().count() < MIN_LINE_LENGTH {
        return None;
    }

    let name = ExerciseName::new(cleaned).ok()?;
    Some(ExerciseRecord {
        machine: machine_from_name(name.as_str()),
        name,
        sets: vec![ExerciseSet::new(1, DEFAULT_REPS, None)],
        rest_time: DEFAULT_REST_TIME,
        notes: String::new(),
        day: None,
    })
}

/// Extracts the exercise described on a single line, if any.
#[must_use]
pub fn extract_line(line: &str) -> Option<ExerciseRecord> {
    let line = line.trim();

    if line.chars().count() < MIN_LINE_LENGTH {
        return None;
    }

    for pattern in PATTERNS {
        if let Some(record) = pattern.extract(line) {
            debug!("extracted {:?} using {pattern:?}", record.name.as_str());
            return Some(record);
        }
    }

    debug!("no pattern matches {line:?}, falling back to plain name");
    fallback(line)
}

/// Extracts one exercise per line of `text`, in the order of the lines.
#[must_use]
pub fn extract_exercises(text: &str) -> Vec<ExerciseRecord> {
    text.lines().filter_map(extract_line).collect()
}
