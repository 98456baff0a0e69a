use crate::{ExerciseName, name::sanitize_name, notes};

/// Rest time in seconds assumed for strength exercises.
pub const DEFAULT_REST_TIME: u32 = 60;
/// Rest time in seconds assumed for cardio exercises.
pub const DEFAULT_CARDIO_REST_TIME: u32 = 120;
/// Repetitions assumed for a set when none were given.
pub const DEFAULT_REPS: u32 = 10;
/// Marks the single set of a cardio exercise, whose `reps` hold the duration in minutes.
pub const MINUTES_MARKER: &str = "min";

#[derive(Debug, Clone, PartialEq)]
pub struct ExerciseSet {
    pub set_number: u32,
    pub reps: u32,
    pub target_weight: Option<f64>,
    pub notes: Option<String>,
}

impl ExerciseSet {
    #[must_use]
    pub fn new(set_number: u32, reps: u32, target_weight: Option<f64>) -> Self {
        Self {
            set_number,
            reps,
            target_weight,
            notes: None,
        }
    }

    /// The single set describing a cardio exercise of the given duration.
    #[must_use]
    pub fn duration(minutes: u32) -> Self {
        Self {
            set_number: 1,
            reps: minutes,
            target_weight: None,
            notes: Some(MINUTES_MARKER.to_string()),
        }
    }

    /// `count` identical sets numbered from 1.
    #[must_use]
    pub fn uniform(count: u32, reps: u32, target_weight: Option<f64>) -> Vec<Self> {
        (1..=count)
            .map(|set_number| Self::new(set_number, reps, target_weight))
            .collect()
    }

    #[must_use]
    pub fn is_duration(&self) -> bool {
        self.notes.as_deref() == Some(MINUTES_MARKER)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExerciseRecord {
    pub name: ExerciseName,
    pub machine: String,
    pub sets: Vec<ExerciseSet>,
    pub rest_time: u32,
    pub notes: String,
    pub day: Option<String>,
}

impl ExerciseRecord {
    #[must_use]
    pub fn is_cardio(&self) -> bool {
        notes::is_cardio_notes(&self.notes)
    }

    /// Assigns set numbers 1..n in the current order of the sets.
    pub fn renumber_sets(&mut self) {
        for (set_number, set) in (1..).zip(self.sets.iter_mut()) {
            set.set_number = set_number;
        }
    }

    #[must_use]
    pub fn has_contiguous_sets(&self) -> bool {
        (1..)
            .zip(&self.sets)
            .all(|(set_number, set)| set.set_number == set_number)
    }
}

/// Whether an exercise with the same name is already part of `existing`.
///
/// Both names are sanitized before comparing. Differences in case are ignored, differences in
/// spacing are not.
pub fn exercise_exists<'a>(
    name: &str,
    existing: impl IntoIterator<Item = &'a ExerciseRecord>,
) -> bool {
    let name = sanitize_name(name).to_lowercase();
    existing
        .into_iter()
        .any(|exercise| sanitize_name(exercise.name.as_str()).to_lowercase() == name)
}
