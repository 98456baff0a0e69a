use crate::{
    DEFAULT_REPS, DEFAULT_REST_TIME, ExerciseName, ExerciseNotes, ExerciseRecord, ExerciseSet,
    WeightExpressionError, categorize, evaluate_weight_expression, exercise_exists,
};

/// Day assigned to exercises of a workout that has not been split into days.
pub const DEFAULT_DAY: &str = "Giorno 1";

/// Rest times in seconds offered for selection. Other values are entered as custom rest time.
pub const REST_TIME_PRESETS: [u32; 6] = [30, 60, 90, 120, 150, 300];

/// Cardio exercises entered manually last at least this many minutes.
pub const MIN_CARDIO_DURATION: u32 = 8;

#[must_use]
pub fn is_preset_rest_time(seconds: u32) -> bool {
    REST_TIME_PRESETS.contains(&seconds)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftMode {
    Add,
    Edit,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum DraftError {
    #[error("Name must contain letters, digits, spaces, commas, apostrophes, hyphens or parentheses")]
    InvalidName,
    #[error("Exercise already exists")]
    Duplicate,
    #[error("Rest time must be greater than zero")]
    InvalidRestTime,
    #[error("Division by zero in weight of set {set_number}")]
    DivisionByZero { set_number: u32 },
    #[error("Invalid weight in set {set_number}")]
    InvalidWeight { set_number: u32 },
    #[error("Repetitions of set {set_number} must be greater than zero")]
    InvalidReps { set_number: u32 },
}

/// A set as entered in the exercise form. The weight is kept as typed until the form is saved.
#[derive(Debug, Clone, PartialEq)]
pub struct DraftSet {
    pub reps: u32,
    pub weight: String,
    pub notes: Option<String>,
}

impl Default for DraftSet {
    fn default() -> Self {
        Self {
            reps: DEFAULT_REPS,
            weight: String::new(),
            notes: None,
        }
    }
}

impl DraftSet {
    /// Replaces an arithmetic expression in the weight field by its result.
    ///
    /// The field is left as typed if it cannot be evaluated.
    pub fn evaluate_weight(&mut self) -> Result<(), WeightExpressionError> {
        if self.weight.trim().is_empty() {
            return Ok(());
        }
        let weight = evaluate_weight_expression(&self.weight)?;
        self.weight = weight.to_string();
        Ok(())
    }
}

/// State of the form used to add or edit an exercise manually.
#[derive(Debug, Clone, PartialEq)]
pub struct ExerciseDraft {
    pub name: String,
    pub machine: String,
    pub sets: Vec<DraftSet>,
    pub rest_time: u32,
    pub notes: String,
    pub cardio: bool,
    pub duration: u32,
}

impl Default for ExerciseDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            machine: String::new(),
            sets: vec![DraftSet::default()],
            rest_time: DEFAULT_REST_TIME,
            notes: String::new(),
            cardio: false,
            duration: MIN_CARDIO_DURATION,
        }
    }
}

impl ExerciseDraft {
    /// Opens an existing record for editing.
    #[must_use]
    pub fn from_record(record: &ExerciseRecord) -> Self {
        let notes = ExerciseNotes::parse(&record.notes);
        let duration = match (notes.cardio, record.sets.first()) {
            (true, Some(set)) => set.reps,
            _ => MIN_CARDIO_DURATION,
        };
        Self {
            name: record.name.to_string(),
            machine: record.machine.clone(),
            sets: if notes.cardio {
                vec![DraftSet::default()]
            } else {
                record
                    .sets
                    .iter()
                    .map(|set| DraftSet {
                        reps: set.reps,
                        weight: set.target_weight.map(|w| w.to_string()).unwrap_or_default(),
                        notes: set.notes.clone(),
                    })
                    .collect()
            },
            rest_time: record.rest_time,
            notes: notes.text,
            cardio: notes.cardio,
            duration,
        }
    }

    pub fn add_set(&mut self) {
        self.sets.push(DraftSet::default());
    }

    /// Removes the set at `index` unless it is the only one left.
    pub fn remove_set(&mut self, index: usize) {
        if self.sets.len() > 1 && index < self.sets.len() {
            self.sets.remove(index);
        }
    }

    /// Validates the form and builds the record to save.
    ///
    /// `existing` are the exercises already part of the workout. They are only checked for
    /// duplicates when adding a new exercise.
    pub fn finish<'a>(
        &self,
        existing: impl IntoIterator<Item = &'a ExerciseRecord>,
        day: &str,
        mode: DraftMode,
    ) -> Result<ExerciseRecord, DraftError> {
        let name = ExerciseName::new(&self.name).map_err(|_| DraftError::InvalidName)?;

        if mode == DraftMode::Add && exercise_exists(name.as_str(), existing) {
            return Err(DraftError::Duplicate);
        }

        if self.rest_time == 0 {
            return Err(DraftError::InvalidRestTime);
        }

        let sets = if self.cardio {
            vec![ExerciseSet::duration(self.duration.max(MIN_CARDIO_DURATION))]
        } else {
            self.strength_sets()?
        };

        let notes = ExerciseNotes::new(self.cardio, Some(categorize(name.as_str())), &self.notes);

        Ok(ExerciseRecord {
            name,
            machine: self.machine.trim().to_string(),
            sets,
            rest_time: self.rest_time,
            notes: notes.to_string(),
            day: Some(day.to_string()),
        })
    }

    fn strength_sets(&self) -> Result<Vec<ExerciseSet>, DraftError> {
        if self.sets.is_empty() {
            return Ok(vec![ExerciseSet::new(1, DEFAULT_REPS, None)]);
        }

        let weights = (1..)
            .zip(&self.sets)
            .map(|(set_number, set)| {
                let weight = set.weight.trim();
                let evaluated = if weight.is_empty() {
                    None
                } else {
                    Some(evaluate_weight_expression(weight))
                };
                (set_number, evaluated)
            })
            .collect::<Vec<_>>();

        if let Some((set_number, _)) = weights
            .iter()
            .find(|(_, w)| matches!(w, Some(Err(WeightExpressionError::DivisionByZero))))
        {
            return Err(DraftError::DivisionByZero {
                set_number: *set_number,
            });
        }

        weights
            .into_iter()
            .zip(&self.sets)
            .map(|((set_number, weight), set)| {
                if set.reps == 0 {
                    return Err(DraftError::InvalidReps { set_number });
                }
                let target_weight = match weight {
                    None => None,
                    Some(Ok(weight)) if weight >= 0.0 => Some(weight),
                    Some(_) => return Err(DraftError::InvalidWeight { set_number }),
                };
                Ok(ExerciseSet {
                    set_number,
                    reps: set.reps,
                    target_weight,
                    notes: set.notes.clone(),
                })
            })
            .collect()
    }
}
