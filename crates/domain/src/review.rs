use crate::{
    DEFAULT_REPS, ExerciseName, ExerciseNotes, ExerciseRecord, ExerciseSet,
    cardio::{DEFAULT_DURATION_MINUTES, is_cardio_name, parse_duration_minutes},
    evaluate_weight_expression,
};

/// An extracted exercise while the user reviews it before import.
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewCandidate {
    pub name: String,
    pub machine: String,
    pub rest_time: u32,
    pub notes: String,
    pub day: Option<String>,
    sets: Vec<ExerciseSet>,
    cardio: bool,
    duration: u32,
}

impl ReviewCandidate {
    /// Prepares an extracted record for review, detecting cardio exercises the extractor did not
    /// recognise as such.
    #[must_use]
    pub fn from_extracted(record: ExerciseRecord) -> Self {
        let name_duration = parse_duration_minutes(record.name.as_str());
        let cardio = record.is_cardio()
            || is_cardio_name(record.name.as_str())
            || name_duration.is_some();
        let duration = record
            .sets
            .iter()
            .find(|set| set.is_duration())
            .map(|set| set.reps)
            .or(name_duration)
            .unwrap_or(DEFAULT_DURATION_MINUTES);

        let mut candidate = Self {
            name: record.name.into_string(),
            machine: record.machine,
            rest_time: record.rest_time,
            notes: record.notes,
            day: record.day,
            sets: if cardio { vec![] } else { record.sets },
            cardio,
            duration,
        };
        if !cardio {
            candidate.ensure_set();
            candidate.renumber_sets();
        }
        candidate
    }

    #[must_use]
    pub fn is_cardio(&self) -> bool {
        self.cardio
    }

    #[must_use]
    pub fn duration(&self) -> u32 {
        self.duration
    }

    /// Strength sets, empty for cardio exercises.
    #[must_use]
    pub fn sets(&self) -> &[ExerciseSet] {
        &self.sets
    }

    pub fn set_cardio(&mut self, cardio: bool) {
        self.cardio = cardio;
        if cardio {
            self.sets.clear();
        } else {
            self.ensure_set();
        }
    }

    pub fn set_duration(&mut self, minutes: u32) {
        self.duration = minutes.max(1);
    }

    pub fn add_set(&mut self) {
        if self.cardio {
            return;
        }
        let set_number = u32::try_from(self.sets.len() + 1).unwrap_or(u32::MAX);
        self.sets.push(ExerciseSet::new(set_number, DEFAULT_REPS, None));
    }

    /// Removes the set at `index` unless it is the only one left.
    pub fn remove_set(&mut self, index: usize) {
        if self.sets.len() > 1 && index < self.sets.len() {
            self.sets.remove(index);
            self.renumber_sets();
        }
    }

    /// Sets the repetitions from user input, falling back to a single repetition for anything
    /// that is not a positive number.
    pub fn set_reps(&mut self, index: usize, raw: &str) {
        if let Some(set) = self.sets.get_mut(index) {
            set.reps = raw
                .trim()
                .parse::<u32>()
                .ok()
                .filter(|reps| *reps > 0)
                .unwrap_or(1);
        }
    }

    /// Sets the weight from user input. Input that cannot be evaluated clears the weight.
    pub fn set_weight(&mut self, index: usize, raw: &str) {
        if let Some(set) = self.sets.get_mut(index) {
            set.target_weight = evaluate_weight_expression(raw)
                .ok()
                .filter(|weight| *weight >= 0.0);
        }
    }

    /// Sets the rest time from user input, treating anything but a non-negative number as 0.
    pub fn set_rest_time(&mut self, raw: &str) {
        self.rest_time = raw.trim().parse().unwrap_or(0);
    }

    /// Turns the reviewed candidate into the record to import.
    #[must_use]
    pub fn finish(self, default_day: &str) -> ExerciseRecord {
        let notes = ExerciseNotes {
            cardio: self.cardio,
            ..ExerciseNotes::parse(&self.notes)
        };
        ExerciseRecord {
            name: ExerciseName::new(&self.name).unwrap_or_default(),
            machine: self.machine,
            sets: if self.cardio {
                vec![ExerciseSet::duration(self.duration)]
            } else {
                self.sets
            },
            rest_time: self.rest_time,
            notes: notes.to_string(),
            day: Some(self.day.unwrap_or_else(|| default_day.to_string())),
        }
    }

    fn ensure_set(&mut self) {
        if self.sets.is_empty() {
            self.sets.push(ExerciseSet::new(1, DEFAULT_REPS, None));
        }
    }

    fn renumber_sets(&mut self) {
        for (set_number, set) in (1..).zip(self.sets.iter_mut()) {
            set.set_number = set_number;
        }
    }
}
