#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

use scheda_domain as domain;

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
pub struct ExerciseSet {
    pub set_number: u32,
    pub reps: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_weight: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl From<&domain::ExerciseSet> for ExerciseSet {
    fn from(value: &domain::ExerciseSet) -> Self {
        Self {
            set_number: value.set_number,
            reps: value.reps,
            target_weight: value.target_weight,
            notes: value.notes.clone(),
        }
    }
}

impl From<ExerciseSet> for domain::ExerciseSet {
    fn from(value: ExerciseSet) -> Self {
        Self {
            set_number: value.set_number,
            reps: value.reps,
            target_weight: value.target_weight,
            notes: value.notes,
        }
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
pub struct Exercise {
    pub name: String,
    #[serde(default)]
    pub machine: String,
    pub sets: Vec<ExerciseSet>,
    pub rest_time: u32,
    #[serde(default)]
    pub notes: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day: Option<String>,
}

impl From<domain::ExerciseRecord> for Exercise {
    fn from(value: domain::ExerciseRecord) -> Self {
        Self::from(&value)
    }
}

impl From<&domain::ExerciseRecord> for Exercise {
    fn from(value: &domain::ExerciseRecord) -> Self {
        Self {
            name: value.name.to_string(),
            machine: value.machine.clone(),
            sets: value.sets.iter().map(ExerciseSet::from).collect(),
            rest_time: value.rest_time,
            notes: value.notes.clone(),
            day: value.day.clone(),
        }
    }
}

impl TryFrom<Exercise> for domain::ExerciseRecord {
    type Error = RecordError;

    fn try_from(value: Exercise) -> Result<Self, Self::Error> {
        let record = Self {
            name: domain::ExerciseName::new(&value.name)?,
            machine: value.machine,
            sets: value
                .sets
                .into_iter()
                .map(domain::ExerciseSet::from)
                .collect(),
            rest_time: value.rest_time,
            notes: value.notes,
            day: value.day,
        };

        if !record.has_contiguous_sets() {
            return Err(RecordError::NonContiguousSets);
        }
        if let Some(set) = record
            .sets
            .iter()
            .find(|set| set.target_weight.is_some_and(|weight| weight < 0.0))
        {
            return Err(RecordError::NegativeWeight {
                set_number: set.set_number,
            });
        }
        if record.is_cardio() && record.sets.len() != 1 {
            return Err(RecordError::CardioSetCount(record.sets.len()));
        }

        Ok(record)
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum RecordError {
    #[error(transparent)]
    Name(#[from] domain::NameError),
    #[error("Set numbers must be contiguous starting at 1")]
    NonContiguousSets,
    #[error("Weight of set {set_number} must not be negative")]
    NegativeWeight { set_number: u32 },
    #[error("Cardio exercise must have exactly one set, found {0}")]
    CardioSetCount(usize),
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractRequest {
    #[serde(default)]
    pub text: Option<String>,
}

impl ExtractRequest {
    /// The text to extract from, unless it is missing or empty.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref().filter(|text| !text.is_empty())
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Default, PartialEq)]
pub struct ExtractResponse {
    pub exercises: Vec<Exercise>,
}

impl FromIterator<domain::ExerciseRecord> for ExtractResponse {
    fn from_iter<I: IntoIterator<Item = domain::ExerciseRecord>>(iter: I) -> Self {
        Self {
            exercises: iter.into_iter().map(Exercise::from).collect(),
        }
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    #[must_use]
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    use super::*;

    fn exercise(sets: Vec<ExerciseSet>, notes: &str) -> Exercise {
        Exercise {
            name: "Panca piana".to_string(),
            machine: String::new(),
            sets,
            rest_time: 90,
            notes: notes.to_string(),
            day: None,
        }
    }

    fn set(set_number: u32, target_weight: Option<f64>) -> ExerciseSet {
        ExerciseSet {
            set_number,
            reps: 8,
            target_weight,
            notes: None,
        }
    }

    #[test]
    fn test_exercise_serialization() {
        let record = domain::extract_line("Leg press 3x10 - 100kg recupero 90").unwrap();
        assert_eq!(
            serde_json::to_value(Exercise::from(&record)).unwrap(),
            json!({
                "name": "Leg press",
                "machine": "Leg Press",
                "sets": [
                    {"set_number": 1, "reps": 10, "target_weight": 100.0},
                    {"set_number": 2, "reps": 10, "target_weight": 100.0},
                    {"set_number": 3, "reps": 10, "target_weight": 100.0},
                ],
                "rest_time": 90,
                "notes": "",
            })
        );
    }

    #[test]
    fn test_cardio_exercise_serialization() {
        let record = domain::extract_line("Tapis roulant 20 minuti").unwrap();
        assert_eq!(
            serde_json::to_value(Exercise::from(record)).unwrap(),
            json!({
                "name": "Tapis roulant",
                "machine": "Tapis Roulant",
                "sets": [{"set_number": 1, "reps": 20, "notes": "min"}],
                "rest_time": 120,
                "notes": "Cardio",
            })
        );
    }

    #[test]
    fn test_exercise_deserialization_defaults() {
        let exercise: Exercise = serde_json::from_value(json!({
            "name": "Squat",
            "sets": [{"set_number": 1, "reps": 10}],
            "rest_time": 60,
        }))
        .unwrap();
        assert_eq!(
            exercise,
            Exercise {
                name: "Squat".to_string(),
                machine: String::new(),
                sets: vec![ExerciseSet {
                    set_number: 1,
                    reps: 10,
                    target_weight: None,
                    notes: None,
                }],
                rest_time: 60,
                notes: String::new(),
                day: None,
            }
        );
    }

    #[test]
    fn test_exercise_try_into_record() {
        let mut exercise = exercise(vec![set(1, Some(40.0)), set(2, None)], "petto -");
        exercise.day = Some("Giorno 2".to_string());
        let record = domain::ExerciseRecord::try_from(exercise.clone()).unwrap();
        assert_eq!(record.name.as_str(), "Panca piana");
        assert_eq!(record.sets.len(), 2);
        assert_eq!(Exercise::from(&record), exercise);
    }

    #[rstest]
    #[case::empty_name(
        Exercise { name: "?!".to_string(), ..exercise(vec![set(1, None)], "") },
        RecordError::Name(domain::NameError::Empty)
    )]
    #[case::gap(exercise(vec![set(1, None), set(3, None)], ""), RecordError::NonContiguousSets)]
    #[case::not_from_one(exercise(vec![set(2, None)], ""), RecordError::NonContiguousSets)]
    #[case::negative_weight(
        exercise(vec![set(1, Some(20.0)), set(2, Some(-5.0))], ""),
        RecordError::NegativeWeight { set_number: 2 }
    )]
    #[case::cardio_without_set(exercise(vec![], "Cardio"), RecordError::CardioSetCount(0))]
    #[case::cardio_with_sets(
        exercise(vec![set(1, None), set(2, None)], "Cardio - gambe -"),
        RecordError::CardioSetCount(2)
    )]
    fn test_exercise_try_into_record_invalid(
        #[case] exercise: Exercise,
        #[case] expected: RecordError,
    ) {
        assert_eq!(domain::ExerciseRecord::try_from(exercise), Err(expected));
    }

    #[rstest]
    #[case(json!({"text": "Squat 3x10"}), Some("Squat 3x10"))]
    #[case(json!({"text": ""}), None)]
    #[case(json!({"text": null}), None)]
    #[case(json!({}), None)]
    fn test_extract_request_text(#[case] body: serde_json::Value, #[case] expected: Option<&str>) {
        let request: ExtractRequest = serde_json::from_value(body).unwrap();
        assert_eq!(request.text(), expected);
    }

    #[test]
    fn test_extract_response() {
        let response = domain::extract_exercises("Squat 3x10\n\nPlank 3 serie 10 ripetizioni")
            .into_iter()
            .collect::<ExtractResponse>();
        assert_eq!(
            response
                .exercises
                .iter()
                .map(|e| e.name.as_str())
                .collect::<Vec<_>>(),
            vec!["Squat", "Plank"]
        );
    }

    #[test]
    fn test_error_response() {
        assert_eq!(
            serde_json::to_value(ErrorResponse::new("Testo mancante")).unwrap(),
            json!({"error": "Testo mancante"})
        );
    }
}
