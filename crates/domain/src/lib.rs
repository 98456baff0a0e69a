#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod cardio;
pub mod category;
pub mod draft;
pub mod exercise;
pub mod extraction;
pub mod machine;
pub mod name;
pub mod notes;
pub mod review;
pub mod weight;

pub use category::{Category, categorize};
pub use draft::{
    DEFAULT_DAY, DraftError, DraftMode, DraftSet, ExerciseDraft, REST_TIME_PRESETS,
    is_preset_rest_time,
};
pub use exercise::{
    DEFAULT_CARDIO_REST_TIME, DEFAULT_REPS, DEFAULT_REST_TIME, ExerciseRecord, ExerciseSet,
    MINUTES_MARKER, exercise_exists,
};
pub use extraction::{ExtractionPattern, MAX_SETS, PATTERNS, extract_exercises, extract_line};
pub use name::{DEFAULT_EXERCISE_NAME, ExerciseName, NameError, sanitize_name};
pub use notes::{ExerciseNotes, is_cardio_notes};
pub use review::ReviewCandidate;
pub use weight::{WeightExpressionError, evaluate_weight_expression};
