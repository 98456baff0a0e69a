use std::{fmt, str::FromStr};

use crate::Category;

pub const CARDIO_TAG: &str = "Cardio";

const SEPARATOR: &str = " - ";

/// Structured view of the `notes` field of an exercise.
///
/// Records keep the classification embedded as a text prefix in front of the user's notes, e.g.
/// `"Cardio - gambe - riscaldamento"` or `"petto - presa larga"`. This type parses and re-encodes
/// that convention.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ExerciseNotes {
    pub cardio: bool,
    pub category: Option<Category>,
    pub text: String,
}

impl ExerciseNotes {
    #[must_use]
    pub fn new(cardio: bool, category: Option<Category>, text: &str) -> Self {
        Self {
            cardio,
            category,
            text: text.trim().to_string(),
        }
    }

    #[must_use]
    pub fn parse(notes: &str) -> Self {
        let notes = notes.trim();

        let (cardio, rest) = match notes.strip_prefix(CARDIO_TAG) {
            Some("") => (true, ""),
            Some(rest) if rest.starts_with(SEPARATOR.trim_end()) => (
                true,
                rest.strip_prefix(SEPARATOR)
                    .unwrap_or_else(|| rest.trim_start_matches([' ', '-'])),
            ),
            _ => (false, notes),
        };

        let (category, text) = split_category(rest);

        Self {
            cardio,
            category,
            text: text.trim().to_string(),
        }
    }
}

fn split_category(notes: &str) -> (Option<Category>, &str) {
    let (head, tail) = match notes.split_once(SEPARATOR) {
        Some((head, tail)) => (head, tail),
        None => match notes.strip_suffix(" -") {
            Some(head) => (head, ""),
            None => (notes, ""),
        },
    };

    match Category::from_str(head.trim()) {
        Ok(category) => (Some(category), tail),
        Err(_) => (None, notes),
    }
}

impl fmt::Display for ExerciseNotes {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut parts: Vec<&str> = Vec::with_capacity(3);
        if self.cardio {
            parts.push(CARDIO_TAG);
        }
        if let Some(category) = &self.category {
            parts.push(category.as_ref());
            parts.push(self.text.as_str());
        } else if !self.text.is_empty() {
            parts.push(self.text.as_str());
        }
        write!(f, "{}", parts.join(SEPARATOR).trim_end())
    }
}

/// Whether the notes carry the cardio tag.
#[must_use]
pub fn is_cardio_notes(notes: &str) -> bool {
    ExerciseNotes::parse(notes).cardio
}
