use derive_more::Display;

/// Accented letters accepted in exercise names besides ASCII letters.
pub const ACCENTED_LETTERS: &str = "àáâäèéêëìíîïòóôöùúûüñçÀÁÂÄÈÉÊËÌÍÎÏÒÓÔÖÙÚÛÜÑÇ";

/// Name given to exercises whose name was left empty.
pub const DEFAULT_EXERCISE_NAME: &str = "Esercizio";

#[must_use]
pub fn is_name_letter(c: char) -> bool {
    c.is_ascii_alphabetic() || ACCENTED_LETTERS.contains(c)
}

/// Removes every character that may not appear in an exercise name.
///
/// Letters (including accented vowels), digits, whitespace, commas, apostrophes, hyphens and
/// parentheses are kept. Casing and internal spacing are preserved, so the function is safe to
/// apply on every keystroke.
#[must_use]
pub fn sanitize_name(raw: &str) -> String {
    raw.chars()
        .filter(|&c| {
            is_name_letter(c)
                || c.is_ascii_digit()
                || c.is_whitespace()
                || matches!(c, ',' | '\'' | '’' | '-' | '(' | ')')
        })
        .collect()
}

#[derive(Debug, Display, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct ExerciseName(String);

impl ExerciseName {
    pub fn new(raw: &str) -> Result<Self, NameError> {
        let sanitized = sanitize_name(raw);
        let trimmed_name = sanitized.trim();

        if trimmed_name.is_empty() {
            return Err(NameError::Empty);
        }

        Ok(ExerciseName(trimmed_name.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl Default for ExerciseName {
    fn default() -> Self {
        ExerciseName(DEFAULT_EXERCISE_NAME.to_string())
    }
}

impl AsRef<str> for ExerciseName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum NameError {
    #[error("Name must contain at least one letter, digit or allowed symbol")]
    Empty,
}
