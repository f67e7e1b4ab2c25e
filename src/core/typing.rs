//! Typewriter effect that types a phrase, holds it, deletes it and moves on.

use crate::constants::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeStep {
    /// Text to display after this step.
    pub text: String,
    /// Delay before the next step.
    pub delay_ms: u32,
}

#[derive(Clone, Debug)]
pub struct Typewriter {
    phrases: Vec<String>,
    phrase: usize,
    chars: usize,
    deleting: bool,
}

impl Default for Typewriter {
    fn default() -> Self {
        Self::new(TYPING_PHRASES.iter().map(|s| s.to_string()))
    }
}

impl Typewriter {
    pub fn new<I>(phrases: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self {
            phrases: phrases.into_iter().map(Into::into).collect(),
            phrase: 0,
            chars: 0,
            deleting: false,
        }
    }

    pub fn phrase_index(&self) -> usize {
        self.phrase
    }

    pub fn is_deleting(&self) -> bool {
        self.deleting
    }

    pub fn step(&mut self) -> TypeStep {
        let Some(current) = self.phrases.get(self.phrase) else {
            return TypeStep {
                text: String::new(),
                delay_ms: TYPING_STEP_MS,
            };
        };
        let len = current.chars().count();

        let mut delay_ms = if self.deleting {
            self.chars = self.chars.saturating_sub(1);
            DELETING_STEP_MS
        } else {
            self.chars = (self.chars + 1).min(len);
            TYPING_STEP_MS
        };
        let text: String = current.chars().take(self.chars).collect();

        if !self.deleting && self.chars >= len {
            self.deleting = true;
            delay_ms = TYPING_HOLD_MS;
        } else if self.deleting && self.chars == 0 {
            self.deleting = false;
            self.phrase = (self.phrase + 1) % self.phrases.len();
            delay_ms = TYPING_NEXT_MS;
        }

        TypeStep { text, delay_ms }
    }
}
