use super::PayloadMutation;
use crate::error::Error;
use regex::{NoExpand, Regex};

/// Replaces `text` only where it stands as a whole word, so `1` leaves `field1` alone.
#[derive(Debug)]
pub struct WholeWordSubstitution {
    pattern: Regex,
    substitution: String,
}

impl WholeWordSubstitution {
    pub fn new<S: Into<String>>(text: &str, substitution: S) -> Result<Self, Error> {
        let pattern = Regex::new(&format!(r"\b{}\b", regex::escape(text)))?;

        Ok(WholeWordSubstitution {
            pattern,
            substitution: substitution.into(),
        })
    }
}

impl PayloadMutation for WholeWordSubstitution {
    fn mutate(&self, payload: &mut String) {
        *payload = self
            .pattern
            .replace_all(payload, NoExpand(self.substitution.as_str()))
            .into();
    }
}
