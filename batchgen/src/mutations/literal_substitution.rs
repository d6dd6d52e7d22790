use super::PayloadMutation;

/// Replaces every occurrence of `text`, wherever it appears.
#[derive(Debug)]
pub struct LiteralSubstitution {
    text: String,
    substitution: String,
}

impl LiteralSubstitution {
    pub fn new<S1: Into<String>, S2: Into<String>>(text: S1, substitution: S2) -> Self {
        LiteralSubstitution {
            text: text.into(),
            substitution: substitution.into(),
        }
    }
}

impl PayloadMutation for LiteralSubstitution {
    fn mutate(&self, payload: &mut String) {
        *payload = payload.replace(&self.text, &self.substitution);
    }
}
