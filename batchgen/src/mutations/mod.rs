mod literal_substitution;
mod whole_word_substitution;

pub use literal_substitution::LiteralSubstitution;
pub use whole_word_substitution::WholeWordSubstitution;

use std::fmt::Debug;

/// A textual rewrite of a serialized payload (a url or a JSON document).
pub trait PayloadMutation: Debug {
    fn mutate(&self, payload: &mut String);
}
