//! Joint substitution of token pairs into a serialized payload.
//!
//! Given `N` distinct slots (the distinct `original` texts of the pairs), every
//! combination of `N` pairs that touches at least `N - 1` slots is applied to the
//! payload. In sub value mode each pair of a combination is also applied on its own,
//! as a whole word, which yields the one-token-at-a-time variants.

use crate::{
    data::TokenPair,
    error::Error,
    mutations::{LiteralSubstitution, PayloadMutation, WholeWordSubstitution},
};
use itertools::Itertools;
use std::collections::HashSet;

/// One mutated payload, with the status override of the pair that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variant {
    pub payload: String,
    pub status: Option<String>,
}

/// Number of distinct slot identities among `slots`.
pub fn distinct_slots<'a, I: IntoIterator<Item = &'a str>>(slots: I) -> usize {
    slots.into_iter().collect::<HashSet<_>>().len()
}

/// Index combinations of `k` out of `identities`, in lexicographic order, covering all
/// or all but one of `k` slots.
pub fn near_full_coverage<'a>(
    identities: &'a [&'a str],
    k: usize,
) -> impl Iterator<Item = Vec<usize>> + 'a {
    (0..identities.len())
        .combinations(k)
        .filter(move |combination| {
            distinct_slots(combination.iter().map(|&i| identities[i])) >= k.saturating_sub(1)
        })
}

/// Applies combinations of `pairs` to `payload` and returns the distinct results in
/// generation order.
///
/// `single_pass` enables the whole-word single-pair variants; it is set in sub value
/// mode and unset for caller-supplied replacements.
pub fn generate_bad_data(
    payload: &str,
    pairs: &[TokenPair],
    single_pass: bool,
) -> Result<Vec<Variant>, Error> {
    let slots: Vec<&str> = pairs.iter().map(|pair| pair.original.as_str()).collect();
    let num_combinations = distinct_slots(slots.iter().copied());
    if num_combinations == 0 {
        return Ok(Vec::new());
    }

    let base = payload.strip_suffix('/').unwrap_or(payload);
    let mut variants = Variants::default();

    for combination in near_full_coverage(&slots, num_combinations) {
        let mut bad_data = String::from(base);

        for &index in &combination {
            let pair = &pairs[index];
            LiteralSubstitution::new(pair.original.as_str(), pair.replacement.as_str())
                .mutate(&mut bad_data);

            if single_pass {
                let mut single = String::from(base);
                WholeWordSubstitution::new(&pair.original, pair.replacement.as_str())?
                    .mutate(&mut single);
                variants.push(single, pair.status.clone());
            }
        }

        let status = combination
            .iter()
            .find_map(|&index| pairs[index].status.clone());
        variants.push(bad_data, status);
    }

    Ok(variants.into_inner())
}

/// Insertion-ordered variants, first occurrence of a payload wins.
#[derive(Debug, Default)]
struct Variants {
    seen: HashSet<String>,
    variants: Vec<Variant>,
}

impl Variants {
    fn push(&mut self, payload: String, status: Option<String>) {
        if self.seen.insert(payload.clone()) {
            self.variants.push(Variant { payload, status });
        }
    }

    fn into_inner(self) -> Vec<Variant> {
        self.variants
    }
}
