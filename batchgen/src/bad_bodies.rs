use crate::{
    combinations::generate_bad_data,
    data::JsonMap,
    error::Error,
    tokens::{self, Substitution},
};
use log::debug;

/// Generates the deduplicated mutations of a body's field keys and values.
///
/// Fields whose key contains `file`, or whose value is `null` or an array, are never
/// mutated and are re-attached to every result. With `original_keys` only results that
/// kept the body's key names are returned.
pub fn generate_bad_bodies(
    body: &JsonMap,
    substitution: Substitution,
    full: bool,
    original_keys: bool,
) -> Result<Vec<JsonMap>, Error> {
    if substitution.is_empty() {
        return Ok(Vec::new());
    }

    let extracted = tokens::body_tokens(body)?;
    let pairs = tokens::candidate_pairs(&extracted.tokens.params, substitution, full);
    let variants = generate_bad_data(
        &extracted.tokens.payload,
        &pairs,
        substitution.is_sub_value(),
    )?;

    let mut bad_bodies: Vec<JsonMap> = Vec::with_capacity(variants.len());
    for variant in variants {
        let mut bad_body: JsonMap = match serde_json::from_str(&variant.payload) {
            Ok(parsed) => parsed,
            Err(e) => {
                debug!("Skipping unparsable body {}: {}", variant.payload, e);
                continue;
            }
        };

        if original_keys && !bad_body.keys().all(|key| body.contains_key(key)) {
            continue;
        }

        for (key, value) in &extracted.incorruptible {
            bad_body.insert(key.clone(), value.clone());
        }

        if !bad_bodies.contains(&bad_body) {
            bad_bodies.push(bad_body);
        }
    }

    debug!(
        "Generated {} bad bodies from {} candidate tokens",
        bad_bodies.len(),
        pairs.len()
    );

    Ok(bad_bodies)
}
