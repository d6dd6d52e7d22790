use crate::{
    combinations::near_full_coverage,
    data::{value_text, JsonMap},
};
use serde_json::Value;

/// Injection fragments appended to body values: boolean bypass conditions first,
/// then information disclosure queries.
pub const UNSAFE_FRAGMENTS: [&str; 6] = [
    " '--",
    "'+OR+1=1--",
    "' and substr(version(),1,10) = 'PostgreSQL' and '1  -> OK",
    "SELECT version() --",
    "select database_to_xml(true,true,'');",
    "UNION SELECT * FROM information_schema.tables --",
];

/// Generates bodies whose non-file values are suffixed with an injection fragment.
///
/// Combinations of as many fragments as the body has fields are drawn from
/// [`UNSAFE_FRAGMENTS`]; each fragment of a kept combination yields one body with that
/// fragment appended, space separated, to every value. File fields are left out.
pub fn generate_unsafe_bodies(body: &JsonMap) -> Vec<JsonMap> {
    // A fragment's slot is its leading character.
    let identities: Vec<&str> = UNSAFE_FRAGMENTS
        .iter()
        .map(|&fragment| fragment.get(..1).unwrap_or(fragment))
        .collect();

    near_full_coverage(&identities, body.len())
        .flat_map(|combination| combination.into_iter())
        .map(|index| inject(body, UNSAFE_FRAGMENTS[index]))
        .collect()
}

fn inject(body: &JsonMap, fragment: &str) -> JsonMap {
    body.iter()
        .filter(|(key, _)| !key.contains("file"))
        .map(|(key, value)| {
            (
                key.clone(),
                Value::String(format!("{} {}", value_text(value), fragment)),
            )
        })
        .collect()
}
