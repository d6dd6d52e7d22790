use crate::{
    combinations::{generate_bad_data, Variant},
    error::Error,
    tokens::{self, Substitution},
};
use log::debug;

/// Generates mutated urls, each keeping the status override of the pair behind it.
pub fn generate_bad_url_variants(
    url: &str,
    substitution: Substitution,
    include_query_params: bool,
    full: bool,
) -> Result<Vec<Variant>, Error> {
    if substitution.is_empty() {
        return Ok(Vec::new());
    }

    let extracted = tokens::url_tokens(url, include_query_params)?;
    let pairs = tokens::candidate_pairs(&extracted.params, substitution, full);
    let variants = generate_bad_data(&extracted.payload, &pairs, substitution.is_sub_value())?;

    debug!(
        "Generated {} bad urls from {} candidate tokens of {}",
        variants.len(),
        pairs.len(),
        url
    );

    Ok(variants)
}

/// Generates the deduplicated mutations of the path and query parameters of `url`.
///
/// A `;` in the path marks where the parameters begin; without one the whole path
/// is mutable. Returns an empty list when nothing qualifies.
pub fn generate_bad_urls(
    url: &str,
    substitution: Substitution,
    include_query_params: bool,
    full: bool,
) -> Result<Vec<String>, Error> {
    Ok(
        generate_bad_url_variants(url, substitution, include_query_params, full)?
            .into_iter()
            .map(|variant| variant.payload)
            .collect(),
    )
}
