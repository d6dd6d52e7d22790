use crate::{
    bad_bodies::generate_bad_bodies,
    bad_urls::{generate_bad_url_variants, generate_bad_urls},
    batch_configuration::BatchConfiguration,
    data::{
        status_prefix, value_text, GeneratedRequest, Headers, JsonMap, RequestBody,
        RequestTemplate,
    },
    error::Error,
    tokens::{Substitution, PATH_PARAMETER_DELIMITER},
    unsafe_bodies::generate_unsafe_bodies,
};
use log::debug;
use serde_json::Value;

pub const INVALID_SUB_VALUE: &str = "999";
pub const NOT_FOUND_SUB_VALUE: &str = "0";

pub const INVALID_CODE: &str = "400";
pub const NOT_AUTHENTICATED_CODE: &str = "401";
pub const FORBIDDEN_CODE: &str = "403";
pub const NOT_FOUND_CODE: &str = "404";
/// Injection responses are not predictable.
pub const UNKNOWN_CODE: &str = "???";

/// Builds the labelled batch for one known-good request.
///
/// The first request is always the unmodified one, tagged with the method's good
/// code. The rest are invalid (400), not authenticated (401), forbidden (403), not
/// found (404) and, on request, unsafe (`???`) variants, stably sorted by the status
/// before any `|` in their code.
pub fn generate_batch(
    template: &RequestTemplate,
    configuration: &BatchConfiguration,
) -> Result<Vec<GeneratedRequest>, Error> {
    let method = template.http_method()?;
    let body = template.body()?;

    let labels = Labels::new(&template.description);
    let clean_url = template.url.replace(PATH_PARAMETER_DELIMITER, "");
    let include_query_params = configuration.include_query_params();
    let full = configuration.full();

    let request = |code: String,
                   description: &str,
                   headers: Headers,
                   url: String,
                   body: Option<RequestBody>| GeneratedRequest {
        code,
        description: description.into(),
        method: method.as_str().into(),
        headers,
        url,
        body,
    };
    let url_request = |code: &str, description: &str, url: String| {
        request(
            code.into(),
            description,
            template.headers.clone(),
            url,
            body.clone(),
        )
    };

    let good = url_request(method.good_code(), &labels.good, clean_url.clone());
    let mut batch = Vec::new();

    let invalid_urls = generate_bad_urls(
        &template.url,
        Substitution::Value(INVALID_SUB_VALUE),
        include_query_params,
        full,
    )?;
    debug!("{} invalid urls", invalid_urls.len());
    batch.extend(
        invalid_urls
            .into_iter()
            .map(|url| url_request(INVALID_CODE, &labels.invalid, url)),
    );

    let bad_headers = generate_bad_headers(&template.headers, configuration.bad_header_count())?;
    debug!("{} bad headers", bad_headers.len());
    batch.extend(bad_headers.into_iter().map(|headers| {
        request(
            NOT_AUTHENTICATED_CODE.into(),
            &labels.not_authenticated,
            headers,
            clean_url.clone(),
            body.clone(),
        )
    }));

    let forbidden_urls = generate_bad_url_variants(
        &template.url,
        Substitution::Pairs(configuration.forbidden_pairs()),
        include_query_params,
        full,
    )?;
    debug!("{} forbidden urls", forbidden_urls.len());
    batch.extend(forbidden_urls.into_iter().map(|variant| {
        let code = match variant.status {
            Some(status) => format!("{}|{}", status, FORBIDDEN_CODE),
            None => FORBIDDEN_CODE.into(),
        };
        request(
            code,
            &labels.forbidden,
            template.headers.clone(),
            variant.payload,
            body.clone(),
        )
    }));

    let not_found_urls = generate_bad_urls(
        &template.url,
        Substitution::Value(NOT_FOUND_SUB_VALUE),
        include_query_params,
        full,
    )?;
    debug!("{} not found urls", not_found_urls.len());
    batch.extend(
        not_found_urls
            .into_iter()
            .map(|url| url_request(NOT_FOUND_CODE, &labels.not_found, url)),
    );

    if let Some(body) = &body {
        let body_request = |code: &str, description: &str, fields: JsonMap| {
            request(
                code.into(),
                description,
                template.headers.clone(),
                clean_url.clone(),
                Some(body.with_fields(fields)),
            )
        };

        let invalid_bodies = generate_bad_bodies(
            body.fields(),
            Substitution::Value(INVALID_SUB_VALUE),
            false,
            false,
        )?;
        debug!("{} invalid bodies", invalid_bodies.len());
        batch.extend(
            invalid_bodies
                .into_iter()
                .map(|fields| body_request(INVALID_CODE, &labels.invalid, fields)),
        );

        let not_found_bodies = generate_bad_bodies(
            body.fields(),
            Substitution::Value(NOT_FOUND_SUB_VALUE),
            false,
            false,
        )?;
        debug!("{} not found bodies", not_found_bodies.len());
        batch.extend(
            not_found_bodies
                .into_iter()
                .map(|fields| body_request(NOT_FOUND_CODE, &labels.not_found, fields)),
        );

        if configuration.unsafe_bodies() {
            let unsafe_bodies = generate_unsafe_bodies(body.fields());
            debug!("{} unsafe bodies", unsafe_bodies.len());
            batch.extend(
                unsafe_bodies
                    .into_iter()
                    .map(|fields| body_request(UNKNOWN_CODE, &labels.unsafe_bodies, fields)),
            );
        }
    }

    batch.sort_by(|a, b| status_prefix(&a.code).cmp(status_prefix(&b.code)));
    batch.insert(0, good);

    debug!("Generated a batch of {} requests for {}", batch.len(), template.url);

    Ok(batch)
}

/// Header sets with one or more values corrupted; header names are never changed.
fn generate_bad_headers(headers: &Headers, count: usize) -> Result<Vec<Headers>, Error> {
    let fields: JsonMap = headers
        .iter()
        .map(|(name, value)| (name.clone(), Value::String(value.clone())))
        .collect();

    Ok(
        generate_bad_bodies(&fields, Substitution::Value(NOT_FOUND_SUB_VALUE), false, true)?
            .into_iter()
            .take(count)
            .map(|bad_fields| {
                bad_fields
                    .iter()
                    .map(|(name, value)| (name.clone(), value_text(value)))
                    .collect()
            })
            .collect(),
    )
}

struct Labels {
    good: String,
    invalid: String,
    not_authenticated: String,
    forbidden: String,
    not_found: String,
    unsafe_bodies: String,
}

impl Labels {
    fn new(description: &str) -> Self {
        let label = |suffix: &str| {
            if description.is_empty() {
                String::from(suffix)
            } else {
                format!("{} {}", description, suffix)
            }
        };

        Self {
            good: label("good"),
            invalid: label("invalid"),
            not_authenticated: label("not auth"),
            forbidden: label("forbidden"),
            not_found: label("not found"),
            unsafe_bodies: label("unsafe bodies"),
        }
    }
}
