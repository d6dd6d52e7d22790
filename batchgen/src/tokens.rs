use crate::{
    data::{value_text, JsonMap, TokenPair},
    error::Error,
};
use lazy_static::lazy_static;
use regex::{NoExpand, Regex};
use serde_json::Value;
use url::Url;

/// Marks where the path parameters begin in a template url.
pub const PATH_PARAMETER_DELIMITER: char = ';';

const TOKEN_SEPARATOR: char = '/';

lazy_static! {
    static ref DIGIT_REGEX: Regex = Regex::new(r"\d").unwrap();
    static ref ALPHA_REGEX: Regex = Regex::new(r"[a-zA-Z]").unwrap();
    static ref QUERY_SEPARATOR_REGEX: Regex = Regex::new(r"[?=&]").unwrap();
}

/// Where substitutions come from.
#[derive(Debug, Clone, Copy)]
pub enum Substitution<'a> {
    /// Corrupt tokens with a numeric code, e.g. `"999"` for invalid or `"0"` for not found.
    Value(&'a str),
    /// Swap tokens with caller-supplied pairs.
    Pairs(&'a [TokenPair]),
}

impl Substitution<'_> {
    pub fn is_sub_value(&self) -> bool {
        matches!(self, Substitution::Value(_))
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Substitution::Value(value) => value.is_empty(),
            Substitution::Pairs(pairs) => pairs.is_empty(),
        }
    }
}

/// A serialized payload and the `/`-joined parameter space its tokens come from.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractedTokens {
    pub payload: String,
    pub params: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExtractedBodyTokens {
    pub tokens: ExtractedTokens,
    /// Fields carried unchanged into every variant.
    pub incorruptible: JsonMap,
}

/// Digits become `sub_value`, ASCII letters become `a`: `"1b"` with `"0"` gives `"0a"`.
pub fn corrupt_token(token: &str, sub_value: &str) -> String {
    let digits_replaced = DIGIT_REGEX.replace_all(token, NoExpand(sub_value));
    ALPHA_REGEX.replace_all(&digits_replaced, "a").into_owned()
}

/// Splits a template url into its payload and parameter space.
///
/// Tokens are read from the url text as written, so they always match the payload.
/// The url only has to parse as an absolute url.
pub fn url_tokens(url: &str, include_query_params: bool) -> Result<ExtractedTokens, Error> {
    Url::parse(url)?;
    let payload = url.replace(PATH_PARAMETER_DELIMITER, "");

    let (path, query) = split_path_and_query(url);
    let query = if include_query_params { query } else { "" };

    let path_params = match path.split_once(PATH_PARAMETER_DELIMITER) {
        Some((_, params)) => params,
        None => path,
    };

    let params = format!(
        "{}{}{}",
        path_params,
        TOKEN_SEPARATOR,
        QUERY_SEPARATOR_REGEX.replace_all(query, "/")
    );

    Ok(ExtractedTokens { payload, params })
}

/// The raw path and query of `url`, without the scheme, authority or fragment.
fn split_path_and_query(url: &str) -> (&str, &str) {
    let rest = match url.split_once("://") {
        Some((_, rest)) => rest
            .find(|c| c == '/' || c == '?' || c == '#')
            .map_or("", |authority_end| &rest[authority_end..]),
        None => url.split_once(':').map_or(url, |(_, rest)| rest),
    };
    let rest = rest.split('#').next().unwrap_or(rest);

    match rest.split_once('?') {
        Some((path, query)) => (path, query),
        None => (rest, ""),
    }
}

pub fn is_incorruptible(key: &str, value: &Value) -> bool {
    key.contains("file") || matches!(value, Value::Null | Value::Array(_))
}

pub fn body_tokens(body: &JsonMap) -> Result<ExtractedBodyTokens, Error> {
    let (incorruptible, mutable): (JsonMap, JsonMap) = body
        .iter()
        .map(|(key, value)| (key.clone(), value.clone()))
        .partition(|(key, value)| is_incorruptible(key, value));

    let payload = serde_json::to_string(&mutable)?;
    let params = body
        .iter()
        .map(|(key, value)| -> Result<String, Error> {
            let value = match value {
                Value::String(text) => escaped_text(text)?,
                _ => value_text(value),
            };
            Ok(format!("{}{}{}", escaped_text(key)?, TOKEN_SEPARATOR, value))
        })
        .collect::<Result<Vec<_>, Error>>()?
        .join("/");

    Ok(ExtractedBodyTokens {
        tokens: ExtractedTokens { payload, params },
        incorruptible,
    })
}

/// `text` the way it appears inside a serialized JSON string.
fn escaped_text(text: &str) -> Result<String, Error> {
    let quoted = serde_json::to_string(text)?;
    Ok(quoted[1..quoted.len() - 1].to_string())
}

/// Turns a parameter space into substitution candidates.
///
/// With a sub value, every token holding a digit qualifies (every token at all when
/// `full` is set). Caller-supplied pairs are used as they are.
pub fn candidate_pairs(params: &str, substitution: Substitution, full: bool) -> Vec<TokenPair> {
    match substitution {
        Substitution::Value(sub_value) => params
            .split(TOKEN_SEPARATOR)
            .filter(|token| full || DIGIT_REGEX.is_match(token))
            .map(|token| TokenPair::new(token, corrupt_token(token, sub_value)))
            .collect(),
        Substitution::Pairs(pairs) => pairs.to_vec(),
    }
}
