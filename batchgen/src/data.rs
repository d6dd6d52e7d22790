use crate::error::Error;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::{fmt, str::FromStr};

/// Request headers, kept in insertion order.
pub type Headers = IndexMap<String, String>;

/// A JSON-compatible body mapping, kept in insertion order.
pub type JsonMap = serde_json::Map<String, Value>;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum HttpMethod {
    Get,
    Patch,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    /// The status code a well-formed request with this method is expected to return.
    pub fn good_code(self) -> &'static str {
        match self {
            HttpMethod::Get | HttpMethod::Patch => "200",
            HttpMethod::Post => "201",
            HttpMethod::Put | HttpMethod::Delete => "204",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "get",
            HttpMethod::Patch => "patch",
            HttpMethod::Post => "post",
            HttpMethod::Put => "put",
            HttpMethod::Delete => "delete",
        }
    }
}

impl FromStr for HttpMethod {
    type Err = Error;

    fn from_str(method: &str) -> Result<Self, Self::Err> {
        match method.to_lowercase().as_str() {
            "get" => Ok(HttpMethod::Get),
            "patch" => Ok(HttpMethod::Patch),
            "post" => Ok(HttpMethod::Post),
            "put" => Ok(HttpMethod::Put),
            "delete" => Ok(HttpMethod::Delete),
            _ => Err(Error::UnsupportedMethod(method.into())),
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The body of a request, sent either as a JSON document or as form fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestBody {
    Json(JsonMap),
    Form(JsonMap),
}

impl RequestBody {
    pub fn fields(&self) -> &JsonMap {
        match self {
            RequestBody::Json(fields) | RequestBody::Form(fields) => fields,
        }
    }

    /// A body of the same kind carrying other fields.
    pub fn with_fields(&self, fields: JsonMap) -> Self {
        match self {
            RequestBody::Json(_) => RequestBody::Json(fields),
            RequestBody::Form(_) => RequestBody::Form(fields),
        }
    }

    pub fn content_type(&self) -> &'static str {
        match self {
            RequestBody::Json(_) => "application/json",
            RequestBody::Form(_) => "application/x-www-form-urlencoded",
        }
    }
}

/// A known-good request that batches are generated from.
///
/// The url may contain a `;` marking where the path parameters begin, e.g.
/// `https://host/api/houses;/houseId/1b`. At most one of `json` and `data` may be set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RequestTemplate {
    pub method: String,
    #[serde(default)]
    pub headers: Headers,
    pub url: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub json: Option<JsonMap>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<JsonMap>,
}

impl RequestTemplate {
    pub fn new<S1: Into<String>, S2: Into<String>>(method: S1, url: S2) -> Self {
        Self {
            method: method.into(),
            url: url.into(),
            ..Default::default()
        }
    }

    pub fn with_header<S1: Into<String>, S2: Into<String>>(mut self, name: S1, value: S2) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    pub fn with_description<S: Into<String>>(mut self, description: S) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_json(mut self, body: JsonMap) -> Self {
        self.json = Some(body);
        self
    }

    pub fn with_data(mut self, body: JsonMap) -> Self {
        self.data = Some(body);
        self
    }

    pub fn http_method(&self) -> Result<HttpMethod, Error> {
        self.method.parse()
    }

    pub fn body(&self) -> Result<Option<RequestBody>, Error> {
        match (&self.json, &self.data) {
            (Some(_), Some(_)) => Err(Error::ConflictingBodies),
            (Some(json), None) => Ok(Some(RequestBody::Json(json.clone()))),
            (None, Some(data)) => Ok(Some(RequestBody::Form(data.clone()))),
            (None, None) => Ok(None),
        }
    }
}

/// A candidate substitution of `original` by `replacement`.
///
/// `status` overrides the expected status code of requests built from this pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    pub original: String,
    pub replacement: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl TokenPair {
    pub fn new<S1: Into<String>, S2: Into<String>>(original: S1, replacement: S2) -> Self {
        Self {
            original: original.into(),
            replacement: replacement.into(),
            status: None,
        }
    }

    pub fn with_status<S: Into<String>>(mut self, status: S) -> Self {
        self.status = Some(status.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeneratedRequest {
    pub code: String,
    pub description: String,
    pub method: String,
    pub headers: Headers,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<RequestBody>,
}

impl GeneratedRequest {
    /// The status expected from the server, i.e. the part of the code before any `|`.
    pub fn expected_status(&self) -> &str {
        status_prefix(&self.code)
    }
}

pub(crate) fn status_prefix(code: &str) -> &str {
    code.split('|').next().unwrap_or(code)
}

/// The text a field value contributes to token extraction and injected payloads.
pub(crate) fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
