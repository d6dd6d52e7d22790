use crate::{
    data::{value_text, GeneratedRequest, RequestBody},
    error::Error,
};
use hyper::{
    header::{HeaderName, HeaderValue, CONTENT_TYPE},
    Body, HeaderMap, Request,
};
use std::collections::HashMap;

pub fn extract_headers(header_map: &HeaderMap) -> HashMap<String, String> {
    // it currently ignores header values with opaque characters
    header_map
        .iter()
        .map(|(k, v)| (String::from(k.as_str()), v.to_str()))
        .filter_map(|(key, value)| value.ok().map(|v| (key, String::from(v))))
        .collect::<HashMap<_, _>>()
}

pub fn put_headers<'a, I: IntoIterator<Item = (&'a String, &'a String)>>(
    header_map: &mut HeaderMap<HeaderValue>,
    headers: I,
) -> Result<(), Error> {
    for (key, value) in headers {
        let header_name = HeaderName::from_lowercase(key.to_lowercase().as_bytes())?;
        let header_value = HeaderValue::from_str(value)?;
        header_map.append(header_name, header_value);
    }

    Ok(())
}

/// Serializes a body the way its kind is sent on the wire.
pub fn encode_body(body: &RequestBody) -> Result<String, Error> {
    match body {
        RequestBody::Json(fields) => Ok(serde_json::to_string(fields)?),
        RequestBody::Form(fields) => Ok(url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(fields.iter().map(|(key, value)| (key, value_text(value))))
            .finish()),
    }
}

/// Converts a generated request into a hyper request ready to be sent.
///
/// The body's content type is only set when the request headers don't carry one.
pub fn build_http_request(request: &GeneratedRequest) -> Result<Request<Body>, Error> {
    let mut request_builder = Request::builder()
        .uri(request.url.as_str())
        .method(request.method.to_uppercase().as_str());

    if let Some(headers_mut) = request_builder.headers_mut() {
        put_headers(headers_mut, &request.headers)?;

        if let Some(body) = &request.body {
            if !headers_mut.contains_key(CONTENT_TYPE) {
                headers_mut.insert(CONTENT_TYPE, HeaderValue::from_static(body.content_type()));
            }
        }
    }

    let body = match &request.body {
        Some(body) => Body::from(encode_body(body)?),
        None => Body::empty(),
    };

    Ok(request_builder.body(body)?)
}
