mod bad_bodies;
mod bad_urls;
mod batch;
mod batch_configuration;
pub mod combinations;
mod data;
mod error;
mod executor;
pub mod mutations;
pub mod tokens;
mod unsafe_bodies;
pub mod util;

pub use bad_bodies::generate_bad_bodies;
pub use bad_urls::{generate_bad_url_variants, generate_bad_urls};
pub use batch::{
    generate_batch, FORBIDDEN_CODE, INVALID_CODE, INVALID_SUB_VALUE, NOT_AUTHENTICATED_CODE,
    NOT_FOUND_CODE, NOT_FOUND_SUB_VALUE, UNKNOWN_CODE,
};
pub use batch_configuration::BatchConfiguration;
pub use combinations::Variant;
pub use data::{
    GeneratedRequest, Headers, HttpMethod, JsonMap, RequestBody, RequestTemplate, TokenPair,
};
pub use error::Error;
pub use executor::{
    is_code_mismatch, run_batch, BatchReport, BatchResult, RequestExecutor, ResponseRecord,
};
pub use tokens::Substitution;
pub use unsafe_bodies::{generate_unsafe_bodies, UNSAFE_FRAGMENTS};
pub use util::build_http_request;
