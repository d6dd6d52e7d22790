use crate::data::TokenPair;
use std::time::Duration;

const DEFAULT_BAD_HEADER_COUNT: usize = 1;
const DEFAULT_MAX_IN_FLIGHT: usize = 16;

/// Options for generating a batch and for running it through an executor.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchConfiguration {
    forbidden_pairs: Vec<TokenPair>,
    bad_header_count: usize,
    include_query_params: bool,
    full: bool,
    unsafe_bodies: bool,
    request_delay: Duration,
    max_in_flight: usize,
}

impl BatchConfiguration {
    pub fn new() -> Self {
        Self {
            forbidden_pairs: Vec::new(),
            bad_header_count: DEFAULT_BAD_HEADER_COUNT,
            include_query_params: true,
            full: false,
            unsafe_bodies: false,
            request_delay: Duration::from_secs(0),
            max_in_flight: DEFAULT_MAX_IN_FLIGHT,
        }
    }

    /// Pairs whose replacement the server should reject with 403.
    pub fn add_forbidden_pair(&mut self, pair: TokenPair) {
        self.forbidden_pairs.push(pair);
    }

    pub fn set_forbidden_pairs<I: IntoIterator<Item = TokenPair>>(&mut self, pairs: I) {
        self.forbidden_pairs = pairs.into_iter().collect();
    }

    pub fn forbidden_pairs(&self) -> &[TokenPair] {
        &self.forbidden_pairs
    }

    /// How many corrupted-header requests end up in the batch.
    pub fn set_bad_header_count(&mut self, value: usize) {
        self.bad_header_count = value;
    }

    pub fn bad_header_count(&self) -> usize {
        self.bad_header_count
    }

    pub fn set_include_query_params(&mut self, value: bool) {
        self.include_query_params = value;
    }

    pub fn include_query_params(&self) -> bool {
        self.include_query_params
    }

    /// Corrupt every url token instead of only the ones holding digits.
    pub fn set_full(&mut self, value: bool) {
        self.full = value;
    }

    pub fn full(&self) -> bool {
        self.full
    }

    pub fn set_unsafe_bodies(&mut self, value: bool) {
        self.unsafe_bodies = value;
    }

    pub fn unsafe_bodies(&self) -> bool {
        self.unsafe_bodies
    }

    /// Added to the wait before each successive request of a run.
    pub fn set_request_delay(&mut self, value: Duration) {
        self.request_delay = value;
    }

    pub fn request_delay(&self) -> Duration {
        self.request_delay
    }

    pub fn set_max_in_flight(&mut self, value: usize) {
        self.max_in_flight = value;
    }

    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.max(1)
    }
}

impl Default for BatchConfiguration {
    fn default() -> Self {
        Self::new()
    }
}
