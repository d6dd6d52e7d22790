use async_trait::async_trait;
use batchgen::{util, Error, GeneratedRequest, RequestExecutor, ResponseRecord};
use hyper::{body, client::HttpConnector, Client};
use hyper_tls::HttpsConnector;

/// Sends generated requests over http or https with a shared hyper client.
#[derive(Debug)]
pub struct HyperExecutor {
    client: Client<HttpsConnector<HttpConnector>>,
}

impl HyperExecutor {
    pub fn new() -> Self {
        Self {
            client: Client::builder().build(HttpsConnector::new()),
        }
    }
}

#[async_trait]
impl RequestExecutor for HyperExecutor {
    async fn execute(&self, request: &GeneratedRequest) -> Result<ResponseRecord, Error> {
        let http_request = util::build_http_request(request)?;

        let response = self
            .client
            .request(http_request)
            .await
            .map_err(|e| Error::Executor(e.to_string()))?;

        let status_code = response.status().as_u16();
        let headers = util::extract_headers(response.headers());
        let body = body::to_bytes(response.into_body())
            .await
            .map_err(|e| Error::Executor(e.to_string()))?;
        let body: String = String::from_utf8_lossy(&body).into();

        Ok(ResponseRecord {
            status_code,
            headers,
            body,
        })
    }
}

impl Default for HyperExecutor {
    fn default() -> Self {
        Self::new()
    }
}
