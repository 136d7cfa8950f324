//! Blocking HTTP implementation of [`SdkClient`].

use fga_format::{
    CreateStoreRequest, CreateStoreResponse, ListStoresOptions, ListStoresResponse, STORES_PATH,
};
use reqwest::blocking::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::{ClientConfig, ClientError, ClientResult, SdkClient};

const USER_AGENT: &str = concat!("fga-cli/", env!("CARGO_PKG_VERSION"));

/// Talks to a server's HTTP API.
#[derive(Debug, Clone)]
pub struct HttpClient {
    config: ClientConfig,
    http: Client,
}

impl HttpClient {
    pub fn new(config: ClientConfig) -> ClientResult<Self> {
        let http = Client::builder()
            .timeout(config.timeout)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self { config, http })
    }

    fn list_request(&self, options: &ListStoresOptions) -> ClientResult<RequestBuilder> {
        let url = self.config.endpoint(STORES_PATH)?;
        Ok(self.http.get(url).query(options))
    }

    fn execute<T: DeserializeOwned>(&self, request: RequestBuilder) -> ClientResult<T> {
        let request = request.build()?;
        debug!(method = %request.method(), url = %request.url(), "sending request");

        let response = self.http.execute(request)?;
        let status = response.status();
        let body = response.text()?;
        debug!(status = status.as_u16(), bytes = body.len(), "received response");

        if !status.is_success() {
            return Err(ClientError::from_response_body(status.as_u16(), &body));
        }

        Ok(serde_json::from_str(&body)?)
    }
}

impl SdkClient for HttpClient {
    fn create_store(&self, body: &CreateStoreRequest) -> ClientResult<CreateStoreResponse> {
        let url = self.config.endpoint(STORES_PATH)?;
        self.execute(self.http.post(url).json(body))
    }

    fn list_stores(&self, options: &ListStoresOptions) -> ClientResult<ListStoresResponse> {
        self.execute(self.list_request(options)?)
    }
}
