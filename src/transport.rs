use crate::errors::{PayError, PayResult};
use crate::types::{PaymentResponse, TransactionReference};
use http::HeaderMap;
use reqwest::header::CONTENT_TYPE;

#[async_trait::async_trait]
pub trait TransactionTransport: Send + Sync {
    /// Submit the payment for the referenced transaction and return the
    /// gateway's response body.
    async fn submit(&self, reference: &TransactionReference) -> PayResult<PaymentResponse>;
}

pub struct HttpTransport {
    pub base_url: String,
    transaction_path: String,
    client: reqwest::Client,
    headers: HeaderMap,
}

/// Builder for HttpTransport
pub struct HttpTransportBuilder {
    base_url: String,
    transaction_path: Option<String>,
    headers: HeaderMap,
    client: Option<reqwest::Client>,
}

impl HttpTransportBuilder {
    /// Override the transaction endpoint path (e.g. "/transaction").
    pub fn with_transaction_path(mut self, path: impl Into<String>) -> Self {
        self.transaction_path = Some(path.into());
        self
    }

    /// Set headers used for all requests (e.g. auth).
    pub fn with_headers(mut self, headers: HeaderMap) -> Self {
        self.headers = headers;
        self
    }

    /// Override the underlying reqwest client (optional).
    pub fn with_client(mut self, client: reqwest::Client) -> Self {
        self.client = Some(client);
        self
    }

    pub fn build(self) -> HttpTransport {
        HttpTransport {
            base_url: self.base_url,
            transaction_path: self
                .transaction_path
                .unwrap_or_else(|| "/transaction".to_string()),
            client: self.client.unwrap_or_default(),
            headers: self.headers,
        }
    }
}

impl HttpTransport {
    pub fn builder(base_url: impl Into<String>) -> HttpTransportBuilder {
        HttpTransportBuilder {
            base_url: base_url.into(),
            transaction_path: Some("/transaction".to_string()),
            headers: HeaderMap::new(),
            client: None,
        }
    }

    pub fn new(base_url: &str) -> Self {
        Self::builder(base_url).build()
    }

    fn join_url(base: &str, path: &str) -> String {
        let base = base.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{}/{}", base, path)
    }

    fn transaction_url(&self, reference: &TransactionReference) -> String {
        let endpoint = Self::join_url(&self.base_url, &self.transaction_path);
        format!("{}/{}", endpoint.trim_end_matches('/'), reference)
    }
}

#[async_trait::async_trait]
impl TransactionTransport for HttpTransport {
    async fn submit(&self, reference: &TransactionReference) -> PayResult<PaymentResponse> {
        let url = self.transaction_url(reference);
        let full_url = reqwest::Url::parse(&url)
            .map_err(|e| PayError::Config(format!("Invalid gateway URL: {e}")))?;

        // The POST declares a JSON content type but carries no body.
        let response = self
            .client
            .post(full_url)
            .headers(self.headers.clone())
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await?;

        // The gateway signals the redirect with 303 See Other and puts the
        // target in the JSON body, so decoding is not gated on a 2xx status.
        Ok(response.json::<PaymentResponse>().await?)
    }
}
