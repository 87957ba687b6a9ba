//! hyper-based implementation of the banking API client

use async_trait::async_trait;
use hyper::client::HttpConnector;
use hyper::header::CONTENT_TYPE;
use hyper::{Body, Client, Method, Request, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use bankweb_core::{Account, CreateAccountRequest, TransactionRequest};

use crate::error::{ClientError, ClientResult};
use crate::BankingApi;

/// Error body shape used by the backend for every rejection
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// HTTP client for the remote banking service
///
/// Each operation is one request/response round trip: no retry, backoff,
/// timeout, or deduplication. Ordering of concurrent mutations against the
/// same account is the backend's responsibility.
pub struct HttpBankClient {
    base_url: String,
    http: Client<HttpConnector>,
}

impl HttpBankClient {
    /// Create a client for the given account collection URL
    ///
    /// `base_url` is the full collection resource, e.g.
    /// `http://localhost:8080/api/accounts` (trailing slash tolerated).
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    /// URL of the account collection
    fn collection_url(&self) -> String {
        self.base_url.clone()
    }

    /// URL of a single account
    fn account_url(&self, id: i64) -> String {
        format!("{}/{}", self.base_url, id)
    }

    /// URL of an account sub-resource (deposit, withdraw, suspend, unsuspend)
    fn action_url(&self, id: i64, action: &str) -> String {
        format!("{}/{}/{}", self.base_url, id, action)
    }

    /// Issue a request and decode the JSON response
    async fn request_json<T: DeserializeOwned>(
        &self,
        method: Method,
        url: String,
        body: Option<Vec<u8>>,
    ) -> ClientResult<T> {
        log::debug!("{} {}", method, url);

        let request = Request::builder()
            .method(method)
            .uri(&url)
            .header(CONTENT_TYPE, "application/json")
            .body(match body {
                Some(bytes) => Body::from(bytes),
                None => Body::empty(),
            })
            .map_err(|e| ClientError::Transport {
                message: e.to_string(),
            })?;

        let response = self
            .http
            .request(request)
            .await
            .map_err(|e| ClientError::Transport {
                message: e.to_string(),
            })?;

        let status = response.status();
        let bytes = hyper::body::to_bytes(response.into_body())
            .await
            .map_err(|e| ClientError::Transport {
                message: e.to_string(),
            })?;

        if status.is_success() {
            serde_json::from_slice(&bytes).map_err(|e| ClientError::InvalidResponse {
                message: e.to_string(),
            })
        } else {
            Err(decode_error_body(status, &bytes))
        }
    }

    /// Serialize a JSON request body
    fn encode<B: serde::Serialize>(body: &B) -> ClientResult<Vec<u8>> {
        serde_json::to_vec(body).map_err(|e| ClientError::InvalidResponse {
            message: format!("failed to encode request body: {}", e),
        })
    }
}

/// Turn a non-2xx response into a ClientError
///
/// The backend answers every rejection with {"error": message}; anything
/// else (HTML error pages, empty bodies) degrades to a generic message
/// carrying the HTTP status.
pub(crate) fn decode_error_body(status: StatusCode, bytes: &[u8]) -> ClientError {
    match serde_json::from_slice::<ErrorBody>(bytes) {
        Ok(body) if !body.error.trim().is_empty() => ClientError::Api { message: body.error },
        _ => ClientError::Api {
            message: format!("Banking service returned status {}", status.as_u16()),
        },
    }
}

#[async_trait]
impl BankingApi for HttpBankClient {
    async fn list_accounts(&self) -> ClientResult<Vec<Account>> {
        self.request_json(Method::GET, self.collection_url(), None).await
    }

    async fn get_account(&self, id: i64) -> ClientResult<Account> {
        self.request_json(Method::GET, self.account_url(id), None).await
    }

    async fn create_account(&self, request: &CreateAccountRequest) -> ClientResult<Account> {
        let body = Self::encode(request)?;
        self.request_json(Method::POST, self.collection_url(), Some(body)).await
    }

    async fn deposit(&self, id: i64, request: &TransactionRequest) -> ClientResult<Account> {
        let body = Self::encode(request)?;
        self.request_json(Method::POST, self.action_url(id, "deposit"), Some(body)).await
    }

    async fn withdraw(&self, id: i64, request: &TransactionRequest) -> ClientResult<Account> {
        let body = Self::encode(request)?;
        self.request_json(Method::POST, self.action_url(id, "withdraw"), Some(body)).await
    }

    async fn suspend(&self, id: i64) -> ClientResult<Account> {
        self.request_json(Method::POST, self.action_url(id, "suspend"), None).await
    }

    async fn unsuspend(&self, id: i64) -> ClientResult<Account> {
        self.request_json(Method::POST, self.action_url(id, "unsuspend"), None).await
    }
}
