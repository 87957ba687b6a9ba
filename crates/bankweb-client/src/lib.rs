//! HTTP client for the remote banking service
//!
//! The backend owns all account state; this crate wraps its REST surface
//! behind the [`BankingApi`] trait so the web layer can be exercised with
//! a test double.
//!
//! Endpoints (relative to the configured base URL):
//! - GET    ``           - list accounts
//! - GET    `/{id}`      - account detail
//! - POST   ``           - create account
//! - POST   `/{id}/deposit`, `/{id}/withdraw` - balance mutations
//! - POST   `/{id}/suspend`, `/{id}/unsuspend` - status mutations

pub mod error;
pub mod http;

use async_trait::async_trait;
use std::sync::Arc;

use bankweb_core::{Account, CreateAccountRequest, TransactionRequest};

pub use error::{ClientError, ClientErrorCode, ClientResult};
pub use http::HttpBankClient;

/// Client reference type shared across handlers
pub type ClientRef = Arc<dyn BankingApi>;

/// Operations of the remote banking service
///
/// Every mutating call returns the updated account, but callers are
/// expected to discard their cached collection and re-fetch the list
/// afterwards; the client never performs balance arithmetic itself.
#[async_trait]
pub trait BankingApi: Send + Sync {
    /// Fetch the full account collection
    async fn list_accounts(&self) -> ClientResult<Vec<Account>>;

    /// Fetch a single account
    async fn get_account(&self, id: i64) -> ClientResult<Account>;

    /// Create an account with a name and initial deposit
    async fn create_account(&self, request: &CreateAccountRequest) -> ClientResult<Account>;

    /// Deposit into an account
    async fn deposit(&self, id: i64, request: &TransactionRequest) -> ClientResult<Account>;

    /// Withdraw from an account
    async fn withdraw(&self, id: i64, request: &TransactionRequest) -> ClientResult<Account>;

    /// Suspend an account
    async fn suspend(&self, id: i64) -> ClientResult<Account>;

    /// Lift a suspension
    async fn unsuspend(&self, id: i64) -> ClientResult<Account>;
}
