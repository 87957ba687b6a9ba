//! Accounts API endpoints - JSON proxies and the HTMX list partial
//!
//! Every mutating endpoint validates input locally before forwarding, so
//! obviously bad requests never reach the backend. The displayed
//! collection is never touched here: after a successful mutation the page
//! script re-fetches /accounts/list once, and on failure the previously
//! rendered collection stays as it was.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::Json;

use bankweb_core::{Account, CreateAccountRequest, TransactionRequest};

use crate::error::ApiError;
use crate::AppState;

/// GET /api/accounts - full account collection
pub async fn api_accounts(
    State(state): State<AppState>,
) -> Result<Json<Vec<Account>>, ApiError> {
    let accounts = state.client.list_accounts().await?;
    Ok(Json(accounts))
}

/// GET /api/accounts/:id - single account
pub async fn api_account_detail(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Account>, ApiError> {
    let account = state.client.get_account(id).await?;
    Ok(Json(account))
}

/// POST /api/accounts - create an account
pub async fn api_account_create(
    State(state): State<AppState>,
    Json(request): Json<CreateAccountRequest>,
) -> Result<Json<Account>, ApiError> {
    bankweb_core::validate_create(&request)?;
    let account = state.client.create_account(&request).await?;
    log::info!(
        "created account {} for {}",
        account.account_number,
        account.customer_name
    );
    Ok(Json(account))
}

/// POST /api/accounts/:id/deposit
pub async fn api_account_deposit(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<TransactionRequest>,
) -> Result<Json<Account>, ApiError> {
    bankweb_core::validate_transaction_amount(request.amount)?;
    let account = state.client.deposit(id, &request).await?;
    log::info!("deposited {} into account {}", request.amount, id);
    Ok(Json(account))
}

/// POST /api/accounts/:id/withdraw
pub async fn api_account_withdraw(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<TransactionRequest>,
) -> Result<Json<Account>, ApiError> {
    bankweb_core::validate_transaction_amount(request.amount)?;
    let account = state.client.withdraw(id, &request).await?;
    log::info!("withdrew {} from account {}", request.amount, id);
    Ok(Json(account))
}

/// POST /api/accounts/:id/suspend
pub async fn api_account_suspend(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Account>, ApiError> {
    let account = state.client.suspend(id).await?;
    log::info!("suspended account {}", id);
    Ok(Json(account))
}

/// POST /api/accounts/:id/unsuspend
pub async fn api_account_unsuspend(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Account>, ApiError> {
    let account = state.client.unsuspend(id).await?;
    log::info!("unsuspended account {}", id);
    Ok(Json(account))
}

/// GET /accounts/list - HTMX partial with the rendered collection
///
/// On a fetch failure this logs one line and answers 502 with an empty
/// body; HTMX then leaves the previously displayed collection untouched.
pub async fn htmx_accounts_list(State(state): State<AppState>) -> Response {
    match state.client.list_accounts().await {
        Ok(accounts) => Html(super::page::render_accounts_list(&accounts)).into_response(),
        Err(e) => {
            log::warn!("account list fetch failed: {}", e);
            StatusCode::BAD_GATEWAY.into_response()
        }
    }
}

// ==================== Tests ====================

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use rust_decimal::Decimal;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use bankweb_client::{BankingApi, ClientError, ClientResult};
    use bankweb_config::Config;
    use bankweb_core::AccountStatus;

    fn sample_account(id: i64, status: AccountStatus) -> Account {
        Account {
            id,
            account_number: format!("ACC{:017}", id),
            customer_name: "Jane Doe".to_string(),
            balance: Decimal::new(10000, 2),
            status,
            created_at: None,
        }
    }

    /// Counts calls per operation; fails every call when a message is set
    #[derive(Default)]
    struct MockBankClient {
        fail_with: Option<String>,
        list_calls: AtomicUsize,
        create_calls: AtomicUsize,
        deposit_calls: AtomicUsize,
        withdraw_calls: AtomicUsize,
        suspend_calls: AtomicUsize,
        unsuspend_calls: AtomicUsize,
    }

    impl MockBankClient {
        fn failing(message: &str) -> Self {
            Self {
                fail_with: Some(message.to_string()),
                ..Self::default()
            }
        }

        fn outcome(&self, id: i64) -> ClientResult<Account> {
            match &self.fail_with {
                Some(message) => Err(ClientError::Api {
                    message: message.clone(),
                }),
                None => Ok(sample_account(id, AccountStatus::Active)),
            }
        }
    }

    #[async_trait]
    impl BankingApi for MockBankClient {
        async fn list_accounts(&self) -> ClientResult<Vec<Account>> {
            self.list_calls.fetch_add(1, Ordering::SeqCst);
            match &self.fail_with {
                Some(message) => Err(ClientError::Transport {
                    message: message.clone(),
                }),
                None => Ok(vec![sample_account(1, AccountStatus::Active)]),
            }
        }

        async fn get_account(&self, id: i64) -> ClientResult<Account> {
            self.outcome(id)
        }

        async fn create_account(&self, _request: &CreateAccountRequest) -> ClientResult<Account> {
            self.create_calls.fetch_add(1, Ordering::SeqCst);
            self.outcome(1)
        }

        async fn deposit(&self, id: i64, _request: &TransactionRequest) -> ClientResult<Account> {
            self.deposit_calls.fetch_add(1, Ordering::SeqCst);
            self.outcome(id)
        }

        async fn withdraw(&self, id: i64, _request: &TransactionRequest) -> ClientResult<Account> {
            self.withdraw_calls.fetch_add(1, Ordering::SeqCst);
            self.outcome(id)
        }

        async fn suspend(&self, id: i64) -> ClientResult<Account> {
            self.suspend_calls.fetch_add(1, Ordering::SeqCst);
            self.outcome(id)
        }

        async fn unsuspend(&self, id: i64) -> ClientResult<Account> {
            self.unsuspend_calls.fetch_add(1, Ordering::SeqCst);
            self.outcome(id)
        }
    }

    fn state_with(mock: Arc<MockBankClient>) -> AppState {
        AppState {
            client: mock,
            config: Config::default(),
        }
    }

    #[tokio::test]
    async fn test_create_issues_exactly_one_request() {
        let mock = Arc::new(MockBankClient::default());
        let state = state_with(mock.clone());

        let request = CreateAccountRequest {
            customer_name: "Jane Doe".to_string(),
            initial_deposit: Decimal::new(50, 0),
        };
        let result = api_account_create(State(state), Json(request)).await;

        assert!(result.is_ok());
        assert_eq!(mock.create_calls.load(Ordering::SeqCst), 1);
        // The list refresh is a separate request triggered by the page
        assert_eq!(mock.list_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_create_rejects_invalid_input_locally() {
        let mock = Arc::new(MockBankClient::default());
        let state = state_with(mock.clone());

        let request = CreateAccountRequest {
            customer_name: "  ".to_string(),
            initial_deposit: Decimal::new(50, 0),
        };
        let err = api_account_create(State(state.clone()), Json(request))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::BadRequest { .. }));

        let request = CreateAccountRequest {
            customer_name: "Jane".to_string(),
            initial_deposit: Decimal::new(-10, 0),
        };
        let err = api_account_create(State(state), Json(request)).await.unwrap_err();
        assert!(matches!(err, ApiError::BadRequest { .. }));

        assert_eq!(mock.create_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_deposit_rejects_non_positive_amount() {
        let mock = Arc::new(MockBankClient::default());
        let state = state_with(mock.clone());

        for amount in [Decimal::ZERO, Decimal::new(-5, 0)] {
            let request = TransactionRequest { amount };
            let err = api_account_deposit(State(state.clone()), Path(1), Json(request))
                .await
                .unwrap_err();
            assert!(matches!(err, ApiError::BadRequest { .. }));
        }
        assert_eq!(mock.deposit_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_failed_withdraw_surfaces_backend_message() {
        let mock = Arc::new(MockBankClient::failing(
            "Cannot withdraw from a suspended account",
        ));
        let state = state_with(mock.clone());

        let request = TransactionRequest {
            amount: Decimal::new(10, 0),
        };
        let err = api_account_withdraw(State(state), Path(3), Json(request))
            .await
            .unwrap_err();

        assert!(matches!(err, ApiError::Upstream { .. }));
        assert_eq!(err.to_string(), "Cannot withdraw from a suspended account");
        assert_eq!(mock.withdraw_calls.load(Ordering::SeqCst), 1);
        // No implicit list refresh happens on failure
        assert_eq!(mock.list_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_suspend_and_unsuspend_forward() {
        let mock = Arc::new(MockBankClient::default());
        let state = state_with(mock.clone());

        assert!(api_account_suspend(State(state.clone()), Path(2)).await.is_ok());
        assert!(api_account_unsuspend(State(state), Path(2)).await.is_ok());
        assert_eq!(mock.suspend_calls.load(Ordering::SeqCst), 1);
        assert_eq!(mock.unsuspend_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_list_partial_success_and_failure() {
        let mock = Arc::new(MockBankClient::default());
        let response = htmx_accounts_list(State(state_with(mock.clone()))).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(mock.list_calls.load(Ordering::SeqCst), 1);

        // Fetch failures answer 502 so HTMX keeps the previous content
        let failing = Arc::new(MockBankClient::failing("connection refused"));
        let response = htmx_accounts_list(State(state_with(failing))).await;
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }

    #[tokio::test]
    async fn test_api_accounts_proxies_list() {
        let mock = Arc::new(MockBankClient::default());
        let Json(accounts) = api_accounts(State(state_with(mock.clone()))).await.unwrap();
        assert_eq!(accounts.len(), 1);
        assert_eq!(accounts[0].customer_name, "Jane Doe");
        assert_eq!(mock.list_calls.load(Ordering::SeqCst), 1);
    }
}
