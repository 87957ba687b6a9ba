//! Domain model and input validation for bankweb
//!
//! The remote banking service owns all account state; this crate only
//! mirrors its wire types and enforces the cheap checks the UI performs
//! before issuing a request (numeric amounts, non-empty names).

pub mod error;
pub mod models;
pub mod types;

use rust_decimal::Decimal;

pub use error::{CoreError, CoreResult, ErrorCode};
pub use models::{Account, CreateAccountRequest, TransactionRequest};
pub use types::AccountStatus;

// ==================== Input Validation ====================

/// Parse user-entered text into an amount
///
/// Rejects empty and non-numeric input before any request is issued.
pub fn parse_amount(input: &str) -> CoreResult<Decimal> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(CoreError::InvalidAmount {
            input: input.to_string(),
        });
    }
    trimmed.parse::<Decimal>().map_err(|_| CoreError::InvalidAmount {
        input: input.to_string(),
    })
}

/// Check an amount for deposit or withdrawal
///
/// The backend rejects non-positive amounts too; this mirrors that rule so
/// obviously bad input never leaves the client.
pub fn validate_transaction_amount(amount: Decimal) -> CoreResult<()> {
    if amount <= Decimal::ZERO {
        return Err(CoreError::ValidationError {
            message: "Amount must be greater than zero".to_string(),
        });
    }
    Ok(())
}

/// Check an account creation request before submitting
///
/// Name must be non-empty after trimming; the initial deposit may be zero
/// but never negative.
pub fn validate_create(request: &CreateAccountRequest) -> CoreResult<()> {
    if request.customer_name.trim().is_empty() {
        return Err(CoreError::ValidationError {
            message: "Customer name is required".to_string(),
        });
    }
    if request.initial_deposit < Decimal::ZERO {
        return Err(CoreError::ValidationError {
            message: "Initial deposit must not be negative".to_string(),
        });
    }
    Ok(())
}

// ==================== Tests ====================

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn account_json() -> &'static str {
        r#"{
            "id": 7,
            "accountNumber": "ACC1234567890abcdef0",
            "customerName": "Jane Doe",
            "balance": 150.5,
            "status": "ACTIVE",
            "createdAt": "2026-08-01T09:30:00"
        }"#
    }

    #[test]
    fn test_account_wire_names() {
        let account: Account = serde_json::from_str(account_json()).unwrap();
        assert_eq!(account.id, 7);
        assert_eq!(account.account_number, "ACC1234567890abcdef0");
        assert_eq!(account.customer_name, "Jane Doe");
        assert_eq!(account.balance, Decimal::new(1505, 1));
        assert_eq!(account.status, AccountStatus::Active);

        let back = serde_json::to_value(&account).unwrap();
        assert!(back.get("accountNumber").is_some());
        assert!(back.get("customerName").is_some());
        assert!(back["balance"].is_number());
    }

    #[test]
    fn test_account_missing_created_at() {
        let json = r#"{"id":1,"accountNumber":"ACC1","customerName":"A","balance":0.0,"status":"SUSPENDED"}"#;
        let account: Account = serde_json::from_str(json).unwrap();
        assert!(account.created_at.is_none());
        assert!(account.is_suspended());
        assert!(!account.can_withdraw());
    }

    #[test]
    fn test_created_display() {
        let account: Account = serde_json::from_str(account_json()).unwrap();
        assert_eq!(account.created_display().as_deref(), Some("2026-08-01 09:30"));

        let mut account = account;
        account.created_at = Some("not a timestamp".to_string());
        assert!(account.created_display().is_none());
    }

    #[test]
    fn test_status_round_trip() {
        assert_eq!(AccountStatus::from_str("ACTIVE").unwrap(), AccountStatus::Active);
        assert_eq!(AccountStatus::from_str("suspended").unwrap(), AccountStatus::Suspended);
        assert!(AccountStatus::from_str("CLOSED").is_err());
        assert_eq!(AccountStatus::Suspended.to_string(), "SUSPENDED");

        let wire: AccountStatus = serde_json::from_str("\"SUSPENDED\"").unwrap();
        assert_eq!(wire, AccountStatus::Suspended);
        assert_eq!(serde_json::to_string(&AccountStatus::Active).unwrap(), "\"ACTIVE\"");
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("100").unwrap(), Decimal::new(100, 0));
        assert_eq!(parse_amount(" 12.50 ").unwrap(), Decimal::new(1250, 2));
        assert!(parse_amount("").is_err());
        assert!(parse_amount("abc").is_err());
        assert!(parse_amount("12,5").is_err());

        let err = parse_amount("abc").unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidAmount);
    }

    #[test]
    fn test_validate_transaction_amount() {
        assert!(validate_transaction_amount(Decimal::new(1, 2)).is_ok());
        assert!(validate_transaction_amount(Decimal::ZERO).is_err());
        assert!(validate_transaction_amount(Decimal::new(-5, 0)).is_err());
    }

    #[test]
    fn test_validate_create() {
        let valid = CreateAccountRequest {
            customer_name: "Jane".to_string(),
            initial_deposit: Decimal::ZERO,
        };
        // A zero initial deposit is allowed
        assert!(validate_create(&valid).is_ok());

        let blank_name = CreateAccountRequest {
            customer_name: "   ".to_string(),
            initial_deposit: Decimal::new(10, 0),
        };
        let err = validate_create(&blank_name).unwrap_err();
        assert_eq!(err.code(), ErrorCode::ValidationError);
        assert!(err.to_string().contains("Customer name"));

        let negative = CreateAccountRequest {
            customer_name: "Jane".to_string(),
            initial_deposit: Decimal::new(-1, 0),
        };
        assert!(validate_create(&negative).is_err());
    }
}
