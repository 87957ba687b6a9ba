//! Data models mirroring the remote banking service

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::types::AccountStatus;

/// Account as exposed by the remote service
///
/// Consumed read-only: the backend owns balance arithmetic and status
/// transitions, this layer only displays what the last fetch returned.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    /// Opaque identifier, stable for the account's lifetime
    pub id: i64,
    /// Displayable identifier, distinct from id
    pub account_number: String,
    /// Free-text customer label
    pub customer_name: String,
    /// Current balance, authoritative on the server
    #[serde(with = "rust_decimal::serde::float")]
    pub balance: Decimal,
    /// ACTIVE or SUSPENDED
    pub status: AccountStatus,
    /// Creation timestamp as sent by the backend (display only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl Account {
    /// Check if the account is suspended
    pub fn is_suspended(&self) -> bool {
        self.status == AccountStatus::Suspended
    }

    /// Withdrawals are only available while the account is active
    pub fn can_withdraw(&self) -> bool {
        self.status == AccountStatus::Active
    }

    /// Creation timestamp formatted for display, if present and parseable
    pub fn created_display(&self) -> Option<String> {
        let raw = self.created_at.as_deref()?;
        // The backend sends ISO timestamps with optional fractional seconds
        let parsed = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
            .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S"))
            .ok()?;
        Some(parsed.format("%Y-%m-%d %H:%M").to_string())
    }
}

/// Body of POST /accounts
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAccountRequest {
    pub customer_name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub initial_deposit: Decimal,
}

/// Body of POST /accounts/{id}/deposit and /accounts/{id}/withdraw
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionRequest {
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
}
