//! Account routes - list, creation, and per-account actions
//!
//! Features:
//! - Account cards with per-row amount input and action buttons
//! - Account creation form with pre-submit validation
//! - JSON proxy endpoints mirroring the remote banking service
//! - Full collection refresh after every successful mutation
//!
//! Structure:
//! - api.rs: JSON endpoints and the HTMX list partial
//! - page.rs: Full page rendering

pub mod api;
pub mod page;

pub use api::{
    api_account_create, api_account_deposit, api_account_detail, api_account_suspend,
    api_account_unsuspend, api_account_withdraw, api_accounts, htmx_accounts_list,
};
pub use page::page_accounts;
