//! Accounts page rendering - the single-page interface
//!
//! The full page carries the creation form, the accounts section, and the
//! inline script wiring both to the JSON endpoints. The accounts section
//! loads itself through an HTMX GET of /accounts/list and is re-fetched
//! wholesale after every successful mutation; errors are surfaced through
//! a blocking alert and leave the section untouched.

use axum::extract::State;
use axum::response::Html;

use bankweb_core::Account;
use bankweb_utils::{escape_html, format_money};

use crate::AppState;

/// GET / and /accounts - the root view
pub async fn page_accounts(
    State(_state): State<AppState>,
    headers: axum::http::HeaderMap,
) -> Html<String> {
    let inner_content = format!(
        "{}{}{}",
        render_create_card(),
        render_accounts_section(),
        PAGE_SCRIPT
    );
    Html(crate::page_response(&headers, "Accounts", &inner_content))
}

/// Account creation card with pre-submit validation handled in the script
pub fn render_create_card() -> String {
    String::from(
        r#"<div class='bg-white rounded-xl shadow-sm p-6 mb-6'>
        <h2 class='text-lg font-semibold mb-4'>Create Account</h2>
        <div class='flex flex-col sm:flex-row gap-3'>
            <input type='text' id='create-name' placeholder='Customer Name'
                class='flex-1 px-4 py-2 border rounded-lg'>
            <input type='number' id='create-deposit' placeholder='Initial Deposit' min='0' step='0.01'
                class='w-full sm:w-48 px-4 py-2 border rounded-lg'>
            <button onclick='createAccount()'
                class='px-6 py-2 bg-indigo-600 text-white rounded-lg hover:bg-indigo-700'>Create</button>
        </div>
    </div>"#,
    )
}

/// Accounts section shell; the list partial fills it on page load
fn render_accounts_section() -> String {
    String::from(
        r#"<h2 class='text-lg font-semibold mb-4'>Accounts</h2>
    <div id='accounts-content' hx-get='/accounts/list' hx-trigger='load'>
        <p class='text-gray-500 text-center py-8'>Loading accounts...</p>
    </div>"#,
    )
}

/// Render the fetched collection as account cards
pub fn render_accounts_list(accounts: &[Account]) -> String {
    if accounts.is_empty() {
        return String::from("<p class='text-gray-500 text-center py-8'>No accounts yet</p>");
    }

    let cards: Vec<String> = accounts.iter().map(render_account_card).collect();
    format!("<div class='space-y-4'>{}</div>", cards.join(""))
}

/// Render one account card with its amount input and action buttons
///
/// Withdraw is disabled while the account is suspended; Deposit stays
/// enabled because the backend accepts deposits into suspended accounts.
/// Suspend and Unsuspend swap places depending on status.
pub fn render_account_card(account: &Account) -> String {
    let name = escape_html(&account.customer_name);
    let number = escape_html(&account.account_number);
    let balance = format_money(&account.balance);
    let suspended = account.is_suspended();

    let card_class = if suspended {
        "bg-white rounded-xl shadow-sm p-6 border border-amber-300 opacity-90"
    } else {
        "bg-white rounded-xl shadow-sm p-6 border"
    };

    let status_badge = if suspended {
        "<span class='px-2 py-0.5 text-xs font-medium rounded bg-amber-100 text-amber-700'>SUSPENDED</span>"
    } else {
        "<span class='px-2 py-0.5 text-xs font-medium rounded bg-green-100 text-green-700'>ACTIVE</span>"
    };

    let withdraw_attr = if suspended { " disabled" } else { "" };
    let withdraw_class = if suspended {
        "px-4 py-2 bg-gray-200 text-gray-400 rounded-lg cursor-not-allowed"
    } else {
        "px-4 py-2 bg-amber-500 text-white rounded-lg hover:bg-amber-600"
    };

    let toggle_button = if suspended {
        format!(
            "<button onclick='accountUnsuspend({})' class='px-4 py-2 bg-gray-700 text-white rounded-lg hover:bg-gray-800'>Unsuspend</button>",
            account.id
        )
    } else {
        format!(
            "<button onclick='accountSuspend({})' class='px-4 py-2 bg-red-600 text-white rounded-lg hover:bg-red-700'>Suspend</button>",
            account.id
        )
    };

    let opened = account
        .created_display()
        .map(|d| format!("<p class='text-xs text-gray-400 mt-1'>Opened {}</p>", d))
        .unwrap_or_default();

    format!(
        r#"<div class='{card_class}' id='account-{id}'>
        <div class='flex items-start justify-between mb-3'>
            <div>
                <p class='font-semibold'>{name}</p>
                <p class='text-sm text-gray-500'>{number}</p>
                {opened}
            </div>
            <div class='text-right'>
                <p class='text-xl font-bold'>{balance}</p>
                {status_badge}
            </div>
        </div>
        <div class='flex flex-col sm:flex-row gap-2'>
            <input type='number' id='amount-{id}' placeholder='Amount' min='0' step='0.01'
                class='flex-1 px-4 py-2 border rounded-lg'>
            <button onclick='accountDeposit({id})' class='px-4 py-2 bg-green-600 text-white rounded-lg hover:bg-green-700'>Deposit</button>
            <button onclick='accountWithdraw({id})'{withdraw_attr} class='{withdraw_class}'>Withdraw</button>
            {toggle_button}
        </div>
    </div>"#,
        card_class = card_class,
        id = account.id,
        name = name,
        number = number,
        opened = opened,
        balance = balance,
        status_badge = status_badge,
        withdraw_attr = withdraw_attr,
        withdraw_class = withdraw_class,
        toggle_button = toggle_button,
    )
}

/// Inline script wiring the page to the JSON endpoints
///
/// Every action issues exactly one request; on success the relevant input
/// is cleared and the list partial is re-fetched once. Failures alert the
/// message and leave the displayed collection unchanged.
const PAGE_SCRIPT: &str = r#"<script>
    function refreshAccounts() {
        htmx.ajax('GET', '/accounts/list', {target: '#accounts-content', swap: 'innerHTML'});
    }

    async function callApi(path, payload) {
        const options = {method: 'POST', headers: {'Content-Type': 'application/json'}};
        if (payload !== undefined) options.body = JSON.stringify(payload);
        let response;
        try {
            response = await fetch(path, options);
        } catch (err) {
            throw new Error('Banking service unreachable');
        }
        if (!response.ok) {
            let message = 'Request failed';
            try {
                const body = await response.json();
                if (body.error) message = body.error;
            } catch (err) { /* non-JSON body, keep the generic message */ }
            throw new Error(message);
        }
        return response.json();
    }

    async function createAccount() {
        const nameInput = document.getElementById('create-name');
        const depositInput = document.getElementById('create-deposit');
        const name = nameInput.value.trim();
        const deposit = Number(depositInput.value);
        if (!name || depositInput.value === '' || Number.isNaN(deposit) || deposit < 0) {
            alert('Enter a customer name and a non-negative initial deposit');
            return;
        }
        try {
            await callApi('/api/accounts', {customerName: name, initialDeposit: deposit});
            nameInput.value = '';
            depositInput.value = '';
            refreshAccounts();
        } catch (err) {
            alert(err.message || 'Failed to create account');
        }
    }

    function rowAmount(id) {
        const input = document.getElementById('amount-' + id);
        const amount = Number(input.value);
        if (input.value === '' || Number.isNaN(amount)) {
            alert('Enter a numeric amount');
            return null;
        }
        return {input: input, amount: amount};
    }

    async function accountDeposit(id) {
        const entry = rowAmount(id);
        if (!entry) return;
        try {
            await callApi('/api/accounts/' + id + '/deposit', {amount: entry.amount});
            entry.input.value = '';
            refreshAccounts();
        } catch (err) {
            alert(err.message || 'Deposit failed');
        }
    }

    async function accountWithdraw(id) {
        const entry = rowAmount(id);
        if (!entry) return;
        try {
            await callApi('/api/accounts/' + id + '/withdraw', {amount: entry.amount});
            entry.input.value = '';
            refreshAccounts();
        } catch (err) {
            alert(err.message || 'Withdrawal failed');
        }
    }

    async function accountSuspend(id) {
        try {
            await callApi('/api/accounts/' + id + '/suspend');
            refreshAccounts();
        } catch (err) {
            alert(err.message || 'Suspend failed');
        }
    }

    async function accountUnsuspend(id) {
        try {
            await callApi('/api/accounts/' + id + '/unsuspend');
            refreshAccounts();
        } catch (err) {
            alert(err.message || 'Unsuspend failed');
        }
    }
</script>"#;

// ==================== Tests ====================

#[cfg(test)]
mod tests {
    use super::*;
    use bankweb_core::AccountStatus;
    use rust_decimal::Decimal;

    fn account(id: i64, status: AccountStatus) -> Account {
        Account {
            id,
            account_number: format!("ACC{:017}", id),
            customer_name: "Jane Doe".to_string(),
            balance: Decimal::new(123456, 2),
            status,
            created_at: Some("2026-08-01T09:30:00".to_string()),
        }
    }

    #[test]
    fn test_active_card_controls() {
        let card = render_account_card(&account(5, AccountStatus::Active));
        assert!(card.contains("accountDeposit(5)"));
        assert!(card.contains("accountWithdraw(5)"));
        assert!(card.contains("accountSuspend(5)"));
        assert!(!card.contains("accountUnsuspend(5)"));
        assert!(!card.contains("disabled"));
        assert!(card.contains("1,234.56"));
        assert!(card.contains("ACTIVE"));
    }

    #[test]
    fn test_suspended_card_disables_withdraw_only() {
        let card = render_account_card(&account(2, AccountStatus::Suspended));
        // Withdraw is blocked, Deposit stays available while suspended
        assert!(card.contains("accountWithdraw(2)' disabled"));
        assert!(card.contains("accountDeposit(2)' class"));
        assert!(card.contains("accountUnsuspend(2)"));
        assert!(!card.contains("accountSuspend(2)"));
        assert!(card.contains("SUSPENDED"));
    }

    #[test]
    fn test_card_escapes_customer_name() {
        let mut acc = account(1, AccountStatus::Active);
        acc.customer_name = "<script>alert('x')</script>".to_string();
        let card = render_account_card(&acc);
        assert!(!card.contains("<script>alert"));
        assert!(card.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_card_shows_opened_date() {
        let card = render_account_card(&account(1, AccountStatus::Active));
        assert!(card.contains("Opened 2026-08-01 09:30"));

        let mut acc = account(1, AccountStatus::Active);
        acc.created_at = None;
        assert!(!render_account_card(&acc).contains("Opened"));
    }

    #[test]
    fn test_empty_list_message() {
        let body = render_accounts_list(&[]);
        assert!(body.contains("No accounts yet"));

        let body = render_accounts_list(&[account(1, AccountStatus::Active)]);
        assert!(body.contains("account-1"));
        assert!(body.contains("Jane Doe"));
    }

    #[test]
    fn test_create_card_fields() {
        let card = render_create_card();
        assert!(card.contains("create-name"));
        assert!(card.contains("create-deposit"));
        assert!(card.contains("createAccount()"));
    }
}
