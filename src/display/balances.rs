//! Balance display formatting

use crate::models::{Account, Balances};

/// Format the account balances as an aligned two-column block
pub fn format_balances(balances: &Balances) -> String {
    let mut output = String::new();
    for account in Account::ALL {
        output.push_str(&format!(
            "{:<10} {:>12}\n",
            account.to_string(),
            balances.balance_of(account).to_string()
        ));
    }
    output
}
