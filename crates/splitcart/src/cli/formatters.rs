//! Small display helpers shared by command handlers.

use splitcart_core::BalanceStatus;

/// Formats an amount with the configured currency code, e.g. `KES 150.00`.
pub fn format_amount(currency: &str, value: f64) -> String {
    format!("{} {:.2}", currency, value)
}

/// Renders a member balance line, mirroring the classification rules of the
/// split engine.
pub fn format_balance(currency: &str, owes: f64) -> String {
    match BalanceStatus::for_amount(owes) {
        BalanceStatus::OwesPool => format!("Owes {}", format_amount(currency, owes)),
        BalanceStatus::OwedBack => format!("Owed {}", format_amount(currency, owes.abs())),
        BalanceStatus::Settled => "Settled".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn balance_labels_follow_epsilon() {
        assert_eq!(format_balance("KES", 25.0), "Owes KES 25.00");
        assert_eq!(format_balance("KES", -25.0), "Owed KES 25.00");
        assert_eq!(format_balance("KES", 0.005), "Settled");
    }
}
