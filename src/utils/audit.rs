//! Checking settlements against the balances they were computed from

use bigdecimal::{BigDecimal, Zero};

use crate::types::*;

/// Sum of all balances; nonzero means shares were rounded away from the
/// expense amounts
pub fn total_balance(balances: &Balances) -> BigDecimal {
    balances.values().sum()
}

/// Whether every member's balance is zero
pub fn is_settled(balances: &Balances) -> bool {
    balances.values().all(|balance| balance.is_zero())
}

/// Balances left after every transaction is paid
///
/// The payer's balance goes down by the amount and the receiver's goes up.
/// Members named only by a transaction are added.
pub fn apply_transactions(balances: &Balances, transactions: &[Transaction]) -> Balances {
    transactions
        .iter()
        .fold(balances.clone(), |mut balances, transaction| {
            *balances
                .entry(transaction.from.clone())
                .or_insert_with(BigDecimal::zero) -= &transaction.amount;
            *balances
                .entry(transaction.to.clone())
                .or_insert_with(BigDecimal::zero) += &transaction.amount;
            balances
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::split::settle;

    fn balances(entries: &[(&str, i64)]) -> Balances {
        entries
            .iter()
            .map(|(name, amount)| (name.to_string(), BigDecimal::from(*amount)))
            .collect()
    }

    #[test]
    fn test_settlement_clears_balances() {
        let initial = balances(&[("A", 40), ("B", 20), ("C", -35), ("D", -25)]);
        let settled = apply_transactions(&initial, &settle(&initial));
        assert!(is_settled(&settled));
        assert!(!is_settled(&initial));
    }

    #[test]
    fn test_total_balance_reports_drift() {
        assert!(total_balance(&balances(&[("A", 10), ("B", -10)])).is_zero());
        assert_eq!(
            total_balance(&balances(&[("A", -7), ("B", 3), ("C", 3)])),
            BigDecimal::from(-1)
        );
    }

    #[test]
    fn test_apply_adds_unknown_members() {
        let transactions = vec![Transaction::new(
            "X".to_string(),
            "Y".to_string(),
            BigDecimal::from(5),
        )];
        let result = apply_transactions(&Balances::new(), &transactions);
        assert_eq!(result["X"], BigDecimal::from(-5));
        assert_eq!(result["Y"], BigDecimal::from(5));
    }
}
