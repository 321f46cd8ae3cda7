//! Greedy settlement of balances into transactions

use std::collections::VecDeque;

use bigdecimal::{BigDecimal, Zero};

use crate::types::*;

/// List form of a balance map, in map order
pub fn balances_to_members(balances: &Balances) -> Vec<MemberBalance> {
    balances
        .iter()
        .map(|(name, balance)| MemberBalance::new(name.clone(), balance.clone()))
        .collect()
}

/// Split members into those who pay (positive balance, largest first) and
/// those who get paid (negative balance, most negative first)
///
/// Settled members are dropped. Ties keep their input order.
pub fn partition_members(members: Vec<MemberBalance>) -> (Vec<MemberBalance>, Vec<MemberBalance>) {
    let zero = BigDecimal::zero();
    let (mut payers, rest): (Vec<_>, Vec<_>) =
        members.into_iter().partition(|m| m.balance > zero);
    let mut payees: Vec<_> = rest.into_iter().filter(|m| m.balance < zero).collect();

    payers.sort_by(|a, b| b.balance.cmp(&a.balance));
    payees.sort_by(|a, b| a.balance.cmp(&b.balance));

    (payers, payees)
}

/// Pay the first payee as much as `payer` can cover or the payee is owed,
/// whichever is smaller
///
/// Returns the updated payer and the emitted transaction; the payee queue is
/// advanced when its head is fully paid.
fn pay_back(
    payer: &MemberBalance,
    payees: &mut VecDeque<MemberBalance>,
) -> Option<(MemberBalance, Transaction)> {
    let payee = payees.pop_front()?;
    let owed = -&payee.balance;
    let amount = if payer.balance < owed {
        payer.balance.clone()
    } else {
        owed
    };

    let remaining = &payee.balance + &amount;
    if !remaining.is_zero() {
        payees.push_front(payee.with_balance(remaining));
    }

    let transaction = Transaction::new(payer.name.clone(), payee.name, amount.clone());
    Some((payer.with_balance(&payer.balance - &amount), transaction))
}

/// Turn balances into the list of transactions that settles them
///
/// Each paying member, largest balance first, pays the head of the payee
/// queue until their balance is cleared. Whatever cannot be matched (rounding
/// drift) is dropped.
pub fn settle(balances: &Balances) -> Vec<Transaction> {
    let (payers, payees) = partition_members(balances_to_members(balances));
    let payer_count = payers.len();
    let payee_count = payees.len();

    let zero = BigDecimal::zero();
    let mut payees = VecDeque::from(payees);
    let mut transactions = Vec::new();
    let mut unmatched = BigDecimal::zero();

    for mut payer in payers {
        while payer.balance > zero {
            match pay_back(&payer, &mut payees) {
                Some((updated, transaction)) => {
                    transactions.push(transaction);
                    payer = updated;
                }
                None => break,
            }
        }
        unmatched += &payer.balance;
    }
    for payee in &payees {
        unmatched += &payee.balance;
    }

    if !unmatched.is_zero() {
        tracing::debug!(unmatched = %unmatched, "dropping unmatched balance");
    }
    tracing::debug!(
        payer_count,
        payee_count,
        transaction_count = transactions.len(),
        "settled balances"
    );

    transactions
}

#[cfg(test)]
mod tests {
    use super::*;

    fn balances(entries: &[(&str, i64)]) -> Balances {
        entries
            .iter()
            .map(|(name, amount)| (name.to_string(), BigDecimal::from(*amount)))
            .collect()
    }

    fn tx(from: &str, to: &str, amount: i64) -> Transaction {
        Transaction::new(from.to_string(), to.to_string(), BigDecimal::from(amount))
    }

    #[test]
    fn test_empty_balances() {
        assert!(settle(&Balances::new()).is_empty());
    }

    #[test]
    fn test_single_pair() {
        assert_eq!(settle(&balances(&[("A", 10), ("B", -10)])), vec![tx("A", "B", 10)]);
    }

    #[test]
    fn test_one_payee_many_payers() {
        let transactions = settle(&balances(&[("A", -60), ("B", 30), ("C", 30)]));
        assert_eq!(transactions, vec![tx("B", "A", 30), tx("C", "A", 30)]);
    }

    #[test]
    fn test_payer_split_across_payees() {
        let transactions = settle(&balances(&[("A", 50), ("B", -20), ("C", -30)]));
        assert_eq!(transactions, vec![tx("A", "C", 30), tx("A", "B", 20)]);
    }

    #[test]
    fn test_partial_payments_carry_over() {
        let transactions = settle(&balances(&[("A", 40), ("B", 20), ("C", -35), ("D", -25)]));
        assert_eq!(
            transactions,
            vec![tx("A", "C", 35), tx("A", "D", 5), tx("B", "D", 20)]
        );
    }

    #[test]
    fn test_zero_balances_are_skipped() {
        let transactions = settle(&balances(&[("A", 0), ("B", 5), ("C", -5)]));
        assert_eq!(transactions, vec![tx("B", "C", 5)]);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let (payers, payees) =
            partition_members(balances_to_members(&balances(&[("B", 10), ("A", 10), ("C", -20)])));
        assert_eq!(payers[0].name, "B");
        assert_eq!(payers[1].name, "A");
        assert_eq!(payees[0].name, "C");
    }

    #[test]
    fn test_lone_member_is_dropped() {
        assert!(settle(&balances(&[("A", 7)])).is_empty());
        assert!(settle(&balances(&[("A", -7)])).is_empty());
    }

    #[test]
    fn test_drift_residual_is_dropped() {
        let transactions = settle(&balances(&[("A", -7), ("B", 3), ("C", 3)]));
        assert_eq!(transactions, vec![tx("B", "A", 3), tx("C", "A", 3)]);

        let transactions = settle(&balances(&[("A", -5), ("B", 3), ("C", 3)]));
        assert_eq!(transactions, vec![tx("B", "A", 3), tx("C", "A", 2)]);
    }

    #[test]
    fn test_input_balances_unchanged() {
        let input = balances(&[("A", 10), ("B", -10)]);
        let before = input.clone();
        let _ = settle(&input);
        assert_eq!(input, before);
    }
}
