//! Folding expenses into per-member balances

use bigdecimal::{BigDecimal, RoundingMode, Zero};

use crate::types::*;

/// Share of `expense` owed by each beneficiary, rounded half up to a
/// whole unit. `None` when nobody shares the expense.
pub fn share_of(expense: &Expense) -> Option<BigDecimal> {
    match expense.share_count() {
        0 => None,
        count => Some(
            (&expense.amount / BigDecimal::from(count as u64))
                .with_scale_round(0, RoundingMode::HalfUp),
        ),
    }
}

/// Add `amount` to a member's balance, inserting the member if unseen
fn update_member(balances: &mut Balances, name: &str, amount: &BigDecimal) {
    match balances.get_mut(name) {
        Some(balance) => *balance += amount,
        None => {
            balances.insert(name.to_string(), amount.clone());
        }
    }
}

/// Apply one expense on top of `balances`
///
/// The payer is debited the full amount and each beneficiary occurrence is
/// credited one rounded share.
pub fn aggregate_expense(mut balances: Balances, expense: &Expense) -> Balances {
    update_member(&mut balances, &expense.name, &-&expense.amount);

    if let Some(share) = share_of(expense) {
        for beneficiary in &expense.beneficiaries {
            update_member(&mut balances, beneficiary, &share);
        }
    }

    balances
}

/// Fold normalized expenses into a balance per member
///
/// Members that never pay nor benefit do not appear. When an amount does
/// not divide evenly the balances may not sum to zero; that drift is left
/// in place.
pub fn aggregate(expenses: &[Expense]) -> Balances {
    let balances = expenses.iter().fold(Balances::new(), aggregate_expense);

    let total: BigDecimal = balances.values().sum();
    if total.is_zero() {
        tracing::debug!(
            expense_count = expenses.len(),
            member_count = balances.len(),
            "aggregated balances"
        );
    } else {
        tracing::warn!(
            expense_count = expenses.len(),
            member_count = balances.len(),
            drift = %total,
            "aggregated balances do not sum to zero"
        );
    }

    balances
}
