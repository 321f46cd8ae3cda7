//! Validation utilities

use bigdecimal::{BigDecimal, Zero};

use crate::split::share_of;
use crate::traits::*;
use crate::types::*;

/// Validate that the payer actually paid something
pub fn validate_expense_amount(expense: &Expense) -> SplitResult<()> {
    if expense.amount > BigDecimal::zero() {
        return Ok(());
    }

    Err(SplitError::Validation(format!(
        "Expense paid by '{}' must have a positive amount, got {}",
        expense.name, expense.amount
    )))
}

/// Validate that a member name is usable
pub fn validate_member_name(name: &str) -> SplitResult<()> {
    if name.trim().is_empty() {
        return Err(SplitError::Validation(
            "Member name cannot be empty".to_string(),
        ));
    }

    if name.len() > 100 {
        return Err(SplitError::Validation(
            "Member name cannot exceed 100 characters".to_string(),
        ));
    }

    Ok(())
}

/// Validate that an expense has at least one beneficiary, each with a usable name
pub fn validate_beneficiaries(beneficiaries: &[String]) -> SplitResult<()> {
    if beneficiaries.is_empty() {
        return Err(SplitError::Validation(
            "Expense must be shared by at least one member".to_string(),
        ));
    }

    beneficiaries
        .iter()
        .try_for_each(|name| validate_member_name(name))
}

/// Validate that the rounded shares add back up to the expense amount
pub fn validate_even_split(expense: &Expense) -> SplitResult<()> {
    let Some(share) = share_of(expense) else {
        return Err(SplitError::Validation(format!(
            "Expense paid by '{}' has no beneficiaries",
            expense.name
        )));
    };

    let distributed = &share * BigDecimal::from(expense.share_count() as u64);
    let drift = &distributed - &expense.amount;
    if drift.is_zero() {
        Ok(())
    } else {
        Err(SplitError::Validation(format!(
            "Expense of {} paid by '{}' does not split evenly into {} shares (drift {})",
            expense.amount,
            expense.name,
            expense.share_count(),
            drift
        )))
    }
}

/// Strict validator rejecting expenses the splitter would silently mangle
///
/// Catches empty names, non-positive amounts, empty beneficiary lists and
/// amounts whose shares do not add back up to the total.
pub struct StrictExpenseValidator;

impl ExpenseValidator for StrictExpenseValidator {
    fn validate_expense(&self, expense: &Expense) -> SplitResult<()> {
        validate_member_name(&expense.name)?;
        validate_expense_amount(expense)?;
        validate_beneficiaries(&expense.beneficiaries)?;
        validate_even_split(expense)
    }
}
