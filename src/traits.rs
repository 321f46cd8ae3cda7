//! Traits for pluggable expense validation

use crate::types::*;

/// Trait for implementing custom expense validation rules
///
/// Validators run on normalized expenses, before aggregation. The plain
/// splitting functions never call a validator; only
/// [`ExpenseSplitter::try_split`](crate::split::ExpenseSplitter::try_split) does.
pub trait ExpenseValidator: Send + Sync {
    /// Validate a single normalized expense
    fn validate_expense(&self, expense: &Expense) -> SplitResult<()>;

    /// Validate every expense, stopping at the first rejection
    fn validate_expenses(&self, expenses: &[Expense]) -> SplitResult<()> {
        expenses
            .iter()
            .try_for_each(|expense| self.validate_expense(expense))
    }
}

/// Default validator that accepts every expense
pub struct DefaultExpenseValidator;

impl ExpenseValidator for DefaultExpenseValidator {
    fn validate_expense(&self, _expense: &Expense) -> SplitResult<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bigdecimal::BigDecimal;

    #[test]
    fn test_default_validator_accepts_empty_beneficiaries() {
        let expense = Expense::new("A".to_string(), BigDecimal::from(-5), vec![]);
        assert!(DefaultExpenseValidator.validate_expense(&expense).is_ok());
    }

    struct RejectPayer(&'static str);

    impl ExpenseValidator for RejectPayer {
        fn validate_expense(&self, expense: &Expense) -> SplitResult<()> {
            if expense.name == self.0 {
                Err(SplitError::Validation(format!("{} may not pay", self.0)))
            } else {
                Ok(())
            }
        }
    }

    #[test]
    fn test_validate_expenses_stops_at_first_rejection() {
        let expenses = vec![
            Expense::new("A".to_string(), BigDecimal::from(10), vec!["B".to_string()]),
            Expense::new("B".to_string(), BigDecimal::from(10), vec!["A".to_string()]),
        ];
        let err = RejectPayer("B").validate_expenses(&expenses).unwrap_err();
        assert!(matches!(err, SplitError::Validation(msg) if msg == "B may not pay"));
    }
}
