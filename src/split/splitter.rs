//! Public entry points composing normalization, aggregation and settlement

use crate::split::{aggregate, normalize, settle};
use crate::traits::*;
use crate::types::*;

/// Balances of every member after applying `expenses`
pub fn get_balances(group: &[String], expenses: &[RawExpense]) -> Balances {
    aggregate(&normalize(group, expenses))
}

/// Transactions settling already aggregated balances
pub fn from_balances(balances: &Balances) -> Vec<Transaction> {
    settle(balances)
}

/// Transactions settling all `expenses` within `group`
pub fn split_expenses(group: &[String], expenses: &[RawExpense]) -> Vec<Transaction> {
    tracing::debug!(
        member_count = group.len(),
        expense_count = expenses.len(),
        "splitting expenses"
    );
    from_balances(&get_balances(group, expenses))
}

/// Decode expense records from JSON text
///
/// Accepts an array whose elements are either `[name, amount, for?]` arrays or
/// `{"name", "amount", "for"?}` objects.
pub fn parse_expenses(json: &str) -> SplitResult<Vec<RawExpense>> {
    Ok(serde_json::from_str(json)?)
}

/// [`split_expenses`] over expenses given as JSON text
pub fn split_json(group: &[String], json: &str) -> SplitResult<Vec<Transaction>> {
    let expenses = parse_expenses(json)?;
    Ok(split_expenses(group, &expenses))
}

/// Splitter bound to a group, awaiting expenses
pub fn for_group<S: Into<String>>(group: impl IntoIterator<Item = S>) -> ExpenseSplitter {
    ExpenseSplitter::new(group.into_iter().map(Into::into).collect())
}

/// Expense splitter for a fixed group of members
pub struct ExpenseSplitter {
    group: Vec<String>,
    validator: Box<dyn ExpenseValidator>,
}

impl ExpenseSplitter {
    /// Create a new splitter that accepts any expense
    pub fn new(group: Vec<String>) -> Self {
        Self {
            group,
            validator: Box::new(DefaultExpenseValidator),
        }
    }

    /// Create a new splitter with a custom validator for [`try_split`](Self::try_split)
    pub fn with_validator(group: Vec<String>, validator: Box<dyn ExpenseValidator>) -> Self {
        Self { group, validator }
    }

    /// Members of the group
    pub fn group(&self) -> &[String] {
        &self.group
    }

    /// Normalize expenses against this group
    pub fn normalize(&self, expenses: &[RawExpense]) -> Vec<Expense> {
        normalize(&self.group, expenses)
    }

    /// Balances of every member after applying `expenses`
    pub fn balances(&self, expenses: &[RawExpense]) -> Balances {
        get_balances(&self.group, expenses)
    }

    /// Transactions settling `expenses`, without validation
    pub fn split(&self, expenses: &[RawExpense]) -> Vec<Transaction> {
        split_expenses(&self.group, expenses)
    }

    /// Validate the normalized expenses, then split them
    pub fn try_split(&self, expenses: &[RawExpense]) -> SplitResult<Vec<Transaction>> {
        let expenses = self.normalize(expenses);
        self.validator.validate_expenses(&expenses)?;
        Ok(settle(&aggregate(&expenses)))
    }

    /// [`try_split`](Self::try_split) over expenses given as JSON text
    pub fn try_split_json(&self, json: &str) -> SplitResult<Vec<Transaction>> {
        self.try_split(&parse_expenses(json)?)
    }
}
