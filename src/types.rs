//! Core types and data structures for expense splitting

use bigdecimal::BigDecimal;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use std::fmt;
use std::str::FromStr;

/// Net balance per member, keyed by member name in first-appearance order.
///
/// After aggregation a payer of an expense ends up negative (is owed money)
/// and a beneficiary ends up positive (owes money).
pub type Balances = IndexMap<String, BigDecimal>;

/// Canonical expense record produced by the normalizer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    /// Member who paid
    pub name: String,
    /// Total amount paid
    #[serde(deserialize_with = "deserialize_amount")]
    pub amount: BigDecimal,
    /// Members sharing the cost; each occurrence is one share
    #[serde(rename = "for")]
    pub beneficiaries: Vec<String>,
}

impl Expense {
    /// Create a new expense
    pub fn new(name: String, amount: BigDecimal, beneficiaries: Vec<String>) -> Self {
        Self {
            name,
            amount,
            beneficiaries,
        }
    }

    /// Number of shares the amount is split into
    pub fn share_count(&self) -> usize {
        self.beneficiaries.len()
    }
}

/// Expense as supplied by callers, before normalization
///
/// Deserializes from either a JSON array `["A", 30, ["B", "C"]]` or an
/// object `{"name": "A", "amount": 30, "for": ["B", "C"]}`. In both forms
/// the beneficiary list may be omitted, in which case the whole group
/// shares the expense.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawExpense {
    /// `(name, amount, for)` triple
    Positional(
        String,
        #[serde(deserialize_with = "deserialize_amount")] BigDecimal,
        #[serde(default)] Option<Vec<String>>,
    ),
    /// Named fields
    Object {
        name: String,
        #[serde(deserialize_with = "deserialize_amount")]
        amount: BigDecimal,
        #[serde(rename = "for", default, skip_serializing_if = "Option::is_none")]
        beneficiaries: Option<Vec<String>>,
    },
}

struct AmountVisitor;

impl<'de> serde::de::Visitor<'de> for AmountVisitor {
    type Value = BigDecimal;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a decimal amount as a number or string")
    }

    fn visit_i64<E: serde::de::Error>(self, value: i64) -> Result<BigDecimal, E> {
        Ok(BigDecimal::from(value))
    }

    fn visit_u64<E: serde::de::Error>(self, value: u64) -> Result<BigDecimal, E> {
        Ok(BigDecimal::from(value))
    }

    // The shortest representation that round-trips is the literal as written,
    // so `10.1` stays `10.1` rather than its binary expansion.
    fn visit_f64<E: serde::de::Error>(self, value: f64) -> Result<BigDecimal, E> {
        self.visit_str(&value.to_string())
    }

    fn visit_str<E: serde::de::Error>(self, value: &str) -> Result<BigDecimal, E> {
        BigDecimal::from_str(value).map_err(E::custom)
    }
}

/// Decode an amount from a JSON number or decimal string without picking up
/// floating point error
fn deserialize_amount<'de, D>(deserializer: D) -> Result<BigDecimal, D::Error>
where
    D: serde::Deserializer<'de>,
{
    deserializer.deserialize_any(AmountVisitor)
}

impl RawExpense {
    /// Expense shared by the whole group
    pub fn shared(name: impl Into<String>, amount: impl Into<BigDecimal>) -> Self {
        RawExpense::Object {
            name: name.into(),
            amount: amount.into(),
            beneficiaries: None,
        }
    }

    /// Expense shared by an explicit list of members
    pub fn for_members<S: Into<String>>(
        name: impl Into<String>,
        amount: impl Into<BigDecimal>,
        beneficiaries: impl IntoIterator<Item = S>,
    ) -> Self {
        RawExpense::Object {
            name: name.into(),
            amount: amount.into(),
            beneficiaries: Some(beneficiaries.into_iter().map(Into::into).collect()),
        }
    }

    /// Payer name, whichever form the record is in
    pub fn name(&self) -> &str {
        match self {
            RawExpense::Positional(name, _, _) => name,
            RawExpense::Object { name, .. } => name,
        }
    }
}

impl From<Expense> for RawExpense {
    fn from(expense: Expense) -> Self {
        RawExpense::Object {
            name: expense.name,
            amount: expense.amount,
            beneficiaries: Some(expense.beneficiaries),
        }
    }
}

impl<S, A> From<(S, A, Vec<S>)> for RawExpense
where
    S: Into<String>,
    A: Into<BigDecimal>,
{
    fn from((name, amount, beneficiaries): (S, A, Vec<S>)) -> Self {
        RawExpense::Positional(
            name.into(),
            amount.into(),
            Some(beneficiaries.into_iter().map(Into::into).collect()),
        )
    }
}

impl<S, A> From<(S, A)> for RawExpense
where
    S: Into<String>,
    A: Into<BigDecimal>,
{
    fn from((name, amount): (S, A)) -> Self {
        RawExpense::Positional(name.into(), amount.into(), None)
    }
}

/// Member with its current balance, used as settlement working state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberBalance {
    pub name: String,
    pub balance: BigDecimal,
}

impl MemberBalance {
    pub fn new(name: String, balance: BigDecimal) -> Self {
        Self { name, balance }
    }

    /// Copy of this record carrying a different balance
    pub fn with_balance(&self, balance: BigDecimal) -> Self {
        Self {
            name: self.name.clone(),
            balance,
        }
    }
}

/// Single payment instruction settling part of the group's debt
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Transaction {
    /// Member paying
    pub from: String,
    /// Member receiving
    pub to: String,
    /// Amount paid, always positive
    pub amount: BigDecimal,
}

impl Transaction {
    pub fn new(from: String, to: String, amount: BigDecimal) -> Self {
        Self { from, to, amount }
    }
}

/// Errors raised at the edges of the splitting pipeline
///
/// The pipeline itself never fails; these come from decoding input and
/// from opt-in validators.
#[derive(Debug, thiserror::Error)]
pub enum SplitError {
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<serde_json::Error> for SplitError {
    fn from(err: serde_json::Error) -> Self {
        SplitError::Parse(err.to_string())
    }
}

/// Result type for splitting operations
pub type SplitResult<T> = Result<T, SplitError>;
