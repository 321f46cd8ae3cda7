//! # Expense Split
//!
//! Splits shared expenses within a group and computes a minimal list of
//! payments that settles everyone's debt.
//!
//! ## Features
//!
//! - **Flexible input**: expenses as `(name, amount, for)` tuples or named records, with the
//!   beneficiary list defaulting to the whole group
//! - **Balances**: per-member net balance, with shares rounded to whole units
//! - **Settlement**: greedy matching of the largest debts against the largest credits
//! - **Validation**: opt-in validators for callers who want bad input rejected
//! - **JSON**: expense lists decoded straight from JSON text
//!
//! ## Quick Start
//!
//! ```rust
//! use expense_split::{for_group, RawExpense};
//! use bigdecimal::BigDecimal;
//!
//! let splitter = for_group(["A", "B", "C"]);
//! let transactions = splitter.split(&[RawExpense::shared("A", 90)]);
//!
//! assert_eq!(transactions.len(), 2);
//! assert!(transactions.iter().all(|t| t.to == "A" && t.amount == BigDecimal::from(30)));
//! ```

pub mod split;
pub mod traits;
pub mod types;
pub mod utils;

// Re-export commonly used types
pub use split::*;
pub use traits::*;
pub use types::*;
