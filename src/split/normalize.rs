//! Expense normalization

use crate::types::*;

impl RawExpense {
    /// Convert to the canonical record, sharing among `group` when no
    /// beneficiaries were given
    ///
    /// An explicitly empty beneficiary list is kept as is; only an absent
    /// list falls back to the group.
    pub fn normalize(&self, group: &[String]) -> Expense {
        let (name, amount, beneficiaries) = match self {
            RawExpense::Positional(name, amount, beneficiaries) => (name, amount, beneficiaries),
            RawExpense::Object {
                name,
                amount,
                beneficiaries,
            } => (name, amount, beneficiaries),
        };

        Expense::new(
            name.clone(),
            amount.clone(),
            beneficiaries.clone().unwrap_or_else(|| group.to_vec()),
        )
    }
}

/// Normalize a list of expenses for a group
pub fn normalize(group: &[String], expenses: &[RawExpense]) -> Vec<Expense> {
    expenses
        .iter()
        .map(|expense| expense.normalize(group))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use bigdecimal::BigDecimal;

    fn group() -> Vec<String> {
        vec!["A".to_string(), "B".to_string(), "C".to_string()]
    }

    #[test]
    fn test_positional_becomes_canonical() {
        let expenses = normalize(&group(), &[("A", 30, vec!["B", "C"]).into()]);
        assert_eq!(
            expenses,
            vec![Expense::new(
                "A".to_string(),
                BigDecimal::from(30),
                vec!["B".to_string(), "C".to_string()]
            )]
        );
    }

    #[test]
    fn test_missing_beneficiaries_default_to_group() {
        let expenses = normalize(
            &group(),
            &[RawExpense::shared("A", 90), ("B", 12).into()],
        );
        assert_eq!(expenses[0].beneficiaries, group());
        assert_eq!(expenses[1].beneficiaries, group());
        assert_eq!(expenses[1].name, "B");
    }

    #[test]
    fn test_empty_beneficiaries_are_kept() {
        let expenses = normalize(&group(), &[RawExpense::for_members("A", 10, Vec::<String>::new())]);
        assert!(expenses[0].beneficiaries.is_empty());
    }

    #[test]
    fn test_input_is_left_untouched() {
        let raw = vec![RawExpense::shared("A", 90)];
        let before = raw.clone();
        let _ = normalize(&group(), &raw);
        assert_eq!(raw, before);
    }

    #[test]
    fn test_duplicate_beneficiaries_preserved() {
        let expenses = normalize(&group(), &[("A", 30, vec!["B", "B", "C"]).into()]);
        assert_eq!(expenses[0].share_count(), 3);
    }
}
