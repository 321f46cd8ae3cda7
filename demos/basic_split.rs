//! Basic expense splitting example

use expense_split::utils::{apply_transactions, is_settled, total_balance, StrictExpenseValidator};
use expense_split::{for_group, parse_expenses, ExpenseSplitter, RawExpense};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("Expense Split - Weekend Trip\n");

    let splitter = for_group(["Alice", "Bob", "Carol", "Dave"]);

    // 1. Expenses can be built in code...
    let mut expenses = vec![
        RawExpense::shared("Alice", 400),
        ("Bob", 120, vec!["Bob", "Carol", "Dave"]).into(),
    ];

    // ...or decoded from JSON, in either form
    expenses.extend(parse_expenses(
        r#"[
            {"name": "Carol", "amount": 60, "for": ["Alice", "Dave"]},
            ["Dave", 40]
        ]"#,
    )?);

    // 2. Balances
    println!("Balances:");
    let balances = splitter.balances(&expenses);
    for (name, balance) in &balances {
        println!("  {name:>6}: {balance}");
    }
    println!("  total : {}\n", total_balance(&balances));

    // 3. Settlement
    println!("Payments:");
    let transactions = splitter.split(&expenses);
    for transaction in &transactions {
        println!(
            "  {} pays {} {}",
            transaction.from, transaction.to, transaction.amount
        );
    }
    println!(
        "\nSettled: {}\n",
        is_settled(&apply_transactions(&balances, &transactions))
    );

    // 4. Strict validation rejects amounts that do not split evenly
    let strict = ExpenseSplitter::with_validator(
        splitter.group().to_vec(),
        Box::new(StrictExpenseValidator),
    );
    match strict.try_split(&[RawExpense::shared("Bob", 10)]) {
        Ok(transactions) => println!("Split into {} payments", transactions.len()),
        Err(err) => println!("Rejected: {err}"),
    }

    Ok(())
}
