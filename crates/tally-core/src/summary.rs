//! Pure aggregation helpers computed from the state collections.

use std::collections::{BTreeMap, HashMap};

use chrono::{DateTime, NaiveDate, Utc};

use tally_domain::{Amounted, DateRange, DebtLoan, Transaction, TransactionKind};

/// Aggregates transaction and debt/loan data for presentation.
///
/// Every helper is a pure function over borrowed slices; nothing here reads
/// or writes storage.
pub struct SummaryService;

impl SummaryService {
    /// Net balance: income minus expense. Debt and loan entries do not move
    /// the balance until settled through regular transactions.
    pub fn balance(transactions: &[Transaction]) -> f64 {
        transactions.iter().fold(0.0, |total, txn| match txn.kind {
            TransactionKind::Income => total + txn.amount,
            TransactionKind::Expense => total - txn.amount,
            TransactionKind::Debt | TransactionKind::Loan => total,
        })
    }

    pub fn total_expenses(transactions: &[Transaction]) -> f64 {
        sum(transactions
            .iter()
            .filter(|txn| txn.kind == TransactionKind::Expense))
    }

    pub fn total_income(transactions: &[Transaction]) -> f64 {
        sum(transactions
            .iter()
            .filter(|txn| txn.kind == TransactionKind::Income))
    }

    /// Outstanding amount the owner owes other people.
    pub fn total_debt(entries: &[DebtLoan]) -> f64 {
        sum(entries
            .iter()
            .filter(|entry| entry.is_debt && entry.is_outstanding()))
    }

    /// Outstanding amount other people owe the owner.
    pub fn total_loans(entries: &[DebtLoan]) -> f64 {
        sum(entries
            .iter()
            .filter(|entry| !entry.is_debt && entry.is_outstanding()))
    }

    pub fn of_kind(transactions: &[Transaction], kind: TransactionKind) -> Vec<&Transaction> {
        transactions.iter().filter(|txn| txn.kind == kind).collect()
    }

    pub fn in_range<'a>(transactions: &'a [Transaction], range: &DateRange) -> Vec<&'a Transaction> {
        transactions
            .iter()
            .filter(|txn| range.contains(txn.date))
            .collect()
    }

    pub fn in_category<'a>(transactions: &'a [Transaction], category_id: &str) -> Vec<&'a Transaction> {
        transactions
            .iter()
            .filter(|txn| txn.category_id == category_id)
            .collect()
    }

    /// Transactions within the calendar month containing `reference`.
    pub fn in_month(transactions: &[Transaction], reference: DateTime<Utc>) -> Vec<&Transaction> {
        let range = DateRange::month_of(reference);
        Self::in_range(transactions, &range)
    }

    /// Expense totals per category id. Income, debt, and loan entries are
    /// excluded.
    pub fn category_totals(transactions: &[Transaction]) -> HashMap<String, f64> {
        let mut totals = HashMap::new();
        for txn in transactions {
            if txn.kind == TransactionKind::Expense {
                *totals.entry(txn.category_id.clone()).or_insert(0.0) += txn.amount;
            }
        }
        totals
    }

    /// Groups transactions by calendar day, earliest day first.
    pub fn group_by_day(transactions: &[Transaction]) -> BTreeMap<NaiveDate, Vec<&Transaction>> {
        let mut groups: BTreeMap<NaiveDate, Vec<&Transaction>> = BTreeMap::new();
        for txn in transactions {
            groups.entry(txn.date.date_naive()).or_default().push(txn);
        }
        groups
    }
}

fn sum<'a, T: Amounted + 'a>(items: impl Iterator<Item = &'a T>) -> f64 {
    items.map(Amounted::amount).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, TimeZone};

    fn at(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 10, 0, 0).unwrap()
    }

    fn expense(amount: f64, date: DateTime<Utc>, category_id: &str) -> Transaction {
        Transaction::new(amount, "expense", date, category_id, TransactionKind::Expense)
    }

    fn income(amount: f64, date: DateTime<Utc>) -> Transaction {
        Transaction::new(amount, "income", date, "8", TransactionKind::Income)
    }

    #[test]
    fn a_single_expense_pulls_the_balance_negative() {
        let transactions = vec![expense(50.0, at(2025, 6, 10), "1")];

        assert_eq!(SummaryService::balance(&transactions), -50.0);

        let monthly: Vec<Transaction> = SummaryService::in_month(&transactions, at(2025, 6, 20))
            .into_iter()
            .cloned()
            .collect();
        assert_eq!(SummaryService::total_expenses(&monthly), 50.0);
    }

    #[test]
    fn income_and_expense_net_out() {
        let transactions = vec![income(1000.0, at(2025, 6, 1)), expense(50.0, at(2025, 6, 10), "1")];
        assert_eq!(SummaryService::balance(&transactions), 950.0);
        assert_eq!(SummaryService::total_income(&transactions), 1000.0);
        assert_eq!(SummaryService::total_expenses(&transactions), 50.0);
    }

    #[test]
    fn debt_and_loan_entries_do_not_move_the_balance() {
        let date = at(2025, 6, 5);
        let transactions = vec![
            income(100.0, date),
            Transaction::new(40.0, "borrowed", date, "10", TransactionKind::Debt)
                .with_person("p1"),
            Transaction::new(25.0, "lent", date, "10", TransactionKind::Loan).with_person("p2"),
        ];
        assert_eq!(SummaryService::balance(&transactions), 100.0);
    }

    #[test]
    fn outstanding_totals_ignore_paid_entries() {
        let date = at(2025, 6, 5);
        let mut owed = DebtLoan::new("p1", 200.0, "Dinner", date, true);
        let lent = DebtLoan::new("p2", 80.0, "Tickets", date, false);
        let entries = vec![owed.clone(), lent];
        assert_eq!(SummaryService::total_debt(&entries), 200.0);
        assert_eq!(SummaryService::total_loans(&entries), 80.0);

        owed.mark_paid();
        let entries = vec![owed];
        assert_eq!(SummaryService::total_debt(&entries), 0.0);
    }

    #[test]
    fn in_range_is_half_open() {
        let range = DateRange::month_of(at(2025, 6, 15));
        let inside = expense(10.0, Utc.with_ymd_and_hms(2025, 6, 30, 23, 59, 0).unwrap(), "1");
        let outside = expense(10.0, Utc.with_ymd_and_hms(2025, 7, 1, 0, 0, 0).unwrap(), "1");
        let transactions = vec![inside, outside];

        let filtered = SummaryService::in_range(&transactions, &range);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].date.day(), 30);
    }

    #[test]
    fn of_kind_and_in_category_filter_without_reordering() {
        let transactions = vec![
            expense(10.0, at(2025, 6, 1), "1"),
            income(5.0, at(2025, 6, 2)),
            expense(20.0, at(2025, 6, 3), "1"),
            expense(30.0, at(2025, 6, 4), "2"),
        ];

        let expenses = SummaryService::of_kind(&transactions, TransactionKind::Expense);
        assert_eq!(expenses.len(), 3);
        assert!(expenses[0].amount < expenses[1].amount);

        let food = SummaryService::in_category(&transactions, "1");
        assert_eq!(food.len(), 2);
    }

    #[test]
    fn category_totals_sum_expenses_only() {
        let transactions = vec![
            expense(10.0, at(2025, 6, 1), "1"),
            expense(15.0, at(2025, 6, 2), "1"),
            expense(30.0, at(2025, 6, 3), "2"),
            income(500.0, at(2025, 6, 4)),
        ];

        let totals = SummaryService::category_totals(&transactions);
        assert_eq!(totals.get("1"), Some(&25.0));
        assert_eq!(totals.get("2"), Some(&30.0));
        assert_eq!(totals.get("8"), None);
    }

    #[test]
    fn group_by_day_orders_days_ascending() {
        let transactions = vec![
            expense(10.0, at(2025, 6, 20), "1"),
            expense(20.0, at(2025, 6, 1), "1"),
            expense(30.0, at(2025, 6, 20), "2"),
        ];

        let groups = SummaryService::group_by_day(&transactions);
        let days: Vec<_> = groups.keys().copied().collect();
        assert_eq!(days.len(), 2);
        assert!(days[0] < days[1]);
        assert_eq!(groups[&days[1]].len(), 2);
    }
}
