use serde::Serialize;

use crate::core::{Amount, Branch, FinancialRecord};

#[derive(Clone, Copy, PartialEq, Debug, Default, Serialize)]
pub struct Summary {
    pub total_income: Amount,
    pub total_expenses: Amount,
    pub profit_loss: Amount,
    pub record_count: usize
}

impl Summary {
    pub fn of<'a>(records: impl IntoIterator<Item = &'a FinancialRecord>) -> Summary {
        let (total_income, total_expenses, record_count) = records.into_iter()
            .fold((0.0, 0.0, 0), |(income, expenses, count), record| {
                (income + record.income, expenses + record.expense, count + 1)
            });

        Summary {
            total_income,
            total_expenses,
            profit_loss: total_income - total_expenses,
            record_count
        }
    }

    pub fn combine(&self, other: &Summary) -> Summary {
        let total_income = self.total_income + other.total_income;
        let total_expenses = self.total_expenses + other.total_expenses;
        Summary {
            total_income,
            total_expenses,
            profit_loss: total_income - total_expenses,
            record_count: self.record_count + other.record_count
        }
    }

    pub fn is_loss(&self) -> bool {
        self.profit_loss < 0.0
    }
}

/// Summary of one branch, labelled for display.
#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct BranchSummary {
    pub branch: Branch,
    pub name: &'static str,
    #[serde(flatten)]
    pub summary: Summary
}

impl BranchSummary {
    pub fn new(branch: Branch, summary: Summary) -> BranchSummary {
        BranchSummary { branch, name: branch.display_name(), summary }
    }
}

/// Formats an amount in Naira, e.g. `₦1,234.50`.
pub fn format_currency(amount: Amount) -> String {
    let fixed = format!("{:.2}", amount.abs());
    let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if amount < 0.0 && fixed != "0.00" { "-" } else { "" };
    format!("{}₦{}.{}", sign, grouped, fraction)
}


#[cfg(test)]
mod tests {
    use crate::core::summary::{format_currency, BranchSummary, Summary};
    use crate::core::{Branch, Category, FinancialRecord};

    use chrono::{NaiveDate, Utc};
    use rstest::rstest;
    use serde_json::json;

    fn record(income: f64, expense: f64) -> FinancialRecord {
        FinancialRecord {
            id: format!("{}-{}", income, expense),
            date: NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
            description: "entry".to_owned(),
            category: Category::Miscellaneous,
            income,
            expense,
            balance: income - expense,
            note: None,
            created_at: Utc::now()
        }
    }

    #[test]
    fn empty_summary() {
        let summary = Summary::of(&Vec::<FinancialRecord>::new());
        assert_eq!(summary, Summary::default());
        assert_eq!(summary.record_count, 0);
        assert!(!summary.is_loss());
    }

    #[test]
    fn income_and_expense() {
        let records = vec![record(1000.0, 0.0), record(0.0, 400.0)];
        let summary = Summary::of(&records);

        assert_eq!(summary.total_income, 1000.0);
        assert_eq!(summary.total_expenses, 400.0);
        assert_eq!(summary.profit_loss, 600.0);
        assert_eq!(summary.record_count, 2);
    }

    #[test]
    fn loss_and_combine() {
        let loss = Summary::of(&vec![record(100.0, 250.0)]);
        let gain = Summary::of(&vec![record(500.0, 0.0), record(20.0, 10.0)]);

        assert!(loss.is_loss());
        assert_eq!(loss.profit_loss, -150.0);

        let total = loss.combine(&gain);
        assert_eq!(total.total_income, 620.0);
        assert_eq!(total.total_expenses, 260.0);
        assert_eq!(total.profit_loss, 360.0);
        assert_eq!(total.record_count, 3);
    }

    #[test]
    fn branch_summary_serialize() {
        let summary = BranchSummary::new(Branch::Tassa, Summary::of(&vec![record(1000.0, 400.0)]));
        let value = serde_json::to_value(&summary).unwrap();
        assert_eq!(value, json!({
            "branch": "tassa",
            "name": "Tassa MCC",
            "total_income": 1000.0,
            "total_expenses": 400.0,
            "profit_loss": 600.0,
            "record_count": 1
        }));
    }

    #[rstest]
    #[case(0.0, "₦0.00")]
    #[case(999.5, "₦999.50")]
    #[case(1000.0, "₦1,000.00")]
    #[case(50000.0, "₦50,000.00")]
    #[case(1234567.891, "₦1,234,567.89")]
    #[case(-400.0, "-₦400.00")]
    fn currency(#[case] amount: f64, #[case] expected: &str) {
        assert_eq!(format_currency(amount), expected);
    }
}
