use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use colored::Colorize;
use serde::{Serialize, Deserialize};
use serde_with::skip_serializing_none;

use crate::core::error::{ParseCategoryError, ValidationError};
use crate::core::summary::format_currency;

pub type Amount = f64;
pub type RecordId = String;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Milk Sales")]
    MilkSales,
    Transport,
    Feed,
    Maintenance,
    Salaries,
    Miscellaneous
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::MilkSales,
        Category::Transport,
        Category::Feed,
        Category::Maintenance,
        Category::Salaries,
        Category::Miscellaneous
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Category::MilkSales => "Milk Sales",
            Category::Transport => "Transport",
            Category::Feed => "Feed",
            Category::Maintenance => "Maintenance",
            Category::Salaries => "Salaries",
            Category::Miscellaneous => "Miscellaneous"
        }
    }
}

impl FromStr for Category {
    type Err = ParseCategoryError;

    /// Accepts "Milk Sales", "milk-sales" and "milk_sales" alike.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().replace(['-', '_'], " ");
        Category::ALL.iter()
            .find(|category| category.name().eq_ignore_ascii_case(&wanted))
            .copied()
            .ok_or_else(|| ParseCategoryError(s.to_owned()))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// One income/expense entry of a branch ledger.
///
/// `balance` is stored as entered rather than derived on read, so it can
/// drift from `income - expense` after a partial update.
#[skip_serializing_none]
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct FinancialRecord {
    pub id: RecordId,
    pub date: NaiveDate,
    pub description: String,
    pub category: Category,
    pub income: Amount,
    pub expense: Amount,
    pub balance: Amount,
    pub note: Option<String>,
    pub created_at: DateTime<Utc>
}

impl FinancialRecord {
    pub fn from_new(new: NewRecord, id: RecordId, created_at: DateTime<Utc>) -> FinancialRecord {
        FinancialRecord {
            id,
            date: new.date,
            description: new.description,
            category: new.category,
            income: new.income,
            expense: new.expense,
            balance: new.balance,
            note: new.note,
            created_at
        }
    }

    pub fn is_balanced(&self) -> bool {
        self.balance == self.income - self.expense
    }
}

impl fmt::Display for FinancialRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} [{}]", self.date, self.description.bold(), self.category)?;
        if self.income > 0.0 {
            write!(f, " +{}", format_currency(self.income))?;
        }
        if self.expense > 0.0 {
            write!(f, " -{}", format_currency(self.expense))?;
        }
        if let Some(note) = &self.note {
            write!(f, " ({})", note)?;
        }
        return Ok(());
    }
}

/// Every record field except the ones a store assigns (`id`, `created_at`).
#[derive(Clone, PartialEq, Debug)]
pub struct NewRecord {
    pub date: NaiveDate,
    pub description: String,
    pub category: Category,
    pub income: Amount,
    pub expense: Amount,
    pub balance: Amount,
    pub note: Option<String>
}

impl NewRecord {
    /// Checks user input the way the entry forms do and derives the balance.
    pub fn validated(
        date: NaiveDate,
        description: &str,
        category: Category,
        income: Amount,
        expense: Amount,
        note: Option<&str>
    ) -> Result<NewRecord, ValidationError> {
        let description = description.trim();
        if description.is_empty() {
            return Err(ValidationError::MissingDescription);
        }

        check_amount("income", income)?;
        check_amount("expense", expense)?;
        if income == 0.0 && expense == 0.0 {
            return Err(ValidationError::NoAmount);
        }

        let note = note
            .map(str::trim)
            .filter(|note| !note.is_empty())
            .map(str::to_owned);

        Ok(NewRecord {
            date,
            description: description.to_owned(),
            category,
            income,
            expense,
            balance: income - expense,
            note
        })
    }
}

fn check_amount(field: &'static str, value: Amount) -> Result<(), ValidationError> {
    if !value.is_finite() || value < 0.0 {
        return Err(ValidationError::InvalidAmount { field, value });
    }
    Ok(())
}

/// Partial update of a record. Identity fields are not reachable from here.
///
/// `note` distinguishes "leave alone" (`None`) from "clear" (`Some(None)`).
#[derive(Clone, PartialEq, Debug, Default)]
pub struct RecordPatch {
    pub date: Option<NaiveDate>,
    pub description: Option<String>,
    pub category: Option<Category>,
    pub income: Option<Amount>,
    pub expense: Option<Amount>,
    pub balance: Option<Amount>,
    pub note: Option<Option<String>>
}

impl RecordPatch {
    /// A patch replacing every editable field with the draft's values.
    pub fn from_record(new: NewRecord) -> RecordPatch {
        RecordPatch {
            date: Some(new.date),
            description: Some(new.description),
            category: Some(new.category),
            income: Some(new.income),
            expense: Some(new.expense),
            balance: Some(new.balance),
            note: Some(new.note)
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == RecordPatch::default()
    }

    /// Lays the patch over `current`, runs the entry-form checks on the
    /// result and returns a full patch with the balance rederived.
    /// Any balance carried by `self` is ignored.
    pub fn revalidated(&self, current: &FinancialRecord) -> Result<RecordPatch, ValidationError> {
        let note = match &self.note {
            Some(note) => note.as_deref(),
            None => current.note.as_deref()
        };
        let new = NewRecord::validated(
            self.date.unwrap_or(current.date),
            self.description.as_deref().unwrap_or(&current.description),
            self.category.unwrap_or(current.category),
            self.income.unwrap_or(current.income),
            self.expense.unwrap_or(current.expense),
            note)?;
        Ok(RecordPatch::from_record(new))
    }

    /// Merges the patch into `record`. The balance is only changed when
    /// the patch carries one.
    pub fn apply_to(&self, record: &mut FinancialRecord) {
        if let Some(date) = self.date {
            record.date = date;
        }
        if let Some(description) = &self.description {
            record.description = description.clone();
        }
        if let Some(category) = self.category {
            record.category = category;
        }
        if let Some(income) = self.income {
            record.income = income;
        }
        if let Some(expense) = self.expense {
            record.expense = expense;
        }
        if let Some(balance) = self.balance {
            record.balance = balance;
        }
        if let Some(note) = &self.note {
            record.note = note.clone();
        }
    }
}
