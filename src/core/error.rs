use std::error;

use crate::core::Amount;

/// Problems with user input, caught before anything reaches a store.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// The description is empty once surrounding whitespace is removed.
    MissingDescription,
    /// Neither an income nor an expense amount was entered.
    NoAmount,
    /// An amount is negative, infinite or NaN.
    InvalidAmount {
        field: &'static str,
        value: Amount
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::MissingDescription => {
                write!(f, "please enter a description")
            },
            ValidationError::NoAmount => {
                write!(f, "please enter either income or expense amount")
            },
            ValidationError::InvalidAmount { field, value } => {
                write!(f, "{} must be a non-negative amount, got {}", field, value)
            }
        }
    }
}

impl error::Error for ValidationError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseBranchError(pub String);

impl std::fmt::Display for ParseBranchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "no such branch: {} (expected tassa, falgore or dawanau)", self.0)
    }
}

impl error::Error for ParseBranchError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseCategoryError(pub String);

impl std::fmt::Display for ParseCategoryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "no such category: {}", self.0)
    }
}

impl error::Error for ParseCategoryError {}
