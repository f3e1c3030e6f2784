use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Deserialize};

use crate::core::error::ParseBranchError;

/// One milk collection centre of the cooperative. Each branch keeps
/// its own, fully independent ledger.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Branch {
    Tassa,
    Falgore,
    Dawanau
}

impl Branch {
    pub const ALL: [Branch; 3] = [Branch::Tassa, Branch::Falgore, Branch::Dawanau];

    pub fn id(&self) -> &'static str {
        match self {
            Branch::Tassa => "tassa",
            Branch::Falgore => "falgore",
            Branch::Dawanau => "dawanau"
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Branch::Tassa => "Tassa MCC",
            Branch::Falgore => "Falgore MCC",
            Branch::Dawanau => "Dawanau MCC"
        }
    }

    /// Table holding this branch's records in the relational backend.
    pub fn table_name(&self) -> &'static str {
        match self {
            Branch::Tassa => "mcc_tassa_records",
            Branch::Falgore => "mcc_falgore_records",
            Branch::Dawanau => "mcc_dawanau_records"
        }
    }
}

impl FromStr for Branch {
    type Err = ParseBranchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Branch::ALL.iter()
            .find(|branch| branch.id().eq_ignore_ascii_case(wanted))
            .copied()
            .ok_or_else(|| ParseBranchError(s.to_owned()))
    }
}

impl fmt::Display for Branch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}
