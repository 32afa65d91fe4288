use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::errors::RepositoryError;

/// Number of users a repository produces per load.
pub const USER_BATCH_SIZE: usize = 20;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    id: String,
    phone_number: String,
    order_count: u32,
    total_payment_amount: u64,
}

impl User {
    pub fn new(
        id: impl Into<String>,
        phone_number: impl Into<String>,
        order_count: u32,
        total_payment_amount: u64,
    ) -> Self {
        Self {
            id: id.into(),
            phone_number: phone_number.into(),
            order_count,
            total_payment_amount,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn phone_number(&self) -> &str {
        &self.phone_number
    }

    pub fn order_count(&self) -> u32 {
        self.order_count
    }

    pub fn total_payment_amount(&self) -> u64 {
        self.total_payment_amount
    }
}

/// Selects which population a repository loads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    /// Every user, including those without orders.
    #[default]
    All,
    /// Users with at least one order and small payment totals.
    Purchase,
    /// Users with at least one order and large payment totals.
    Lux,
}

impl Mode {
    pub const ALL: [Mode; 3] = [Mode::All, Mode::Purchase, Mode::Lux];

    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::All => "all",
            Mode::Purchase => "purchase",
            Mode::Lux => "lux",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = RepositoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Mode::All),
            "purchase" => Ok(Mode::Purchase),
            "lux" => Ok(Mode::Lux),
            other => Err(RepositoryError::InvalidMode(other.to_string())),
        }
    }
}
