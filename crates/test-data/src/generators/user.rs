//! User generation with purchase histories.

use std::ops::RangeInclusive;

use rand::Rng;

use segmentation::models::{Mode, User};

/// Prefix shared by every generated phone number.
const PHONE_PREFIX: &str = "0912";

/// Length of generated user ids.
const ID_LEN: usize = 8;

/// How the total payment amount is derived from the order count.
#[derive(Debug, Clone)]
pub enum PaymentModel {
    /// `order_count * average`, with the average drawn from the range.
    PerOrder { average: RangeInclusive<u64> },
    /// `base + step * k`, with `k` drawn from the range. Ignores the order count.
    Stepped {
        base: u64,
        step: u64,
        steps: RangeInclusive<u64>,
    },
}

/// Configuration for user generation.
#[derive(Debug, Clone)]
pub struct UserGenConfig {
    /// Range the order count is drawn from.
    pub order_count: RangeInclusive<u32>,
    /// Payment amount derivation.
    pub payment: PaymentModel,
}

impl UserGenConfig {
    /// Generation policy for the population selected by `mode`.
    pub fn for_mode(mode: Mode) -> Self {
        match mode {
            Mode::All => Self {
                order_count: 0..=2,
                payment: PaymentModel::PerOrder {
                    average: 100_000..=20_000_000,
                },
            },
            Mode::Purchase => Self {
                order_count: 1..=5,
                payment: PaymentModel::Stepped {
                    base: 10_000,
                    step: 20,
                    steps: 0..=10,
                },
            },
            Mode::Lux => Self {
                order_count: 1..=5,
                payment: PaymentModel::PerOrder {
                    average: 15_000_000..=20_000_000,
                },
            },
        }
    }
}

/// Generates users with random purchase histories.
pub struct UserGenerator {
    config: UserGenConfig,
}

impl UserGenerator {
    /// Creates a generator following the policy for `mode`.
    pub fn new(mode: Mode) -> Self {
        Self::with_config(UserGenConfig::for_mode(mode))
    }

    /// Creates a generator with custom configuration.
    pub fn with_config(config: UserGenConfig) -> Self {
        Self { config }
    }

    /// Generates a single user.
    pub fn generate(&self, rng: &mut impl Rng) -> User {
        let id = self.generate_id(rng);
        let phone_number = self.generate_phone_number(rng);
        let order_count = rng.gen_range(self.config.order_count.clone());
        let total_payment_amount = self.generate_payment(order_count, rng);

        User::new(id, phone_number, order_count, total_payment_amount)
    }

    /// Generates multiple users.
    pub fn generate_batch(&self, count: usize, rng: &mut impl Rng) -> Vec<User> {
        (0..count).map(|_| self.generate(rng)).collect()
    }

    /// Lowercase ASCII id.
    fn generate_id(&self, rng: &mut impl Rng) -> String {
        (0..ID_LEN)
            .map(|_| char::from(rng.gen_range(b'a'..=b'z')))
            .collect()
    }

    fn generate_phone_number(&self, rng: &mut impl Rng) -> String {
        let subscriber: u32 = rng.gen_range(0..10_000_000);
        format!("{PHONE_PREFIX}{subscriber:07}")
    }

    fn generate_payment(&self, order_count: u32, rng: &mut impl Rng) -> u64 {
        match &self.config.payment {
            PaymentModel::PerOrder { average } => {
                u64::from(order_count) * rng.gen_range(average.clone())
            }
            PaymentModel::Stepped { base, step, steps } => base + step * rng.gen_range(steps.clone()),
        }
    }
}
