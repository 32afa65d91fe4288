//! Synthetic user data for segmentation.
//!
//! This crate stands in for the production user database: it generates users
//! whose order counts and payment totals follow the policy of each
//! [`Mode`](segmentation::models::Mode), and serves them through the
//! [`UserRepository`](segmentation::repository::UserRepository) contract.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use test_data::prelude::*;
//!
//! let repo = DbUserRepository::new(Mode::Purchase);
//! let segments = UserSegmentation::new(&repo, SegmentationConfig::default()).segment_users();
//! ```
//!
//! The CSV files under `files/` hold the same populations for
//! [`FileUserRepository`](segmentation::file_repository::FileUserRepository).

pub mod db;
pub mod generators;

/// Directory holding the bundled `data_*.csv` files.
pub const BUNDLED_DATA_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/files");

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::BUNDLED_DATA_DIR;
    pub use crate::db::DbUserRepository;
    pub use crate::generators::{UserGenConfig, UserGenerator};
    pub use segmentation::prelude::*;
}
