//! User segmentation over an injected user repository.
//!
//! The engine never decides where users come from. Callers build a
//! [`UserRepository`](repository::UserRepository) for a [`Mode`](models::Mode)
//! (a CSV-backed [`FileUserRepository`](file_repository::FileUserRepository)
//! here, or the synthetic repository in the `test-data` crate) and hand it to
//! [`UserSegmentation`](segments::UserSegmentation):
//!
//! ```rust,ignore
//! use segmentation::prelude::*;
//!
//! let repo = FileUserRepository::new(Mode::Lux)?;
//! let segmentation = UserSegmentation::new(&repo, SegmentationConfig::from_env()?);
//! let segments = segmentation.segment_users();
//! println!("{} lux users", segments.lux().len());
//! ```

pub mod config;
pub mod errors;
pub mod file_repository;
pub mod models;
pub mod repository;
pub mod segments;

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::config::SegmentationConfig;
    pub use crate::errors::{ConfigError, RepositoryError};
    pub use crate::file_repository::FileUserRepository;
    pub use crate::models::{Mode, USER_BATCH_SIZE, User};
    pub use crate::repository::UserRepository;
    pub use crate::segments::{SegmentName, Segments, UserSegmentation};
}
