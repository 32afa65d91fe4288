//! Generated user repository.

use rand::Rng;
use tracing::info;

use segmentation::errors::RepositoryError;
use segmentation::models::{Mode, USER_BATCH_SIZE, User};
use segmentation::repository::UserRepository;

use crate::generators::UserGenerator;

/// Serves [`USER_BATCH_SIZE`] generated users for a mode.
///
/// Users are generated once, on construction. Without an explicit RNG the
/// data differs on every run.
#[derive(Debug, Clone)]
pub struct DbUserRepository {
    mode: Mode,
    users: Vec<User>,
}

impl DbUserRepository {
    /// Generates users for `mode` with the thread-local RNG.
    pub fn new(mode: Mode) -> Self {
        Self::with_rng(mode, &mut rand::thread_rng())
    }

    /// Parses `source` as a [`Mode`] and generates users for it.
    pub fn from_source(source: &str) -> Result<Self, RepositoryError> {
        Ok(Self::new(source.parse()?))
    }

    /// Generates users for `mode` with the given RNG.
    pub fn with_rng(mode: Mode, rng: &mut impl Rng) -> Self {
        let users = UserGenerator::new(mode).generate_batch(USER_BATCH_SIZE, rng);
        info!("Generated {} {} users", users.len(), mode);

        Self { mode, users }
    }
}

impl UserRepository for DbUserRepository {
    fn get_users(&self) -> &[User] {
        &self.users
    }

    fn mode(&self) -> Mode {
        self.mode
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn test_every_mode_yields_a_full_batch() {
        for mode in Mode::ALL {
            let repo = DbUserRepository::new(mode);
            assert_eq!(repo.get_users().len(), USER_BATCH_SIZE);
            assert_eq!(repo.mode(), mode);
        }
    }

    #[test]
    fn test_get_users_is_idempotent() {
        let repo = DbUserRepository::new(Mode::Purchase);
        assert_eq!(repo.get_users(), repo.get_users());
    }

    #[test]
    fn test_from_source() {
        let repo = DbUserRepository::from_source("lux").unwrap();
        assert_eq!(repo.mode(), Mode::Lux);

        let err = DbUserRepository::from_source("invalid").unwrap_err();
        assert!(matches!(err, RepositoryError::InvalidMode(ref s) if s == "invalid"));
    }

    #[test]
    fn test_seeded_repositories_match() {
        let a = DbUserRepository::with_rng(Mode::All, &mut StdRng::seed_from_u64(12345));
        let b = DbUserRepository::with_rng(Mode::All, &mut StdRng::seed_from_u64(12345));

        assert_eq!(a.get_users(), b.get_users());
    }
}
