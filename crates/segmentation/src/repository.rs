//! The user repository contract.

use crate::models::{Mode, User};

/// A source of user records.
///
/// Implementations load their records once, when they are constructed for a
/// [`Mode`], and hand out the same read-only slice on every call. Concrete
/// repositories expose `new(mode)` and `from_source(&str)` constructors; the
/// trait itself only covers querying so it stays object safe.
pub trait UserRepository {
    /// Returns every loaded user in load order.
    fn get_users(&self) -> &[User];

    /// The mode this repository was constructed with.
    fn mode(&self) -> Mode;
}

