//! Synthetic stand-in for the user database.
//!
//! The [`DbUserRepository`] produces a fresh batch of generated users for a
//! mode, the same way a query against the production user table would.

mod repository;

pub use repository::DbUserRepository;
