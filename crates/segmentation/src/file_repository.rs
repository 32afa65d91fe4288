//! CSV-backed user repository.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::errors::RepositoryError;
use crate::models::{Mode, User};
use crate::repository::UserRepository;

/// Directory searched by [`FileUserRepository::new`].
pub const DEFAULT_DATA_DIR: &str = "files";

/// One CSV row: id, phone number, order count, total payment amount.
type UserRow = (String, String, u32, u64);

/// Loads users from a per-mode CSV file.
///
/// Each file starts with a header line, followed by one user per line.
/// Values are taken as-is; only their integer syntax is checked.
#[derive(Debug, Clone)]
pub struct FileUserRepository {
    mode: Mode,
    path: PathBuf,
    users: Vec<User>,
}

impl FileUserRepository {
    /// Loads the file for `mode` from [`DEFAULT_DATA_DIR`].
    pub fn new(mode: Mode) -> Result<Self, RepositoryError> {
        Self::in_dir(DEFAULT_DATA_DIR, mode)
    }

    /// Parses `source` as a [`Mode`] and loads from [`DEFAULT_DATA_DIR`].
    pub fn from_source(source: &str) -> Result<Self, RepositoryError> {
        Self::new(source.parse()?)
    }

    /// Loads the file for `mode` from `dir`.
    pub fn in_dir(dir: impl AsRef<Path>, mode: Mode) -> Result<Self, RepositoryError> {
        Self::from_path(dir.as_ref().join(Self::file_name(mode)), mode)
    }

    /// Loads an explicit file, tagging the result with `mode`.
    pub fn from_path(path: impl Into<PathBuf>, mode: Mode) -> Result<Self, RepositoryError> {
        let path = path.into();
        let users = read_users(&path)?;

        info!(
            "Loaded {} {} users from {}",
            users.len(),
            mode,
            path.display()
        );

        Ok(Self { mode, path, users })
    }

    /// File name holding the users for `mode`.
    pub fn file_name(mode: Mode) -> &'static str {
        match mode {
            Mode::All => "data_all_users.csv",
            Mode::Purchase => "data_customer.csv",
            Mode::Lux => "data_lux.csv",
        }
    }

    /// The file the users were loaded from.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl UserRepository for FileUserRepository {
    fn get_users(&self) -> &[User] {
        &self.users
    }

    fn mode(&self) -> Mode {
        self.mode
    }
}

fn read_users(path: &Path) -> Result<Vec<User>, RepositoryError> {
    let source_read = |source| RepositoryError::SourceRead {
        path: path.to_path_buf(),
        source,
    };

    // The reader owns the file handle; it is closed when this function returns.
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(source_read)?;

    reader
        .deserialize::<UserRow>()
        .map(|row| -> Result<User, RepositoryError> {
            let (id, phone_number, order_count, total_payment_amount) = row.map_err(source_read)?;
            Ok(User::new(id, phone_number, order_count, total_payment_amount))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn write_csv(dir: &Path, name: &str, contents: &str) -> PathBuf {
        let path = dir.join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_skips_header_and_keeps_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(
            dir.path(),
            "users.csv",
            "id,phone_number,order_count,total_payment_amount\n\
             aaaaaaaa,09120000001,0,0\n\
             bbbbbbbb,09120000002,2,1500000\n\
             cccccccc,09120000003,5,2000000\n",
        );

        let repo = FileUserRepository::from_path(&path, Mode::All).unwrap();
        let users = repo.get_users();

        assert_eq!(users.len(), 3);
        assert_eq!(users[0], User::new("aaaaaaaa", "09120000001", 0, 0));
        assert_eq!(users[2].id(), "cccccccc");
        assert_eq!(users[2].total_payment_amount(), 2_000_000);
        assert_eq!(repo.mode(), Mode::All);
        assert_eq!(repo.path(), path.as_path());
    }

    #[test]
    fn test_get_users_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(dir.path(), "users.csv", "h1,h2,h3,h4\nx,y,1,10\n");

        let repo = FileUserRepository::from_path(path, Mode::Purchase).unwrap();
        assert_eq!(repo.get_users(), repo.get_users());
        assert_eq!(repo.get_users().len(), 1);
    }

    #[test]
    fn test_in_dir_picks_file_per_mode() {
        let dir = tempfile::tempdir().unwrap();
        write_csv(dir.path(), "data_lux.csv", "h1,h2,h3,h4\nlux,0912,3,60000000\n");
        write_csv(dir.path(), "data_customer.csv", "h1,h2,h3,h4\nbuyer,0912,2,10040\n");

        let lux = FileUserRepository::in_dir(dir.path(), Mode::Lux).unwrap();
        assert_eq!(lux.get_users()[0].id(), "lux");

        let purchase = FileUserRepository::in_dir(dir.path(), Mode::Purchase).unwrap();
        assert_eq!(purchase.get_users()[0].id(), "buyer");

        // No data_all_users.csv in this directory
        let err = FileUserRepository::in_dir(dir.path(), Mode::All).unwrap_err();
        assert!(matches!(err, RepositoryError::SourceRead { .. }));
    }

    #[test]
    fn test_missing_file_is_source_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.csv");

        match FileUserRepository::from_path(&missing, Mode::Lux) {
            Err(RepositoryError::SourceRead { path, .. }) => assert_eq!(path, missing),
            other => panic!("expected SourceRead, got {other:?}"),
        }
    }

    #[test]
    fn test_malformed_rows_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let header = "id,phone_number,order_count,total_payment_amount\n";

        let cases = [
            ("not_a_number.csv", "a,0912,two,100\n"),
            ("negative.csv", "a,0912,1,-100\n"),
            ("short_row.csv", "a,0912,1\n"),
            ("late_failure.csv", "a,0912,1,100\nb,0912,1,1.5\n"),
        ];

        for (name, rows) in cases {
            let path = write_csv(dir.path(), name, &format!("{header}{rows}"));
            let result = FileUserRepository::from_path(path, Mode::All);
            assert!(
                matches!(result, Err(RepositoryError::SourceRead { .. })),
                "{name} should fail"
            );
        }
    }

    #[test]
    fn test_from_source_rejects_unknown_mode_before_reading() {
        let err = FileUserRepository::from_source("premium").unwrap_err();
        assert!(matches!(err, RepositoryError::InvalidMode(_)));
    }

    #[test]
    fn test_no_range_validation() {
        let dir = tempfile::tempdir().unwrap();
        // 99 orders is outside every generation range but still loads.
        let path = write_csv(dir.path(), "users.csv", "h1,h2,h3,h4\nx,y,99,1\n");

        let repo = FileUserRepository::from_path(path, Mode::Purchase).unwrap();
        assert_eq!(repo.get_users()[0].order_count(), 99);
    }
}
