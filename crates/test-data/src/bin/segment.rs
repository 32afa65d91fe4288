//! Segments one batch of users and prints the result as JSON.
//!
//! Run with:
//! ```
//! USER_SOURCE=lux USER_REPOSITORY=file cargo run -p test-data --bin segment
//! ```
//!
//! `USER_REPOSITORY` is `db` (generated users, the default) or `file`.
//! `USER_DATA_DIR` overrides the directory of the CSV files.

use anyhow::bail;
use test_data::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = SegmentationConfig::from_env()?;
    let mode: Mode = std::env::var("USER_SOURCE")
        .unwrap_or_else(|_| Mode::default().to_string())
        .parse()?;
    let repository = std::env::var("USER_REPOSITORY").unwrap_or_else(|_| "db".to_string());

    let user_repo: Box<dyn UserRepository> = match repository.as_str() {
        "db" => Box::new(DbUserRepository::new(mode)),
        "file" => {
            let data_dir =
                std::env::var("USER_DATA_DIR").unwrap_or_else(|_| BUNDLED_DATA_DIR.to_string());
            Box::new(FileUserRepository::in_dir(data_dir, mode)?)
        }
        other => bail!("Unknown USER_REPOSITORY {other:?} (expected db or file)"),
    };

    let segmentation = UserSegmentation::new(user_repo.as_ref(), config);
    let segments = segmentation.segment_users();

    // Summary output
    tracing::info!("Segmented {} {} users", user_repo.get_users().len(), mode);
    for (segment, users) in segments.iter() {
        tracing::info!("  {}: {}", segment, users.len());
    }

    println!("{}", serde_json::to_string_pretty(&segments)?);

    Ok(())
}
