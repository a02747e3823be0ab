//! Bindings for mobile front ends.

pub mod errors;
pub mod logging;
pub mod objects;
pub mod tracker;

use crate::db;
use crate::uniffi_interface::errors::IronlogFfiError;

/// Registers the database path and brings its schema up to date.
#[uniffi::export(async_runtime = "tokio")]
pub async fn setup_database(path: String) -> Result<(), IronlogFfiError> {
    db::set_db_path(&path).await?;
    let pool = db::connect_pool(&path).await?;
    db::init_database(&pool).await?;
    pool.close().await;
    Ok(())
}
