pub mod db;
pub mod errors;
pub mod stats;
pub mod tracker;

pub use errors::IronlogError;
pub use tracker::Tracker;

#[cfg(feature = "uniffi")]
uniffi::setup_scaffolding!();
#[cfg(feature = "uniffi")]
pub mod uniffi_interface;
