pub mod config;
pub mod error;
pub mod infrastructure;
pub mod models;
pub mod services;
pub mod utils;

pub use error::VerifyError;
pub use models::{TerminalState, UploadOutcome};
pub use services::upload_service::UploadCoordinator;
