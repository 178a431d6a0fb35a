use dioxus_logger::tracing::Level;

use crate::error::AppError;

/// Initializes the process-wide tracing subscriber at INFO level.
///
/// # Returns
/// - `Ok(())` - Logging initialized
/// - `Err(AppError::InternalError)` - A global subscriber was already installed
pub fn init_logging() -> Result<(), AppError> {
    dioxus_logger::init(Level::INFO)
        .map_err(|e| AppError::InternalError(format!("Failed to initialize logging: {}", e)))
}

/// Builds the HTTP client used to query public IP providers.
///
/// The client keeps reqwest's defaults: no custom headers and no request timeout, so
/// each provider attempt is bounded only by the underlying connection behaviour.
///
/// # Returns
/// - `Ok(reqwest::Client)` - Client shared by every IP resolution
/// - `Err(AppError::ReqwestErr)` - TLS backend initialization failed
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    Ok(reqwest::Client::builder().build()?)
}
