use shared::{AppConfig, ConfigError};

/// Browser bundles have no process environment, so the values are baked in
/// when the wasm is built (`QUIZ_API_BASE_URL=... trunk build`).
pub fn load() -> Result<AppConfig, ConfigError> {
    AppConfig::from_values(
        option_env!("QUIZ_API_BASE_URL"),
        option_env!("QUIZ_API_TIMEOUT_MS"),
        option_env!("QUIZ_LOG_LEVEL"),
    )
}
