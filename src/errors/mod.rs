// Error taxonomy for the client core. Everything here is non-fatal
// and locally recoverable; decisions are synchronous return values,
// never panics.
use chrono::NaiveDate;
use thiserror::Error;

pub mod redirect;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Authentication error: {0}")]
    Auth(String),

    // Capacity rejections name the date so the message can be shown
    // to the user as-is.
    #[error("The selected date ({0}) has reached its maximum pickups. Choose another date.")]
    DateFull(NaiveDate),

    #[error("{0}")]
    Validation(String),

    #[error("Backend error: {0}")]
    Backend(String),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Malformed response: {0}")]
    Malformed(#[from] serde_json::Error),
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_full_message_names_the_date() {
        let err = AppError::DateFull(NaiveDate::from_ymd_opt(2025, 6, 10).unwrap());
        assert_eq!(
            err.to_string(),
            "The selected date (2025-06-10) has reached its maximum pickups. Choose another date."
        );
    }
}
