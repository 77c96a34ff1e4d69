// Maps errors onto navigation targets for the hosting UI. Messages
// ride along as a URL-encoded query parameter so the destination page
// can display them.
use crate::access;
use crate::errors::AppError;

pub fn with_error(path: &str, err: &AppError) -> String {
    format!("{}?error={}", path, urlencoding::encode(&err.to_string()))
}

impl AppError {
    // Authentication failures send the user to the login page; form
    // and capacity errors stay on the current page and surface their
    // message inline.
    pub fn redirect_path(&self) -> Option<String> {
        match self {
            AppError::Auth(_) => Some(with_error(access::LOGIN, self)),
            _ => None,
        }
    }
}
