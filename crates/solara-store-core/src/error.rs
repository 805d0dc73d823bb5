//! Store errors

use thiserror::Error;

/// Authentication errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AuthError {
    /// Email or password missing from the login request
    #[error("email and password are required")]
    MissingCredentials,

    /// Unknown email or wrong password; deliberately indistinguishable so
    /// callers cannot probe which field was wrong
    #[error("invalid credentials")]
    InvalidCredentials,

    /// No token supplied on a protected request
    #[error("missing token")]
    MissingToken,

    /// Token supplied but not in the active-session set
    #[error("invalid token")]
    InvalidToken,
}

impl AuthError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            Self::MissingCredentials | Self::MissingToken => 400,
            Self::InvalidCredentials | Self::InvalidToken => 401,
        }
    }

    /// Get error code for API responses
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::MissingCredentials => "MISSING_CREDENTIALS",
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::MissingToken => "MISSING_TOKEN",
            Self::InvalidToken => "INVALID_TOKEN",
        }
    }
}

/// Cart validation errors
///
/// All map to 400 and carry no catalog detail beyond the code itself.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CartError {
    /// Request body had no product payload or no id field
    #[error("missing product")]
    MissingProduct,

    /// Path parameter was not a well-formed product id
    #[error("malformed product id")]
    MalformedProductId,

    /// Product id does not exist in the catalog
    #[error("invalid product")]
    InvalidProduct,

    /// Quantity missing, non-numeric, or below one
    #[error("invalid quantity")]
    InvalidQuantity,

    /// Product not present in the cart
    #[error("item not in cart")]
    NotInCart,
}

impl CartError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        400
    }

    /// Get error code for API responses
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::MissingProduct => "MISSING_PRODUCT",
            Self::MalformedProductId => "MALFORMED_PRODUCT_ID",
            Self::InvalidProduct => "INVALID_PRODUCT",
            Self::InvalidQuantity => "INVALID_QUANTITY",
            Self::NotInCart => "NOT_IN_CART",
        }
    }
}

/// Errors loading the seeded catalog and credential fixtures
#[derive(Error, Debug)]
pub enum DataError {
    /// Fixture file could not be read
    #[error("failed to read data file: {0}")]
    Io(#[from] std::io::Error),

    /// Fixture file was not valid JSON of the expected shape
    #[error("failed to parse data file: {0}")]
    Parse(#[from] serde_json::Error),
}
