use serde::ser::{Serialize, SerializeStruct, Serializer};
use std::collections::HashMap;
use std::error::Error;
use std::fmt;
use validator::{ValidationError, ValidationErrors};

#[derive(Clone, Debug, PartialEq)]
pub enum ErrorCode {
    InvalidInput,
    MissingInput,
    NoResults,
    ReferenceNotFound,
    DuplicateKeyError,
    ConnectionError,
    InternalError,
    ValidationError {
        errors: HashMap<&'static str, Vec<ValidationError>>,
    },
    Unknown,
}

pub fn get_error_message(code: &ErrorCode) -> (i32, String) {
    use self::ErrorCode::*;
    // In general, these errors try to match the HTTP status codes
    match code {
        // Input errors - 1000 range
        InvalidInput => (1000, "Invalid input".to_string()),
        MissingInput => (1100, "Missing input".to_string()),
        // No results - 2000 range. The query was fine, but the rows were not there
        NoResults => (2000, "No results".to_string()),
        ReferenceNotFound => (2200, "Referenced record does not exist".to_string()),
        // Constraint violations - 3000 range
        DuplicateKeyError => (3400, "Duplicate key error".to_string()),
        ConnectionError => (4000, "Connection error".to_string()),
        // Internal server error - 5000, similar to the HTTP 500 errors
        InternalError => (5000, "Internal error".to_string()),
        ValidationError { errors: _ } => (7200, "Validation failed:".to_string()),
        // Try not to use this error
        Unknown => (10, "Unknown database error".to_string()),
    }
}

#[derive(Debug, PartialEq)]
pub struct DatabaseError {
    pub code: i32,
    pub message: String,
    pub cause: Option<String>,
    pub error_code: ErrorCode,
}

impl fmt::Display for DatabaseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        if let Some(ref cause) = self.cause {
            write!(f, "\nCaused by: {}", cause)?;
        }
        Ok(())
    }
}

impl Error for DatabaseError {
    fn description(&self) -> &str {
        &self.message
    }
}

impl Serialize for DatabaseError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        // 3 is the number of fields in the struct.
        let mut state = serializer.serialize_struct("DatabaseError", 3)?;
        state.serialize_field("code", &self.code)?;
        state.serialize_field("message", &self.message)?;
        state.serialize_field("cause", &self.cause)?;
        state.end()
    }
}

impl DatabaseError {
    pub fn new(error_code: ErrorCode, cause: Option<String>) -> DatabaseError {
        let (code, message) = get_error_message(&error_code);

        DatabaseError {
            code,
            message,
            cause,
            error_code,
        }
    }

    pub fn no_results<T>(message: &str) -> Result<T, DatabaseError> {
        Err(DatabaseError::new(ErrorCode::NoResults, Some(message.to_string())))
    }

    pub fn reference_not_found<T>(message: &str) -> Result<T, DatabaseError> {
        Err(DatabaseError::new(
            ErrorCode::ReferenceNotFound,
            Some(message.to_string()),
        ))
    }

    pub fn duplicate_key<T>(message: &str) -> Result<T, DatabaseError> {
        Err(DatabaseError::new(
            ErrorCode::DuplicateKeyError,
            Some(message.to_string()),
        ))
    }
}

impl From<ValidationErrors> for DatabaseError {
    fn from(e: ValidationErrors) -> Self {
        let message = e.to_string();
        let errors = e
            .field_errors()
            .into_iter()
            .map(|(field, errors)| (field, errors.clone()))
            .collect();
        DatabaseError::new(ErrorCode::ValidationError { errors }, Some(message))
    }
}

pub trait Optional<U> {
    fn optional(self) -> Result<Option<U>, DatabaseError>;
}

impl<U> Optional<U> for Result<U, DatabaseError> {
    fn optional(self) -> Result<Option<U>, DatabaseError> {
        match self {
            Ok(u) => Ok(Some(u)),
            Err(e) => match e.code {
                2000 => Ok(None),
                _ => Err(e),
            },
        }
    }
}

#[test]
fn error_with_unknown_code() {
    let err = DatabaseError::new(ErrorCode::Unknown, None);
    assert_eq!(err.code, 10);
    assert!(err.cause.is_none());
    assert_eq!(format!("{}", err), "[10] Unknown database error");
}

#[test]
fn error_with_known_code() {
    let err = DatabaseError::new(ErrorCode::InvalidInput, None);
    assert_eq!(err.message, "Invalid input");
    assert_eq!(err.code, 1000);
    assert!(err.cause.is_none());
    assert_eq!(format!("{}", err), "[1000] Invalid input");
}

#[test]
fn error_with_cause() {
    let cause = DatabaseError::new(ErrorCode::Unknown, None);
    let err = DatabaseError::new(ErrorCode::InvalidInput, Some(cause.message.clone()));
    assert_eq!(err.code, 1000);
    assert!(err.cause.is_some());
    assert_eq!(
        format!("{}", err),
        "\
[1000] Invalid input
Caused by: Unknown database error"
    );
}

#[test]
fn optional_absorbs_no_results_only() {
    let missing: Result<u32, DatabaseError> = DatabaseError::no_results("nope");
    assert_eq!(missing.optional().unwrap(), None);

    let conflict: Result<u32, DatabaseError> = DatabaseError::duplicate_key("dup");
    assert!(conflict.optional().is_err());
}
