//! Unified error handling
//!
//! Error types are generated by a macro and carry an error code and a type
//! name next to the message.

use std::fmt;

/// Generates the error enum together with:
/// - `code()` - the error code
/// - `error_type()` - the error type name
/// - `message()` - the error detail
/// - snake_case convenience constructors
macro_rules! define_coursesystem_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone)]
        pub enum CourseSystemError {
            $($variant(String),)*
        }

        impl CourseSystemError {
            pub fn code(&self) -> &'static str {
                match self {
                    $(CourseSystemError::$variant(_) => $code,)*
                }
            }

            pub fn error_type(&self) -> &'static str {
                match self {
                    $(CourseSystemError::$variant(_) => $type_name,)*
                }
            }

            pub fn message(&self) -> &str {
                match self {
                    $(CourseSystemError::$variant(msg) => msg,)*
                }
            }
        }

        paste::paste! {
            impl CourseSystemError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        CourseSystemError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_coursesystem_errors! {
    DatabaseConfig("E001", "Database Configuration Error"),
    DatabaseConnection("E002", "Database Connection Error"),
    DatabaseOperation("E003", "Database Operation Error"),
    Validation("E004", "Validation Error"),
    NotFound("E005", "Resource Not Found"),
    Serialization("E006", "Serialization Error"),
    DateParse("E007", "Date Parse Error"),
}

impl CourseSystemError {
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for CourseSystemError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for CourseSystemError {}

impl From<sea_orm::DbErr> for CourseSystemError {
    fn from(err: sea_orm::DbErr) -> Self {
        CourseSystemError::DatabaseOperation(err.to_string())
    }
}

impl From<std::io::Error> for CourseSystemError {
    fn from(err: std::io::Error) -> Self {
        CourseSystemError::DatabaseOperation(err.to_string())
    }
}

impl From<serde_json::Error> for CourseSystemError {
    fn from(err: serde_json::Error) -> Self {
        CourseSystemError::Serialization(err.to_string())
    }
}

impl From<chrono::ParseError> for CourseSystemError {
    fn from(err: chrono::ParseError) -> Self {
        CourseSystemError::DateParse(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, CourseSystemError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(CourseSystemError::database_config("test").code(), "E001");
        assert_eq!(CourseSystemError::validation("test").code(), "E004");
        assert_eq!(CourseSystemError::not_found("test").code(), "E005");
    }

    #[test]
    fn test_error_types() {
        assert_eq!(
            CourseSystemError::database_operation("test").error_type(),
            "Database Operation Error"
        );
        assert_eq!(
            CourseSystemError::validation("test").error_type(),
            "Validation Error"
        );
    }

    #[test]
    fn test_error_message() {
        let err = CourseSystemError::validation("Invalid input");
        assert_eq!(err.message(), "Invalid input");
    }

    #[test]
    fn test_format_simple() {
        let err = CourseSystemError::not_found("Course not found");
        let formatted = err.format_simple();
        assert!(formatted.contains("Resource Not Found"));
        assert!(formatted.contains("Course not found"));
    }
}
