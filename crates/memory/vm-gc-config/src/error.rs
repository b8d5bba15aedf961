//! Error types for GC option parsing

use crate::table::ValueKind;

/// GC option parsing result type
pub type GcOptResult<T> = Result<T, GcOptionError>;

/// Failure of a single field parser.
///
/// The parser consumed nothing usable; the destination was left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    /// No leading decimal digit
    #[error("invalid number")]
    InvalidNumber,

    /// First character is not one of `0 n N 1 y Y`
    #[error("invalid boolean")]
    InvalidBoolean,

    /// No valid float prefix
    #[error("invalid float")]
    InvalidFloat,
}

impl FieldError {
    /// Kind of value the failing parser expected
    pub fn expected_kind(self) -> ValueKind {
        match self {
            Self::InvalidNumber => ValueKind::Size,
            Self::InvalidBoolean => ValueKind::Bool,
            Self::InvalidFloat => ValueKind::Float,
        }
    }
}

/// Errors reported while parsing a GC option string
///
/// The `Display` output of each variant is the exact diagnostic line written
/// to the sink.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GcOptionError {
    /// Option name with no separator or with an empty value
    #[error("Missing argument for GC option '{name}'.")]
    MissingArgument {
        /// Option name as written
        name: String,
    },

    /// Name is not a recognized option
    #[error("Unknown GC option '{name}'.")]
    UnknownOption {
        /// Option name as written
        name: String,
    },

    /// Value text does not match the option's kind
    #[error("Expecting {kind} as argument for GC option '{name}', got '{text}' instead.")]
    InvalidValue {
        /// Option name
        name: String,
        /// Kind the option expects
        kind: ValueKind,
        /// Offending value text, up to the next whitespace
        text: String,
    },
}

impl GcOptionError {
    /// Create a missing argument error
    pub fn missing_argument(name: impl Into<String>) -> Self {
        Self::MissingArgument { name: name.into() }
    }

    /// Create an unknown option error
    pub fn unknown_option(name: impl Into<String>) -> Self {
        Self::UnknownOption { name: name.into() }
    }

    /// Create an invalid value error from a field parser failure
    pub fn invalid_value(name: impl Into<String>, err: FieldError, text: impl Into<String>) -> Self {
        Self::InvalidValue {
            name: name.into(),
            kind: err.expected_kind(),
            text: text.into(),
        }
    }

    /// Name of the option the error refers to
    pub fn option_name(&self) -> &str {
        match self {
            Self::MissingArgument { name }
            | Self::UnknownOption { name }
            | Self::InvalidValue { name, .. } => name,
        }
    }

    /// Underlying field parser failure, for `InvalidValue`
    pub fn field_error(&self) -> Option<FieldError> {
        match self {
            Self::InvalidValue { kind, .. } => Some(match kind {
                ValueKind::Size | ValueKind::Level => FieldError::InvalidNumber,
                ValueKind::Bool => FieldError::InvalidBoolean,
                ValueKind::Float => FieldError::InvalidFloat,
            }),
            _ => None,
        }
    }
}
