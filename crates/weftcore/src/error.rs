use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SettingsError {
    #[error("Missing settings key: {0}")]
    MissingKey(String),

    #[error("Invalid entry kind for '{key}': expected {expected}, got {actual}")]
    WrongKind {
        key: String,
        expected: &'static str,
        actual: &'static str,
    },

    #[error("Invalid value for '{key}': {reason}")]
    InvalidValue { key: String, reason: String },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum VariableError {
    #[error("Invalid variable settings: {0}")]
    InvalidFormat(#[from] SettingsError),

    #[error("No variable type registered for identifier '{0}'")]
    UnknownType(String),

    #[error("Variables of type '{from}' cannot be converted to type '{to}'")]
    IncompatibleType { from: String, to: String },

    #[error("Conversion from '{from}' to '{to}' is declared but not implemented")]
    UnsupportedConversion { from: String, to: String },

    #[error("Variable type '{vtype}' cannot hold a {kind} payload")]
    PayloadMismatch { vtype: String, kind: &'static str },
}

impl VariableError {
    /// Conversion was requested between two types that are not connected.
    pub fn incompatible(from: &str, to: &str) -> Self {
        VariableError::IncompatibleType {
            from: from.to_string(),
            to: to.to_string(),
        }
    }

    /// A payload of the wrong kind was handed to a variable type.
    pub fn payload_mismatch(vtype: &str, kind: &'static str) -> Self {
        VariableError::PayloadMismatch {
            vtype: vtype.to_string(),
            kind,
        }
    }
}
