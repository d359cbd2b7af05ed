//! Core typed-value system for the weft workflow platform.
//!
//! Flow variables are the named, typed values workflow steps exchange.
//! Each supported payload kind is owned by a [`VariableType`] singleton
//! that knows how to persist, reload and convert its values; the
//! [`VariableTypeRegistry`] resolves persisted variables back to their
//! types through a stable string identifier.

mod error;
mod registry;
mod settings;
pub mod types;
mod value;
mod variable;
mod vartype;

pub use error::{SettingsError, VariableError};
pub use registry::VariableTypeRegistry;
pub use settings::{Settings, SettingsEntry};
pub use value::{Credentials, FsConnectionHandle, Value};
pub use variable::FlowVariable;
pub use vartype::{VariableType, VariableValue, CFG_CLASS, CFG_VALUE};

/// Result type for variable operations
pub type Result<T> = std::result::Result<T, VariableError>;
