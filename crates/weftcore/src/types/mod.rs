//! Built-in variable types, one module per payload family.

mod boolean;
mod connection;
mod credentials;
mod double;
mod integer;
mod long;
mod string;

pub use boolean::{BooleanArrayType, BooleanType};
pub use connection::FsConnectionType;
pub use credentials::CredentialsType;
pub use double::{DoubleArrayType, DoubleType};
pub use integer::{IntArrayType, IntType};
pub use long::{LongArrayType, LongType};
pub use string::{StringArrayType, StringType};

use crate::vartype::VariableType;

/// All built-in variable types, in the order the default registry
/// registers them.
pub fn builtin_types() -> Vec<&'static dyn VariableType> {
    vec![
        &BooleanType,
        &BooleanArrayType,
        &IntType,
        &IntArrayType,
        &LongType,
        &LongArrayType,
        &DoubleType,
        &DoubleArrayType,
        &StringType,
        &StringArrayType,
        &CredentialsType,
        &FsConnectionType,
    ]
}
