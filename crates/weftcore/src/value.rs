use std::fmt;
use std::hash::{Hash, Hasher};

/// Named credential pair carried between workflow steps.
///
/// Compared and hashed by all of its fields; two credentials with the
/// same name but different secrets are distinct.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Credentials {
    name: String,
    login: String,
    password: String,
}

impl Credentials {
    pub fn new(
        name: impl Into<String>,
        login: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            login: login.into(),
            password: password.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn login(&self) -> &str {
        &self.login
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

/// Handle to a file-system connection.
///
/// Only the lookup key travels with the variable; resolving the key to a
/// live connection is the job of whatever owns the connection pool.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FsConnectionHandle {
    key: String,
}

impl FsConnectionHandle {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

/// Payload of a flow variable.
///
/// Exactly one case per supported payload kind; every case always holds a
/// payload, so a constructed value can never be empty.
///
/// Doubles compare and hash by bit pattern: NaN equals NaN and negative
/// zero is distinct from zero.
#[derive(Debug, Clone)]
pub enum Value {
    Bool(bool),
    BoolArray(Vec<bool>),
    Int(i32),
    IntArray(Vec<i32>),
    Long(i64),
    LongArray(Vec<i64>),
    Double(f64),
    DoubleArray(Vec<f64>),
    String(String),
    StringArray(Vec<String>),
    Credentials(Credentials),
    FsConnection(FsConnectionHandle),
}

impl Value {
    /// Short kind name used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Bool(_) => "boolean",
            Value::BoolArray(_) => "boolean array",
            Value::Int(_) => "integer",
            Value::IntArray(_) => "integer array",
            Value::Long(_) => "long",
            Value::LongArray(_) => "long array",
            Value::Double(_) => "double",
            Value::DoubleArray(_) => "double array",
            Value::String(_) => "string",
            Value::StringArray(_) => "string array",
            Value::Credentials(_) => "credentials",
            Value::FsConnection(_) => "fs connection",
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i32> {
        match self {
            Value::Int(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_long(&self) -> Option<i64> {
        match self {
            Value::Long(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_double(&self) -> Option<f64> {
        match self {
            Value::Double(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_bool_array(&self) -> Option<&[bool]> {
        match self {
            Value::BoolArray(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_int_array(&self) -> Option<&[i32]> {
        match self {
            Value::IntArray(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_long_array(&self) -> Option<&[i64]> {
        match self {
            Value::LongArray(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_double_array(&self) -> Option<&[f64]> {
        match self {
            Value::DoubleArray(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_string_array(&self) -> Option<&[String]> {
        match self {
            Value::StringArray(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_credentials(&self) -> Option<&Credentials> {
        match self {
            Value::Credentials(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_fs_connection(&self) -> Option<&FsConnectionHandle> {
        match self {
            Value::FsConnection(v) => Some(v),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Long(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Double(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl From<Credentials> for Value {
    fn from(v: Credentials) -> Self {
        Value::Credentials(v)
    }
}

impl From<FsConnectionHandle> for Value {
    fn from(v: FsConnectionHandle) -> Self {
        Value::FsConnection(v)
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::BoolArray(a), Value::BoolArray(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::IntArray(a), Value::IntArray(b)) => a == b,
            (Value::Long(a), Value::Long(b)) => a == b,
            (Value::LongArray(a), Value::LongArray(b)) => a == b,
            (Value::Double(a), Value::Double(b)) => a.to_bits() == b.to_bits(),
            (Value::DoubleArray(a), Value::DoubleArray(b)) => {
                a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.to_bits() == y.to_bits())
            }
            (Value::String(a), Value::String(b)) => a == b,
            (Value::StringArray(a), Value::StringArray(b)) => a == b,
            (Value::Credentials(a), Value::Credentials(b)) => a == b,
            (Value::FsConnection(a), Value::FsConnection(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Value::Bool(v) => v.hash(state),
            Value::BoolArray(v) => v.hash(state),
            Value::Int(v) => v.hash(state),
            Value::IntArray(v) => v.hash(state),
            Value::Long(v) => v.hash(state),
            Value::LongArray(v) => v.hash(state),
            Value::Double(v) => v.to_bits().hash(state),
            Value::DoubleArray(v) => {
                v.len().hash(state);
                for d in v {
                    d.to_bits().hash(state);
                }
            }
            Value::String(v) => v.hash(state),
            Value::StringArray(v) => v.hash(state),
            Value::Credentials(v) => v.hash(state),
            Value::FsConnection(v) => v.hash(state),
        }
    }
}

fn write_array<T: fmt::Display>(f: &mut fmt::Formatter<'_>, items: &[T]) -> fmt::Result {
    write!(f, "[")?;
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", item)?;
    }
    write!(f, "]")
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(v) => write!(f, "{}", v),
            Value::BoolArray(v) => write_array(f, v),
            Value::Int(v) => write!(f, "{}", v),
            Value::IntArray(v) => write_array(f, v),
            Value::Long(v) => write!(f, "{}", v),
            Value::LongArray(v) => write_array(f, v),
            Value::Double(v) => write!(f, "{}", v),
            Value::DoubleArray(v) => write_array(f, v),
            Value::String(v) => write!(f, "{}", v),
            Value::StringArray(v) => write_array(f, v),
            // Secrets never render; only the credential's name does.
            Value::Credentials(v) => write!(f, "Credentials: {}", v.name()),
            Value::FsConnection(v) => write!(f, "{}", v.key()),
        }
    }
}
