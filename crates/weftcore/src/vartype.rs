use std::fmt;
use std::hash::{Hash, Hasher};

use crate::{Settings, Value, VariableError};

/// Settings key holding the type identifier of a persisted variable.
pub const CFG_CLASS: &str = "class";
/// Settings key holding the payload of a persisted variable.
pub const CFG_VALUE: &str = "value";

/// A variable type: the descriptor that owns one payload kind.
///
/// Implementations are stateless singletons registered once per process
/// (see [`crate::VariableTypeRegistry`]). A descriptor knows how to
/// persist and reload its payload kind and which other types its values
/// can be converted to.
pub trait VariableType: fmt::Debug + Send + Sync {
    /// Stable, non-empty identifier. This is what gets written as the
    /// `class` discriminator when a value is persisted, so changing it
    /// breaks every stored variable of this type.
    fn identifier(&self) -> &str;

    /// Whether this type owns payloads of the given kind.
    fn describes(&self, value: &Value) -> bool;

    /// Reconstruct a value from a settings tree written by
    /// [`VariableValue::save`]. Reads only the payload entry; the
    /// discriminator has already been consumed by the registry.
    fn load_value(&self, settings: &Settings) -> Result<VariableValue, VariableError>;

    /// Write the payload entry into `settings`. Fails with
    /// [`VariableError::PayloadMismatch`] when handed a payload this type
    /// does not describe.
    fn save_value(&self, settings: &mut Settings, value: &Value) -> Result<(), VariableError>;

    /// Every type a value of this type can be converted to, including
    /// this type itself. Edges are enumerated explicitly per type and are
    /// never chained: listing A -> B and B -> C does not make A -> C
    /// convertible.
    fn convertible_types(&self) -> Vec<&'static dyn VariableType>;

    /// Whether `target` is in this type's conversion set.
    fn is_convertible(&self, target: &dyn VariableType) -> bool {
        self.convertible_types()
            .iter()
            .any(|t| t.identifier() == target.identifier())
    }

    /// Convert `value` to the payload kind of `target`.
    ///
    /// The default implementation handles the identity edge only; types
    /// that list further conversion targets override it.
    fn convert(
        &self,
        value: &VariableValue,
        target: &'static dyn VariableType,
    ) -> Result<Value, VariableError> {
        if value.variable_type().identifier() != self.identifier() {
            return Err(VariableError::incompatible(
                value.variable_type().identifier(),
                self.identifier(),
            ));
        }
        if target.identifier() != self.identifier() {
            return Err(VariableError::incompatible(
                self.identifier(),
                target.identifier(),
            ));
        }
        Ok(value.get().clone())
    }
}

/// A payload paired with the variable type that owns it.
///
/// Equality and hashing look at the type identifier and the payload, so
/// two values loaded independently from the same settings tree compare
/// equal.
#[derive(Debug, Clone)]
pub struct VariableValue {
    vtype: &'static dyn VariableType,
    value: Value,
}

impl VariableValue {
    /// Pair a payload with a type, checking that the type describes it.
    pub fn new(vtype: &'static dyn VariableType, value: Value) -> Result<Self, VariableError> {
        if !vtype.describes(&value) {
            return Err(VariableError::payload_mismatch(
                vtype.identifier(),
                value.kind(),
            ));
        }
        Ok(Self { vtype, value })
    }

    /// Pairing for call sites that have already checked the payload kind.
    pub(crate) fn new_unchecked(vtype: &'static dyn VariableType, value: Value) -> Self {
        Self { vtype, value }
    }

    /// The type that owns this value.
    pub fn variable_type(&self) -> &'static dyn VariableType {
        self.vtype
    }

    /// Borrow the payload as stored, without conversion.
    pub fn get(&self) -> &Value {
        &self.value
    }

    /// The payload converted to `target`'s kind.
    ///
    /// Fails with [`VariableError::IncompatibleType`] unless the owning
    /// type lists `target` in its conversion set.
    pub fn get_as(&self, target: &'static dyn VariableType) -> Result<Value, VariableError> {
        if !self.vtype.is_convertible(target) {
            return Err(VariableError::incompatible(
                self.vtype.identifier(),
                target.identifier(),
            ));
        }
        self.vtype.convert(self, target)
    }

    /// Persist this value: the discriminator entry first, then the
    /// payload entry via the owning type.
    pub fn save(&self, settings: &mut Settings) -> Result<(), VariableError> {
        settings.set_string(CFG_CLASS, self.vtype.identifier());
        self.vtype.save_value(settings, &self.value)
    }
}

impl PartialEq for VariableValue {
    fn eq(&self, other: &Self) -> bool {
        self.vtype.identifier() == other.vtype.identifier() && self.value == other.value
    }
}

impl Eq for VariableValue {}

impl Hash for VariableValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.vtype.identifier().hash(state);
        self.value.hash(state);
    }
}

impl fmt::Display for VariableValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.value.fmt(f)
    }
}
