use crate::vartype::{VariableType, VariableValue, CFG_VALUE};
use crate::{Settings, Value, VariableError};

/// Variable type for a single boolean.
#[derive(Debug)]
pub struct BooleanType;

impl BooleanType {
    pub const IDENTIFIER: &'static str = "BOOLEAN";

    /// Wrap a boolean payload.
    pub fn new_value(&self, v: bool) -> VariableValue {
        VariableValue::new_unchecked(&BooleanType, Value::Bool(v))
    }
}

impl VariableType for BooleanType {
    fn identifier(&self) -> &str {
        Self::IDENTIFIER
    }

    fn describes(&self, value: &Value) -> bool {
        matches!(value, Value::Bool(_))
    }

    fn load_value(&self, settings: &Settings) -> Result<VariableValue, VariableError> {
        Ok(self.new_value(settings.get_bool(CFG_VALUE)?))
    }

    fn save_value(&self, settings: &mut Settings, value: &Value) -> Result<(), VariableError> {
        match value {
            Value::Bool(v) => {
                settings.set_bool(CFG_VALUE, *v);
                Ok(())
            }
            other => Err(VariableError::payload_mismatch(
                Self::IDENTIFIER,
                other.kind(),
            )),
        }
    }

    fn convertible_types(&self) -> Vec<&'static dyn VariableType> {
        vec![&BooleanType]
    }
}

/// Variable type for an array of booleans.
#[derive(Debug)]
pub struct BooleanArrayType;

impl BooleanArrayType {
    pub const IDENTIFIER: &'static str = "BOOLEAN_ARRAY";

    pub fn new_value(&self, v: Vec<bool>) -> VariableValue {
        VariableValue::new_unchecked(&BooleanArrayType, Value::BoolArray(v))
    }
}

impl VariableType for BooleanArrayType {
    fn identifier(&self) -> &str {
        Self::IDENTIFIER
    }

    fn describes(&self, value: &Value) -> bool {
        matches!(value, Value::BoolArray(_))
    }

    fn load_value(&self, settings: &Settings) -> Result<VariableValue, VariableError> {
        Ok(self.new_value(settings.get_bool_array(CFG_VALUE)?.to_vec()))
    }

    fn save_value(&self, settings: &mut Settings, value: &Value) -> Result<(), VariableError> {
        match value {
            Value::BoolArray(v) => {
                settings.set_bool_array(CFG_VALUE, v.clone());
                Ok(())
            }
            other => Err(VariableError::payload_mismatch(
                Self::IDENTIFIER,
                other.kind(),
            )),
        }
    }

    fn convertible_types(&self) -> Vec<&'static dyn VariableType> {
        vec![&BooleanArrayType]
    }
}
