use crate::vartype::{VariableType, VariableValue, CFG_VALUE};
use crate::{Settings, Value, VariableError};

/// Variable type for a single 64-bit integer.
#[derive(Debug)]
pub struct LongType;

impl LongType {
    pub const IDENTIFIER: &'static str = "LONG";

    pub fn new_value(&self, v: i64) -> VariableValue {
        VariableValue::new_unchecked(&LongType, Value::Long(v))
    }
}

impl VariableType for LongType {
    fn identifier(&self) -> &str {
        Self::IDENTIFIER
    }

    fn describes(&self, value: &Value) -> bool {
        matches!(value, Value::Long(_))
    }

    fn load_value(&self, settings: &Settings) -> Result<VariableValue, VariableError> {
        Ok(self.new_value(settings.get_long(CFG_VALUE)?))
    }

    fn save_value(&self, settings: &mut Settings, value: &Value) -> Result<(), VariableError> {
        match value {
            Value::Long(v) => {
                settings.set_long(CFG_VALUE, *v);
                Ok(())
            }
            other => Err(VariableError::payload_mismatch(
                Self::IDENTIFIER,
                other.kind(),
            )),
        }
    }

    fn convertible_types(&self) -> Vec<&'static dyn VariableType> {
        vec![&LongType]
    }
}

/// Variable type for an array of 64-bit integers.
#[derive(Debug)]
pub struct LongArrayType;

impl LongArrayType {
    pub const IDENTIFIER: &'static str = "LONG_ARRAY";

    pub fn new_value(&self, v: Vec<i64>) -> VariableValue {
        VariableValue::new_unchecked(&LongArrayType, Value::LongArray(v))
    }
}

impl VariableType for LongArrayType {
    fn identifier(&self) -> &str {
        Self::IDENTIFIER
    }

    fn describes(&self, value: &Value) -> bool {
        matches!(value, Value::LongArray(_))
    }

    fn load_value(&self, settings: &Settings) -> Result<VariableValue, VariableError> {
        Ok(self.new_value(settings.get_long_array(CFG_VALUE)?.to_vec()))
    }

    fn save_value(&self, settings: &mut Settings, value: &Value) -> Result<(), VariableError> {
        match value {
            Value::LongArray(v) => {
                settings.set_long_array(CFG_VALUE, v.clone());
                Ok(())
            }
            other => Err(VariableError::payload_mismatch(
                Self::IDENTIFIER,
                other.kind(),
            )),
        }
    }

    fn convertible_types(&self) -> Vec<&'static dyn VariableType> {
        vec![&LongArrayType]
    }
}
