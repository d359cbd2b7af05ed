use crate::vartype::{VariableType, VariableValue, CFG_VALUE};
use crate::{Settings, Value, VariableError};

/// Variable type for a single string.
#[derive(Debug)]
pub struct StringType;

impl StringType {
    pub const IDENTIFIER: &'static str = "STRING";

    pub fn new_value(&self, v: impl Into<String>) -> VariableValue {
        VariableValue::new_unchecked(&StringType, Value::String(v.into()))
    }
}

impl VariableType for StringType {
    fn identifier(&self) -> &str {
        Self::IDENTIFIER
    }

    fn describes(&self, value: &Value) -> bool {
        matches!(value, Value::String(_))
    }

    fn load_value(&self, settings: &Settings) -> Result<VariableValue, VariableError> {
        Ok(self.new_value(settings.get_string(CFG_VALUE)?))
    }

    fn save_value(&self, settings: &mut Settings, value: &Value) -> Result<(), VariableError> {
        match value {
            Value::String(v) => {
                settings.set_string(CFG_VALUE, v.as_str());
                Ok(())
            }
            other => Err(VariableError::payload_mismatch(
                Self::IDENTIFIER,
                other.kind(),
            )),
        }
    }

    fn convertible_types(&self) -> Vec<&'static dyn VariableType> {
        vec![&StringType]
    }
}

/// Variable type for an array of strings.
#[derive(Debug)]
pub struct StringArrayType;

impl StringArrayType {
    pub const IDENTIFIER: &'static str = "STRING_ARRAY";

    pub fn new_value(&self, v: Vec<String>) -> VariableValue {
        VariableValue::new_unchecked(&StringArrayType, Value::StringArray(v))
    }
}

impl VariableType for StringArrayType {
    fn identifier(&self) -> &str {
        Self::IDENTIFIER
    }

    fn describes(&self, value: &Value) -> bool {
        matches!(value, Value::StringArray(_))
    }

    fn load_value(&self, settings: &Settings) -> Result<VariableValue, VariableError> {
        Ok(self.new_value(settings.get_string_array(CFG_VALUE)?.to_vec()))
    }

    fn save_value(&self, settings: &mut Settings, value: &Value) -> Result<(), VariableError> {
        match value {
            Value::StringArray(v) => {
                settings.set_string_array(CFG_VALUE, v.clone());
                Ok(())
            }
            other => Err(VariableError::payload_mismatch(
                Self::IDENTIFIER,
                other.kind(),
            )),
        }
    }

    fn convertible_types(&self) -> Vec<&'static dyn VariableType> {
        vec![&StringArrayType]
    }
}
