use crate::types::StringType;
use crate::vartype::{VariableType, VariableValue, CFG_VALUE};
use crate::{Settings, Value, VariableError};

/// Variable type for a single 64-bit float.
#[derive(Debug)]
pub struct DoubleType;

impl DoubleType {
    pub const IDENTIFIER: &'static str = "DOUBLE";

    pub fn new_value(&self, v: f64) -> VariableValue {
        VariableValue::new_unchecked(&DoubleType, Value::Double(v))
    }
}

impl VariableType for DoubleType {
    fn identifier(&self) -> &str {
        Self::IDENTIFIER
    }

    fn describes(&self, value: &Value) -> bool {
        matches!(value, Value::Double(_))
    }

    fn load_value(&self, settings: &Settings) -> Result<VariableValue, VariableError> {
        Ok(self.new_value(settings.get_double(CFG_VALUE)?))
    }

    fn save_value(&self, settings: &mut Settings, value: &Value) -> Result<(), VariableError> {
        match value {
            Value::Double(v) => {
                settings.set_double(CFG_VALUE, *v);
                Ok(())
            }
            other => Err(VariableError::payload_mismatch(
                Self::IDENTIFIER,
                other.kind(),
            )),
        }
    }

    fn convertible_types(&self) -> Vec<&'static dyn VariableType> {
        vec![&DoubleType, &StringType]
    }

    fn convert(
        &self,
        value: &VariableValue,
        target: &'static dyn VariableType,
    ) -> Result<Value, VariableError> {
        let Some(d) = value.get().as_double() else {
            return Err(VariableError::incompatible(
                value.variable_type().identifier(),
                Self::IDENTIFIER,
            ));
        };
        match target.identifier() {
            Self::IDENTIFIER => Ok(Value::Double(d)),
            StringType::IDENTIFIER => Ok(Value::String(value.get().to_string())),
            _ => Err(VariableError::incompatible(
                Self::IDENTIFIER,
                target.identifier(),
            )),
        }
    }
}

/// Variable type for an array of 64-bit floats.
#[derive(Debug)]
pub struct DoubleArrayType;

impl DoubleArrayType {
    pub const IDENTIFIER: &'static str = "DOUBLE_ARRAY";

    pub fn new_value(&self, v: Vec<f64>) -> VariableValue {
        VariableValue::new_unchecked(&DoubleArrayType, Value::DoubleArray(v))
    }
}

impl VariableType for DoubleArrayType {
    fn identifier(&self) -> &str {
        Self::IDENTIFIER
    }

    fn describes(&self, value: &Value) -> bool {
        matches!(value, Value::DoubleArray(_))
    }

    fn load_value(&self, settings: &Settings) -> Result<VariableValue, VariableError> {
        Ok(self.new_value(settings.get_double_array(CFG_VALUE)?.to_vec()))
    }

    fn save_value(&self, settings: &mut Settings, value: &Value) -> Result<(), VariableError> {
        match value {
            Value::DoubleArray(v) => {
                settings.set_double_array(CFG_VALUE, v.clone());
                Ok(())
            }
            other => Err(VariableError::payload_mismatch(
                Self::IDENTIFIER,
                other.kind(),
            )),
        }
    }

    fn convertible_types(&self) -> Vec<&'static dyn VariableType> {
        vec![&DoubleArrayType]
    }
}
