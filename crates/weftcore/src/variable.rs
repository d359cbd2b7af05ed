use std::fmt;

use crate::registry::VariableTypeRegistry;
use crate::vartype::{VariableType, VariableValue};
use crate::{Settings, VariableError};

/// Settings key holding the variable name.
const CFG_NAME: &str = "name";

/// A named, typed value passed between workflow steps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowVariable {
    name: String,
    value: VariableValue,
}

impl FlowVariable {
    pub fn new(name: impl Into<String>, value: VariableValue) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &VariableValue {
        &self.value
    }

    pub fn variable_type(&self) -> &'static dyn VariableType {
        self.value.variable_type()
    }

    /// Persist this variable into `settings` as its name, its type
    /// discriminator and its payload.
    pub fn save(&self, settings: &mut Settings) -> Result<(), VariableError> {
        settings.set_string(CFG_NAME, self.name.as_str());
        self.value.save(settings)
    }

    /// Load a variable written by [`FlowVariable::save`], resolving its
    /// type through `registry`.
    pub fn load(
        registry: &VariableTypeRegistry,
        settings: &Settings,
    ) -> Result<Self, VariableError> {
        let name = settings.get_string(CFG_NAME)?.to_string();
        let value = registry.load_value(settings)?;
        Ok(Self { name, value })
    }
}

impl fmt::Display for FlowVariable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.name, self.value)
    }
}
