use super::value::Value;

/// An Odoo search domain: a list of `(field, operator, value)` conditions joined by AND.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Domain(Vec<Value>);

impl Domain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a `(field, operator, value)` condition.
    pub fn filter(mut self, field: &str, operator: &str, value: impl Into<Value>) -> Self {
        self.0
            .push(Value::Array(vec![field.into(), operator.into(), value.into()]));
        self
    }
}

impl From<Domain> for Value {
    fn from(domain: Domain) -> Self {
        Value::Array(domain.0)
    }
}
