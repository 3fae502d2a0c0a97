use std::fmt;

use super::value::Value;

/// Text Odoo's XML-RPC layer emits when a method returns `None`.
///
/// `sale.advance.payment.inv.create_invoices` returns a window action containing `None`
/// members which the server cannot marshal, so the call fails after the invoices have
/// already been committed.
pub const SERIALIZATION_QUIRK_MARKER: &str = "cannot marshal None unless allow_none is enabled";

/// An XML-RPC fault raised by the Odoo server.
#[derive(Debug, Clone, PartialEq)]
pub struct Fault {
    pub code: String,
    pub message: String,
}

/// Classification of a [`Fault`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaultKind {
    /// The remote call went through but its result could not be sent back.
    SerializationQuirk,
    /// Any genuine remote failure (validation, access rights, business rule).
    Fatal,
}

impl Fault {
    /// Builds a fault from the `<fault>` struct of a method response.
    ///
    /// Odoo sends `faultCode` either as an integer or as the exception text, so both are
    /// accepted.
    pub fn from_value(value: &Value) -> Self {
        let code = match value.get("faultCode") {
            Some(Value::Int(code)) => code.to_string(),
            Some(other) => other.as_str().unwrap_or_default().to_string(),
            None => String::new(),
        };
        let message = value
            .get("faultString")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();

        Self { code, message }
    }

    pub fn kind(&self) -> FaultKind {
        if self.message.contains(SERIALIZATION_QUIRK_MARKER) {
            FaultKind::SerializationQuirk
        } else {
            FaultKind::Fatal
        }
    }
}

impl fmt::Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<Fault {}: {:?}>", self.code, self.message)
    }
}
