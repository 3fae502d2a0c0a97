//! XML-RPC response bodies built from JSON fixtures.
//!
//! Integers in the `i32` range are written as `<int>`, larger ones as `<i8>`, and JSON
//! `null` as `<nil/>`, which is how Odoo answers.

use quick_xml::escape::escape;
use serde_json::Value;

/// A successful `<methodResponse>` carrying `value`
pub fn response(value: &Value) -> String {
    let mut out = String::from("<?xml version=\"1.0\"?>\n<methodResponse>\n<params>\n<param>\n");
    write_value(&mut out, value);
    out.push_str("\n</param>\n</params>\n</methodResponse>\n");

    out
}

/// A `<fault>` response as raised by an Odoo exception
pub fn fault(code: i64, message: &str) -> String {
    let mut out = String::from("<?xml version=\"1.0\"?>\n<methodResponse>\n<fault>\n");
    write_value(
        &mut out,
        &serde_json::json!({ "faultCode": code, "faultString": message }),
    );
    out.push_str("\n</fault>\n</methodResponse>\n");

    out
}

fn write_value(out: &mut String, value: &Value) {
    out.push_str("<value>");
    match value {
        Value::Null => out.push_str("<nil/>"),
        Value::Bool(b) => out.push_str(&format!("<boolean>{}</boolean>", u8::from(*b))),
        Value::Number(n) => match n.as_i64() {
            Some(i) if i32::try_from(i).is_ok() => out.push_str(&format!("<int>{}</int>", i)),
            Some(i) => out.push_str(&format!("<i8>{}</i8>", i)),
            None => out.push_str(&format!("<double>{}</double>", n)),
        },
        Value::String(s) => out.push_str(&format!("<string>{}</string>", escape(s.as_str()))),
        Value::Array(items) => {
            out.push_str("<array><data>\n");
            for item in items {
                write_value(out, item);
                out.push('\n');
            }
            out.push_str("</data></array>");
        }
        Value::Object(members) => {
            out.push_str("<struct>\n");
            for (name, member) in members {
                out.push_str(&format!("<member>\n<name>{}</name>\n", escape(name.as_str())));
                write_value(out, member);
                out.push_str("\n</member>\n");
            }
            out.push_str("</struct>");
        }
    }
    out.push_str("</value>");
}
