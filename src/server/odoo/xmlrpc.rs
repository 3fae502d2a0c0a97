//! XML-RPC request encoding and response decoding.
//!
//! Only the subset Odoo speaks is supported: method calls with positional params and
//! responses carrying either a single value or a fault. Requests are written without
//! whitespace between elements.

use quick_xml::{escape::escape, events::Event, Reader};

use crate::server::error::odoo::OdooError;

use super::{fault::Fault, value::Value};

/// Decoded `<methodResponse>`.
#[derive(Debug, Clone, PartialEq)]
pub enum MethodResponse {
    Success(Value),
    Fault(Fault),
}

/// Serializes a `<methodCall>` document.
pub fn encode_call(method: &str, params: &[Value]) -> String {
    let mut out = String::from("<?xml version=\"1.0\"?><methodCall><methodName>");
    out.push_str(&escape(method));
    out.push_str("</methodName><params>");
    for param in params {
        out.push_str("<param><value>");
        write_value(&mut out, param);
        out.push_str("</value></param>");
    }
    out.push_str("</params></methodCall>");

    out
}

fn write_value(out: &mut String, value: &Value) {
    match value {
        Value::Nil => out.push_str("<nil/>"),
        Value::Bool(b) => {
            out.push_str(if *b {
                "<boolean>1</boolean>"
            } else {
                "<boolean>0</boolean>"
            });
        }
        Value::Int(i) if i32::try_from(*i).is_ok() => out.push_str(&format!("<int>{i}</int>")),
        Value::Int(i) => out.push_str(&format!("<i8>{i}</i8>")),
        Value::Double(d) => out.push_str(&format!("<double>{d}</double>")),
        Value::String(s) => {
            out.push_str("<string>");
            out.push_str(&escape(s.as_str()));
            out.push_str("</string>");
        }
        Value::DateTime(s) => {
            out.push_str("<dateTime.iso8601>");
            out.push_str(&escape(s.as_str()));
            out.push_str("</dateTime.iso8601>");
        }
        Value::Base64(s) => {
            out.push_str("<base64>");
            out.push_str(&escape(s.as_str()));
            out.push_str("</base64>");
        }
        Value::Array(items) => {
            out.push_str("<array><data>");
            for item in items {
                out.push_str("<value>");
                write_value(out, item);
                out.push_str("</value>");
            }
            out.push_str("</data></array>");
        }
        Value::Struct(members) => {
            out.push_str("<struct>");
            for (name, member) in members {
                out.push_str("<member><name>");
                out.push_str(&escape(name.as_str()));
                out.push_str("</name><value>");
                write_value(out, member);
                out.push_str("</value></member>");
            }
            out.push_str("</struct>");
        }
    }
}

/// Parses a `<methodResponse>` document.
pub fn decode_response(body: &str) -> Result<MethodResponse, OdooError> {
    let mut parser = Parser::new(body);

    parser.expect_start("methodResponse")?;
    let response = match parser.tag()? {
        Token::Start(name) if name == "params" => {
            parser.expect_start("param")?;
            let value = parser.member_value()?;
            parser.expect_end("param")?;
            parser.expect_end("params")?;
            MethodResponse::Success(value)
        }
        Token::Start(name) if name == "fault" => {
            let value = parser.member_value()?;
            parser.expect_end("fault")?;
            MethodResponse::Fault(Fault::from_value(&value))
        }
        other => return Err(unexpected("<params> or <fault>", &other)),
    };
    parser.expect_end("methodResponse")?;

    Ok(response)
}

#[derive(Debug)]
enum Token {
    Start(String),
    Empty(String),
    End(String),
    Text(String),
    Eof,
}

struct Parser<'a> {
    reader: Reader<&'a [u8]>,
}

fn malformed(reason: impl ToString) -> OdooError {
    OdooError::Protocol(format!("malformed XML-RPC response: {}", reason.to_string()))
}

fn unexpected(expected: &str, found: &Token) -> OdooError {
    malformed(format!("expected {expected}, found {found:?}"))
}

fn tag_name(raw: &[u8]) -> String {
    String::from_utf8_lossy(raw).into_owned()
}

impl<'a> Parser<'a> {
    fn new(body: &'a str) -> Self {
        Self {
            reader: Reader::from_str(body),
        }
    }

    fn token(&mut self) -> Result<Token, OdooError> {
        loop {
            let token = match self.reader.read_event().map_err(malformed)? {
                Event::Start(e) => Token::Start(tag_name(e.name().as_ref())),
                Event::Empty(e) => Token::Empty(tag_name(e.name().as_ref())),
                Event::End(e) => Token::End(tag_name(e.name().as_ref())),
                Event::Text(t) => Token::Text(t.unescape().map_err(malformed)?.into_owned()),
                Event::CData(c) => Token::Text(String::from_utf8_lossy(&c.into_inner()).into_owned()),
                Event::Eof => Token::Eof,
                _ => continue,
            };

            return Ok(token);
        }
    }

    /// Next structural token, skipping inter-element whitespace.
    fn tag(&mut self) -> Result<Token, OdooError> {
        loop {
            match self.token()? {
                Token::Text(text) if text.trim().is_empty() => continue,
                Token::Text(text) => return Err(malformed(format!("unexpected text {text:?}"))),
                token => return Ok(token),
            }
        }
    }

    fn expect_start(&mut self, name: &str) -> Result<(), OdooError> {
        match self.tag()? {
            Token::Start(found) if found == name => Ok(()),
            other => Err(unexpected(&format!("<{name}>"), &other)),
        }
    }

    fn expect_end(&mut self, name: &str) -> Result<(), OdooError> {
        match self.tag()? {
            Token::End(found) if found == name => Ok(()),
            other => Err(unexpected(&format!("</{name}>"), &other)),
        }
    }

    fn text_until(&mut self, name: &str) -> Result<String, OdooError> {
        let mut text = String::new();
        loop {
            match self.token()? {
                Token::Text(chunk) => text.push_str(&chunk),
                Token::End(found) if found == name => return Ok(text),
                other => return Err(unexpected(&format!("text of <{name}>"), &other)),
            }
        }
    }

    /// Reads a `<value>` element, opening tag included.
    fn member_value(&mut self) -> Result<Value, OdooError> {
        match self.tag()? {
            Token::Start(name) if name == "value" => self.value(),
            Token::Empty(name) if name == "value" => Ok(Value::String(String::new())),
            other => Err(unexpected("<value>", &other)),
        }
    }

    /// Reads the content of a `<value>` element whose opening tag was consumed.
    fn value(&mut self) -> Result<Value, OdooError> {
        let mut text = String::new();
        loop {
            match self.token()? {
                Token::Text(chunk) => text.push_str(&chunk),
                // untyped values are strings
                Token::End(name) if name == "value" => return Ok(Value::String(text)),
                Token::Start(kind) => {
                    let value = self.typed(&kind)?;
                    self.expect_end("value")?;
                    return Ok(value);
                }
                Token::Empty(kind) => {
                    let value = empty_typed(&kind)?;
                    self.expect_end("value")?;
                    return Ok(value);
                }
                other => return Err(unexpected("value content", &other)),
            }
        }
    }

    fn typed(&mut self, kind: &str) -> Result<Value, OdooError> {
        let value = match kind {
            "int" | "i4" | "i8" => {
                let text = self.text_until(kind)?;
                Value::Int(text.trim().parse().map_err(malformed)?)
            }
            "boolean" => match self.text_until(kind)?.trim() {
                "1" => Value::Bool(true),
                "0" => Value::Bool(false),
                other => return Err(malformed(format!("invalid boolean {other:?}"))),
            },
            "double" => {
                let text = self.text_until(kind)?;
                Value::Double(text.trim().parse().map_err(malformed)?)
            }
            "string" => Value::String(self.text_until(kind)?),
            "dateTime.iso8601" => Value::DateTime(self.text_until(kind)?.trim().to_string()),
            "base64" => Value::Base64(self.text_until(kind)?.trim().to_string()),
            "nil" => {
                self.expect_end("nil")?;
                Value::Nil
            }
            "array" => {
                let items = self.array_data()?;
                self.expect_end("array")?;
                Value::Array(items)
            }
            "struct" => self.structure()?,
            other => return Err(malformed(format!("unsupported value type <{other}>"))),
        };

        Ok(value)
    }

    fn array_data(&mut self) -> Result<Vec<Value>, OdooError> {
        let mut items = Vec::new();
        match self.tag()? {
            Token::Empty(name) if name == "data" => return Ok(items),
            Token::Start(name) if name == "data" => {}
            other => return Err(unexpected("<data>", &other)),
        }

        loop {
            match self.tag()? {
                Token::Start(name) if name == "value" => items.push(self.value()?),
                Token::Empty(name) if name == "value" => items.push(Value::String(String::new())),
                Token::End(name) if name == "data" => return Ok(items),
                other => return Err(unexpected("<value> or </data>", &other)),
            }
        }
    }

    fn structure(&mut self) -> Result<Value, OdooError> {
        let mut members = std::collections::BTreeMap::new();
        loop {
            match self.tag()? {
                Token::Start(name) if name == "member" => {
                    self.expect_start("name")?;
                    let key = self.text_until("name")?;
                    let value = self.member_value()?;
                    self.expect_end("member")?;
                    members.insert(key, value);
                }
                Token::End(name) if name == "struct" => return Ok(Value::Struct(members)),
                other => return Err(unexpected("<member> or </struct>", &other)),
            }
        }
    }
}

fn empty_typed(kind: &str) -> Result<Value, OdooError> {
    match kind {
        "nil" => Ok(Value::Nil),
        "string" => Ok(Value::String(String::new())),
        "base64" => Ok(Value::Base64(String::new())),
        "array" => Ok(Value::Array(Vec::new())),
        "struct" => Ok(Value::Struct(Default::default())),
        other => Err(malformed(format!("empty <{other}/> has no value"))),
    }
}
