use std::borrow::Cow;
use serde_json::Value;

/// Raw response body handed over by the transport layer.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload<'a> {
    Bytes(&'a [u8]),
    Text(&'a str),
    Value(Cow<'a, Value>),
}

impl<'a> From<&'a [u8]> for Payload<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        Payload::Bytes(bytes)
    }
}

impl<'a> From<&'a Vec<u8>> for Payload<'a> {
    fn from(bytes: &'a Vec<u8>) -> Self {
        Payload::Bytes(bytes.as_slice())
    }
}

impl<'a> From<&'a str> for Payload<'a> {
    fn from(text: &'a str) -> Self {
        Payload::Text(text)
    }
}

impl<'a> From<&'a String> for Payload<'a> {
    fn from(text: &'a String) -> Self {
        Payload::Text(text.as_str())
    }
}

impl<'a> From<&'a Value> for Payload<'a> {
    fn from(value: &'a Value) -> Self {
        Payload::Value(Cow::Borrowed(value))
    }
}

impl From<Value> for Payload<'static> {
    fn from(value: Value) -> Self {
        Payload::Value(Cow::Owned(value))
    }
}
