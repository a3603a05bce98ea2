use serde_json::{Map, Value};
use crate::errors::{DecodeError, DecodeResult};

/// Typed lookups on one JSON object. Errors carry the field name (dotted
/// under `scope`) and the choice position when reading a choice.
pub struct FieldReader<'a> {
    object: &'a Map<String, Value>,
    scope: Option<&'static str>,
    choice: Option<usize>,
}

impl<'a> FieldReader<'a> {
    pub fn new(object: &'a Map<String, Value>) -> Self {
        Self { object, scope: None, choice: None }
    }

    pub fn scoped(object: &'a Map<String, Value>, scope: &'static str) -> Self {
        Self { object, scope: Some(scope), choice: None }
    }

    pub fn for_choice(object: &'a Map<String, Value>, position: usize) -> Self {
        Self { object, scope: None, choice: Some(position) }
    }

    pub fn error(&self, key: &str) -> DecodeError {
        let field = match self.scope {
            Some(scope) => format!("{}.{}", scope, key),
            None => key.to_string(),
        };
        DecodeError::MissingOrInvalidField { field, index: self.choice }
    }

    /// `None` for both an absent key and an explicit `null`.
    pub fn present(&self, key: &str) -> Option<&'a Value> {
        self.object.get(key).filter(|v| !v.is_null())
    }

    pub fn required_str(&self, key: &str) -> DecodeResult<&'a str> {
        self.object
            .get(key)
            .and_then(Value::as_str)
            .ok_or_else(|| self.error(key))
    }

    pub fn required_non_empty_str(&self, key: &str) -> DecodeResult<&'a str> {
        self.required_str(key)
            .and_then(|s| if s.is_empty() { Err(self.error(key)) } else { Ok(s) })
    }

    pub fn required_i64(&self, key: &str) -> DecodeResult<i64> {
        self.object
            .get(key)
            .and_then(Value::as_i64)
            .ok_or_else(|| self.error(key))
    }

    pub fn required_u64(&self, key: &str) -> DecodeResult<u64> {
        self.object
            .get(key)
            .and_then(Value::as_u64)
            .ok_or_else(|| self.error(key))
    }

    pub fn required_u32(&self, key: &str) -> DecodeResult<u32> {
        self.required_u64(key)
            .and_then(|n| u32::try_from(n).map_err(|_| self.error(key)))
    }

    pub fn required_array(&self, key: &str) -> DecodeResult<&'a Vec<Value>> {
        self.object
            .get(key)
            .and_then(Value::as_array)
            .ok_or_else(|| self.error(key))
    }

    /// Absent or `null` is `Ok(None)`; any non-string value is an error.
    pub fn optional_str(&self, key: &str) -> DecodeResult<Option<&'a str>> {
        match self.present(key) {
            None => Ok(None),
            Some(value) => value.as_str().map(Some).ok_or_else(|| self.error(key)),
        }
    }

    /// Shape is not inspected.
    pub fn optional_value(&self, key: &str) -> Option<&'a Value> {
        self.present(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected an object"),
        }
    }

    #[test]
    fn scoped_errors_use_dotted_names() {
        let map = object(json!({}));
        let reader = FieldReader::scoped(&map, "usage");
        assert_eq!(
            reader.required_u64("total_tokens"),
            Err(DecodeError::field("usage.total_tokens"))
        );
    }

    #[test]
    fn choice_errors_carry_position() {
        let map = object(json!({ "index": -1 }));
        let reader = FieldReader::for_choice(&map, 3);
        assert_eq!(reader.required_u32("index"), Err(DecodeError::choice_field("index", 3)));
    }

    #[test]
    fn integers_reject_floats_and_strings() {
        let map = object(json!({ "a": 1.5, "b": "12", "c": 12 }));
        let reader = FieldReader::new(&map);
        assert!(reader.required_i64("a").is_err());
        assert!(reader.required_i64("b").is_err());
        assert_eq!(reader.required_i64("c"), Ok(12));
    }

    #[test]
    fn u32_rejects_overflow() {
        let map = object(json!({ "index": 4_294_967_296_u64 }));
        assert!(FieldReader::new(&map).required_u32("index").is_err());
    }

    #[test]
    fn optional_str_treats_null_as_absent() {
        let map = object(json!({ "a": null, "b": "stop", "c": 7 }));
        let reader = FieldReader::new(&map);
        assert_eq!(reader.optional_str("a"), Ok(None));
        assert_eq!(reader.optional_str("missing"), Ok(None));
        assert_eq!(reader.optional_str("b"), Ok(Some("stop")));
        assert_eq!(reader.optional_str("c"), Err(DecodeError::field("c")));
    }

    #[test]
    fn empty_string_is_rejected_where_non_empty_required() {
        let map = object(json!({ "model": "" }));
        assert_eq!(
            FieldReader::new(&map).required_non_empty_str("model"),
            Err(DecodeError::field("model"))
        );
    }
}
