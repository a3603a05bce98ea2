use serde_json::{json, Value};

pub const SCENARIO_A: &str = r#"{"object":"text_completion","created":1690000000,"model":"gpt-3.5-turbo","choices":[{"text":"Hello","index":0,"logprobs":null,"finish_reason":"stop"}],"usage":{"prompt_tokens":5,"completion_tokens":1,"total_tokens":6}}"#;

pub fn scenario_a() -> Value {
    serde_json::from_str(SCENARIO_A).unwrap()
}

pub fn without(mut value: Value, key: &str) -> Value {
    value.as_object_mut().unwrap().remove(key);
    value
}

pub fn with_choices(mut value: Value, choices: Value) -> Value {
    value["choices"] = choices;
    value
}

pub fn two_choices() -> Value {
    json!([
        { "text": "first", "index": 0, "logprobs": null, "finish_reason": "stop" },
        { "text": "second", "index": 1, "logprobs": null, "finish_reason": "length" }
    ])
}
