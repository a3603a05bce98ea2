use completion_decoder::{DecodeError, ResponseDecoder};
use proptest::prelude::*;
use serde_json::{json, Value};

fn choice_strategy() -> impl Strategy<Value = (String, Option<String>, bool)> {
    (
        ".{0,40}",
        proptest::option::of("[a-z_]{1,16}"),
        any::<bool>(),
    )
}

fn payload_strategy() -> impl Strategy<Value = Value> {
    (
        "[a-z_.]{1,24}",
        any::<i64>(),
        "[a-zA-Z0-9.-]{1,32}",
        proptest::collection::vec(choice_strategy(), 0..6),
        proptest::option::of((0u64..1_000_000, 0u64..1_000_000)),
    )
        .prop_map(|(object, created, model, choices, usage)| {
            let choices: Vec<Value> = choices
                .into_iter()
                .enumerate()
                .map(|(index, (text, finish_reason, with_logprobs))| {
                    let logprobs = if with_logprobs {
                        json!({ "tokens": [text.clone()], "token_logprobs": [-0.5] })
                    } else {
                        Value::Null
                    };
                    json!({
                        "text": text,
                        "index": index,
                        "logprobs": logprobs,
                        "finish_reason": finish_reason,
                    })
                })
                .collect();

            let mut payload = json!({
                "object": object,
                "created": created,
                "model": model,
                "choices": choices,
            });
            if let Some((prompt, completion)) = usage {
                payload["usage"] = json!({
                    "prompt_tokens": prompt,
                    "completion_tokens": completion,
                    "total_tokens": prompt + completion,
                });
            }
            payload
        })
}

proptest! {
    #[test]
    fn valid_payloads_preserve_every_field(payload in payload_strategy()) {
        let response = ResponseDecoder::decode(&payload).unwrap();

        prop_assert_eq!(response.object_type.as_str(), payload["object"].as_str().unwrap());
        prop_assert_eq!(response.created_at, payload["created"].as_i64().unwrap());
        prop_assert_eq!(response.model.as_str(), payload["model"].as_str().unwrap());
        prop_assert_eq!(response.usage.is_some(), payload.get("usage").is_some());

        let wire = payload["choices"].as_array().unwrap();
        prop_assert_eq!(response.choices.len(), wire.len());
        for (choice, raw) in response.choices.iter().zip(wire) {
            prop_assert_eq!(choice.text.as_str(), raw["text"].as_str().unwrap());
            prop_assert_eq!(u64::from(choice.index), raw["index"].as_u64().unwrap());
            prop_assert_eq!(choice.finish_reason.as_deref(), raw["finish_reason"].as_str());
            let expected_logprobs = Some(&raw["logprobs"]).filter(|v| !v.is_null());
            prop_assert_eq!(choice.log_probabilities.as_ref(), expected_logprobs);
        }

        if let Some(usage) = response.usage {
            prop_assert!(usage.is_consistent());
        }
    }

    #[test]
    fn decoding_is_idempotent(payload in payload_strategy()) {
        let text = payload.to_string();
        prop_assert_eq!(ResponseDecoder::decode(text.as_str()), ResponseDecoder::decode(text.as_str()));
        prop_assert_eq!(ResponseDecoder::decode(text.as_bytes()), ResponseDecoder::decode(&payload));
    }

    #[test]
    fn a_bad_choice_never_yields_a_partial_list(
        payload in payload_strategy(),
        broken in any::<prop::sample::Index>(),
        drop_text in any::<bool>(),
    ) {
        let len = payload["choices"].as_array().unwrap().len();
        prop_assume!(len > 0);
        let position = broken.index(len);
        let field = if drop_text { "text" } else { "index" };

        let mut payload = payload;
        payload["choices"][position].as_object_mut().unwrap().remove(field);

        prop_assert_eq!(
            ResponseDecoder::decode(&payload),
            Err(DecodeError::choice_field(field, position))
        );
    }

    #[test]
    fn non_object_top_levels_are_malformed(value in prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(|n| json!(n)),
        ".{0,20}".prop_map(Value::String),
        proptest::collection::vec(any::<i32>(), 0..4).prop_map(|v| json!(v)),
    ]) {
        prop_assert!(ResponseDecoder::decode(&value).unwrap_err().is_malformed());
    }
}
