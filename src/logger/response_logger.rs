use crate::enums::usage_check::UsageCheck;
use crate::structs::completion::completion_response::CompletionResponse;
use crate::structs::config::output_config::OutputConfig;

pub struct ResponseLogger {}

impl ResponseLogger {

    pub fn print_summary(source_name: &str, response: &CompletionResponse, output: &OutputConfig) {
        println!("\n📄 {}", source_name);
        println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
        println!("  object:  {}", response.object_type);
        println!("  model:   {}", response.model);

        match response.created_at_utc() {
            Some(created) => println!("  created: {} ({})", response.created_at, created.to_rfc3339()),
            None => println!("  created: {}", response.created_at),
        }

        match response.usage {
            Some(usage) => println!(
                "  usage:   {} prompt + {} completion = {} total",
                usage.prompt_tokens, usage.completion_tokens, usage.total_tokens
            ),
            None => println!("  usage:   not reported"),
        }

        if let UsageCheck::Mismatch { expected, reported } = response.usage_check() {
            println!("  ⚠️ total_tokens is {} but prompt + completion is {}", reported, expected);
        }

        if response.choices.is_empty() {
            println!("\n  (no choices returned)");
            return;
        }

        let mut choices: Vec<_> = response.choices.iter().collect();
        choices.sort_by_key(|c| c.index);

        for choice in choices {
            let finish = choice.finish_reason.as_deref().unwrap_or("-");
            println!("\n@@ Choice {} (finish: {}) @@", choice.index, finish);
            println!("{}", Self::preview(&choice.text, output.max_text_preview));

            if output.show_logprobs {
                match &choice.log_probabilities {
                    Some(logprobs) => println!("  logprobs: {}", logprobs),
                    None => println!("  logprobs: none"),
                }
            }
        }
    }

    /// Cuts `text` to at most `max_chars` characters, marking the cut.
    pub fn preview(text: &str, max_chars: usize) -> String {
        match text.char_indices().nth(max_chars) {
            Some((cut, _)) => format!("{}…", &text[..cut]),
            None => text.to_string(),
        }
    }
}
