//! Prompt construction and response clean-up.

use ir_protocol::GenerationIntent;

/// Line prefixes that are chat-template artifacts rather than answer text.
const ARTIFACT_PREFIXES: &[&str] = &["System:", "Human:", "Assistant:", ">"];

const SYS_MARKERS: &[&str] = &["<<SYS>>", "<</SYS>>"];

/// Wrap `query` in the instructions for `intent`.
pub fn shape(intent: GenerationIntent, query: &str) -> String {
    match intent {
        GenerationIntent::CodeGeneration => format!(
            "Generate code for the following request:\n{query}\n\n\
             Please provide:\n\
             1. Code implementation\n\
             2. Brief explanation\n\
             3. Example usage\n\n\
             Use appropriate formatting and comments."
        ),
        GenerationIntent::Explanation => format!(
            "Explain the following:\n{query}\n\n\
             Please provide:\n\
             1. Simple explanation\n\
             2. Key concepts\n\
             3. Examples if applicable\n\
             4. Additional resources if relevant"
        ),
        GenerationIntent::CreativeWriting => format!(
            "Create a creative response for:\n{query}\n\n\
             Be imaginative and engaging while maintaining:\n\
             1. Clear narrative structure\n\
             2. Engaging language\n\
             3. Appropriate tone"
        ),
        GenerationIntent::General => format!(
            "Please respond to this query:\n{query}\n\n\
             Provide a clear, helpful, and accurate response.\n\
             Include relevant examples or explanations if needed."
        ),
    }
}

/// Full prompt: system instructions, previous queries, then the shaped
/// current request.
pub fn compose<'a>(
    model: &str,
    history: impl IntoIterator<Item = &'a str>,
    shaped: &str,
) -> String {
    let mut prompt = format!(
        "System: You are a helpful AI assistant using the {model} model.\n\
         Please provide clear, accurate, and helpful responses.\n\
         If you're unsure about something, please say so.\n\
         For code-related questions, include examples and explanations.\n\n\
         Previous context:\n"
    );
    for query in history {
        prompt.push_str("Q: ");
        prompt.push_str(query);
        prompt.push('\n');
    }
    prompt.push_str("\nCurrent query: ");
    prompt.push_str(shaped);
    prompt.push('\n');
    prompt
}

/// Strip chat-template artifacts from a model response.
///
/// Line structure is kept so code blocks survive.
pub fn clean(response: &str) -> String {
    let lines: Vec<String> = response
        .lines()
        .filter(|line| {
            let trimmed = line.trim_start();
            !ARTIFACT_PREFIXES.iter().any(|p| trimmed.starts_with(p))
        })
        .map(|line| {
            SYS_MARKERS
                .iter()
                .fold(line.to_string(), |acc, marker| acc.replace(marker, ""))
        })
        .collect();

    let start = lines.iter().position(|l| !l.trim().is_empty());
    let end = lines.iter().rposition(|l| !l.trim().is_empty());
    match (start, end) {
        (Some(start), Some(end)) => lines[start..=end].join("\n"),
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_prompt_asks_for_usage() {
        let prompt = shape(GenerationIntent::CodeGeneration, "write a python script");
        assert!(prompt.starts_with("Generate code for the following request:\nwrite a python script"));
        assert!(prompt.contains("3. Example usage"));
    }

    #[test]
    fn each_intent_has_its_own_framing() {
        let query = "the moon";
        let prompts: Vec<String> = [
            GenerationIntent::CodeGeneration,
            GenerationIntent::Explanation,
            GenerationIntent::CreativeWriting,
            GenerationIntent::General,
        ]
        .into_iter()
        .map(|intent| shape(intent, query))
        .collect();
        for (i, a) in prompts.iter().enumerate() {
            assert!(a.contains(query));
            for b in &prompts[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn compose_lists_history_before_current_query() {
        let prompt = compose("llama3.2", ["what is rust", "tell me a joke"], "NOW");
        assert!(prompt.contains("using the llama3.2 model"));
        let first = prompt.find("Q: what is rust").unwrap();
        let second = prompt.find("Q: tell me a joke").unwrap();
        let current = prompt.find("Current query: NOW").unwrap();
        assert!(first < second && second < current);
    }

    #[test]
    fn clean_drops_template_lines() {
        let raw = "\nSystem: be nice\n<<SYS>>Recursion is a function calling itself.<</SYS>>\n\
                   > quoted prompt\nAssistant: ignored\n  fn f() {}\n\n";
        assert_eq!(
            clean(raw),
            "Recursion is a function calling itself.\n  fn f() {}"
        );
    }

    #[test]
    fn clean_of_only_artifacts_is_empty() {
        assert_eq!(clean("Human: hi\n\n> echo\n"), "");
    }
}
