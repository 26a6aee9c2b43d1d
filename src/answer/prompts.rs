use crate::llm::Message;

pub const SYSTEM_PROMPT: &str =
    "You are an assistant for an exoplanet vetting site. Answer concisely using provided context.";

/// Build the system + user messages sent to every model in the chain.
/// Caller context and fetched source text are inserted verbatim.
pub fn build_messages(context: &str, fetched: &str, question: &str) -> Vec<Message> {
    vec![
        Message::system(SYSTEM_PROMPT),
        Message::user(format!(
            "Context:\n{}\n\nSource:\n{}\n\nQuestion: {}",
            context, fetched, question
        )),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_prompt_layout() {
        let messages = build_messages("light curve of KIC 123", "TESS page text", "Is it real?");
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, "system");
        assert_eq!(messages[0].content, SYSTEM_PROMPT);
        assert_eq!(
            messages[1].content,
            "Context:\nlight curve of KIC 123\n\nSource:\nTESS page text\n\nQuestion: Is it real?"
        );
    }

    #[test]
    fn test_empty_parts_keep_sections() {
        let messages = build_messages("", "", "");
        assert_eq!(messages[1].content, "Context:\n\n\nSource:\n\n\nQuestion: ");
    }
}
