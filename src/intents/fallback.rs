use tracing::debug;

use super::match_intent;

/// Appended to every offline answer.
pub const RESOURCES_SUFFIX: &str =
    " For more detailed questions, please visit the Resources section for comprehensive educational materials.";

const CLARIFY: &str = "I'd be happy to help! I can explain exoplanet concepts, space missions, astronomy, or answer general questions. Could you be more specific about what you'd like to know?";
const OFFER_HELP: &str = "I'm here to help! I can answer questions about exoplanets, space science, astronomy, or general topics. Just ask me anything - I'll do my best to provide a helpful answer.";
const WELCOME: &str = "You're welcome! I'm always here to help with your questions about exoplanets, space, or anything else you'd like to know.";
const GENERIC: &str = "That's an interesting question! While I specialize in exoplanet science and astronomy, I can help with general questions too. Could you tell me more about what you'd like to know? I'm here to help!";

/// Reply keyed on the rough shape of a question no rule recognised.
pub fn generic_reply(question: &str) -> &'static str {
    if question.contains("what") || question.contains("explain") {
        CLARIFY
    } else if question.contains("help") || question.contains("assist") {
        OFFER_HELP
    } else if question.contains("thank") {
        WELCOME
    } else {
        GENERIC
    }
}

/// Full offline answer for a raw question: matched rule or generic reply,
/// always followed by [`RESOURCES_SUFFIX`].
pub fn respond(question: &str) -> String {
    let lowered = question.to_lowercase();
    let body = match match_intent(&lowered) {
        Some(rule) => {
            debug!(rule = rule.id, tier = ?rule.tier, "Offline rule matched");
            rule.answer
        }
        None => {
            debug!("No offline rule matched, using generic reply");
            generic_reply(&lowered)
        }
    };
    format!("{}{}", body, RESOURCES_SUFFIX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_how_many_exoplanets_example() {
        let answer = respond("How many exoplanets have been discovered?");
        assert!(answer.contains("5,000"));
        assert!(answer.ends_with(RESOURCES_SUFFIX));
    }

    #[test]
    fn test_generic_reply_shapes() {
        assert_eq!(generic_reply("what?"), CLARIFY);
        assert_eq!(generic_reply("please explain"), CLARIFY);
        assert_eq!(generic_reply("can you assist me"), OFFER_HELP);
        assert_eq!(generic_reply("thank you"), WELCOME);
        assert_eq!(generic_reply("qwerty"), GENERIC);
    }

    #[test]
    fn test_unmatched_question_still_answers() {
        assert_eq!(respond("thanks!"), format!("{}{}", WELCOME, RESOURCES_SUFFIX));
        assert_eq!(respond(""), format!("{}{}", GENERIC, RESOURCES_SUFFIX));
    }

    #[test]
    fn test_answers_are_never_empty() {
        for question in ["", "   ", "?", "🪐", "What is TESS?", "asdf qwerty"] {
            let answer = respond(question);
            assert!(answer.len() > RESOURCES_SUFFIX.len(), "{:?}", question);
        }
    }

    #[test]
    fn test_respond_is_deterministic() {
        let q = "Why do we care about hot jupiters?";
        assert_eq!(respond(q), respond(q));
    }
}
