//! Offline intent matching: an ordered table of canned answers keyed on
//! phrases in the lowercased question.

pub mod fallback;
pub mod rules;

pub use rules::RULES;

/// Coarse priority band of a rule. Bands appear in the table in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Tier {
    /// Two-part question shapes such as "how many" + "exoplanet".
    Compound,
    /// Specific multi-word phrases and greetings.
    Phrase,
    /// Domain topics.
    Topic,
    /// Single broad words like "how" or "star".
    Cue,
}

/// Predicate over a lowercased question.
#[derive(Debug, Clone, Copy)]
pub enum Trigger {
    /// Every phrase appears as a substring.
    AllOf(&'static [&'static str]),
    /// At least one phrase appears as a substring.
    AnyOf(&'static [&'static str]),
    /// The word appears on its own, delimited by non-alphanumerics.
    Word(&'static str),
}

impl Trigger {
    pub fn matches(&self, question: &str) -> bool {
        match self {
            Trigger::AllOf(phrases) => phrases.iter().all(|p| question.contains(p)),
            Trigger::AnyOf(phrases) => phrases.iter().any(|p| question.contains(p)),
            Trigger::Word(word) => question
                .split(|c: char| !c.is_alphanumeric())
                .any(|w| w == *word),
        }
    }
}

#[derive(Debug)]
pub struct IntentRule {
    pub id: &'static str,
    pub tier: Tier,
    pub trigger: Trigger,
    pub answer: &'static str,
}

/// First rule in [`RULES`] matching `question`, which must already be lowercased.
pub fn match_intent(question: &str) -> Option<&'static IntentRule> {
    RULES.iter().find(|rule| rule.trigger.matches(question))
}
