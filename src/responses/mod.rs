//! Response rule table and resolver for the scripted assistant.
//!
//! This module implements the decision logic behind every assistant reply:
//!
//! - **Greeting table**: subject id → greeting seeded when a chat opens on
//!   that subject
//! - **Rule table**: ordered keyword rules, first match wins, matched
//!   case-insensitively against the user's text
//! - [`resolve`]: pure function from (active subject, user text) to a reply
//!
//! Everything here is static data and deterministic lookups. There is no
//! failure mode: unknown subject ids fall back to generic strings.

use crate::subjects;

/// Greeting seeded when the chat opens with no recognized subject
pub const DEFAULT_GREETING: &str =
    "Hello! I'm your BrainLearn assistant. What subject would you like to explore today?";

/// Reply when no rule matches and no subject is active
pub const FALLBACK_REPLY: &str = "I'm currently a demo version of the BrainLearn assistant. In the full version, I'll provide detailed answers on any educational topic!";

const GREETING_REPLY: &str = "Hello there! How can I help with your learning journey today?";
const THANKS_REPLY: &str = "You're welcome! Feel free to ask more questions anytime.";
const MATH_REPLY: &str = "Great question about mathematics! In the full version, I'll provide step-by-step explanations for algebra problems, equation solving, calculus, and more.";

/// How a rule's keywords are matched against the lowercased user text
#[derive(Clone, Copy)]
enum MatchKind {
    /// Keyword must appear as a standalone word ("hi" must not fire on "this")
    Word,
    /// Plain substring match ("thank" fires on "thanks")
    Substring,
}

/// One keyword rule: if the (lowercased) user text contains any of the
/// keywords, and the subject constraint holds, the rule's reply is used.
struct Rule {
    keywords: &'static [&'static str],
    match_kind: MatchKind,
    /// When set, the rule only fires while this subject is active
    requires_subject: Option<&'static str>,
    reply: &'static str,
}

impl Rule {
    fn matches(&self, lowered: &str) -> bool {
        self.keywords.iter().any(|kw| match self.match_kind {
            MatchKind::Word => lowered
                .split(|c: char| !c.is_alphanumeric())
                .any(|word| word == *kw),
            MatchKind::Substring => lowered.contains(kw),
        })
    }
}

/// Ordered rule table; earlier rules win
const RULES: &[Rule] = &[
    Rule {
        keywords: &["hello", "hi"],
        match_kind: MatchKind::Word,
        requires_subject: None,
        reply: GREETING_REPLY,
    },
    Rule {
        keywords: &["thank"],
        match_kind: MatchKind::Substring,
        requires_subject: None,
        reply: THANKS_REPLY,
    },
    Rule {
        keywords: &["algebra", "equation", "math"],
        match_kind: MatchKind::Substring,
        requires_subject: Some("math"),
        reply: MATH_REPLY,
    },
];

/// Greeting string for a subject id, falling back to [`DEFAULT_GREETING`]
/// for unrecognized ids.
pub fn greeting_for(subject_id: &str) -> &'static str {
    match subject_id {
        "math" => {
            "I'd be happy to help with Mathematics! From basic arithmetic to advanced calculus, what would you like to learn about?"
        }
        "science" => {
            "Ready to explore Science topics! Biology, chemistry, physics, or something else - what are you curious about?"
        }
        "language" => {
            "Let's dive into Language and literature! Grammar, writing tips, or literary analysis - how can I assist you?"
        }
        "history" => {
            "Fascinated by History? Ancient civilizations, world wars, cultural movements - what period interests you?"
        }
        "arts" => {
            "The Arts are such a rich domain! Music, visual arts, theater, or dance - what creative topic shall we discuss?"
        }
        "technology" => {
            "Technology questions? From programming to AI, digital trends to computer science - what would you like to know?"
        }
        _ => DEFAULT_GREETING,
    }
}

/// Resolve a reply for the given subject context and user text.
///
/// Pure and deterministic: the same inputs always produce the same reply.
/// Priority order is fixed: keyword rules first, then a subject-specific
/// generic reply, then the demo fallback.
pub fn resolve(active_subject: Option<&str>, user_text: &str) -> String {
    let lowered = user_text.to_lowercase();

    for rule in RULES {
        let subject_ok = match rule.requires_subject {
            Some(required) => active_subject == Some(required),
            None => true,
        };
        if subject_ok && rule.matches(&lowered) {
            return rule.reply.to_string();
        }
    }

    if let Some(subject_id) = active_subject {
        // Interpolate the display name where the registry knows the id;
        // unknown ids still get a reply rather than an error.
        let name = subjects::find(subject_id).map(|s| s.name).unwrap_or(subject_id);
        return format!(
            "That's an interesting question about {}! In the full version, I'll have extensive knowledge on this topic and can provide detailed explanations.",
            name
        );
    }

    FALLBACK_REPLY.to_string()
}
