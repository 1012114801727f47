use serde::{Deserialize, Serialize};

use crate::models::{CaseContext, ChatRole};

const HYPOTHETICAL: &str = "**Hypothetical Analysis Framework**

To evaluate alternative scenarios, I assess:

1. **Vehicle Impact** — How do changed facts affect jurisdictional posture?
2. **Standard Shift** — Does the legal test apply differently?
3. **Justice Alignment** — Which Justices become more/less sympathetic?

Specify which aspect you'd like to modify for targeted analysis.";

const QUESTIONS_PRESENTED: &str = "**Questions Presented: Strategic Drafting**

Key principles:

1. **Front-load winning facts** — Your best facts should appear in the question itself
2. **Signal favorable review** — Frame to invoke your preferred precedent
3. **Avoid over-breadth** — Narrow questions have higher grant rates
4. **Create asymmetry** — Make \"yes\" easier than opponent's \"no\"

Want me to draft alternative framings based on current case posture?";

const CIRCUIT_SPLIT: &str = "**Circuit Split Analysis**

The Court evaluates split quality on:

1. **Directness** — Same legal question, opposite holdings
2. **Maturity** — Sufficient percolation across circuits
3. **Importance** — Substantial federal interests affected
4. **Vehicle** — Can this case cleanly resolve the split?

Shallow or manufactured splits dramatically increase DIG risk.";

const JURISDICTION: &str = "**Jurisdictional Checklist**

Standing/jurisdiction defects are **dispositive**:

• **Article III Standing**: injury-in-fact, causation, redressability
• **Statutory Exhaustion**: all administrative steps completed?
• **Finality**: lower court judgment truly final?
• **Mootness**: can Court grant effective relief?

Any weakness here must be addressed before cert, not at merits.";

/// Canned answers keyed by trigger phrases, checked top to bottom.
const TOPICS: &[(&[&str], &str)] = &[
    (&["what if", "hypothetical"], HYPOTHETICAL),
    (&["rewrite", "question presented"], QUESTIONS_PRESENTED),
    (&["circuit split", "conflict"], CIRCUIT_SPLIT),
    (&["standing", "jurisdiction"], JURISDICTION),
];

/// Answer a follow-up question. Falls back to a prompt for clarification
/// that mentions the tier and posture of the case under discussion.
pub fn generate_chat_response(message: &str, context: &CaseContext) -> String {
    let lower = message.to_lowercase();

    if let Some((_, reply)) = TOPICS
        .iter()
        .find(|(triggers, _)| triggers.iter().any(|t| lower.contains(t)))
    {
        return (*reply).to_string();
    }

    format!(
        "That's worth examining. Based on current analysis:

• **Input Tier {tier}** limits definitive conclusions on some procedural aspects
• **{posture} posture** emphasizes particular institutional concerns

For more specific guidance, clarify:
1. Which party's perspective are you analyzing?
2. What specific doctrinal or strategic concern to probe?",
        tier = context.tier,
        posture = context.posture.title(),
    )
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Assistant,
            content: content.into(),
        }
    }
}

/// One conversation, rebuilt per request from what the client holds.
/// Nothing is kept server-side between turns.
#[derive(Debug, Clone, Default)]
pub struct ChatSession {
    history: Vec<ChatMessage>,
    context: CaseContext,
}

impl ChatSession {
    pub fn new(history: Vec<ChatMessage>, context: CaseContext) -> Self {
        Self { history, context }
    }

    /// Record the user's message, answer it, record the answer.
    pub fn respond(&mut self, message: &str) -> String {
        let reply = generate_chat_response(message, &self.context);
        self.history.push(ChatMessage::user(message));
        self.history.push(ChatMessage::assistant(reply.clone()));
        reply
    }

    pub fn into_history(self) -> Vec<ChatMessage> {
        self.history
    }
}
