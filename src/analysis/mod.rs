//! Case triage pipeline: classify, flag issues, cite, score, question.
//!
//! Every stage is a pure function over static reference tables.

pub mod bench;
pub mod chat;
pub mod classify;
pub mod issues;
pub mod orchestrator;
pub mod precedents;
pub mod risk;
pub mod traps;
pub mod types;

pub use bench::{generate_justice_questions, generate_single_question, simulate_full_bench};
pub use chat::{generate_chat_response, ChatMessage, ChatSession};
pub use classify::{classify_tier, detect_docket, detect_posture};
pub use issues::extract_issues;
pub use orchestrator::{analyze, classify_case};
pub use precedents::find_precedents;
pub use risk::assess_risk;
pub use traps::generate_traps;
pub use types::*;
