use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::enums::{InvalidEnum, Posture, Tier};
use super::issues::IssueMap;

pub const DEFAULT_TITLE: &str = "Untitled Case";

/// Posture as requested by the caller: detect it, or take it as given.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PostureRequest {
    #[default]
    Auto,
    Declared(Posture),
}

impl FromStr for PostureRequest {
    type Err = InvalidEnum;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "auto" | "" => Ok(Self::Auto),
            other => other.parse().map(Self::Declared),
        }
    }
}

impl Serialize for PostureRequest {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Auto => serializer.serialize_str("auto"),
            Self::Declared(p) => p.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for PostureRequest {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Raw case materials as submitted. Every field is optional on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaseInput {
    #[serde(default)]
    pub text: String,
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default)]
    pub posture: PostureRequest,
    /// Accepted for compatibility; the tier is always recomputed.
    #[serde(default)]
    pub tier: Option<Tier>,
    #[serde(default)]
    pub docket: String,
}

fn default_title() -> String {
    DEFAULT_TITLE.to_string()
}

impl CaseInput {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            title: default_title(),
            posture: PostureRequest::Auto,
            tier: None,
            docket: String::new(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_posture(mut self, posture: PostureRequest) -> Self {
        self.posture = posture;
        self
    }

    pub fn with_docket(mut self, docket: impl Into<String>) -> Self {
        self.docket = docket.into();
        self
    }
}

/// A case after classification. Lives for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Case {
    pub title: String,
    /// Characters, not bytes; the tier is derived from this.
    pub text_length: usize,
    pub posture: Posture,
    pub tier: Tier,
    pub docket: Option<String>,
    pub issues: IssueMap,
}

/// What a client echoes back from an earlier report when asking follow-up
/// questions. Every field falls back to its default, including when the
/// client sends a value we do not recognise.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseContext {
    #[serde(default)]
    pub issues: IssueMap,
    #[serde(default, deserialize_with = "lenient")]
    pub posture: Posture,
    #[serde(default, deserialize_with = "lenient")]
    pub tier: Tier,
}

fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr + Default,
{
    let raw = serde_json::Value::deserialize(deserializer)?;
    match raw.as_str().map(str::parse::<T>) {
        Some(Ok(value)) => Ok(value),
        _ => {
            tracing::debug!(value = %raw, "Unrecognised context value, using default");
            Ok(T::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_take_defaults() {
        let input: CaseInput = serde_json::from_str("{}").unwrap();
        assert_eq!(input.title, DEFAULT_TITLE);
        assert_eq!(input.posture, PostureRequest::Auto);
        assert!(input.text.is_empty());
        assert!(input.tier.is_none());
    }

    #[test]
    fn declared_posture_parses() {
        let input: CaseInput =
            serde_json::from_str(r#"{"text":"x","posture":"emergency","tier":"A"}"#).unwrap();
        assert_eq!(input.posture, PostureRequest::Declared(Posture::Emergency));
        assert_eq!(input.tier, Some(Tier::A));
    }

    #[test]
    fn unknown_posture_is_an_error() {
        let result = serde_json::from_str::<CaseInput>(r#"{"posture":"rehearing"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn context_defaults_to_tier_b_cert() {
        let ctx: CaseContext = serde_json::from_str("{}").unwrap();
        assert_eq!(ctx.tier, Tier::B);
        assert_eq!(ctx.posture, Posture::Cert);
        assert!(!ctx.issues.any());
    }

    #[test]
    fn context_ignores_report_fields_it_does_not_use() {
        let ctx: CaseContext = serde_json::from_str(
            r#"{"tier":"A","posture":"merits","riskLevel":"CAUTION","issues":{"standing":true}}"#,
        )
        .unwrap();
        assert_eq!(ctx.tier, Tier::A);
        assert_eq!(ctx.posture, Posture::Merits);
        assert!(ctx.issues.has_high_risk());
    }

    #[test]
    fn context_falls_back_on_unrecognised_values() {
        let ctx: CaseContext =
            serde_json::from_str(r#"{"posture":"auto","tier":"b"}"#).unwrap();
        assert_eq!(ctx.posture, Posture::Cert);
        assert_eq!(ctx.tier, Tier::B);

        let ctx: CaseContext =
            serde_json::from_str(r#"{"posture":null,"tier":3}"#).unwrap();
        assert_eq!(ctx, CaseContext::default());
    }
}
