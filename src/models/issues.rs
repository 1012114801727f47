use std::collections::HashMap;

use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use super::enums::IssueKind;

/// One presence flag per `IssueKind`.
///
/// Serialises as `{"voting_rights": bool, ...}` in canonical order.
/// Deserialisation is lenient: unknown keys are ignored, missing keys read as
/// absent and non-boolean values count by truthiness, so client-held context
/// from older reports still loads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IssueMap {
    flags: [bool; IssueKind::COUNT],
}

impl IssueMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, kind: IssueKind) -> bool {
        self.flags[kind.index()]
    }

    pub fn set(&mut self, kind: IssueKind, present: bool) {
        self.flags[kind.index()] = present;
    }

    /// Builder form of `set`, handy for fixtures.
    pub fn with(mut self, kind: IssueKind) -> Self {
        self.set(kind, true);
        self
    }

    /// Present issues, canonical order.
    pub fn present(&self) -> impl Iterator<Item = IssueKind> + '_ {
        IssueKind::ALL.into_iter().filter(|k| self.get(*k))
    }

    pub fn any(&self) -> bool {
        self.flags.iter().any(|f| *f)
    }

    pub fn has_high_risk(&self) -> bool {
        self.present().any(|k| k.is_high_risk())
    }
}

impl Serialize for IssueMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(IssueKind::COUNT))?;
        for kind in IssueKind::ALL {
            map.serialize_entry(kind.as_str(), &self.get(kind))?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for IssueMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = HashMap::<String, Value>::deserialize(deserializer)?;
        let mut issues = IssueMap::new();
        for (key, value) in raw {
            match key.parse::<IssueKind>() {
                Ok(kind) => issues.set(kind, truthy(&value)),
                Err(_) => tracing::debug!(key = %key, "Ignoring unknown issue key"),
            }
        }
        Ok(issues)
    }
}

/// `0`, `""`, `null`, `false` and empty containers are false.
fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serialises_every_issue_in_order() {
        let issues = IssueMap::new().with(IssueKind::Standing);
        let json = serde_json::to_string(&issues).unwrap();
        assert_eq!(
            json,
            r#"{"voting_rights":false,"equal_protection":false,"first_amendment":false,"separation_of_powers":false,"standing":true,"due_process":false,"commerce_clause":false,"preemption":false}"#
        );
    }

    #[test]
    fn deserialise_ignores_unknown_and_defaults_missing() {
        let issues: IssueMap =
            serde_json::from_str(r#"{"standing":true,"antitrust":true}"#).unwrap();
        assert!(issues.get(IssueKind::Standing));
        assert_eq!(issues.present().count(), 1);
    }

    #[test]
    fn deserialise_reads_non_boolean_flags_by_truthiness() {
        let issues: IssueMap = serde_json::from_str(
            r#"{"standing":1,"preemption":0,"due_process":"yes","voting_rights":null,"commerce_clause":""}"#,
        )
        .unwrap();
        let present: Vec<_> = issues.present().collect();
        assert_eq!(present, vec![IssueKind::Standing, IssueKind::DueProcess]);
    }

    #[test]
    fn high_risk_follows_flags() {
        assert!(!IssueMap::new().with(IssueKind::VotingRights).has_high_risk());
        assert!(IssueMap::new()
            .with(IssueKind::SeparationOfPowers)
            .has_high_risk());
    }

    #[test]
    fn present_is_canonical_regardless_of_insert_order() {
        let issues = IssueMap::new()
            .with(IssueKind::Preemption)
            .with(IssueKind::VotingRights);
        let order: Vec<_> = issues.present().collect();
        assert_eq!(order, vec![IssueKind::VotingRights, IssueKind::Preemption]);
    }
}
