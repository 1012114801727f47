use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Error returned when a wire string does not name a known variant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid {field}: {value:?}")]
pub struct InvalidEnum {
    pub field: &'static str,
    pub value: String,
}

/// Macro to generate enum with as_str + std::str::FromStr pattern.
/// Serde goes through the same strings so JSON matches `as_str`.
macro_rules! str_enum {
    ($(#[$meta:meta])* $name:ident { $($(#[$vmeta:meta])* $variant:ident => $s:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($(#[$vmeta])* $variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = InvalidEnum;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err(InvalidEnum {
                        field: stringify!($name),
                        value: s.into(),
                    }),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let raw = String::deserialize(deserializer)?;
                raw.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}

str_enum!(
    /// Procedural stage of the case.
    #[derive(Default)]
    Posture {
        #[default]
        Cert => "cert",
        Emergency => "emergency",
        Merits => "merits",
        Backtest => "backtest",
    }
);

impl Posture {
    /// Capitalised label used in prose ("Cert posture ...").
    pub fn title(&self) -> &'static str {
        match self {
            Self::Cert => "Cert",
            Self::Emergency => "Emergency",
            Self::Merits => "Merits",
            Self::Backtest => "Backtest",
        }
    }
}

str_enum!(
    /// How much material was supplied. A is a full record, C a bare reference.
    #[derive(Default)]
    Tier {
        A => "A",
        #[default]
        B => "B",
        C => "C",
    }
);

str_enum!(
    /// Legal issue categories, declared in canonical report order.
    IssueKind {
        VotingRights => "voting_rights",
        EqualProtection => "equal_protection",
        FirstAmendment => "first_amendment",
        SeparationOfPowers => "separation_of_powers",
        Standing => "standing",
        DueProcess => "due_process",
        CommerceClause => "commerce_clause",
        Preemption => "preemption",
    }
);

impl IssueKind {
    pub const COUNT: usize = 8;

    pub const ALL: [IssueKind; Self::COUNT] = [
        Self::VotingRights,
        Self::EqualProtection,
        Self::FirstAmendment,
        Self::SeparationOfPowers,
        Self::Standing,
        Self::DueProcess,
        Self::CommerceClause,
        Self::Preemption,
    ];

    /// Position in `ALL`; used to index `IssueMap`.
    pub fn index(&self) -> usize {
        match self {
            Self::VotingRights => 0,
            Self::EqualProtection => 1,
            Self::FirstAmendment => 2,
            Self::SeparationOfPowers => 3,
            Self::Standing => 4,
            Self::DueProcess => 5,
            Self::CommerceClause => 6,
            Self::Preemption => 7,
        }
    }

    /// Threshold issues that can sink a case before the merits.
    pub fn is_high_risk(&self) -> bool {
        matches!(self, Self::Standing | Self::SeparationOfPowers)
    }
}

str_enum!(
    /// Headline risk label.
    RiskLevel {
        Caution => "CAUTION",
        Critical => "CRITICAL",
    }
);

str_enum!(
    /// Likelihood of dismissal as improvidently granted.
    DigRisk {
        Low => "Low",
        Medium => "Medium",
        High => "High",
    }
);

str_enum!(
    /// Severity used for sub-risks and precedent relevance.
    Severity {
        Low => "low",
        Medium => "medium",
        High => "high",
    }
);

str_enum!(
    TrapKind {
        Trap => "trap",
        Counter => "counter",
    }
);

str_enum!(
    BenchRole {
        Chief => "Chief",
        Associate => "Associate",
    }
);

str_enum!(
    ChatRole {
        User => "user",
        Assistant => "assistant",
    }
);

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn posture_round_trip() {
        for (variant, s) in [
            (Posture::Cert, "cert"),
            (Posture::Emergency, "emergency"),
            (Posture::Merits, "merits"),
            (Posture::Backtest, "backtest"),
        ] {
            assert_eq!(variant.as_str(), s);
            assert_eq!(Posture::from_str(s).unwrap(), variant);
        }
    }

    #[test]
    fn issue_index_matches_canonical_order() {
        for (i, kind) in IssueKind::ALL.iter().enumerate() {
            assert_eq!(kind.index(), i);
        }
    }

    #[test]
    fn only_standing_and_separation_are_high_risk() {
        let high: Vec<_> = IssueKind::ALL
            .into_iter()
            .filter(|k| k.is_high_risk())
            .collect();
        assert_eq!(high, vec![IssueKind::SeparationOfPowers, IssueKind::Standing]);
    }

    #[test]
    fn unknown_value_is_rejected() {
        let err = Posture::from_str("appeal").unwrap_err();
        assert_eq!(err.field, "Posture");
        assert_eq!(err.value, "appeal");
    }

    #[test]
    fn serde_uses_wire_strings() {
        assert_eq!(serde_json::to_string(&RiskLevel::Critical).unwrap(), "\"CRITICAL\"");
        assert_eq!(serde_json::to_string(&Tier::A).unwrap(), "\"A\"");
        let posture: Posture = serde_json::from_str("\"emergency\"").unwrap();
        assert_eq!(posture, Posture::Emergency);
        assert!(serde_json::from_str::<Tier>("\"D\"").is_err());
    }

    #[test]
    fn defaults_are_cert_and_tier_b() {
        assert_eq!(Posture::default(), Posture::Cert);
        assert_eq!(Tier::default(), Tier::B);
    }

    #[test]
    fn posture_title_is_capitalised() {
        assert_eq!(Posture::Cert.title(), "Cert");
        assert_eq!(Posture::Backtest.title(), "Backtest");
    }
}
