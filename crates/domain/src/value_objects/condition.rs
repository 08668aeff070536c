//! Opaque eligibility conditions.
//!
//! Condition clauses belong to an external evaluator. This crate only stores them
//! and reports whether any exist; it never parses their grammar.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Eligibility condition as written in a content pack.
///
/// Packs may give a single clause string or a list of clauses. An empty
/// condition means the destination is always eligible.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ConditionExpr(Vec<String>);

impl ConditionExpr {
    /// A condition that always holds.
    pub fn always() -> Self {
        Self::default()
    }

    pub fn new(clauses: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self(
            clauses
                .into_iter()
                .map(Into::into)
                .filter(|c: &String| !c.trim().is_empty())
                .collect(),
        )
    }

    pub fn single(clause: impl Into<String>) -> Self {
        Self::new([clause.into()])
    }

    pub fn is_unconditional(&self) -> bool {
        self.0.is_empty()
    }

    pub fn clauses(&self) -> &[String] {
        &self.0
    }
}

impl fmt::Display for ConditionExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.0.join(", "))
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawCondition {
    One(String),
    Many(Vec<String>),
}

impl<'de> Deserialize<'de> for ConditionExpr {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<RawCondition>::deserialize(deserializer)?;
        Ok(match raw {
            None => Self::always(),
            Some(RawCondition::One(clause)) => Self::single(clause),
            Some(RawCondition::Many(clauses)) => Self::new(clauses),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_clauses_are_dropped() {
        let expr = ConditionExpr::new(["", "  ", "z spring"]);
        assert_eq!(expr.clauses(), ["z spring".to_string()]);
        assert!(ConditionExpr::single("   ").is_unconditional());
    }

    #[test]
    fn deserializes_string_list_or_null() {
        let one: ConditionExpr = serde_json::from_str(r#""f willyBoatFixed""#).expect("json");
        assert_eq!(one.clauses().len(), 1);

        let many: ConditionExpr =
            serde_json::from_str(r#"["z winter", "t 600 1800"]"#).expect("json");
        assert_eq!(many.clauses().len(), 2);

        let none: ConditionExpr = serde_json::from_str("null").expect("json");
        assert!(none.is_unconditional());
    }
}
