//! Fusion-rule lookup for pairs of anyon labels.
//!
//! A fusion rule is stored here as a plain description of the decomposition,
//! e.g. `("1/2", "1/2") -> "0 ⊕ 1"`. Lookups are exact and order-sensitive:
//! `(a, b)` and `(b, a)` are distinct keys unless both are inserted.
//!
//! ```
//! use qgf::fusion::{ FusionRules, resolve };
//!
//! let rules: FusionRules
//!     = [(("1/2", "1/2"), "0 ⊕ 1")].into_iter().collect();
//! assert_eq!(resolve(" 1/2", "1/2 ", &rules), "0 ⊕ 1");
//! assert_eq!(resolve("1", "1/2", &rules), "No fusion rule for (1, 1/2)");
//! ```

use std::{
    collections::{ HashMap, BTreeSet },
    sync::OnceLock,
};
use itertools::Itertools;
use regex::Regex;
use thiserror::Error;
use tracing::{ debug, trace };
use crate::utils::{ trim_label, owned_label };

#[derive(Debug, Error)]
pub enum FusionParseError {
    #[error("fusion: malformed rule on line {0}: '{1}'")]
    Malformed(usize, String),

    #[error("fusion: empty label on line {0}")]
    EmptyLabel(usize),
}
pub type FusionParseResult<T> = Result<T, FusionParseError>;

/// Typed mapping from an ordered pair of labels to a fusion outcome.
///
/// Keys are trimmed on insertion, so every stored key is a post-trim pair.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FusionRules {
    #[cfg_attr(feature = "serde", serde(with = "rule_triples"))]
    rules: HashMap<(String, String), String>,
}

impl FusionRules {
    pub fn new() -> Self { Self::default() }

    /// Add a rule, returning the outcome it replaced, if any.
    pub fn insert<A, B, O>(&mut self, a: A, b: B, outcome: O) -> Option<String>
    where
        A: AsRef<str>,
        B: AsRef<str>,
        O: Into<String>,
    {
        return self.rules.insert(
            (owned_label(a), owned_label(b)), outcome.into());
    }

    pub fn len(&self) -> usize { self.rules.len() }

    pub fn is_empty(&self) -> bool { self.rules.is_empty() }

    /// Look up the outcome for `(a, b)` after trimming both labels.
    pub fn try_resolve(&self, a: &str, b: &str) -> Option<&str> {
        let key = (trim_label(a).to_string(), trim_label(b).to_string());
        let found = self.rules.get(&key).map(|s| s.as_str());
        match found {
            Some(outcome)
                => trace!(a = %key.0, b = %key.1, outcome, "fusion rule hit"),
            None
                => debug!(a = %key.0, b = %key.1, "no fusion rule"),
        }
        return found;
    }

    /// Look up the outcome for `(a, b)`, falling back to a placeholder naming
    /// the pair as it was given.
    pub fn resolve(&self, a: &str, b: &str) -> String {
        return self.try_resolve(a, b)
            .map(|s| s.to_string())
            .unwrap_or_else(|| missing_rule(a, b));
    }

    /// Split the outcome of `(a, b)` into its fusion channels.
    ///
    /// Returns an empty list if there is no rule for the pair.
    pub fn channels_of(&self, a: &str, b: &str) -> Vec<String> {
        return self.try_resolve(a, b)
            .map(channels)
            .unwrap_or_default();
    }

    /// All labels appearing on the left-hand side of some rule, sorted.
    pub fn labels(&self) -> Vec<String> {
        return self.rules.keys()
            .flat_map(|(a, b)| [a.clone(), b.clone()])
            .collect::<BTreeSet<String>>()
            .into_iter()
            .collect();
    }

    /// Iterate over `((a, b), outcome)` in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = ((&str, &str), &str)> + '_ {
        return self.rules.iter()
            .map(|((a, b), o)| ((a.as_str(), b.as_str()), o.as_str()));
    }

    /// Parse rules written one per line as `a x b = outcome`.
    ///
    /// `×` may stand in for `x` and `->` for `=`. Blank lines and lines
    /// starting with `#` are skipped. Later lines overwrite earlier ones with
    /// the same pair.
    ///
    /// ```
    /// use qgf::fusion::FusionRules;
    ///
    /// let rules = FusionRules::parse("
    ///     sigma x sigma = 1 ⊕ psi
    ///     sigma × psi -> sigma
    /// ").unwrap();
    /// assert_eq!(rules.resolve("sigma", "psi"), "sigma");
    /// assert_eq!(rules.channels_of("sigma", "sigma"), vec!["1", "psi"]);
    /// ```
    pub fn parse(text: &str) -> FusionParseResult<Self> {
        let rx = rule_regex();
        let mut rules = Self::new();
        for (k, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') { continue; }
            let cap = rx.captures(line)
                .ok_or_else(|| {
                    FusionParseError::Malformed(k + 1, line.to_string())
                })?;
            let (a, b, o) = (&cap["a"], &cap["b"], &cap["o"]);
            if a.trim().is_empty() || b.trim().is_empty() {
                return Err(FusionParseError::EmptyLabel(k + 1));
            }
            rules.insert(a, b, o);
        }
        return Ok(rules);
    }
}

impl<A, B, O> FromIterator<((A, B), O)> for FusionRules
where
    A: AsRef<str>,
    B: AsRef<str>,
    O: Into<String>,
{
    fn from_iter<I>(iter: I) -> Self
    where I: IntoIterator<Item = ((A, B), O)>
    {
        let mut rules = Self::new();
        iter.into_iter().for_each(|((a, b), o)| { rules.insert(a, b, o); });
        return rules;
    }
}

/// Placeholder returned by [`resolve`] when a pair has no rule.
pub fn missing_rule(a: &str, b: &str) -> String {
    return format!("No fusion rule for ({}, {})", a, b);
}

/// Return the fusion outcome of `a` and `b`.
///
/// Both labels are trimmed before lookup. A missing rule is not an error: the
/// result is then a placeholder string naming the pair.
pub fn resolve(a: &str, b: &str, rules: &FusionRules) -> String {
    return rules.resolve(a, b);
}

/// Split a decomposition like `"0 ⊕ 1"` into its channel labels.
///
/// Both `⊕` and `+` are accepted as separators; empty pieces are dropped.
pub fn channels(outcome: &str) -> Vec<String> {
    return outcome.split(['⊕', '+'])
        .map(trim_label)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect_vec();
}

fn rule_regex() -> &'static Regex {
    static RULE: OnceLock<Regex> = OnceLock::new();
    // the operator needs whitespace on both sides so labels may contain 'x'
    return RULE.get_or_init(|| {
        Regex::new(
            r"^(?P<a>.+?)\s+[x×]\s+(?P<b>.+?)\s*(=|->)\s*(?P<o>.+)$"
        ).expect("fusion rule pattern is valid")
    });
}

#[cfg(feature = "serde")]
mod rule_triples {
    //! Rules are written as a list of `[a, b, outcome]` triples, sorted by
    //! pair, so no label character needs escaping.

    use std::collections::HashMap;
    use serde::{ Deserialize, Deserializer, Serialize, Serializer };
    use crate::utils::owned_label;

    pub fn serialize<S>(
        rules: &HashMap<(String, String), String>,
        ser: S,
    ) -> Result<S::Ok, S::Error>
    where S: Serializer
    {
        let mut triples: Vec<(&str, &str, &str)>
            = rules.iter()
            .map(|((a, b), o)| (a.as_str(), b.as_str(), o.as_str()))
            .collect();
        triples.sort_unstable();
        return triples.serialize(ser);
    }

    pub fn deserialize<'de, D>(de: D)
        -> Result<HashMap<(String, String), String>, D::Error>
    where D: Deserializer<'de>
    {
        let triples: Vec<(String, String, String)> = Vec::deserialize(de)?;
        return Ok(
            triples.into_iter()
                .map(|(a, b, o)| ((owned_label(a), owned_label(b)), o))
                .collect()
        );
    }
}
