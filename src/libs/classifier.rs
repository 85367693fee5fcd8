//! Activity classification.
//!
//! Maps one [`Observation`] and the session's [`IntentionSet`] to a
//! [`Verdict`]. Evidence of a work-capable application only counts as work
//! when it matches a declared intention; an unmatched editor, browser or
//! terminal falls through to `Unknown`, never to `Entertainment`.

use crate::libs::intention::{Intention, IntentionSet};
use crate::libs::sampler::Observation;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Work,
    Entertainment,
    Unknown,
}

impl Verdict {
    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Work => "work",
            Verdict::Entertainment => "entertainment",
            Verdict::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Application categories an observation shows evidence of.
pub fn detected_categories(obs: &Observation) -> Vec<Intention> {
    [
        (obs.has_text_editor, Intention::TextEditors),
        (obs.has_browser, Intention::Browsers),
        (obs.has_terminal, Intention::Terminals),
    ]
    .into_iter()
    .filter_map(|(detected, category)| detected.then_some(category))
    .collect()
}

/// Classifies an observation. First match wins:
///
/// 1. a detected application category that is also intended → `Work`
/// 2. entertainment detected → `Entertainment`
/// 3. anything else → `Unknown`
pub fn classify(obs: &Observation, intentions: &IntentionSet) -> Verdict {
    if detected_categories(obs).into_iter().any(|category| intentions.contains(category)) {
        return Verdict::Work;
    }

    if obs.has_entertainment {
        return Verdict::Entertainment;
    }

    Verdict::Unknown
}
