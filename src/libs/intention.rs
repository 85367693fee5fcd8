//! Declared work intentions.
//!
//! At session start the user describes what they plan to do in free text.
//! [`parse`] reduces that text to an [`IntentionSet`]: the application
//! categories mentioned in it plus a generic `work` tag when the text talks
//! about a kind of work. [`deviates`] decides which verdicts are worth
//! interrupting the user for.
//!
//! ```rust
//! use focuswatch::libs::intention::{parse, Intention};
//!
//! let set = parse("coding in an editor and research in a browser");
//! assert!(set.contains(Intention::TextEditors));
//! assert!(set.contains(Intention::Browsers));
//! assert!(set.contains(Intention::Work));
//! ```

use crate::libs::classifier::Verdict;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// One tag of the controlled intention vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intention {
    TextEditors,
    Browsers,
    Terminals,
    Productivity,
    Work,
}

impl Intention {
    pub fn as_str(&self) -> &'static str {
        match self {
            Intention::TextEditors => "text_editors",
            Intention::Browsers => "browsers",
            Intention::Terminals => "terminals",
            Intention::Productivity => "productivity",
            Intention::Work => "work",
        }
    }
}

impl fmt::Display for Intention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Application names per category. A category is intended when any of its
/// names occurs anywhere in the lower-cased intention text.
pub const APPLICATION_VOCABULARY: &[(Intention, &[&str])] = &[
    (
        Intention::TextEditors,
        &[
            "editor", "notepad", "sublime", "atom", "vim", "emacs", "notepad++", "textmate", "brackets", "ultraedit", "gedit", "kate", "nano",
        ],
    ),
    (Intention::Browsers, &["browser", "chrome", "firefox", "safari", "edge", "opera", "brave", "vivaldi"]),
    (
        Intention::Terminals,
        &["terminal", "cmd", "powershell", "bash", "iterm", "konsole", "xterm", "gnome-terminal"],
    ),
    (
        Intention::Productivity,
        &["word", "excel", "powerpoint", "docs", "sheets", "slides", "outlook", "slack", "teams", "zoom"],
    ),
];

/// Words that mark the intention as work in general.
pub const WORK_KEYWORDS: &[&str] = &["research", "documentation", "writing", "coding", "programming", "studying", "reading", "working"];

/// The normalized set of tags a session was started with.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntentionSet(BTreeSet<Intention>);

impl IntentionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, intention: Intention) -> bool {
        self.0.contains(&intention)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = Intention> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<Intention> for IntentionSet {
    fn from_iter<T: IntoIterator<Item = Intention>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Display for IntentionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tags: Vec<&str> = self.0.iter().map(Intention::as_str).collect();
        write!(f, "[{}]", tags.join(", "))
    }
}

/// Turns a free-text plan into an [`IntentionSet`].
///
/// Never fails: text that mentions nothing from the vocabulary (including the
/// empty string) yields an empty set.
pub fn parse(text: &str) -> IntentionSet {
    let text = text.to_lowercase();

    let mut set: IntentionSet = APPLICATION_VOCABULARY
        .iter()
        .filter(|(_, apps)| apps.iter().any(|app| text.contains(app)))
        .map(|(category, _)| *category)
        .collect();

    if WORK_KEYWORDS.iter().any(|keyword| text.contains(keyword)) {
        set.0.insert(Intention::Work);
    }

    set
}

/// Whether a verdict is a deviation from the declared intentions.
///
/// Only entertainment is; unknown activity gets the benefit of the doubt.
pub fn deviates(verdict: Verdict) -> bool {
    verdict == Verdict::Entertainment
}
