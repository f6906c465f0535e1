//! Fixed enumerations used by projects and templates.
//!
//! Categories and tech stack entries are closed sets; free-form values are
//! rejected at parse time.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of AI application a project is building.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectCategory {
    Chatbot,
    CodeAssistant,
    ContentGenerator,
    DataAnalyzer,
    #[default]
    Custom,
}

impl ProjectCategory {
    /// All categories, in display order.
    pub const ALL: [ProjectCategory; 5] = [
        ProjectCategory::Chatbot,
        ProjectCategory::CodeAssistant,
        ProjectCategory::ContentGenerator,
        ProjectCategory::DataAnalyzer,
        ProjectCategory::Custom,
    ];

    /// Parse a category from its serialized id (e.g. `code-assistant`).
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == s)
    }

    /// Serialized id, as rendered into prompts.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectCategory::Chatbot => "chatbot",
            ProjectCategory::CodeAssistant => "code-assistant",
            ProjectCategory::ContentGenerator => "content-generator",
            ProjectCategory::DataAnalyzer => "data-analyzer",
            ProjectCategory::Custom => "custom",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            ProjectCategory::Chatbot => "Chatbot",
            ProjectCategory::CodeAssistant => "Code Assistant",
            ProjectCategory::ContentGenerator => "Content Generator",
            ProjectCategory::DataAnalyzer => "Data Analyzer",
            ProjectCategory::Custom => "Custom",
        }
    }
}

impl fmt::Display for ProjectCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A technology a project is built with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TechStack {
    React,
    Vue,
    Angular,
    Node,
    Python,
    Java,
    Go,
    Rust,
    Other,
}

impl TechStack {
    /// All tech stack options, in display order.
    pub const ALL: [TechStack; 9] = [
        TechStack::React,
        TechStack::Vue,
        TechStack::Angular,
        TechStack::Node,
        TechStack::Python,
        TechStack::Java,
        TechStack::Go,
        TechStack::Rust,
        TechStack::Other,
    ];

    /// Parse a tech stack entry from its serialized id (e.g. `node`).
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == s)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TechStack::React => "react",
            TechStack::Vue => "vue",
            TechStack::Angular => "angular",
            TechStack::Node => "node",
            TechStack::Python => "python",
            TechStack::Java => "java",
            TechStack::Go => "go",
            TechStack::Rust => "rust",
            TechStack::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TechStack::React => "React",
            TechStack::Vue => "Vue",
            TechStack::Angular => "Angular",
            TechStack::Node => "Node.js",
            TechStack::Python => "Python",
            TechStack::Java => "Java",
            TechStack::Go => "Go",
            TechStack::Rust => "Rust",
            TechStack::Other => "Other",
        }
    }
}

impl fmt::Display for TechStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An unordered set of tech stack entries.
///
/// Insertion order is kept for display, but duplicates are dropped and
/// equality ignores order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "Vec<TechStack>", into = "Vec<TechStack>")]
pub struct TechStackSet(Vec<TechStack>);

impl TechStackSet {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Add an entry. Returns `false` if it was already present.
    pub fn insert(&mut self, tech: TechStack) -> bool {
        if self.0.contains(&tech) {
            return false;
        }
        self.0.push(tech);
        true
    }

    /// Remove an entry. Returns `false` if it was not present.
    pub fn remove(&mut self, tech: TechStack) -> bool {
        let before = self.0.len();
        self.0.retain(|t| *t != tech);
        self.0.len() != before
    }

    pub fn contains(&self, tech: TechStack) -> bool {
        self.0.contains(&tech)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = TechStack> + '_ {
        self.0.iter().copied()
    }

    /// Join the serialized ids with `sep` (e.g. `react, node`).
    pub fn join(&self, sep: &str) -> String {
        self.0
            .iter()
            .map(TechStack::as_str)
            .collect::<Vec<_>>()
            .join(sep)
    }
}

impl PartialEq for TechStackSet {
    fn eq(&self, other: &Self) -> bool {
        self.0.len() == other.0.len() && self.0.iter().all(|t| other.0.contains(t))
    }
}

impl Eq for TechStackSet {}

impl FromIterator<TechStack> for TechStackSet {
    fn from_iter<I: IntoIterator<Item = TechStack>>(iter: I) -> Self {
        let mut set = TechStackSet::new();
        for tech in iter {
            set.insert(tech);
        }
        set
    }
}

impl From<Vec<TechStack>> for TechStackSet {
    fn from(entries: Vec<TechStack>) -> Self {
        entries.into_iter().collect()
    }
}

impl From<TechStackSet> for Vec<TechStack> {
    fn from(set: TechStackSet) -> Self {
        set.0
    }
}

impl From<&[TechStack]> for TechStackSet {
    fn from(entries: &[TechStack]) -> Self {
        entries.iter().copied().collect()
    }
}
