use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    AiTools,
    Converters,
    Detectors,
    Editors,
    Enhancers,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::AiTools,
        Category::Converters,
        Category::Detectors,
        Category::Editors,
        Category::Enhancers,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::AiTools => "ai-tools",
            Category::Converters => "converters",
            Category::Detectors => "detectors",
            Category::Editors => "editors",
            Category::Enhancers => "enhancers",
        }
    }

    pub fn parse(s: &str) -> Option<Category> {
        Category::ALL.into_iter().find(|c| c.as_str() == s)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Convert,
    Enhance,
    Detect,
    Edit,
    Use,
}

/// A cataloged utility. Lives in the static registry for the whole program.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct Tool {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub url: &'static str,
    pub category: Category,
    pub tags: &'static [&'static str],
}

impl Tool {
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(&tag)
    }
}

/// Trigger phrases implying a tool id and an action.
#[derive(Debug)]
pub struct CommandKeyword {
    pub keywords: &'static [&'static str],
    pub tool_id: &'static str,
    pub action: Action,
}

/// A canonical multi-step workflow.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct ToolChain {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub tools: &'static [&'static str],
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InteractionRecord {
    #[serde(default)]
    pub tool_id: String,
    #[serde(default)]
    pub timestamp: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedCommand {
    pub tools: Vec<&'static Tool>,
    pub actions: Vec<Action>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chain_name: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chain_description: Option<&'static str>,
    pub steps: Vec<String>,
}

impl ParsedCommand {
    pub fn is_understood(&self) -> bool {
        !self.tools.is_empty()
    }
}
