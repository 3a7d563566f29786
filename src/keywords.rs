use crate::types::{Action, CommandKeyword};
use tracing::debug;

/// Candidate tool ids, actions and step descriptions found in a command.
/// Both id and action lists keep first-seen order and hold no duplicates.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct KeywordMatch {
    pub tool_ids: Vec<&'static str>,
    pub actions: Vec<Action>,
    pub steps: Vec<String>,
}

impl KeywordMatch {
    fn add(&mut self, tool_id: &'static str, action: Action) {
        if !self.tool_ids.contains(&tool_id) {
            self.tool_ids.push(tool_id);
        }
        if !self.actions.contains(&action) {
            self.actions.push(action);
        }
    }

    fn add_with_step(&mut self, tool_id: &'static str, action: Action) {
        self.add(tool_id, action);
        if let Some(step) = step_description(tool_id) {
            self.steps.push(step.to_string());
        }
    }

    pub fn contains(&self, tool_id: &str) -> bool {
        self.tool_ids.iter().any(|id| *id == tool_id)
    }
}

/// Fixed human-readable step for the tools that have one.
pub fn step_description(tool_id: &str) -> Option<&'static str> {
    let step = match tool_id {
        "pdf-to-word" => "Convert PDF file to Word document format",
        "word-to-pdf" => "Convert Word document to PDF format",
        "image-enhancer" => "Enhance image quality and resolution",
        "text-enhancer" => "Improve text quality, grammar, and readability",
        "audio-enhancer" => "Enhance audio quality and clarity",
        "ai-text-detector" => "Detect if text was generated by AI",
        "plagiarism-checker" => "Check text for plagiarism against online sources",
        "ai-image-detector" => "Detect if image was generated by AI",
        "image-editor" => "Edit image with basic tools",
        "text-editor" => "Edit text with formatting tools",
        "code-editor" => "Edit code with syntax highlighting",
        _ => return None,
    };
    Some(step)
}

pub fn normalize(command: &str) -> String {
    command.trim().to_lowercase()
}

fn any_of(text: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| text.contains(n))
}

/// Matches a command against the keyword table and the compound rules.
///
/// Matching is plain substring containment on the lowercased command, so a
/// trigger embedded in a longer word ("words" -> "word") still fires.
pub fn match_keywords(command: &str) -> KeywordMatch {
    let text = normalize(command);
    let mut found = KeywordMatch::default();
    if text.is_empty() {
        return found;
    }

    for rule in COMMAND_KEYWORDS {
        if any_of(&text, rule.keywords) {
            debug!(tool_id = rule.tool_id, "keyword rule matched");
            found.add(rule.tool_id, rule.action);
        }
    }

    if text.contains("pdf") && text.contains("word") {
        if any_of(&text, &["to word", "into word"]) {
            found.add_with_step("pdf-to-word", Action::Convert);
        } else {
            found.add_with_step("word-to-pdf", Action::Convert);
        }
    }

    if any_of(&text, &["enhance", "improve", "better"]) {
        if any_of(&text, &["image", "picture", "photo"]) {
            found.add_with_step("image-enhancer", Action::Enhance);
        } else if any_of(&text, &["text", "writing", "grammar"]) {
            found.add_with_step("text-enhancer", Action::Enhance);
        } else if any_of(&text, &["audio", "sound"]) {
            found.add_with_step("audio-enhancer", Action::Enhance);
        }
    }

    if any_of(&text, &["detect", "check", "analyze"]) {
        if text.contains("ai") && text.contains("text") {
            found.add_with_step("ai-text-detector", Action::Detect);
        } else if text.contains("plagiarism") {
            found.add_with_step("plagiarism-checker", Action::Detect);
        } else if text.contains("ai") && text.contains("image") {
            found.add_with_step("ai-image-detector", Action::Detect);
        }
    }

    if any_of(&text, &["edit", "modify"]) {
        if text.contains("image") {
            found.add_with_step("image-editor", Action::Edit);
        } else if text.contains("text") {
            found.add_with_step("text-editor", Action::Edit);
        } else if text.contains("code") {
            found.add_with_step("code-editor", Action::Edit);
        }
    }

    found
}

// Generic ids such as "converter" or "enhancer" have no registry entry and
// are dropped when the candidates are resolved to tools.
static COMMAND_KEYWORDS: &[CommandKeyword] = &[
    CommandKeyword {
        keywords: &["convert", "change", "transform"],
        tool_id: "converter",
        action: Action::Convert,
    },
    CommandKeyword {
        keywords: &["pdf", "pdf file"],
        tool_id: "pdf-to-word",
        action: Action::Convert,
    },
    CommandKeyword {
        keywords: &["word", "docx", "doc"],
        tool_id: "word-to-pdf",
        action: Action::Convert,
    },
    CommandKeyword {
        keywords: &["image", "picture", "photo"],
        tool_id: "image-converter",
        action: Action::Convert,
    },
    CommandKeyword {
        keywords: &["enhance", "improve", "upgrade", "better"],
        tool_id: "enhancer",
        action: Action::Enhance,
    },
    CommandKeyword {
        keywords: &["quality", "resolution"],
        tool_id: "image-enhancer",
        action: Action::Enhance,
    },
    CommandKeyword {
        keywords: &["text", "writing", "grammar"],
        tool_id: "text-enhancer",
        action: Action::Enhance,
    },
    CommandKeyword {
        keywords: &["audio", "sound"],
        tool_id: "audio-enhancer",
        action: Action::Enhance,
    },
    CommandKeyword {
        keywords: &["detect", "check", "verify", "analyze"],
        tool_id: "detector",
        action: Action::Detect,
    },
    CommandKeyword {
        keywords: &["ai", "artificial intelligence", "generated"],
        tool_id: "ai-text-detector",
        action: Action::Detect,
    },
    CommandKeyword {
        keywords: &["plagiarism", "copied", "original"],
        tool_id: "plagiarism-checker",
        action: Action::Detect,
    },
    CommandKeyword {
        keywords: &["edit", "modify", "change"],
        tool_id: "editor",
        action: Action::Edit,
    },
    CommandKeyword {
        keywords: &["code", "programming"],
        tool_id: "code-editor",
        action: Action::Edit,
    },
    CommandKeyword {
        keywords: &["chat", "talk", "converse"],
        tool_id: "chatgpt",
        action: Action::Use,
    },
    CommandKeyword {
        keywords: &["generate image", "create image"],
        tool_id: "dalle",
        action: Action::Use,
    },
    CommandKeyword {
        keywords: &["search", "find", "research"],
        tool_id: "perplexity",
        action: Action::Use,
    },
];
