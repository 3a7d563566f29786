use crate::types::{Category, Tool};
use tracing::debug;

/// Outcome of looking up an id referenced by a keyword rule, chain or history record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution<'a> {
    Found(&'static Tool),
    Unknown(&'a str),
}

impl<'a> Resolution<'a> {
    pub fn tool(self) -> Option<&'static Tool> {
        match self {
            Resolution::Found(tool) => Some(tool),
            Resolution::Unknown(_) => None,
        }
    }
}

pub fn all_tools() -> &'static [Tool] {
    TOOLS
}

pub fn get_tool_by_id(id: &str) -> Option<&'static Tool> {
    TOOLS.iter().find(|tool| tool.id == id)
}

pub fn resolve(id: &str) -> Resolution<'_> {
    match get_tool_by_id(id) {
        Some(tool) => Resolution::Found(tool),
        None => Resolution::Unknown(id),
    }
}

/// Maps ids to tools in order, dropping the ones the registry does not know.
pub fn resolve_all<'a, I>(ids: I) -> Vec<&'static Tool>
where
    I: IntoIterator<Item = &'a str>,
{
    ids.into_iter()
        .map(resolve)
        .filter_map(|resolution| match resolution {
            Resolution::Found(tool) => Some(tool),
            Resolution::Unknown(id) => {
                debug!(tool_id = id, "dropping unknown tool id");
                None
            }
        })
        .collect()
}

pub fn tools_in_category(category: Category) -> impl Iterator<Item = &'static Tool> {
    TOOLS.iter().filter(move |tool| tool.category == category)
}

static TOOLS: &[Tool] = &[
    Tool {
        id: "chatgpt",
        name: "ChatGPT",
        description: "OpenAI's conversational AI",
        url: "https://chat.openai.com",
        category: Category::AiTools,
        tags: &["ai", "chat", "writing", "assistant"],
    },
    Tool {
        id: "gemini",
        name: "Gemini",
        description: "Google's multimodal AI",
        url: "https://gemini.google.com",
        category: Category::AiTools,
        tags: &["ai", "chat", "multimodal", "assistant"],
    },
    Tool {
        id: "claude",
        name: "Claude",
        description: "Anthropic's helpful assistant",
        url: "https://claude.ai",
        category: Category::AiTools,
        tags: &["ai", "chat", "writing", "assistant"],
    },
    Tool {
        id: "perplexity",
        name: "Perplexity",
        description: "AI-powered search engine",
        url: "https://perplexity.ai",
        category: Category::AiTools,
        tags: &["ai", "search", "research"],
    },
    Tool {
        id: "mistral",
        name: "Mistral AI",
        description: "Open-weight language models",
        url: "https://mistral.ai",
        category: Category::AiTools,
        tags: &["ai", "language-model", "developer"],
    },
    Tool {
        id: "midjourney",
        name: "Midjourney",
        description: "AI image generation",
        url: "https://www.midjourney.com",
        category: Category::AiTools,
        tags: &["ai", "image", "art", "creative"],
    },
    Tool {
        id: "dalle",
        name: "DALL-E",
        description: "OpenAI's image generator",
        url: "https://openai.com/dall-e-3",
        category: Category::AiTools,
        tags: &["ai", "image", "art", "creative"],
    },
    Tool {
        id: "stability",
        name: "Stability AI",
        description: "Open-source image models",
        url: "https://stability.ai",
        category: Category::AiTools,
        tags: &["ai", "image", "open-source"],
    },
    Tool {
        id: "huggingface",
        name: "Hugging Face",
        description: "AI model repository",
        url: "https://huggingface.co",
        category: Category::AiTools,
        tags: &["ai", "developer", "models", "repository"],
    },
    Tool {
        id: "runway",
        name: "Runway",
        description: "AI video generation",
        url: "https://runwayml.com",
        category: Category::AiTools,
        tags: &["ai", "video", "creative"],
    },
    Tool {
        id: "pdf-to-word",
        name: "PDF to Word",
        description: "Convert PDF files to Word documents",
        url: "/converters/pdf-to-word",
        category: Category::Converters,
        tags: &["pdf", "word", "document", "conversion"],
    },
    Tool {
        id: "word-to-pdf",
        name: "Word to PDF",
        description: "Convert Word documents to PDF files",
        url: "/converters/word-to-pdf",
        category: Category::Converters,
        tags: &["word", "pdf", "document", "conversion"],
    },
    Tool {
        id: "image-converter",
        name: "Image Converter",
        description: "Convert images between formats",
        url: "/converters/image",
        category: Category::Converters,
        tags: &["image", "conversion", "format"],
    },
    Tool {
        id: "ai-text-detector",
        name: "AI Text Detector",
        description: "Detect AI-generated text",
        url: "/detectors/ai-text",
        category: Category::Detectors,
        tags: &["ai", "text", "detection", "plagiarism"],
    },
    Tool {
        id: "ai-image-detector",
        name: "AI Image Detector",
        description: "Detect AI-generated images",
        url: "/detectors/ai-image",
        category: Category::Detectors,
        tags: &["ai", "image", "detection"],
    },
    Tool {
        id: "plagiarism-checker",
        name: "Plagiarism Checker",
        description: "Check text for plagiarism",
        url: "/detectors/plagiarism",
        category: Category::Detectors,
        tags: &["text", "plagiarism", "academic", "writing"],
    },
    Tool {
        id: "text-editor",
        name: "Text Editor",
        description: "Simple online text editor",
        url: "/editors/text",
        category: Category::Editors,
        tags: &["text", "editor", "writing"],
    },
    Tool {
        id: "image-editor",
        name: "Image Editor",
        description: "Edit images online",
        url: "/editors/image",
        category: Category::Editors,
        tags: &["image", "editor", "creative"],
    },
    Tool {
        id: "code-editor",
        name: "Code Editor",
        description: "Online code editor with syntax highlighting",
        url: "/editors/code",
        category: Category::Editors,
        tags: &["code", "editor", "developer", "programming"],
    },
    Tool {
        id: "image-enhancer",
        name: "Image Enhancer",
        description: "Enhance image quality",
        url: "/enhancers/image",
        category: Category::Enhancers,
        tags: &["image", "quality", "enhancement"],
    },
    Tool {
        id: "text-enhancer",
        name: "Text Enhancer",
        description: "Improve text quality and readability",
        url: "/enhancers/text",
        category: Category::Enhancers,
        tags: &["text", "writing", "enhancement"],
    },
    Tool {
        id: "audio-enhancer",
        name: "Audio Enhancer",
        description: "Enhance audio quality",
        url: "/enhancers/audio",
        category: Category::Enhancers,
        tags: &["audio", "sound", "enhancement"],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_tool_is_found_by_its_own_id() {
        for tool in all_tools() {
            let found = get_tool_by_id(tool.id).expect("registered tool");
            assert_eq!(found.id, tool.id);
        }
    }

    #[test]
    fn unknown_id_is_not_found() {
        assert!(get_tool_by_id("converter").is_none());
        assert_eq!(resolve("converter"), Resolution::Unknown("converter"));
    }

    #[test]
    fn resolution_exposes_found_tool() {
        assert_eq!(resolve("claude").tool().map(|t| t.name), Some("Claude"));
        assert!(resolve("editor").tool().is_none());
    }

    #[test]
    fn ids_are_unique() {
        let tools = all_tools();
        for (i, a) in tools.iter().enumerate() {
            assert!(tools[i + 1..].iter().all(|b| b.id != a.id), "duplicate id {}", a.id);
        }
    }

    #[test]
    fn resolve_all_drops_unknown_ids_and_keeps_order() {
        let tools = resolve_all(["text-enhancer", "enhancer", "pdf-to-word"]);
        let ids: Vec<_> = tools.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec!["text-enhancer", "pdf-to-word"]);
    }

    #[test]
    fn category_filter() {
        let ids: Vec<_> = tools_in_category(Category::Enhancers).map(|t| t.id).collect();
        assert_eq!(ids, vec!["image-enhancer", "text-enhancer", "audio-enhancer"]);
    }
}
