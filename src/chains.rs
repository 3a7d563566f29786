use crate::keywords::step_description;
use crate::registry::get_tool_by_id;
use crate::types::ToolChain;
use tracing::debug;

pub fn tool_chains() -> &'static [ToolChain] {
    TOOL_CHAINS
}

/// First declared chain whose every tool is among the candidates.
pub fn match_chain(candidate_ids: &[&str]) -> Option<&'static ToolChain> {
    let chain = TOOL_CHAINS
        .iter()
        .find(|chain| chain.tools.iter().all(|id| candidate_ids.contains(id)))?;
    debug!(chain = chain.id, "tool chain matched");
    Some(chain)
}

/// Steps in the chain's declared order. Ids missing from the registry are skipped.
pub fn chain_steps(chain: &ToolChain) -> Vec<String> {
    chain
        .tools
        .iter()
        .filter_map(|id| get_tool_by_id(id))
        .map(|tool| match step_description(tool.id) {
            Some(step) => step.to_string(),
            None => format!("Use {}", tool.name),
        })
        .collect()
}

static TOOL_CHAINS: &[ToolChain] = &[
    ToolChain {
        id: "pdf-to-word-enhance",
        name: "Convert PDF to Word and Enhance",
        description: "Converts a PDF file to Word format and enhances the text quality",
        tools: &["pdf-to-word", "text-enhancer"],
    },
    ToolChain {
        id: "word-to-pdf-enhance",
        name: "Convert Word to PDF and Enhance",
        description: "Converts a Word document to PDF format with enhanced quality",
        tools: &["word-to-pdf", "image-enhancer"],
    },
    ToolChain {
        id: "enhance-image-convert",
        name: "Enhance Image and Convert Format",
        description: "Enhances image quality and converts to another format",
        tools: &["image-enhancer", "image-converter"],
    },
    ToolChain {
        id: "check-plagiarism-enhance",
        name: "Check Plagiarism and Enhance Text",
        description: "Checks text for plagiarism and enhances writing quality",
        tools: &["plagiarism-checker", "text-enhancer"],
    },
    ToolChain {
        id: "detect-ai-enhance",
        name: "Detect AI Text and Enhance",
        description: "Detects if text was AI-generated and enhances it",
        tools: &["ai-text-detector", "text-enhancer"],
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::all_tools;

    #[test]
    fn chains_only_reference_registered_tools() {
        for chain in tool_chains() {
            for id in chain.tools {
                assert!(all_tools().iter().any(|t| t.id == *id), "{} -> {}", chain.id, id);
            }
        }
    }

    #[test]
    fn match_is_independent_of_candidate_order() {
        let a = match_chain(&["plagiarism-checker", "text-enhancer"]).unwrap();
        let b = match_chain(&["text-enhancer", "plagiarism-checker"]).unwrap();
        assert_eq!(a.id, "check-plagiarism-enhance");
        assert_eq!(a, b);
    }

    #[test]
    fn partial_match_does_not_qualify() {
        assert!(match_chain(&["pdf-to-word"]).is_none());
        assert!(match_chain(&[]).is_none());
    }

    #[test]
    fn first_declared_chain_wins() {
        let candidates = ["ai-text-detector", "text-enhancer", "pdf-to-word"];
        assert_eq!(match_chain(&candidates).unwrap().id, "pdf-to-word-enhance");
    }

    #[test]
    fn steps_follow_declared_order() {
        let chain = match_chain(&["image-converter", "image-enhancer"]).unwrap();
        assert_eq!(
            chain_steps(chain),
            vec!["Enhance image quality and resolution", "Use Image Converter"]
        );
    }
}
