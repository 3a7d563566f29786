use crate::registry::{all_tools, get_tool_by_id};
use crate::types::Tool;

const CATEGORY_WEIGHT: u32 = 3;
const SHARED_TAG_WEIGHT: u32 = 2;

pub fn relevance_score(source: &Tool, candidate: &Tool) -> u32 {
    let mut score = 0;
    if candidate.category == source.category {
        score += CATEGORY_WEIGHT;
    }
    for tag in source.tags {
        if candidate.has_tag(tag) {
            score += SHARED_TAG_WEIGHT;
        }
    }
    score
}

/// Every other registry tool with a positive score against `tool_id`,
/// best first. Ties keep registry order.
pub fn score_related_tools(tool_id: &str) -> Vec<(u32, &'static Tool)> {
    let Some(source) = get_tool_by_id(tool_id) else {
        return Vec::new();
    };

    let mut scored: Vec<(u32, &'static Tool)> = all_tools()
        .iter()
        .filter(|t| t.id != source.id)
        .map(|t| (relevance_score(source, t), t))
        .filter(|(score, _)| *score > 0)
        .collect();

    // sort_by is stable
    scored.sort_by(|a, b| b.0.cmp(&a.0));
    scored
}

pub fn get_related_tools(tool_id: &str, limit: usize) -> Vec<&'static Tool> {
    score_related_tools(tool_id)
        .into_iter()
        .take(limit)
        .map(|(_, t)| t)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(tools: &[&Tool]) -> Vec<&'static str> {
        tools.iter().map(|t| t.id).collect()
    }

    #[test]
    fn same_category_and_shared_tags_add_up() {
        let chatgpt = get_tool_by_id("chatgpt").unwrap();
        let claude = get_tool_by_id("claude").unwrap();
        let text_enhancer = get_tool_by_id("text-enhancer").unwrap();
        let pdf_to_word = get_tool_by_id("pdf-to-word").unwrap();

        assert_eq!(relevance_score(chatgpt, claude), 3 + 4 * 2);
        assert_eq!(relevance_score(chatgpt, text_enhancer), 2);
        assert_eq!(relevance_score(chatgpt, pdf_to_word), 0);
    }

    #[test]
    fn related_tools_are_ranked_with_stable_ties() {
        let related = get_related_tools("chatgpt", 4);
        assert_eq!(ids(&related), vec!["claude", "gemini", "perplexity", "mistral"]);
    }

    #[test]
    fn zero_scores_are_never_returned() {
        let related = get_related_tools("pdf-to-word", 10);
        assert_eq!(ids(&related), vec!["word-to-pdf", "image-converter"]);
    }

    #[test]
    fn results_exclude_source_respect_limit_and_descend() {
        for tool in all_tools() {
            let scored = score_related_tools(tool.id);
            assert!(scored.iter().all(|(score, t)| *score > 0 && t.id != tool.id));
            assert!(scored.windows(2).all(|w| w[0].0 >= w[1].0));
            assert!(get_related_tools(tool.id, 2).len() <= 2);
        }
    }

    #[test]
    fn unknown_tool_has_no_related_tools() {
        assert!(get_related_tools("not-a-tool", 3).is_empty());
    }
}
