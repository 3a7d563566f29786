use crate::history::HistoryStore;
use crate::registry::all_tools;
use crate::scoring::get_related_tools;
use crate::storage::KeyValueStore;
use crate::types::Tool;

/// Distinct tools feeding recommendations at most this many "slots".
const MAX_SLOTS: usize = 3;

pub fn default_recommendations(limit: usize) -> Vec<&'static Tool> {
    all_tools().iter().take(limit).collect()
}

/// Suggestions derived from recent history; the registry head when there is none.
pub fn get_personalized_recommendations<S: KeyValueStore>(
    history: &HistoryStore<S>,
    limit: usize,
) -> Vec<&'static Tool> {
    let records = history.read_history();
    if records.is_empty() {
        return default_recommendations(limit);
    }

    let mut distinct: Vec<&str> = Vec::new();
    for record in &records {
        if !distinct.contains(&record.tool_id.as_str()) {
            distinct.push(&record.tool_id);
        }
    }

    let per_tool = limit.div_ceil(distinct.len().min(MAX_SLOTS));

    let mut recommendations: Vec<&'static Tool> = Vec::new();
    for tool_id in distinct {
        for tool in get_related_tools(tool_id, per_tool) {
            if !recommendations.iter().any(|t| t.id == tool.id) {
                recommendations.push(tool);
            }
        }
    }
    recommendations.truncate(limit);
    recommendations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn ids(tools: &[&Tool]) -> Vec<&'static str> {
        tools.iter().map(|t| t.id).collect()
    }

    #[test]
    fn cold_start_returns_registry_head() {
        let history = HistoryStore::new(MemoryStore::new());
        let recs = get_personalized_recommendations(&history, 4);
        assert_eq!(ids(&recs), vec!["chatgpt", "gemini", "claude", "perplexity"]);
    }

    #[test]
    fn detached_history_falls_back_to_defaults() {
        let history: HistoryStore<MemoryStore> = HistoryStore::detached();
        assert_eq!(get_personalized_recommendations(&history, 2).len(), 2);
    }

    #[test]
    fn single_tool_history_fills_every_slot() {
        let mut history = HistoryStore::new(MemoryStore::new());
        history.save_interaction("chatgpt");
        let recs = get_personalized_recommendations(&history, 4);
        assert_eq!(ids(&recs), vec!["claude", "gemini", "perplexity", "mistral"]);
    }

    #[test]
    fn most_recent_tool_leads_and_fan_out_is_split() {
        let mut history = HistoryStore::new(MemoryStore::new());
        history.save_interaction("chatgpt");
        history.save_interaction("pdf-to-word");
        let recs = get_personalized_recommendations(&history, 4);
        assert_eq!(
            ids(&recs),
            vec!["word-to-pdf", "image-converter", "claude", "gemini"]
        );
    }

    #[test]
    fn duplicates_are_removed_keeping_first_occurrence() {
        let mut history = HistoryStore::new(MemoryStore::new());
        history.save_interaction("word-to-pdf");
        history.save_interaction("pdf-to-word");
        history.save_interaction("pdf-to-word");
        let recs = get_personalized_recommendations(&history, 4);
        // pdf-to-word -> [word-to-pdf, image-converter], word-to-pdf -> [pdf-to-word, image-converter]
        assert_eq!(
            ids(&recs),
            vec!["word-to-pdf", "image-converter", "pdf-to-word"]
        );
    }

    #[test]
    fn unknown_history_ids_contribute_nothing() {
        let mut history = HistoryStore::new(MemoryStore::new());
        history.save_interaction("retired-tool");
        assert!(get_personalized_recommendations(&history, 4).is_empty());
    }

    #[test]
    fn never_exceeds_limit() {
        let mut history = HistoryStore::new(MemoryStore::new());
        for id in ["chatgpt", "image-editor", "text-enhancer", "code-editor"] {
            history.save_interaction(id);
        }
        assert!(get_personalized_recommendations(&history, 5).len() <= 5);
        assert!(get_personalized_recommendations(&history, 0).is_empty());
    }
}
