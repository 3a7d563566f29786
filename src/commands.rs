use crate::config::{get_config_path, save_config, Config, OutputStyle, StorageBackend};
use crate::error::{AnokiError, Result};
use crate::executor::{ExecutionPlan, Executor};
use crate::history::HistoryStore;
use crate::planner::{filter_suggestions, parse_command};
use crate::recommend::get_personalized_recommendations;
use crate::registry::{all_tools, get_tool_by_id, tools_in_category};
use crate::scoring::get_related_tools;
use crate::storage::{KeyValueStore, MemoryStore, SqliteStore};
use crate::types::{Category, ParsedCommand, Tool};
use crate::ui::{
    print_history, print_outcome, print_parsed, print_step, print_suggestions, print_tools,
};
use std::{env, fs, process::Command};
use tracing::warn;

pub type DynHistory = HistoryStore<Box<dyn KeyValueStore>>;

/// Opens the configured history store, detaching when the medium is unavailable.
pub fn open_history(config: &Config) -> DynHistory {
    match config.storage.backend {
        StorageBackend::Memory => {
            let store: Box<dyn KeyValueStore> = Box::new(MemoryStore::new());
            HistoryStore::new(store)
        }
        StorageBackend::Sqlite => {
            let path = config.history_path();
            match SqliteStore::open(&path) {
                Ok(store) => {
                    let store: Box<dyn KeyValueStore> = Box::new(store);
                    HistoryStore::new(store)
                }
                Err(e) => {
                    warn!(error = %e, path = %path.display(), "history storage unavailable");
                    HistoryStore::detached()
                }
            }
        }
    }
}

fn print_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Records one interaction per resolved tool, in tool order.
pub fn record_launch<S: KeyValueStore>(history: &mut HistoryStore<S>, parsed: &ParsedCommand) {
    for tool in &parsed.tools {
        history.save_interaction(tool.id);
    }
}

pub fn cmd_launch(
    command: &str,
    config: &Config,
    history: &mut DynHistory,
    explain_only: bool,
    json: bool,
) -> Result<()> {
    let parsed = parse_command(command);

    if json || config.output.style == OutputStyle::Json {
        print_json(&parsed)?;
        if explain_only {
            return Ok(());
        }
    } else if parsed.is_understood() {
        print_parsed(&parsed);
    }

    if explain_only {
        if !parsed.is_understood() {
            println!("{}", crate::executor::NOT_UNDERSTOOD_MESSAGE);
        }
        return Ok(());
    }

    let mut plan = ExecutionPlan::from_parsed(&parsed);
    if !plan.is_empty() {
        record_launch(history, &parsed);
        println!();
    }

    let outcome = Executor::new(&config.execution).run(&mut plan, print_step)?;
    print_outcome(&outcome);
    Ok(())
}

pub fn cmd_suggest(typed: &str) -> Result<()> {
    let suggestions = filter_suggestions(typed);
    if suggestions.is_empty() {
        println!("no matching suggestions.");
    } else {
        print_suggestions(&suggestions);
    }
    Ok(())
}

pub fn cmd_tools(category: Option<&str>, config: &Config) -> Result<()> {
    let tools: Vec<&Tool> = match category {
        Some(name) => {
            let category = Category::parse(name).ok_or_else(|| {
                AnokiError::Usage(format!(
                    "unknown category '{}' (expected one of: {})",
                    name,
                    Category::ALL.map(Category::as_str).join(", ")
                ))
            })?;
            tools_in_category(category).collect()
        }
        None => all_tools().iter().collect(),
    };

    if config.output.style == OutputStyle::Json {
        return print_json(&tools);
    }
    print_tools(&tools);
    Ok(())
}

pub fn cmd_visit(tool_id: &str, history: &mut DynHistory) -> Result<()> {
    let tool = get_tool_by_id(tool_id).ok_or_else(|| AnokiError::UnknownTool(tool_id.into()))?;
    history.save_interaction(tool.id);
    println!("{} -> {}", tool.name, tool.url);
    Ok(())
}

pub fn cmd_related(tool_id: &str, limit: Option<usize>, config: &Config) -> Result<()> {
    let limit = limit.unwrap_or(config.recommendations.related_limit);
    let related = get_related_tools(tool_id, limit);
    if config.output.style == OutputStyle::Json {
        return print_json(&related);
    }
    print_tools(&related);
    Ok(())
}

pub fn cmd_recommend(limit: Option<usize>, config: &Config, history: &DynHistory) -> Result<()> {
    let limit = limit.unwrap_or(config.recommendations.default_limit);
    let recommendations = get_personalized_recommendations(history, limit);
    if config.output.style == OutputStyle::Json {
        return print_json(&recommendations);
    }
    print_tools(&recommendations);
    Ok(())
}

pub fn cmd_history(config: &Config, history: &DynHistory) -> Result<()> {
    let records = history.read_history();
    if config.output.style == OutputStyle::Json {
        return print_json(&records);
    }
    if records.is_empty() {
        println!("no history yet.");
        return Ok(());
    }
    println!("recent tools:");
    print_history(&records);
    Ok(())
}

pub fn cmd_doctor(config: &Config, history: &DynHistory) -> Result<()> {
    println!("diagnostics:");
    println!();

    let config_path = get_config_path();
    print!("  config ... ");
    if config_path.exists() {
        println!("ok ({})", config_path.display());
    } else {
        println!("using defaults");
    }

    print!("  storage ... ");
    match (config.storage.backend, history.is_attached()) {
        (StorageBackend::Memory, _) => println!("in-memory (history is not kept)"),
        (StorageBackend::Sqlite, true) => {
            println!("ok ({})", config.history_path().display());
        }
        (StorageBackend::Sqlite, false) => {
            println!("unavailable");
            println!("    path: {}", config.history_path().display());
        }
    }

    println!("  history ... {} entries", history.read_history().len());
    println!("  tools ... {}", all_tools().len());
    println!();
    Ok(())
}

pub fn cmd_config() -> Result<()> {
    let config_path = get_config_path();

    if !config_path.exists() {
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }
        save_config(&Config::default())?;
    }

    let editor = env::var("EDITOR").unwrap_or_else(|_| "vi".to_string());
    Command::new(&editor).arg(&config_path).status()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn memory_config() -> Config {
        let mut config = Config::default();
        config.storage.backend = StorageBackend::Memory;
        config.execution.min_step_ms = 0;
        config.execution.max_step_ms = 0;
        config
    }

    #[test]
    fn launch_records_each_tool_in_order() {
        let config = memory_config();
        let mut history = open_history(&config);
        cmd_launch(
            "Check this text for plagiarism and improve its grammar",
            &config,
            &mut history,
            false,
            false,
        )
        .unwrap();

        let ids: Vec<_> = history.read_history().into_iter().map(|r| r.tool_id).collect();
        assert_eq!(ids, vec!["text-enhancer", "plagiarism-checker"]);
    }

    #[test]
    fn explain_and_unknown_commands_record_nothing() {
        let config = memory_config();
        let mut history = open_history(&config);
        cmd_launch("edit my code", &config, &mut history, true, false).unwrap();
        cmd_launch("xyzzy", &config, &mut history, false, false).unwrap();
        assert!(history.read_history().is_empty());
    }

    #[test]
    fn visit_rejects_unknown_tools() {
        let config = memory_config();
        let mut history = open_history(&config);
        assert!(matches!(
            cmd_visit("nope", &mut history),
            Err(AnokiError::UnknownTool(_))
        ));
        cmd_visit("claude", &mut history).unwrap();
        assert_eq!(history.read_history()[0].tool_id, "claude");
    }

    #[test]
    fn unreadable_sqlite_path_detaches_history() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("file");
        fs::write(&blocker, "x").unwrap();

        let mut config = memory_config();
        config.storage.backend = StorageBackend::Sqlite;
        config.storage.path = Some(blocker.join("history.db"));

        let mut history = open_history(&config);
        assert!(!history.is_attached());
        history.save_interaction("chatgpt");
        assert!(history.read_history().is_empty());
    }

    #[test]
    fn unknown_category_is_a_usage_error() {
        assert!(matches!(
            cmd_tools(Some("spreadsheets"), &Config::default()),
            Err(AnokiError::Usage(_))
        ));
    }
}
