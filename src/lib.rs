//! Command parsing, tool chains and history-driven recommendations for the
//! anoki tool launcher.

pub mod chains;
pub mod commands;
pub mod config;
pub mod error;
pub mod executor;
pub mod history;
pub mod keywords;
pub mod planner;
pub mod recommend;
pub mod registry;
pub mod scoring;
pub mod storage;
pub mod types;
pub mod ui;

pub use error::{AnokiError, Result};
pub use history::{HistoryStore, USER_HISTORY_KEY};
pub use planner::{filter_suggestions, get_suggested_commands, parse_command};
pub use recommend::get_personalized_recommendations;
pub use registry::get_tool_by_id;
pub use scoring::get_related_tools;
pub use storage::{KeyValueStore, MemoryStore, SqliteStore};
pub use types::{Action, Category, InteractionRecord, ParsedCommand, Tool, ToolChain};
