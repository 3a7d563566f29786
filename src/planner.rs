use crate::chains::{chain_steps, match_chain};
use crate::keywords::match_keywords;
use crate::registry::resolve_all;
use crate::types::ParsedCommand;

const SUGGESTED_COMMANDS: &[&str] = &[
    "Convert this PDF to Word and enhance its quality",
    "Check this text for plagiarism and improve its grammar",
    "Enhance this image and convert it to PNG",
    "Detect if this text was AI-generated and improve it",
    "Convert this Word document to PDF with high quality",
    "Enhance the audio quality of this recording",
    "Edit this image and enhance its colors",
    "Check if this essay contains plagiarism",
];

/// Turns free text into the tools to run and the steps to show.
///
/// Never fails: a command nothing matches yields an empty `tools` list and the
/// caller decides how to report it.
pub fn parse_command(command: &str) -> ParsedCommand {
    let found = match_keywords(command);

    match match_chain(&found.tool_ids) {
        Some(chain) => ParsedCommand {
            tools: resolve_all(chain.tools.iter().copied()),
            actions: found.actions,
            chain_name: Some(chain.name),
            chain_description: Some(chain.description),
            steps: chain_steps(chain),
        },
        None => ParsedCommand {
            tools: resolve_all(found.tool_ids.iter().copied()),
            actions: found.actions,
            chain_name: None,
            chain_description: None,
            steps: found.steps,
        },
    }
}

pub fn get_suggested_commands() -> Vec<&'static str> {
    SUGGESTED_COMMANDS.to_vec()
}

/// Suggestions containing `typed`, ignoring case. Blank input keeps them all.
pub fn filter_suggestions(typed: &str) -> Vec<&'static str> {
    let needle = typed.to_lowercase();
    SUGGESTED_COMMANDS
        .iter()
        .copied()
        .filter(|s| s.to_lowercase().contains(&needle))
        .collect()
}
