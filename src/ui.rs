use crate::executor::{ExecutionOutcome, ExecutionStep, StepStatus};
use crate::types::{InteractionRecord, ParsedCommand, Tool};
use crossterm::style::Stylize;
use std::io::Write;

pub fn print_parsed(parsed: &ParsedCommand) {
    println!();

    if let (Some(name), Some(description)) = (parsed.chain_name, parsed.chain_description) {
        println!("  {}", name.bold());
        println!("  {}", description.dim());
        println!();
    }

    for (i, tool) in parsed.tools.iter().enumerate() {
        if parsed.tools.len() > 1 {
            println!("  {}. {} ({})", i + 1, tool.name, tool.url.dim());
        } else {
            println!("  {} ({})", tool.name, tool.url.dim());
        }
    }

    if !parsed.steps.is_empty() {
        println!();
        println!("steps:");
        for step in &parsed.steps {
            println!("  - {}", step);
        }
    }
}

pub fn print_step(index: usize, step: &ExecutionStep) {
    let marker = match step.status {
        StepStatus::Pending => " ".stylize(),
        StepStatus::Processing => "~".yellow(),
        StepStatus::Completed => "+".green(),
        StepStatus::Error => "x".red(),
    };
    if step.status == StepStatus::Processing {
        print!("  [{}] {}. {}", marker, index + 1, step.step);
        std::io::stdout().flush().ok();
    } else {
        println!("\r  [{}] {}. {}", marker, index + 1, step.step);
    }
}

pub fn print_outcome(outcome: &ExecutionOutcome) {
    println!();
    if outcome.success {
        println!("{}", outcome.message.as_str().green());
    } else {
        println!("{}", outcome.message.as_str().red());
    }
}

pub fn print_tools(tools: &[&Tool]) {
    if tools.is_empty() {
        println!("nothing to show.");
        return;
    }
    for tool in tools {
        println!("  {:<20} {}", tool.id, tool.description.dim());
    }
}

pub fn print_history(records: &[InteractionRecord]) {
    for record in records {
        println!("  {}  {}", record.timestamp.as_str().dim(), record.tool_id);
    }
}

pub fn print_suggestions(suggestions: &[&str]) {
    for suggestion in suggestions {
        println!("  {}", suggestion);
    }
}
