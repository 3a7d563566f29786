use anoki::commands::{
    cmd_config, cmd_doctor, cmd_history, cmd_launch, cmd_recommend, cmd_related, cmd_suggest,
    cmd_tools, cmd_visit, open_history,
};
use anoki::config::load_config;
use anoki::AnokiError;
use std::env;
use tracing_subscriber::EnvFilter;

fn print_usage() {
    eprintln!("usage: anoki [-e] [-j] <command>");
    eprintln!("       anoki suggest [text]");
    eprintln!("       anoki tools [category]");
    eprintln!("       anoki visit <tool-id>");
    eprintln!("       anoki related <tool-id> [-n N]");
    eprintln!("       anoki recommend [-n N]");
    eprintln!("       anoki history | config | doctor");
}

fn init_logging() {
    let filter = EnvFilter::try_from_env("ANOKI_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Pulls `-n N` out of `args`, leaving the positional arguments.
fn take_limit(args: &[String]) -> Result<(Option<usize>, Vec<&str>), AnokiError> {
    let mut limit = None;
    let mut rest = Vec::new();
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-n" | "--limit" => {
                let value = iter
                    .next()
                    .ok_or_else(|| AnokiError::Usage(format!("{} needs a value", arg)))?;
                let parsed = value
                    .parse()
                    .map_err(|_| AnokiError::Usage(format!("invalid limit '{}'", value)))?;
                limit = Some(parsed);
            }
            other => rest.push(other),
        }
    }
    Ok((limit, rest))
}

fn run(args: &[String]) -> Result<(), AnokiError> {
    let config = load_config();
    let mut history = open_history(&config);

    match args[1].as_str() {
        "suggest" => cmd_suggest(&args[2..].join(" ")),
        "tools" => cmd_tools(args.get(2).map(String::as_str), &config),
        "visit" => match args.get(2) {
            Some(id) => cmd_visit(id, &mut history),
            None => Err(AnokiError::Usage("visit needs a tool id".into())),
        },
        "related" => {
            let (limit, rest) = take_limit(&args[2..])?;
            match rest.first() {
                Some(id) => cmd_related(id, limit, &config),
                None => Err(AnokiError::Usage("related needs a tool id".into())),
            }
        }
        "recommend" => {
            let (limit, _) = take_limit(&args[2..])?;
            cmd_recommend(limit, &config, &history)
        }
        "history" => cmd_history(&config, &history),
        "config" => cmd_config(),
        "doctor" => cmd_doctor(&config, &history),
        _ => {
            let mut explain = false;
            let mut json = false;
            let mut parts = Vec::new();
            for a in &args[1..] {
                match a.as_str() {
                    "-e" | "--explain" => explain = true,
                    "-j" | "--json" => json = true,
                    _ => parts.push(a.as_str()),
                }
            }
            let command = parts.join(" ");
            if command.trim().is_empty() {
                print_usage();
                Ok(())
            } else {
                cmd_launch(&command, &config, &mut history, explain, json)
            }
        }
    }
}

fn main() {
    init_logging();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 || matches!(args[1].as_str(), "-h" | "--help" | "help") {
        print_usage();
        return;
    }

    if let Err(e) = run(&args) {
        eprintln!("anoki: {}", e);
        std::process::exit(1);
    }
}
