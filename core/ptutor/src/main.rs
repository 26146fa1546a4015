mod adapter;
mod cli;
mod domain;
mod ports;
mod usecase;
mod wiring;

#[cfg(test)]
mod tests;

use std::io;
use std::process;

use common::error::Error;
use common::ports::outbound::{now_iso8601, LogLevel, LogRecord};

use adapter::StdoutSink;
use cli::parse_args;
use usecase::repl::run_repl;
use wiring::wire_tutor;

fn main() {
    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            if e.is_usage() {
                print_usage();
            }
            eprintln!("ptutor: {}", e);
            e.exit_code()
        }
    };
    process::exit(exit_code);
}

pub fn run() -> Result<i32, Error> {
    let config = parse_args()?;
    if config.help {
        print_help();
        return Ok(0);
    }

    let mut app = wire_tutor(&config)?;
    let _ = app.logger.log(&LogRecord {
        ts: now_iso8601(),
        level: LogLevel::Info,
        message: "session started".to_string(),
        layer: Some("cli".to_string()),
        kind: Some("lifecycle".to_string()),
        fields: {
            let mut m = std::collections::BTreeMap::new();
            m.insert("profile".to_string(), serde_json::json!(app.profile));
            Some(m)
        },
    });

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut sink = StdoutSink::new();
    let result = run_repl(&mut app.tutor, &mut input, &mut sink);

    let code = result.as_ref().copied().unwrap_or(0);
    let _ = app.logger.log(&LogRecord {
        ts: now_iso8601(),
        level: LogLevel::Info,
        message: "session finished".to_string(),
        layer: Some("cli".to_string()),
        kind: Some("lifecycle".to_string()),
        fields: {
            let mut m = std::collections::BTreeMap::new();
            m.insert("exit_code".to_string(), serde_json::json!(code));
            Some(m)
        },
    });
    if let Err(ref e) = result {
        let _ = app.logger.log(&LogRecord {
            ts: now_iso8601(),
            level: LogLevel::Error,
            message: e.to_string(),
            layer: Some("cli".to_string()),
            kind: Some("error".to_string()),
            fields: None,
        });
    }
    result
}

fn print_usage() {
    eprintln!("Usage: ptutor [options]");
}

fn print_help() {
    println!("Usage: ptutor [options]");
    println!("Options:");
    println!("  -h, --help                 Show this help message");
    println!("  -p, --profile <profile>    Specify LLM profile (glm, echo, or a profiles.json entry). Default: profiles.json default, or glm if not set.");
    println!("  -m, --model <model>        Specify model name (e.g. glm-4.5). Default: profile default");
    println!("  --persona <path>           Path to the persona file used as the system message. Default: Theresa.txt");
    println!("  -v, --verbose              Mirror structured log records to stderr (for troubleshooting)");
    println!();
    println!("Environment:");
    println!("  OPENAI_API_KEY  API key for the default glm profile (the profile's api_key_env may name another variable)");
    println!("  PTUTOR_HOME     Home directory. Profiles: $PTUTOR_HOME/profiles.json; log: $PTUTOR_HOME/log/ptutor.jsonl");
    println!("                  If unset, $XDG_CONFIG_HOME/ptutor (e.g. ~/.config/ptutor) is used.");
    println!();
    println!("Description:");
    println!("  Interactive probability & statistics tutor. Pick a task from the menu,");
    println!("  type your question, and the reply streams back token by token.");
    println!();
    println!("Examples:");
    println!("  ptutor");
    println!("  ptutor -p echo");
    println!("  ptutor --persona ./personas/strict.txt -v");
}
