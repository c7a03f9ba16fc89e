//! `angstrom chat`: single-message or interactive chat with the agents.
//!
//! Interactive mode behaves like the website widget: the history lives
//! here, and the first resolved agent is pinned for the rest of the session.

use std::io::Write;
use std::path::PathBuf;

use angstrom_agent::{DispatchRequest, Dispatcher};
use angstrom_core::{Message, Mode};
use tokio::io::{AsyncBufReadExt, BufReader};

pub async fn run(
    config_path: Option<PathBuf>,
    message: Option<String>,
    agent: Option<Mode>,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = super::load_config(config_path)?;

    if !config.has_api_key() {
        eprintln!();
        eprintln!("  WARNING: No API key configured.");
        eprintln!("  Set {} (or ANGSTROM_API_KEY); replies will be the setup notice until then.", config.credential_env());
        eprintln!();
    }

    let provider = angstrom_providers::build_from_config(&config);
    let dispatcher = Dispatcher::from_config(provider, &config);

    if let Some(msg) = message {
        let reply = dispatcher
            .respond(DispatchRequest::new(vec![Message::user(msg)], agent))
            .await?;
        if let Some(mode) = reply.mode {
            eprintln!("  [{mode}]");
        }
        println!("{}", reply.text);
        return Ok(());
    }

    println!();
    println!("  Applied Angstrom Technology: Chat");
    println!();
    println!("  Provider:  {}", config.provider);
    println!("  Model:     {}", config.model);
    println!(
        "  Agent:     {}",
        agent.map_or("auto (classified on first message)", |m| m.as_str())
    );
    println!();
    println!("  Type your message and press Enter.");
    println!("  Type 'exit' or Ctrl+D to quit.");
    println!();

    let mut history: Vec<Message> = Vec::new();
    let mut pinned = agent;
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    prompt()?;
    while let Some(line) = lines.next_line().await? {
        let input = line.trim();
        if input.is_empty() {
            prompt()?;
            continue;
        }
        if matches!(input, "exit" | "quit") {
            break;
        }

        history.push(Message::user(input));
        eprint!("  ...");
        let reply = dispatcher
            .respond(DispatchRequest::new(history.clone(), pinned))
            .await?;
        eprint!("\r     \r");

        if reply.fallback.is_some() {
            // Drop the unanswered turn so the visitor can simply retry.
            history.pop();
        } else {
            history.push(Message::assistant(&reply.text));
        }
        if pinned.is_none() {
            pinned = reply.mode;
        }

        let label = reply.mode.map_or("Assistant", |m| m.as_str());
        println!();
        for line in reply.text.lines() {
            println!("  {label} > {line}");
        }
        println!();
        prompt()?;
    }

    println!();
    println!("  Goodbye!");
    println!();

    Ok(())
}

fn prompt() -> std::io::Result<()> {
    print!("  You > ");
    std::io::stdout().flush()
}
