//! aura CLI: exercise the Aura OS core from a terminal — add/list/search
//! memory records, read or set the theme, and chat with the assistant.
//! Config comes from env (.env supported) and optional CLI args.

use anyhow::{Context, Result};
use assistant::SendOutcome;
use aura_core::Theme;
use aura_shell::{Shell, ShellConfig};
use clap::{Parser, Subcommand};
use memory_bank::{Category, CategoryFilter, MemoryItem};
use std::io::{BufRead, Write};

#[derive(Parser)]
#[command(name = "aura")]
#[command(about = "Aura OS core CLI: memory bank, settings, chat", long_about = None)]
#[command(version)]
struct Cli {
    /// Overrides OPENAI_API_KEY.
    #[arg(long, global = true)]
    api_key: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a memory record to one category.
    Add {
        /// struggles | development | mindset
        category: String,
        /// The record's headline.
        description: String,
        /// Supporting details; repeat for multiple.
        #[arg(short, long)]
        detail: Vec<String>,
    },
    /// List records, optionally for one category.
    List {
        #[arg(short, long)]
        category: Option<String>,
    },
    /// Search records by substring, optionally within one category.
    Search {
        query: String,
        #[arg(short, long)]
        category: Option<String>,
    },
    /// Show the theme, or set it when a value is given.
    Theme {
        /// light | dark
        value: Option<String>,
    },
    /// Chat with the assistant (interactive; /reset clears, /exit quits).
    Chat,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = ShellConfig::load(cli.api_key)?;

    if let Some(parent) = std::path::Path::new(&config.log_file).parent() {
        std::fs::create_dir_all(parent)?;
    }
    aura_core::init_tracing(Some(&config.log_file))?;

    let shell = Shell::start(&config).await?;

    match cli.command {
        Commands::Add {
            category,
            description,
            detail,
        } => {
            let category = parse_category(&category)?;
            let item = shell.add_memory(category, &description, &detail).await?;
            println!("Added {} record {}", category, item.id);
        }
        Commands::List { category } => {
            let filter = parse_filter(category.as_deref())?;
            print_entries(&shell.filter_memories(filter).await);
        }
        Commands::Search { query, category } => {
            let filter = parse_filter(category.as_deref())?;
            print_entries(&shell.search_memories(&query, filter).await);
        }
        Commands::Theme { value } => match value {
            Some(value) => {
                let theme = Theme::parse(&value)
                    .with_context(|| format!("unknown theme '{}', expected light|dark", value))?;
                shell.set_theme(theme).await?;
                println!("Theme set to {}", theme);
            }
            None => println!("{}", shell.theme().await?),
        },
        Commands::Chat => run_chat(&shell).await?,
    }

    Ok(())
}

fn parse_category(s: &str) -> Result<Category> {
    Category::parse(s).with_context(|| {
        format!(
            "unknown category '{}', expected struggles|development|mindset",
            s
        )
    })
}

fn parse_filter(s: Option<&str>) -> Result<CategoryFilter> {
    match s {
        None => Ok(CategoryFilter::All),
        Some(s) => Ok(parse_category(s)?.into()),
    }
}

fn print_entries(entries: &[(Category, MemoryItem)]) {
    if entries.is_empty() {
        println!("no entries");
        return;
    }
    for (category, item) in entries {
        println!(
            "[{}] {}  {}",
            category,
            item.timestamp.format("%Y-%m-%d"),
            item.value.description
        );
        for detail in &item.value.details {
            println!("    - {}", detail);
        }
    }
}

/// Interactive chat loop on stdin. The greeting prints first, then every
/// model reply as it lands.
async fn run_chat(shell: &Shell) -> Result<()> {
    let transcript = shell.chat_transcript().await;
    println!("{}", transcript[0].text);

    let stdin = std::io::stdin();
    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim_end_matches('\n');

        match line {
            "/exit" => break,
            "/reset" => {
                shell.reset_chat().await;
                println!("{}", shell.chat_transcript().await[0].text);
                continue;
            }
            _ => {}
        }

        match shell.send_chat_message(line).await {
            SendOutcome::RejectedEmpty => continue,
            SendOutcome::RejectedBusy => {
                println!("(still waiting on the previous reply)");
                continue;
            }
            SendOutcome::Replied | SendOutcome::Failed => {
                let transcript = shell.chat_transcript().await;
                if let Some(last) = transcript.last() {
                    println!("{}", last.text);
                }
            }
        }
    }

    Ok(())
}
