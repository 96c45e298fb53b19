use std::io::{self, Write};

use anyhow::Result;
use askbot_agents::{QueryError, SupportAgent};
use askbot_core::{LocaleMode, QueryInput};
use askbot_ml::SupportMlStack;
use askbot_observability::{init_tracing, AppMetrics};
use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "askbot")]
#[command(about = "Emotion-aware order support responder")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// One-shot reply for a single query.
    Respond {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        order_id: String,
        /// Language choice: auto, english, or hindi.
        #[arg(long, default_value = "auto")]
        lang: String,
        /// Print the structured reply as JSON instead of the message block.
        #[arg(long)]
        json: bool,
        text: String,
    },
    /// Interactive form mirroring the original submission flow.
    Form,
    /// Classify a message without formatting a reply.
    Classify {
        #[arg(long, default_value = "auto")]
        lang: String,
        text: String,
    },
}

fn main() -> Result<()> {
    init_tracing("askbot_cli");
    let cli = Cli::parse();

    let agent = SupportAgent::new(SupportMlStack::load_default(), AppMetrics::shared());

    match cli.command {
        Command::Respond {
            name,
            email,
            order_id,
            lang,
            json,
            text,
        } => {
            let input = QueryInput {
                name,
                text,
                email,
                order_id,
                lang_mode: Some(lang),
            };
            match agent.handle_query(input) {
                Ok(reply) if json => println!("{}", serde_json::to_string_pretty(&reply)?),
                Ok(reply) => println!("{}", reply.message),
                Err(QueryError::Invalid(err)) => {
                    eprintln!("⚠️ Please fill in all fields before submitting ({err})");
                }
                Err(err) => return Err(err.into()),
            }
        }
        Command::Form => run_form(&agent)?,
        Command::Classify { lang, text } => {
            let mode = LocaleMode::from_optional_str(Some(&lang));
            let resolved = agent.resolve(&text, mode)?;
            println!("{}", serde_json::to_string_pretty(&resolved)?);
        }
    }

    Ok(())
}

fn run_form(agent: &SupportAgent) -> Result<()> {
    println!("ASK-BOT – Emotion Smart Order Assistant");
    println!("Handles refunds, complaints, cancellations & more. Empty line to quit.\n");

    loop {
        let name = prompt("👤 Your name: ")?;
        if name.is_empty() {
            break;
        }
        let text = prompt("💬 What is your query about the order? ")?;
        let email = prompt("📧 Your email address: ")?;
        let order_id = prompt("🧾 Your Order ID: ")?;
        let lang = prompt("🌐 Language (auto/english/hindi): ")?;

        let input = QueryInput {
            name,
            text,
            email,
            order_id,
            lang_mode: if lang.is_empty() { None } else { Some(lang) },
        };

        match agent.handle_query(input) {
            Ok(reply) => println!("\n{}", reply.message),
            Err(QueryError::Invalid(_)) => {
                println!("\n⚠️ Please fill in all fields before submitting.\n");
            }
            Err(err) => return Err(err.into()),
        }
    }

    Ok(())
}

fn prompt(label: &str) -> Result<String> {
    print!("{label}");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}
