pub mod commands;

use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(name = "scripture")]
#[command(about = "Scripture CLI - schema, reference data and development tokens")]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, help = "Output in JSON format")]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Apply pending schema migrations")]
    Migrate,

    #[command(about = "Insert reference data (books, plans, devotionals, quiz, flashcards)")]
    Seed {
        #[arg(long, help = "Apply pending migrations first")]
        migrate: bool,
    },

    #[command(about = "Mint a bearer token signed with the configured secret")]
    Token {
        #[arg(long, help = "Subject (user id); a random id when omitted")]
        user: Option<String>,
        #[arg(long, help = "Email claim")]
        email: Option<String>,
        #[arg(long, help = "Lifetime in hours (defaults to SECURITY_JWT_EXPIRY_HOURS)")]
        hours: Option<u64>,
    },
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_cli(cli: &Cli) -> Self {
        if cli.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let output_format = OutputFormat::from_cli(&cli);

    match cli.command {
        Commands::Migrate => commands::db::migrate(output_format).await,
        Commands::Seed { migrate } => commands::db::seed(migrate, output_format).await,
        Commands::Token { user, email, hours } => {
            commands::token::mint(user, email, hours, output_format)
        }
    }
}
