mod cli;
mod commands;
mod config;
mod dispatch;

use anyhow::Result;
use clap::Parser;
use config::Config;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use cli::*;

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tli=info,tli_idb=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;
    let db = config.resolve_database(cli.database.as_deref());
    let knowledge_base = config.resolve_knowledge_base(cli.knowledge_base.as_deref());

    match cli.command {
        Commands::Recommend {
            hero_id,
            playstyle,
            focus,
            max_skills,
            max_items,
            max_talents,
            quick,
            format,
        } => {
            let request = commands::recommend::build_request(
                hero_id,
                playstyle,
                focus,
                (max_skills, max_items, max_talents),
                quick,
            );
            commands::recommend::handle(&db, knowledge_base.as_deref(), &request, quick, format)?;
        }

        Commands::Heroes { format } => {
            commands::heroes::handle(&db, knowledge_base.as_deref(), format)?;
        }

        Commands::Idb { command } => dispatch::dispatch_idb(command, &db)?,

        Commands::Reference { command } => {
            dispatch::dispatch_reference(command, knowledge_base.as_deref())?;
        }

        Commands::Configure {
            database,
            knowledge_base,
            show,
        } => {
            commands::configure::handle(database, knowledge_base, show)?;
        }
    }

    Ok(())
}
