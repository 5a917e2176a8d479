mod cli;
mod context;
mod handlers;
mod output;

use clap::{CommandFactory, Parser};
use cli::{Cli, Commands};
use context::{CliContext, ContextOptions};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Ok(log_path) = std::env::var("LOGOSHARE_DEBUG_LOG") {
        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        tracing_subscriber::fmt()
            .with_writer(log_file)
            .with_max_level(tracing::Level::DEBUG)
            .with_target(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(false)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_max_level(tracing::Level::WARN)
            .init();
    }

    let cli = Cli::parse();

    if let Commands::Completions { shell } = cli.command {
        clap_complete::generate(shell, &mut Cli::command(), "logoshare", &mut std::io::stdout());
        return Ok(());
    }
    if let Commands::Categories = cli.command {
        handlers::logo::handle_categories();
        return Ok(());
    }

    if let Err(e) = run(cli).await {
        output::output_error(&e.to_string());
    }
    Ok(())
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let share_origin = match &cli.command {
        Commands::Share(args) => args.origin.clone(),
        _ => None,
    };
    let sign_up = match (&cli.command, &cli.email, &cli.password) {
        (Commands::Signup, Some(email), Some(password)) => {
            Some((email.clone(), password.clone()))
        }
        (Commands::Signup, _, _) => {
            anyhow::bail!("Signup requires --backend, --email and --password")
        }
        _ => None,
    };
    let options = ContextOptions {
        backend: cli.backend,
        file: cli.file,
        latency_ms: cli.latency_ms,
        share_origin,
        email: cli.email,
        password: cli.password,
        sign_in: sign_up.is_none(),
    };
    let mut ctx = CliContext::load(options).await?;

    match cli.command {
        Commands::List(args) => handlers::logo::handle_list(&mut ctx, args).await?,
        Commands::Get { id } => handlers::logo::handle_get(&ctx, &id).await?,
        Commands::Add(args) => handlers::logo::handle_add(&mut ctx, args).await?,
        Commands::Share(args) => handlers::share::handle(&ctx, args).await?,
        Commands::Login => handlers::auth::handle_login(&ctx).await?,
        Commands::Signup => {
            if let Some((email, password)) = sign_up {
                handlers::auth::handle_signup(&mut ctx, &email, &password).await?;
            }
        }
        Commands::Categories | Commands::Completions { .. } => {}
    }

    Ok(())
}
