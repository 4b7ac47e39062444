//! issueboard CLI entry point.

use clap::Parser;
use issueboard_client::cli::{Cli, Commands};
use issueboard_client::client::BoardClient;
use issueboard_client::dispatch::{self, DirectStrategy, IndirectStrategy, SubmissionStrategy};
use issueboard_client::notify::Notifier;
use issueboard_client::output::format_posts;
use issueboard_client::store::FileStore;
use issueboard_core::credentials::CredentialStore;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "issueboard=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let notifier = Notifier::new(cli.quiet);

    match cli.command {
        Commands::Posts(posts_cmd) => {
            use issueboard_client::cli::posts::PostsAction;
            match posts_cmd.action {
                PostsAction::List => {
                    let client = BoardClient::new(&cli.base_url);
                    match client.fetch_posts().await {
                        Ok(posts) => println!("{}", format_posts(&posts, cli.format)),
                        Err(err) => {
                            tracing::error!(error = %err, "failed to fetch posts");
                            notifier.error("Failed to load posts.");
                            std::process::exit(1);
                        }
                    }
                }
            }
        }
        Commands::Submit(submit_cmd) => {
            use issueboard_client::cli::submit::Strategy;

            let store = FileStore::from_config_dir()?;
            // Saved credentials pre-fill whatever the flags leave blank.
            let saved = store.load()?;
            let user_id = submit_cmd
                .user_id
                .or_else(|| saved.as_ref().map(|c| c.user_id.clone()))
                .unwrap_or_default();
            let trip_key = submit_cmd
                .trip_key
                .or_else(|| saved.as_ref().map(|c| c.trip_key.clone()))
                .unwrap_or_default();

            let strategy: Box<dyn SubmissionStrategy> = match submit_cmd.strategy {
                Strategy::Indirect => {
                    Box::new(IndirectStrategy::new(&submit_cmd.owner, &submit_cmd.repo))
                }
                Strategy::Direct => {
                    match DirectStrategy::new(&submit_cmd.owner, &submit_cmd.repo, submit_cmd.token)
                    {
                        Ok(strategy) => Box::new(strategy),
                        Err(err) => {
                            notifier.error(&err.to_string());
                            std::process::exit(1);
                        }
                    }
                }
            };

            if dispatch::submit(
                strategy.as_ref(),
                &store,
                &notifier,
                &user_id,
                &trip_key,
                &submit_cmd.body,
            )
            .await
            .is_err()
            {
                // The flow already notified and logged the failure.
                std::process::exit(1);
            }
        }
        Commands::Credentials(credentials_cmd) => {
            use issueboard_client::cli::credentials::CredentialsAction;

            let store = FileStore::from_config_dir()?;
            match credentials_cmd.action {
                CredentialsAction::Show => match store.load()? {
                    Some(credentials) => println!(
                        "user id: {}\ntrip key: {}",
                        credentials.user_id, credentials.trip_key
                    ),
                    None => println!("No credentials saved."),
                },
                CredentialsAction::Clear => {
                    store.clear()?;
                    if !cli.quiet {
                        println!("Cleared saved credentials.");
                    }
                }
            }
        }
    }

    Ok(())
}
