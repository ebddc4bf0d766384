//! Terminal client for the URL shortener.
//!
//! # Usage
//!
//! ```bash
//! # Interactive form (default)
//! shortener-form
//!
//! # Shorten one URL and copy the result
//! shortener-form shorten --url https://example.com --custom-short promo --expiry 24 --copy
//!
//! # Point at another server
//! shortener-form --api-url https://sho.rt shorten --url https://example.com
//! ```
//!
//! # Environment Variables
//!
//! See [`shortener_form::config`] for the full list.

use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input};

use shortener_form::config::{ClipboardBackend, Config};
use shortener_form::prelude::*;
use shortener_form::telemetry;

/// Shorten URLs from the terminal.
#[derive(Parser)]
#[command(name = "shortener-form")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Base URL of the shortening service (overrides SHORTENER_API_URL)
    #[arg(long, global = true)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Shorten a single URL
    Shorten {
        /// The long URL to shorten
        #[arg(short, long)]
        url: String,

        /// Custom alias (random when empty)
        #[arg(short = 's', long, default_value = "")]
        custom_short: String,

        /// Lifetime in hours; 0 or empty lets the server decide
        #[arg(short, long, default_value = "")]
        expiry: String,

        /// Copy the short link to the clipboard
        #[arg(short, long)]
        copy: bool,
    },

    /// Fill in the form interactively (default)
    Interactive,
}

type Controller<C> = ShortenerController<HttpShortenApi, C, TerminalSurface>;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = Config::from_env()?;
    if let Some(api_url) = cli.api_url {
        config.api_url = api_url;
    }
    config.validate()?;

    telemetry::init(&config);
    config.print_summary();

    let command = cli.command.unwrap_or(Commands::Interactive);
    match config.clipboard_backend {
        ClipboardBackend::System => run(command, &config, SystemClipboard::new()).await,
        ClipboardBackend::None => run(command, &config, NullClipboard::new()).await,
    }
}

/// Mounts a controller on a terminal surface and dispatches the command.
async fn run<C: ClipboardWriter + 'static>(
    command: Commands,
    config: &Config,
    clipboard: C,
) -> Result<ExitCode> {
    let api = HttpShortenApi::from_config(config)?;
    let controller = ShortenerController::new(
        Arc::new(api),
        Arc::new(clipboard),
        Arc::new(TerminalSurface::new()),
        config.copy_feedback(),
    );

    let exit = match command {
        Commands::Shorten {
            url,
            custom_short,
            expiry,
            copy,
        } => {
            shorten_once(
                &controller,
                FormFields::new(url, custom_short, expiry),
                copy,
                config,
            )
            .await
        }
        Commands::Interactive => interactive(&controller, config).await?,
    };

    controller.unmount();
    Ok(exit)
}

/// Submits one form and optionally copies the result.
///
/// After a copy the process stays up for the feedback window so clipboard
/// managers can take ownership of the text before the handle goes away.
async fn shorten_once<C: ClipboardWriter + 'static>(
    controller: &Controller<C>,
    fields: FormFields,
    copy: bool,
    config: &Config,
) -> ExitCode {
    controller.surface().view().fill(fields);

    match controller.submit().await {
        SubmitOutcome::Shortened(_) => {
            if copy && controller.copy_short_url().await == CopyOutcome::Copied {
                tokio::time::sleep(config.copy_feedback()).await;
            }
            ExitCode::SUCCESS
        }
        SubmitOutcome::Failed(_) | SubmitOutcome::Ignored => ExitCode::FAILURE,
    }
}

/// Runs the prompt loop until the user stops.
///
/// # Flow
///
/// 1. Prompt for URL (required), alias and expiry, pre-filled with the
///    current field text so a failed submission can be corrected
/// 2. Submit and render the result or error panel
/// 3. After a success, offer to copy the short link
/// 4. Ask whether to shorten another URL
async fn interactive<C: ClipboardWriter + 'static>(
    controller: &Controller<C>,
    config: &Config,
) -> Result<ExitCode> {
    println!("{}", "🔗 Shorten a URL".bright_blue().bold());
    println!(
        "  {}",
        format!("Server: {}", config.endpoint()?).bright_black()
    );
    println!();

    loop {
        let current = controller.surface().read_fields();
        let fields = prompt_fields(&current)?;
        controller.surface().view().fill(fields);

        let outcome = controller.submit().await;

        if matches!(outcome, SubmitOutcome::Shortened(_)) {
            let copy = Confirm::new()
                .with_prompt("Copy to clipboard?")
                .default(true)
                .interact()?;
            if copy {
                controller.copy_short_url().await;
            }
        }

        let again = Confirm::new()
            .with_prompt("Shorten another URL?")
            .default(true)
            .interact()?;
        if !again {
            println!("{}", "👋 Bye".bright_black());
            return Ok(ExitCode::SUCCESS);
        }
        println!();
    }
}

fn prompt_fields(current: &FormFields) -> Result<FormFields> {
    let url: String = Input::new()
        .with_prompt("Long URL")
        .with_initial_text(current.url.clone())
        .validate_with(|input: &String| -> Result<(), &'static str> {
            if input.trim().is_empty() {
                Err("Please fill out this field.")
            } else {
                Ok(())
            }
        })
        .interact_text()?;

    let custom_short: String = Input::new()
        .with_prompt("Custom alias (optional)")
        .with_initial_text(current.custom_short.clone())
        .allow_empty(true)
        .interact_text()?;

    let expiry: String = Input::new()
        .with_prompt("Expiry in hours (optional)")
        .with_initial_text(current.expiry.clone())
        .allow_empty(true)
        .interact_text()?;

    Ok(FormFields::new(url, custom_short, expiry))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_shorten_arguments() {
        let cli = Cli::try_parse_from([
            "shortener-form",
            "--api-url",
            "https://sho.rt",
            "shorten",
            "--url",
            "https://example.com",
            "-s",
            "promo",
            "--expiry",
            "24",
            "--copy",
        ])
        .unwrap();

        assert_eq!(cli.api_url.as_deref(), Some("https://sho.rt"));
        match cli.command {
            Some(Commands::Shorten {
                url,
                custom_short,
                expiry,
                copy,
            }) => {
                assert_eq!(url, "https://example.com");
                assert_eq!(custom_short, "promo");
                assert_eq!(expiry, "24");
                assert!(copy);
            }
            _ => panic!("expected shorten command"),
        }
    }

    #[test]
    fn test_no_subcommand_defaults_to_interactive() {
        let cli = Cli::try_parse_from(["shortener-form"]).unwrap();
        assert!(cli.command.is_none());
    }
}
