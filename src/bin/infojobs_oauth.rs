// ABOUTME: Command-line driver for the InfoJobs OAuth2 client
// ABOUTME: Prints authorization URLs and performs code and refresh token exchanges
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Credentials come from `INFOJOBS_CLIENT_ID`, `INFOJOBS_CLIENT_SECRET` and
//! `INFOJOBS_REDIRECT_URI`.
//!
//! Usage:
//! ```bash
//! # Print the URL to open in a browser
//! infojobs-oauth auth-url --scope CV --scope MY_APPLICATIONS
//!
//! # Exchange the code received on the redirect
//! infojobs-oauth exchange --code AUTHCODE
//!
//! # Refresh an access token
//! infojobs-oauth refresh --refresh-token RT1
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use infojobs_oauth2::logging::LoggingConfig;
use infojobs_oauth2::{AuthUrlRequest, OAuth2Client, TokenResponse};
use tracing::info;
use uuid::Uuid;

#[derive(Parser)]
#[command(
    name = "infojobs-oauth",
    about = "InfoJobs OAuth2 authorization code helper",
    long_about = "Generates authorization URLs and exchanges codes or refresh tokens with the InfoJobs token endpoint."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Print the authorization URL
    AuthUrl {
        /// Scope to request, repeatable
        #[arg(long = "scope", required = true)]
        scopes: Vec<String>,

        /// OAuth response type
        #[arg(long, default_value = "code")]
        response_type: String,

        /// State value; a random UUID when omitted
        #[arg(long)]
        state: Option<String>,
    },
    /// Exchange an authorization code for an access token
    Exchange {
        /// Code received on the redirect URI
        #[arg(long)]
        code: String,
    },
    /// Exchange a refresh token for a new access token
    Refresh {
        /// Refresh token from a previous exchange
        #[arg(long)]
        refresh_token: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging.level = "debug".into();
    }
    logging.init().context("failed to initialize logging")?;

    let client = OAuth2Client::from_env().context("invalid InfoJobs client configuration")?;

    match cli.command {
        Command::AuthUrl {
            scopes,
            response_type,
            state,
        } => {
            let state = state.unwrap_or_else(|| Uuid::new_v4().to_string());
            let request = AuthUrlRequest::new(response_type, scopes).with_state(state);
            println!("{}", client.generate_auth_url(&request)?);
        }
        Command::Exchange { code } => {
            let response = client.get_access_token(&code).await?;
            print_response(&response)?;
        }
        Command::Refresh { refresh_token } => {
            let response = client.refresh_access_token(&refresh_token).await?;
            print_response(&response)?;
        }
    }

    Ok(())
}

fn print_response(response: &TokenResponse) -> Result<()> {
    if response.is_error() {
        info!("Provider rejected the request");
    }
    println!("{}", serde_json::to_string_pretty(response)?);
    Ok(())
}
