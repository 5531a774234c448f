//! Subcommand implementations.

use anyhow::bail;
use arena_core::flow::{CaptureOutcome, FlowState, PaymentSubmissionFlow};
use arena_core::proof::ProofSource;
use arena_core::withdrawal::{WithdrawalDraft, submit_withdrawal};
use arena_core::FlowError;
use arena_sdk::client::{ApiClient, ApiError};
use arena_sdk::objects::{CreateJoinRequest, CreateTeam};
use clap::{Subcommand, ValueEnum};
use serde::Serialize;
use std::path::PathBuf;

use crate::proof::FileProofProvider;
use crate::state::AppState;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List manual payment methods
    Methods,

    /// Top up the wallet with a manual payment
    Pay {
        /// Payment method id
        #[arg(long)]
        method: String,
        /// Amount to pay (minimum 10)
        #[arg(long)]
        amount: String,
        /// Screenshot of the completed payment
        #[arg(long)]
        screenshot: PathBuf,
        /// Where the screenshot comes from
        #[arg(long, value_enum, default_value_t = Source::Gallery)]
        source: Source,
        /// Transaction reference from the payment app
        #[arg(long, default_value = "")]
        reference: String,
    },

    /// Show the wallet balance
    Balance,

    /// Request a withdrawal
    Withdraw {
        #[arg(long)]
        amount: String,
        /// Payout channel (e.g. esewa, bank)
        #[arg(long)]
        method: String,
        /// Account number or wallet id to pay out to
        #[arg(long)]
        account: String,
    },

    /// List withdrawal history
    Withdrawals,

    /// List teams
    Teams {
        /// Only teams you belong to
        #[arg(long)]
        mine: bool,
    },

    /// Create a team
    TeamCreate {
        #[arg(long)]
        name: String,
        #[arg(long)]
        game: Option<String>,
        #[arg(long)]
        tag: Option<String>,
    },

    /// Delete a team you captain
    TeamDelete { team_id: String },

    /// Leave a team
    TeamLeave { team_id: String },

    /// Ask to join a team
    Join {
        team_id: String,
        #[arg(long)]
        message: Option<String>,
    },

    /// List join requests for a team
    JoinRequests { team_id: String },

    /// Accept a join request
    JoinAccept { team_id: String, request_id: String },

    /// Reject a join request
    JoinReject { team_id: String, request_id: String },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum Source {
    Gallery,
    Camera,
}

impl From<Source> for ProofSource {
    fn from(source: Source) -> Self {
        match source {
            Source::Gallery => ProofSource::Gallery,
            Source::Camera => ProofSource::Camera,
        }
    }
}

pub async fn run(state: AppState, command: Command) -> anyhow::Result<()> {
    let client = &state.client;
    match command {
        Command::Methods => print_json(&client.list_payment_methods().await.map_err(api)?),
        Command::Pay {
            method,
            amount,
            screenshot,
            source,
            reference,
        } => pay(client.clone(), &method, &amount, screenshot, source.into(), &reference).await,
        Command::Balance => print_json(&client.wallet_balance().await.map_err(api)?),
        Command::Withdraw {
            amount,
            method,
            account,
        } => {
            let draft = WithdrawalDraft {
                amount,
                method,
                account_details: account,
            };
            let withdrawal = submit_withdrawal(client, &draft).await.map_err(flow)?;
            print_json(&withdrawal)
        }
        Command::Withdrawals => print_json(&client.list_withdrawals().await.map_err(api)?),
        Command::Teams { mine } => {
            let teams = if mine {
                client.my_teams().await
            } else {
                client.list_teams().await
            };
            print_json(&teams.map_err(api)?)
        }
        Command::TeamCreate { name, game, tag } => {
            let team = CreateTeam {
                name,
                game,
                tag,
                description: None,
            };
            print_json(&client.create_team(&team).await.map_err(api)?)
        }
        Command::TeamDelete { team_id } => {
            client.delete_team(&team_id).await.map_err(api)?;
            println!("Team {team_id} deleted");
            Ok(())
        }
        Command::TeamLeave { team_id } => {
            client.leave_team(&team_id).await.map_err(api)?;
            println!("Left team {team_id}");
            Ok(())
        }
        Command::Join { team_id, message } => {
            let request = CreateJoinRequest { message };
            print_json(&client.request_to_join(&team_id, &request).await.map_err(api)?)
        }
        Command::JoinRequests { team_id } => {
            print_json(&client.list_join_requests(&team_id).await.map_err(api)?)
        }
        Command::JoinAccept {
            team_id,
            request_id,
        } => print_json(
            &client
                .accept_join_request(&team_id, &request_id)
                .await
                .map_err(api)?,
        ),
        Command::JoinReject {
            team_id,
            request_id,
        } => print_json(
            &client
                .reject_join_request(&team_id, &request_id)
                .await
                .map_err(api)?,
        ),
    }
}

/// Walk the manual payment flow from method selection to confirmation.
async fn pay(
    client: ApiClient,
    method_id: &str,
    amount: &str,
    screenshot: PathBuf,
    source: ProofSource,
    reference: &str,
) -> anyhow::Result<()> {
    let clock = client.governor().clock();
    let mut payment = PaymentSubmissionFlow::with_clock(client, clock);

    payment.load_methods().await.map_err(flow)?;
    payment.select_method(method_id).map_err(flow)?;
    payment.set_amount(amount).map_err(flow)?;

    if let FlowState::ShowingInstructions { method, amount, .. } = payment.state() {
        println!("Pay {amount} using {}", method.name);
        if let Some(qr) = &method.qr_code_url {
            println!("  QR code: {qr}");
        }
        if let Some(details) = &method.account_details {
            println!("  Account: {details}");
        }
    }

    payment.set_transaction_reference(reference).map_err(flow)?;
    let provider = FileProofProvider::new(screenshot);
    if payment.capture_proof(&provider, source).await.map_err(flow)? == CaptureOutcome::Cancelled {
        bail!("no screenshot selected");
    }

    let receipt = payment.submit().await.map_err(flow)?;
    println!(
        "Payment {} submitted, status: {}. It will be credited after verification.",
        receipt.id, receipt.status
    );
    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn api(err: ApiError) -> anyhow::Error {
    tracing::debug!(error = ?err, "api call failed");
    anyhow::anyhow!(err.user_message())
}

fn flow(err: FlowError) -> anyhow::Error {
    tracing::debug!(error = ?err, "flow step failed");
    anyhow::anyhow!(err.user_message())
}
