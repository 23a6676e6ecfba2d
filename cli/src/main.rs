use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use records::{
    AdShowFields, AdTypeFields, CategoryFields, DeleteOutcome, DeleteResponse, DurationFields, EmailFields,
    EntityKind, ErrorBody, PasswordChange, PromotionPowerFields, RecordFields, UserFields, ValidationError,
};
use serde_json::Value;

#[cfg(test)]
#[path = "main_test.rs"]
mod main_test;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server returned HTTP {status}: {message}")]
    Server { status: u16, message: String },
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("payload must be a JSON object")]
    NotAnObject,
    #[error("{0}")]
    Invalid(#[from] ValidationError),
}

#[derive(Parser, Debug)]
#[command(name = "admin-cli", about = "Trade admin console REST client")]
struct Cli {
    #[arg(long, env = "TRADE_ADMIN_URL", default_value = "http://127.0.0.1:3000")]
    base_url: String,

    #[arg(long, env = "TRADE_ADMIN_TIMEOUT_SECS", default_value_t = 10)]
    timeout_secs: u64,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check `/healthz`.
    Ping,
    /// Print dashboard counts.
    Stats,
    /// Manage one record collection.
    Records(RecordsCommand),
    /// Rotate the admin password.
    Password {
        #[arg(long, env = "TRADE_ADMIN_OLD_PASSWORD")]
        old: String,
        #[arg(long, env = "TRADE_ADMIN_NEW_PASSWORD")]
        new: String,
    },
}

#[derive(Args, Debug)]
struct RecordsCommand {
    /// Collection slug, e.g. `ad-types` or `categories`.
    #[arg(value_parser = parse_kind)]
    kind: EntityKind,

    #[command(subcommand)]
    command: RecordsSubcommand,
}

#[derive(Subcommand, Debug)]
enum RecordsSubcommand {
    List,
    Create {
        #[arg(long)]
        data: String,
    },
    Update {
        id: String,
        #[arg(long)]
        data: String,
    },
    Delete {
        id: String,
    },
}

#[derive(Debug, Clone)]
struct CliContext {
    base_url: String,
    client: reqwest::Client,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    let ctx = CliContext {
        base_url: normalize_base_url(&cli.base_url)?,
        client: reqwest::Client::builder()
            .timeout(Duration::from_secs(cli.timeout_secs))
            .build()?,
    };

    match cli.command {
        Command::Ping => run_ping(&ctx).await,
        Command::Stats => print_json(&api_request(&ctx, reqwest::Method::GET, "/api/stats", None).await?),
        Command::Records(records) => run_records(&ctx, records).await,
        Command::Password { old, new } => run_password(&ctx, old, new).await,
    }
}

async fn run_ping(ctx: &CliContext) -> Result<(), CliError> {
    let response = ctx.client.get(format!("{}/healthz", ctx.base_url)).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(CliError::Server { status: status.as_u16(), message: "health check failed".to_owned() });
    }
    println!("ok");
    Ok(())
}

async fn run_records(ctx: &CliContext, records: RecordsCommand) -> Result<(), CliError> {
    let kind = records.kind;
    match records.command {
        RecordsSubcommand::List => {
            let json = api_request(ctx, reqwest::Method::GET, &collection_path(kind), None).await?;
            print_json(&json)
        }
        RecordsSubcommand::Create { data } => {
            let body = parse_payload(kind, &data)?;
            let json = api_request(ctx, reqwest::Method::POST, &collection_path(kind), Some(body)).await?;
            print_json(&json)
        }
        RecordsSubcommand::Update { id, data } => {
            let body = parse_payload(kind, &data)?;
            let json = api_request(ctx, reqwest::Method::PATCH, &record_path(kind, &id), Some(body)).await?;
            print_json(&json)
        }
        RecordsSubcommand::Delete { id } => {
            let json = api_request(ctx, reqwest::Method::DELETE, &record_path(kind, &id), None).await?;
            let response: DeleteResponse = serde_json::from_value(json)?;
            match DeleteOutcome::from(response) {
                DeleteOutcome::Deleted => println!("deleted {kind}/{id}"),
                DeleteOutcome::Declined => println!("declined: {kind}/{id} cannot be deleted"),
            }
            Ok(())
        }
    }
}

async fn run_password(ctx: &CliContext, old: String, new: String) -> Result<(), CliError> {
    let change = PasswordChange { old_password: old, new_password: new };
    change.validate()?;
    let body = serde_json::to_value(&change)?;
    api_request(ctx, reqwest::Method::POST, "/api/account/password", Some(body)).await?;
    println!("password updated");
    Ok(())
}

async fn api_request(
    ctx: &CliContext,
    method: reqwest::Method,
    path: &str,
    body: Option<Value>,
) -> Result<Value, CliError> {
    let url = format!("{}{}", ctx.base_url, path);
    let request = ctx.client.request(method, &url);
    let request = if let Some(json) = body { request.json(&json) } else { request };

    let response = request.send().await?;
    let status = response.status();
    let text = response.text().await?;

    if !status.is_success() {
        return Err(CliError::Server { status: status.as_u16(), message: error_message(&text) });
    }
    if text.trim().is_empty() {
        return Ok(Value::Null);
    }
    Ok(serde_json::from_str(&text)?)
}

// =============================================================================
// HELPERS
// =============================================================================

fn parse_kind(raw: &str) -> Result<EntityKind, String> {
    EntityKind::from_slug(raw).ok_or_else(|| {
        let known: Vec<&str> = EntityKind::ALL.iter().map(|k| k.slug()).collect();
        format!("unknown kind `{raw}` (expected one of: {})", known.join(", "))
    })
}

fn normalize_base_url(raw: &str) -> Result<String, CliError> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        return Ok(trimmed.to_owned());
    }
    Err(CliError::InvalidBaseUrl(raw.to_owned()))
}

fn collection_path(kind: EntityKind) -> String {
    format!("/api/records/{}", kind.slug())
}

fn record_path(kind: EntityKind, id: &str) -> String {
    format!("/api/records/{}/{}", kind.slug(), id)
}

/// Server `{"error": ...}` text, else the raw body.
fn error_message(body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body).map_or_else(|_| body.trim().to_owned(), |b| b.error)
}

/// Parse `--data` with the same rules the server applies and return the
/// normalized fields.
fn parse_payload(kind: EntityKind, data: &str) -> Result<Value, CliError> {
    let value: Value = serde_json::from_str(data)?;
    if !value.is_object() {
        return Err(CliError::NotAnObject);
    }
    match kind {
        EntityKind::AdType => normalized::<AdTypeFields>(&value),
        EntityKind::PromotionPower => normalized::<PromotionPowerFields>(&value),
        EntityKind::Duration => normalized::<DurationFields>(&value),
        EntityKind::AdShow => normalized::<AdShowFields>(&value),
        EntityKind::Category => normalized::<CategoryFields>(&value),
        EntityKind::User => normalized::<UserFields>(&value),
        EntityKind::Email => normalized::<EmailFields>(&value),
    }
}

fn normalized<F: RecordFields>(value: &Value) -> Result<Value, CliError> {
    let fields = F::from_payload(value)?;
    Ok(serde_json::to_value(&fields)?)
}

fn print_json(value: &Value) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
