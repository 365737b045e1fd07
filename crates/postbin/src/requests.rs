use crate::client::{node_context, run_operation};
use crate::output::print_records;
use crate::prelude::{println, *};
use colored::Colorize;
use postbin_core::bin_id::BIN_ID_PARAMETER;
use postbin_core::operations::{Operation, SendPayload};
use postbin_core::request::HttpMethod;
use postbin_core::urls::REQUEST_ID_PARAMETER;
use serde_json::Value;

#[derive(Debug, clap::Parser)]
#[command(name = "request")]
#[command(about = "Read and send requests captured by a bin")]
pub struct App {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// Get a captured request by its ID
    #[clap(name = "get")]
    Get(GetOptions),

    /// Get the oldest captured request and remove it from the bin
    #[clap(name = "shift")]
    Shift(ShiftOptions),

    /// Send a test request into a bin
    #[clap(name = "send")]
    Send(SendOptions),
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum SendMethod {
    Get,
    Post,
}

impl From<SendMethod> for HttpMethod {
    fn from(method: SendMethod) -> Self {
        match method {
            SendMethod::Get => HttpMethod::Get,
            SendMethod::Post => HttpMethod::Post,
        }
    }
}

#[derive(Debug, clap::Args, Clone)]
pub struct GetOptions {
    /// Bin ID, bin URL or PostBin's "Bin '<id>'." message
    #[clap(env = "POSTBIN_BIN_ID")]
    pub bin: String,

    /// ID of the captured request
    pub request_id: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, clap::Args, Clone)]
pub struct ShiftOptions {
    /// Bin ID, bin URL or PostBin's "Bin '<id>'." message
    #[clap(env = "POSTBIN_BIN_ID")]
    pub bin: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, clap::Args, Clone)]
pub struct SendOptions {
    /// Bin ID, bin URL or PostBin's "Bin '<id>'." message
    #[clap(env = "POSTBIN_BIN_ID")]
    pub bin: String,

    /// HTTP method of the test request
    #[arg(short, long, value_enum, default_value = "post")]
    pub method: SendMethod,

    /// Query parameter to add (repeatable)
    #[arg(short, long = "query", value_name = "KEY=VALUE")]
    pub query: Vec<String>,

    /// JSON body (POST only)
    #[arg(short, long)]
    pub body: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(app: App, global: crate::Global) -> Result<()> {
    match app.command {
        Commands::Get(options) => {
            let records = get_request_data(options.bin, options.request_id, &global).await?;
            print_records(&records, options.json, None)
        }
        Commands::Shift(options) => {
            let records = shift_request_data(options.bin, &global).await?;
            print_records(&records, options.json, None)
        }
        Commands::Send(options) => {
            let json = options.json;
            let records = send_request_data(options, &global).await?;
            if !json {
                println!("{}", "Request sent".green().bold());
            }
            print_records(&records, json, None)
        }
    }
}

/// Fetch one captured request
pub async fn get_request_data(
    bin: String,
    request_id: String,
    global: &crate::Global,
) -> Result<Vec<Value>> {
    let ctx = node_context()
        .with_parameter(BIN_ID_PARAMETER, bin)
        .with_parameter(REQUEST_ID_PARAMETER, request_id);
    let output = run_operation(&Operation::GetRequest, &ctx, global).await?;
    Ok(output.items.into_iter().map(|item| item.json).collect())
}

/// Fetch and remove the oldest captured request
pub async fn shift_request_data(bin: String, global: &crate::Global) -> Result<Vec<Value>> {
    let ctx = node_context().with_parameter(BIN_ID_PARAMETER, bin);
    let output = run_operation(&Operation::RemoveFirstRequest, &ctx, global).await?;
    Ok(output.items.into_iter().map(|item| item.json).collect())
}

/// Send a test request into the bin
pub async fn send_request_data(options: SendOptions, global: &crate::Global) -> Result<Vec<Value>> {
    let payload = build_send_payload(&options)?;
    let ctx = node_context().with_parameter(BIN_ID_PARAMETER, options.bin);
    let output = run_operation(&Operation::SendRequest(payload), &ctx, global).await?;
    Ok(output.items.into_iter().map(|item| item.json).collect())
}

fn build_send_payload(options: &SendOptions) -> Result<SendPayload> {
    let method = HttpMethod::from(options.method);
    let body = parse_body(options.body.as_deref())?;

    if body.is_some() && method != HttpMethod::Post {
        return Err(eyre!("A request body can only be sent with --method post"));
    }

    Ok(SendPayload {
        method,
        query: parse_query(&options.query)?,
        body,
    })
}

/// Split `KEY=VALUE` pairs; the value may itself contain `=`
pub fn parse_query(pairs: &[String]) -> Result<Vec<(String, String)>, Error> {
    pairs
        .iter()
        .map(|pair| match pair.split_once('=') {
            Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
            _ => Err(Error::InvalidQuery(pair.clone())),
        })
        .collect()
}

pub fn parse_body(body: Option<&str>) -> Result<Option<Value>, Error> {
    body.map(|text| serde_json::from_str(text).map_err(|e| Error::InvalidBody(e.to_string())))
        .transpose()
}
