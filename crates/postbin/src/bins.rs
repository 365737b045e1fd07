use crate::client::{node_context, run_operation, OperationOutput};
use crate::output::print_records;
use crate::prelude::{println, *};
use colored::Colorize;
use postbin_core::bin_id::BIN_ID_PARAMETER;
use postbin_core::operations::Operation;
use serde_json::Value;

/// Field order used when printing a transformed bin
pub const BIN_FIELDS: [&str; 7] = [
    "binId",
    "nowTimestamp",
    "nowIso",
    "expiresTimestamp",
    "expiresIso",
    "requestUrl",
    "viewUrl",
];

#[derive(Debug, clap::Parser)]
#[command(name = "bin")]
#[command(about = "Create, inspect and delete PostBin bins")]
pub struct App {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// Create a new bin
    #[clap(name = "create")]
    Create(CreateOptions),

    /// Show a bin's status and links
    #[clap(name = "get")]
    Get(BinOptions),

    /// Delete a bin
    #[clap(name = "delete")]
    Delete(BinOptions),
}

#[derive(Debug, clap::Args, Clone)]
pub struct CreateOptions {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, clap::Args, Clone)]
pub struct BinOptions {
    /// Bin ID, bin URL or PostBin's "Bin '<id>'." message
    #[clap(env = "POSTBIN_BIN_ID")]
    pub bin: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(app: App, global: crate::Global) -> Result<()> {
    match app.command {
        Commands::Create(options) => {
            let bins = create_bin_data(&global).await?;
            if !options.json {
                println!("{}", "Bin created".green().bold());
            }
            print_records(&bins, options.json, Some(&BIN_FIELDS))
        }
        Commands::Get(options) => {
            let bins = get_bin_data(options.bin, &global).await?;
            print_records(&bins, options.json, Some(&BIN_FIELDS))
        }
        Commands::Delete(options) => {
            let output = delete_bin_data(options.bin, &global).await?;
            let records: Vec<Value> = output.items.into_iter().map(|item| item.json).collect();
            if !options.json && records.is_empty() {
                println!(
                    "{} (HTTP {})",
                    "Bin deleted".green().bold(),
                    output.response.status_code
                );
                return Ok(());
            }
            print_records(&records, options.json, None)
        }
    }
}

/// Create a bin and return its transformed record
pub async fn create_bin_data(global: &crate::Global) -> Result<Vec<Value>> {
    let output = run_operation(&Operation::CreateBin, &node_context(), global).await?;
    Ok(output.items.into_iter().map(|item| item.json).collect())
}

/// Fetch a bin's transformed record
pub async fn get_bin_data(bin: String, global: &crate::Global) -> Result<Vec<Value>> {
    let ctx = node_context().with_parameter(BIN_ID_PARAMETER, bin);
    let output = run_operation(&Operation::GetBin, &ctx, global).await?;
    Ok(output.items.into_iter().map(|item| item.json).collect())
}

/// Delete a bin, returning whatever PostBin answered with
pub async fn delete_bin_data(bin: String, global: &crate::Global) -> Result<OperationOutput> {
    let ctx = node_context().with_parameter(BIN_ID_PARAMETER, bin);
    run_operation(&Operation::DeleteBin, &ctx, global).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::record_rows;
    use postbin_core::request::ExecutionItem;
    use postbin_core::transform::transform_bin_response;
    use serde_json::json;

    #[test]
    fn test_bin_fields_cover_transformed_record() {
        let items = vec![ExecutionItem::new(json!({
            "binId": "1699999999999-1699999999998",
            "now": 1700000000000_u64,
            "expires": 1700086400000_u64,
        }))];
        let transformed = transform_bin_response(items, &Default::default());
        let rows = record_rows(&transformed[0].json, Some(&BIN_FIELDS));

        let keys: Vec<&str> = rows.iter().map(|(key, _)| key.as_str()).collect();
        assert_eq!(keys, BIN_FIELDS.to_vec());
        assert_eq!(rows[2].1, "2023-11-14T22:13:20.000Z");
    }
}
