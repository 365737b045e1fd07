use crate::prelude::*;
use clap::Parser;

mod bins;
mod client;
mod error;
mod output;
mod prelude;
mod requests;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Create PostBin bins, send requests into them and read them back"
)]
pub struct App {
    #[command(subcommand)]
    pub command: SubCommands,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// PostBin base URL
    #[clap(
        long,
        env = "POSTBIN_BASE_URL",
        global = true,
        default_value = client::DEFAULT_BASE_URL
    )]
    base_url: String,

    /// Whether to display additional information.
    #[clap(long, env = "POSTBIN_VERBOSE", global = true, default_value = "false")]
    verbose: bool,
}

#[derive(Debug, clap::Parser)]
pub enum SubCommands {
    /// Bin operations (create, get, delete)
    Bin(crate::bins::App),

    /// Captured request operations (get, shift, send)
    Request(crate::requests::App),
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    color_eyre::install()?;

    let app = App::parse();

    match app.command {
        SubCommands::Bin(sub_app) => crate::bins::run(sub_app, app.global).await,
        SubCommands::Request(sub_app) => crate::requests::run(sub_app, app.global).await,
    }
    .map_err(|err: color_eyre::eyre::Report| eyre!(err))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_defaults() {
        let app = App::try_parse_from(["postbin", "bin", "create"]).unwrap();
        assert_eq!(app.global.base_url, "https://www.toptal.com");
        assert!(!app.global.verbose);
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let app = App::try_parse_from([
            "postbin",
            "request",
            "shift",
            "1699999999999-1699999999998",
            "--base-url",
            "http://localhost:8080",
            "--verbose",
        ])
        .unwrap();
        assert_eq!(app.global.base_url, "http://localhost:8080");
        assert!(app.global.verbose);
        assert!(matches!(app.command, SubCommands::Request(_)));
    }

    #[test]
    fn test_request_get_requires_request_id() {
        let result =
            App::try_parse_from(["postbin", "request", "get", "1699999999999-1699999999998"]);
        assert!(result.is_err());
    }
}
