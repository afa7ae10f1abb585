//! Earthview CLI binary.

use clap::Parser;
use tracing::{debug, error};

use earthview_cli::{init_tracing, run, Cli, CliConfig};

fn main() {
    // Load environment variables
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Load configuration
    let config = CliConfig::from_env();

    if let Err(e) = init_tracing(config.log_format) {
        eprintln!("{:#}", e);
        std::process::exit(1);
    }
    debug!("CLI config: {:?}", config);

    match run(&cli.command, &config) {
        Ok(output) => println!("{}", output),
        Err(e) => {
            error!("{:#}", e);
            std::process::exit(1);
        }
    }
}
