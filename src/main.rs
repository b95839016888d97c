use std::sync::Arc;

use sentiboard::config::{init_logging, load_config, print_schema};
use sentiboard::startup;

#[tokio::main]
async fn main() {
    let args: Vec<String> = std::env::args().collect();
    if args.iter().any(|a| a == "--schema") {
        print_schema();
        return;
    }

    let config = Arc::new(load_config());
    init_logging(&config.logging);

    if let Err(e) = startup::run(config).await {
        eprintln!("Server error: {}", e);
        std::process::exit(1);
    }
}
