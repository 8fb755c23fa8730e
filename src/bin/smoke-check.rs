//! Runs the core smoke check and, unless skipped, the API check

use clap::Parser;
use dotenvy::dotenv;
use xausignal::config::ServiceConfig;
use xausignal::logging;
use xausignal::smoke::{smoke_test_api, smoke_test_core};

#[derive(Parser, Debug)]
#[command(name = "smoke-check", about = "Smoke checks for the XAU/USD signal engine")]
struct Args {
    /// Base URL of a running API server
    #[arg(long, default_value = "http://127.0.0.1:8000")]
    api: String,

    /// Only run the in-process engine check
    #[arg(long)]
    skip_api: bool,

    /// Price used in the check payload
    #[arg(long)]
    price: Option<f64>,
}

#[tokio::main]
async fn main() {
    dotenv().ok();
    logging::init_logging();

    let args = Args::parse();
    let price = args
        .price
        .unwrap_or_else(|| ServiceConfig::from_env().fallback_price);

    let core = smoke_test_core(price);
    println!("[core] ok={} {}", core.ok, core.detail);

    let mut ok = core.ok;
    if !args.skip_api {
        let api = smoke_test_api(&args.api, price).await;
        println!("[api] ok={} {}", api.ok, api.detail);
        ok &= api.ok;
    }

    if !ok {
        std::process::exit(1);
    }
}
