use clap::Parser;
use yatra_registration_lib::bootstrap::tracing::init_tracing_subscriber;
use yatra_registration_lib::cli::{self, Cli};

fn main() -> anyhow::Result<()> {
    // A missing .env is normal.
    let _ = dotenvy::dotenv();

    let args = Cli::parse();

    if let Err(err) = init_tracing_subscriber() {
        eprintln!("Failed to initialize tracing: {err:#}");
    }

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    runtime.block_on(cli::run(args))
}
