use clap::Parser;
use tracing::{error, info};

use dse_search::{cli::Cli, config::Config, session};

#[tokio::main]
async fn main() {
    // Console stays quiet by default so log lines don't interleave with prompts
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "dse_search=warn");
    }

    use tracing_subscriber::{fmt, EnvFilter, layer::SubscriberExt, util::SubscriberInitExt, Layer};

    let file_appender = tracing_appender::rolling::never(".", "dse_search.log");

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_filter(EnvFilter::from_default_env())
        )
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_filter(EnvFilter::new("dse_search=info"))
        )
        .init();

    let _cli = Cli::parse();

    let run = async {
        let config = Config::from_env()?;
        config.validate()?;
        info!("Starting session with PDF directory {}", config.pdf_dir.display());
        session::run(config).await
    };

    let code = tokio::select! {
        result = run => match result {
            Ok(()) => 0,
            Err(e) => {
                error!("Session failed: {:#}", e);
                println!("\nUnexpected error: {:#}", e);
                1
            }
        },
        _ = tokio::signal::ctrl_c() => {
            info!("Interrupted by user");
            println!("\n\nOperation cancelled by user.");
            0
        }
    };

    // A pending stdin read would otherwise hold up runtime shutdown.
    std::process::exit(code);
}
