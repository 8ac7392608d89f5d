use clap::Parser;
use tracing::debug;

use appboard::cli::Cli;
use appboard::config::init_config;
use appboard::runtime::modes::{self, Mode};
use appboard::system::{LogTarget, init_logging};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = init_config(cli.config.as_deref());
    let mode = modes::detect_mode(cli.command.as_ref());

    let target = match mode {
        #[cfg(feature = "tui")]
        Mode::Tui => LogTarget::Tui,
        _ => LogTarget::Cli,
    };

    // guard 必须存活到进程结束，否则日志不会刷新
    let _guard = match init_logging(&config.logging, target) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {}", e);
            std::process::exit(1);
        }
    };
    debug!("Running in {:?} mode", mode);

    match mode {
        #[cfg(feature = "tui")]
        Mode::Tui => {
            if let Err(e) = modes::run_tui(config).await {
                eprintln!("{:#}", e);
                std::process::exit(1);
            }
        }
        #[cfg(feature = "cli")]
        Mode::Cli => {
            if let Err(e) = modes::run_cli(cli.command, config).await {
                eprintln!("{}", e.format_colored());
                std::process::exit(1);
            }
        }
        Mode::Unknown => {
            eprintln!("No interface compiled in; enable the `cli` or `tui` feature");
            std::process::exit(1);
        }
    }
}
