// CLI modules
mod cli;

use clap::{Parser, Subcommand};
use cli::{
    args::Args, op::Op, Bits, Canonicalize, Chunks, Get, Init, Pop, Search, Stringify, Translate,
    Version,
};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

command_enum! {
    (Get, Get),
    (Pop, Pop),
    (Translate, Translate),
    (Canonicalize, Canonicalize),
    (Stringify, Stringify),
    (Chunks, Chunks),
    (Search, Search),
    (Bits, Bits),
    (Init, Init),
    (Version, Version),
}

/// Install a stderr subscriber so stdout carries nothing but command output.
/// The returned guard must be kept alive until the program exits.
fn init_logging(level: tracing::Level) -> tracing_appender::non_blocking::WorkerGuard {
    let (stderr_writer, guard) = tracing_appender::non_blocking(std::io::stderr());

    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(level).into())
        .from_env_lossy();

    let stderr_layer = tracing_subscriber::fmt::layer()
        .compact()
        .with_writer(stderr_writer)
        .with_filter(env_filter);

    tracing_subscriber::registry().with(stderr_layer).init();

    register_panic_logger();
    dotkit_app::version::report_build_info();

    guard
}

/// Registers a panic hook that logs panics using the `tracing` crate
fn register_panic_logger() {
    std::panic::set_hook(Box::new(|panic| match panic.location() {
        Some(loc) => {
            tracing::error!(
                message = %panic,
                panic.file = loc.file(),
                panic.line = loc.line(),
                panic.column = loc.column(),
            );
        }
        None => tracing::error!(message = %panic),
    }));
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    // Missing config falls back to defaults; a broken one is fatal
    let ctx = match cli::op::OpContext::new(args.config_path) {
        Ok(ctx) => ctx,
        Err(e) => {
            eprintln!("Error: failed to load config: {}", e);
            std::process::exit(1);
        }
    };

    // Explicit flag > config log_level > warn
    let level = args.log_level.unwrap_or_else(|| {
        ctx.config
            .log_level
            .parse()
            .unwrap_or(tracing::Level::WARN)
    });
    let guard = init_logging(level);

    let code = match args.command.execute(&ctx).await {
        Ok(output) => {
            println!("{}", output);
            0
        }
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            eprintln!("Error: {}", e);
            1
        }
    };

    // process::exit skips destructors, flush pending log lines first
    drop(guard);
    std::process::exit(code);
}
