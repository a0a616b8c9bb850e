use anyhow::{Context, Result};
use clap::Parser;
use minilog::{debugf, errorf, infof, successf, ColorChoice, Level, Logger, LoggerConfig};

#[derive(Parser)]
#[command(about = "Prints one line per minilog level")]
struct Args {
    /// Show debug lines
    #[arg(short, long)]
    debug: bool,
    /// auto, always or never
    #[arg(short, long)]
    color: Option<ColorChoice>,
    #[arg(short, long, default_value = "demo-session")]
    session: String,
    /// Route the same lines through the tracing formatter
    #[arg(long)]
    tracing: bool,
}

fn main() -> Result<()> {
    dotenv::dotenv().ok();
    let args = Args::parse();

    let mut config = LoggerConfig::from_env().context("Invalid MINILOG_* environment")?;
    config.debug |= args.debug;
    if let Some(color) = args.color {
        config.color = color;
    }

    if args.tracing {
        minilog::setup_tracing(&config)?;
        tracing::info!(target: minilog::SUCCESS_TARGET, "tracing bridge installed");
        tracing::info!("session {}", args.session);
        tracing::warn!("warnings print as INFO");
        tracing::error!("something failed");
        tracing::debug!("only with --debug");
        return Ok(());
    }

    let log = Logger::from_config(&config);

    log.success("demo started");
    log.info("ready");
    log.debug("only with --debug");
    successf!(log, "wrote {} lines", 3);
    infof!(log, "debug output is {}", if log.debug_enabled() { "on" } else { "off" });
    debugf!(log, "color resolved to {}", log.colored());
    errorf!(log, "failed: {} ({})", "timeout", 3);
    log.log_with_context(Level::Info, "Auth", "login", &args.session, "");
    log.log_with_context(Level::Error, "Auth", "login", &args.session, "bad password");

    Ok(())
}
