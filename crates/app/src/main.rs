use std::fmt;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::WishGenerator;
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidLogFilter { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidLogFilter { raw } => write!(f, "invalid --log value: {raw}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct DesktopApp {
    wish_generator: WishGenerator,
    start_muted: bool,
}

impl UiApp for DesktopApp {
    fn wish_generator(&self) -> WishGenerator {
        self.wish_generator.clone()
    }

    fn start_muted(&self) -> bool {
        self.start_muted
    }
}

#[derive(Debug, Default)]
struct Args {
    muted: bool,
    log_filter: Option<String>,
    help: bool,
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut parsed = Self::default();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--muted" => parsed.muted = true,
                "--log" => {
                    let value = require_value(args, "--log")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidLogFilter { raw: value });
                    }
                    parsed.log_filter = Some(value);
                }
                "--help" | "-h" => parsed.help = true,
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }
        Ok(parsed)
    }
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--muted] [--log <filter>]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --muted         start with the music paused");
    eprintln!("  --log <filter>  tracing filter, e.g. `debug` or `services=trace`");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  RUST_LOG, KEEPSAKE_AI_API_KEY, KEEPSAKE_AI_BASE_URL, KEEPSAKE_AI_MODEL");
}

/// `--log` wins over `RUST_LOG`; without either, `info`.
fn log_filter(explicit: Option<&str>) -> Result<EnvFilter, ArgsError> {
    match explicit {
        Some(raw) => EnvFilter::try_new(raw).map_err(|_| ArgsError::InvalidLogFilter {
            raw: raw.to_string(),
        }),
        None => Ok(EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))),
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let args = Args::parse(&mut argv).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;
    if args.help {
        print_usage();
        return Ok(());
    }

    tracing_subscriber::fmt()
        .with_env_filter(log_filter(args.log_filter.as_deref())?)
        .init();

    let wish_generator = WishGenerator::from_env();
    tracing::info!(
        ai_enabled = wish_generator.enabled(),
        muted = args.muted,
        "starting"
    );

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        wish_generator,
        start_muted: args.muted,
    });
    let context = build_app_context(&app);

    // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Happy Birthday")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
