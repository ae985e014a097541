use std::fmt;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{AssessmentService, Clock, default_catalog};
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

const SEED_ENV: &str = "GDD_SEED";

#[derive(Debug, PartialEq, Eq)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidSeed { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidSeed { raw } => write!(f, "invalid seed value: {raw}"),
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

fn parse_seed(raw: String) -> Result<u64, ArgsError> {
    raw.trim()
        .parse()
        .map_err(|_| ArgsError::InvalidSeed { raw })
}

struct DesktopApp {
    assessment: Arc<AssessmentService>,
}

impl UiApp for DesktopApp {
    fn assessment(&self) -> Arc<AssessmentService> {
        Arc::clone(&self.assessment)
    }
}

#[derive(Debug, Default, PartialEq, Eq)]
struct Args {
    seed: Option<u64>,
    help: bool,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--seed <u64>]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --seed <u64>  pin the estimate used for sections answered only with choices");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  {SEED_ENV}   default for --seed");
    eprintln!("  RUST_LOG   log filter (default: info)");
}

impl Args {
    /// `env_seed` is the raw `GDD_SEED` value; the command line wins over it.
    fn parse(
        args: &mut impl Iterator<Item = String>,
        env_seed: Option<String>,
    ) -> Result<Self, ArgsError> {
        let mut parsed = Self {
            seed: env_seed.map(parse_seed).transpose()?,
            help: false,
        };

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--seed" => {
                    let value = require_value(args, "--seed")?;
                    parsed.seed = Some(parse_seed(value)?);
                }
                "--help" | "-h" => parsed.help = true,
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(parsed)
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let args = Args::parse(&mut argv, std::env::var(SEED_ENV).ok()).map_err(|e| {
        print_usage();
        e
    })?;
    if args.help {
        print_usage();
        return Ok(());
    }

    init_tracing();

    let catalog = default_catalog()?;
    tracing::info!(sections = catalog.len(), seed = ?args.seed, "starting assessment app");
    let assessment =
        Arc::new(AssessmentService::new(Clock::system(), catalog).with_seed(args.seed));

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp { assessment });
    let context = build_app_context(&app);

    // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Group Decision Dynamics")
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
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
