use std::fmt;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use ui::{build_app_context, App, UiApp};

const APP_NAME: &str = "Pick & Pack";

#[derive(Debug)]
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
            ArgsError::InvalidSeed { raw } => write!(f, "invalid --seed value: {raw}"),
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
    rng_seed: Option<u64>,
}

impl UiApp for DesktopApp {
    fn app_name(&self) -> &str {
        APP_NAME
    }

    fn rng_seed(&self) -> Option<u64> {
        self.rng_seed
    }
}

#[derive(Debug)]
struct Args {
    seed: Option<u64>,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--seed <u64>]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --seed <u64>   fix the layout randomness (for demos/debugging)");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  PICKPACK_SEED");
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut seed = std::env::var("PICKPACK_SEED")
            .ok()
            .and_then(|value| value.parse::<u64>().ok());

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--seed" => {
                    let value = require_value(args, "--seed")?;
                    let parsed: u64 = value
                        .parse()
                        .map_err(|_| ArgsError::InvalidSeed { raw: value.clone() })?;
                    seed = Some(parsed);
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self { seed })
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let argv: Vec<String> = std::env::args().skip(1).collect();
    let mut iter = argv.into_iter();
    let parsed = Args::parse(&mut iter).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        rng_seed: parsed.seed,
    });
    let context = build_app_context(&app);

    // Keep the game window a normal window, not an always-on-top one.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title(APP_NAME)
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

// The UI's countdown runs on tokio timers, which need a reactor entered on
// the thread that drives the desktop event loop.
#[tokio::main]
async fn main() {
    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
