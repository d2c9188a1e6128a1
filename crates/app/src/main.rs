use std::fmt;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use log::{info, warn};

use course_core::model::Language;
use services::{CourseGenerator, GeminiConfig, GeminiCourseGenerator};
use ui::{App, DesktopLinkOpener, LinkOpenerRef, UiApp, build_app_context};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidLanguage { raw: String },
    InvalidModel { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidLanguage { raw } => write!(f, "invalid --lang value: {raw}"),
            ArgsError::InvalidModel { raw } => write!(f, "invalid --model value: {raw:?}"),
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
    language: Language,
    generator: Arc<GeminiCourseGenerator>,
}

impl UiApp for DesktopApp {
    fn course_generator(&self) -> Arc<dyn CourseGenerator> {
        self.generator.clone()
    }

    fn default_language(&self) -> Language {
        self.language
    }

    fn link_opener(&self) -> LinkOpenerRef {
        Arc::new(DesktopLinkOpener)
    }
}

#[derive(Debug)]
struct Args {
    language: Language,
    model: Option<String>,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [ui] [--lang es|en] [--model <name>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --lang es");
    eprintln!("  --model gemini-3-flash-preview");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  COURSE_AI_API_KEY (or GEMINI_API_KEY), COURSE_AI_BASE_URL, COURSE_AI_MODEL");
    eprintln!("  COURSE_LANGUAGE, RUST_LOG");
}

impl Args {
    fn parse_ui(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut language = match std::env::var("COURSE_LANGUAGE") {
            Ok(raw) => raw.parse().unwrap_or_else(|err| {
                warn!("ignoring COURSE_LANGUAGE: {err}");
                Language::default()
            }),
            Err(_) => Language::default(),
        };
        let mut model = None;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--lang" => {
                    let value = require_value(args, "--lang")?;
                    language = value
                        .parse()
                        .map_err(|_| ArgsError::InvalidLanguage { raw: value.clone() })?;
                }
                "--model" => {
                    let value = require_value(args, "--model")?;
                    if value.trim().is_empty() || value.contains('/') {
                        return Err(ArgsError::InvalidModel { raw: value });
                    }
                    model = Some(value);
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self { language, model })
    }
}

fn build_generator(model: Option<String>) -> GeminiCourseGenerator {
    let config = GeminiConfig::from_env();
    let config = match (config, model) {
        (Some(config), Some(model)) => Some(config.with_model(model)),
        (config, _) => config,
    };
    let generator = GeminiCourseGenerator::new(config);
    match generator.model() {
        Some(model) => info!("course generation enabled (model {model})"),
        None => warn!("COURSE_AI_API_KEY is not set; course generation is disabled"),
    }
    generator
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv: Vec<String> = std::env::args().skip(1).collect();

    // Launching the UI is the default and only command.
    let first = argv.first().cloned();
    match first.as_deref() {
        Some("--help" | "-h") => {
            print_usage();
            return Ok(());
        }
        Some("ui") => {
            argv.remove(0);
        }
        Some(first) if !first.starts_with("--") => {
            eprintln!("unknown subcommand: {first}");
            print_usage();
            return Err(ArgsError::UnknownArg(first.to_string()).into());
        }
        _ => {}
    }

    let mut iter = argv.into_iter();
    let parsed = Args::parse_ui(&mut iter).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    let app = DesktopApp {
        language: parsed.language,
        generator: Arc::new(build_generator(parsed.model)),
    };
    info!("starting classroom ui ({})", parsed.language.code());

    let app: Arc<dyn UiApp> = Arc::new(app);
    let context = build_app_context(&app);

    // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("ProfesorIA")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

#[tokio::main]
async fn main() {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    if let Err(err) = run().await {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Args, ArgsError> {
        let mut iter = args.iter().map(|arg| (*arg).to_string());
        Args::parse_ui(&mut iter)
    }

    #[test]
    fn parses_language_and_model() {
        let args = parse(&["--lang", "en", "--model", "gemini-2.5-pro"]).unwrap();
        assert_eq!(args.language, Language::English);
        assert_eq!(args.model.as_deref(), Some("gemini-2.5-pro"));
    }

    #[test]
    fn rejects_bad_values() {
        assert!(matches!(
            parse(&["--lang", "fr"]),
            Err(ArgsError::InvalidLanguage { .. })
        ));
        assert!(matches!(
            parse(&["--model", "a/b"]),
            Err(ArgsError::InvalidModel { .. })
        ));
        assert!(matches!(
            parse(&["--lang"]),
            Err(ArgsError::MissingValue { flag: "--lang" })
        ));
        assert!(matches!(
            parse(&["--topic", "rust"]),
            Err(ArgsError::UnknownArg(_))
        ));
    }
}
