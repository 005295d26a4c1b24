use clap::error::{ContextKind, ContextValue, ErrorKind};
use clap::{ArgAction, CommandFactory, Parser};
use log::{LevelFilter, info};
use simple_man::config::{self, ConfigError, SiteConfig, ThemeOverrides};
use simple_man::parse::{self, ParseError};
use simple_man::source::{SourceBuffer, SourceError};
use simple_man::{output, render};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use thiserror::Error;

/// Source document read when no path is given.
const DEFAULT_SOURCE: &str = "index.1";

#[derive(Parser)]
#[command(name = "simple-man")]
#[command(about = "Render a roff-style man page source as a static HTML page")]
#[command(long_about = "\
Render a roff-style man page source as a static HTML page

The source is read line by line:

  .TH name section date source title   Title fields (\\ escapes a space)
  .SH NAME                             Start a new section
  .LN https://example.com Label        Link in the current section
  .XX ...                              Unknown directive: warning, skipped
  anything else                        Text in the current section

Text is copied into the page verbatim, without HTML escaping. An empty line
inside a section becomes a double line break.

The page embeds a stylesheet (theme.css by default) and exposes three hue
angles to it as --hue-background, --hue-text and --hue-accent.

Exit codes: 0 ok, 1 usage or structural error, 2 bad parameter,
3 cannot open a file, 4 cannot read a file.")]
#[command(version)]
#[command(disable_help_flag = true)]
struct Cli {
    /// Print this usage text and exit
    #[arg(short = 'h', long = "help", action = ArgAction::SetTrue)]
    help: bool,

    /// Print a summary of the parsed document instead of HTML
    #[arg(short = 's', long = "summary", conflicts_with = "json")]
    summary: bool,

    /// Print the parsed document as JSON instead of HTML
    #[arg(short = 'j', long)]
    json: bool,

    /// Theme config file (TOML); see --gen-config
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Stylesheet embedded into the page [default: theme.css]
    #[arg(short = 't', long, value_name = "FILE")]
    theme: Option<PathBuf>,

    /// Background hue in degrees
    #[arg(long, value_name = "DEG", value_parser = clap::value_parser!(u16).range(0..360))]
    background_hue: Option<u16>,

    /// Text hue in degrees
    #[arg(long, value_name = "DEG", value_parser = clap::value_parser!(u16).range(0..360))]
    text_hue: Option<u16>,

    /// Accent hue in degrees
    #[arg(long, value_name = "DEG", value_parser = clap::value_parser!(u16).range(0..360))]
    accent_hue: Option<u16>,

    /// Print a config file with all options documented and exit
    #[arg(long)]
    gen_config: bool,

    /// More log output on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long, action = ArgAction::Count)]
    verbose: u8,

    /// Source document, `-` for stdin
    #[arg(value_name = "PATH", default_value = DEFAULT_SOURCE)]
    source: PathBuf,
}

impl Cli {
    fn theme_overrides(&self) -> ThemeOverrides {
        ThemeOverrides {
            stylesheet: self.theme.clone(),
            background_hue: self.background_hue,
            text_hue: self.text_hue,
            accent_hue: self.accent_hue,
        }
    }
}

#[derive(Error, Debug)]
enum RunError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Source(#[from] SourceError),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
}

impl RunError {
    fn exit_code(&self) -> u8 {
        match self {
            RunError::Config(err) => err.exit_code(),
            RunError::Source(err) => err.exit_code(),
            RunError::Parse(err) => err.exit_code(),
            RunError::Json(_) | RunError::Output(_) => 1,
        }
    }
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => return report_cli_error(err),
    };

    init_logging(cli.verbose);

    if cli.help {
        eprint!("{}", Cli::command().render_help());
        return ExitCode::from(1);
    }
    if cli.gen_config {
        print!("{}", config::stock_config_toml());
        return ExitCode::SUCCESS;
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::from(err.exit_code())
        }
    }
}

/// Read, parse, and write the selected output.
///
/// Every fallible input step finishes before anything reaches stdout.
fn run(cli: &Cli) -> Result<(), RunError> {
    let site_config = resolve_config(cli)?;

    let buffer = SourceBuffer::read(&cli.source)?;
    let page = parse::parse_page(buffer.name(), buffer.text())?;
    info!(
        "parsed {}: {} sections",
        buffer.name(),
        page.sections.len()
    );

    if cli.summary {
        output::print_summary(&page)?;
        return Ok(());
    }
    if cli.json {
        let json = serde_json::to_string_pretty(&page)?;
        return write_stdout(&json);
    }

    let stylesheet = SourceBuffer::read(&site_config.theme.stylesheet)?;
    let html = render::render_page(&page, &site_config.theme, stylesheet.text());
    write_stdout(&html.into_string())
}

/// Stock defaults, then the `--config` file, then command-line flags.
fn resolve_config(cli: &Cli) -> Result<SiteConfig, ConfigError> {
    let mut site_config = match &cli.config {
        Some(path) => config::load_config(path)?,
        None => SiteConfig::default(),
    };
    site_config.apply_overrides(&cli.theme_overrides());
    site_config.validate()?;
    Ok(site_config)
}

fn write_stdout(content: &str) -> Result<(), RunError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "{content}")?;
    out.flush()?;
    Ok(())
}

/// Map argument errors onto the exit-code contract: anything clap rejects is 2.
fn report_cli_error(err: clap::Error) -> ExitCode {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            let _ = err.print();
            ExitCode::SUCCESS
        }
        ErrorKind::UnknownArgument => {
            let arg = match err.get(ContextKind::InvalidArg) {
                Some(ContextValue::String(arg)) => arg.as_str(),
                _ => "",
            };
            eprintln!("error: unrecognized parameter: {arg}");
            ExitCode::from(2)
        }
        _ => {
            let _ = err.print();
            ExitCode::from(2)
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::builder()
        .format_timestamp(None)
        .format_target(false)
        .filter_level(level)
        .parse_default_env()
        .init();
}
