// transpyle: single-pass translator to Python

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser as CliParser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing_subscriber::EnvFilter;

use transpyle::config::{KeywordPolicy, TranslateOptions};
use transpyle::driver::{default_output_path, translate_path, translate_str};
use transpyle::ui::App;

/// Translate a program into Python.
#[derive(CliParser, Debug)]
#[command(name = "transpyle", version, about)]
struct Args {
    /// Source file to translate.
    input: PathBuf,

    /// Output file (defaults to the input path with a `.py` extension).
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Match keywords and type names as literal prefixes, so `printer`
    /// lexes as `print` followed by `er`.
    #[arg(long)]
    literal_keywords: bool,

    /// Do not write the generated-file header comment.
    #[arg(long)]
    no_header: bool,

    /// Do not annotate declarations with their source type.
    #[arg(long)]
    no_annotations: bool,

    /// Number of upcoming tokens shown with a parse error.
    #[arg(long, default_value_t = TranslateOptions::DEFAULT_ERROR_CONTEXT)]
    error_context: usize,

    /// Show source and translation side by side instead of writing a file.
    #[arg(long)]
    view: bool,
}

impl Args {
    fn options(&self) -> TranslateOptions {
        TranslateOptions {
            keyword_policy: if self.literal_keywords {
                KeywordPolicy::LiteralPrefix
            } else {
                KeywordPolicy::WordBoundary
            },
            emit_header: !self.no_header,
            annotate_declarations: !self.no_annotations,
            error_context: self.error_context,
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("transpyle=info")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let result = if args.view {
        run_viewer(&args)
    } else {
        let output = args
            .output
            .clone()
            .unwrap_or_else(|| default_output_path(&args.input));
        translate_path(&args.input, &output, &args.options())
            .map(|_| ())
            .map_err(Into::into)
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run_viewer(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let options = args.options();
    let source = std::fs::read_to_string(&args.input)?;
    let (translation, summary) = translate_str(&source, &options)?;

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(source, translation, summary, options.keyword_policy);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res?;
    Ok(())
}
