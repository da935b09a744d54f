use clap::Parser;
use profile_form::app::App;
use profile_form::terminal::{Terminal, TerminalEvent};
use profile_form::ui::form_view;
use profile_form::{FormConfig, FormController, FormError, ProfileRecord};
use std::error::Error;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;

/// Fill in and validate a user profile form in the terminal.
#[derive(Debug, Parser)]
#[command(name = "profile-form", version)]
struct Cli {
    /// Pre-populate the form from a JSON or YAML profile record.
    #[arg(long, conflicts_with = "sample")]
    profile: Option<PathBuf>,

    /// Pre-populate the form with the built-in sample user.
    #[arg(long)]
    sample: bool,

    /// Form settings (YAML).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write diagnostics to this file. Filter with RUST_LOG.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() {
    if let Err(e) = run(Cli::parse()) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    if let Some(path) = &cli.log_file {
        init_tracing(path)?;
    }

    let config = match &cli.config {
        Some(path) => FormConfig::load(path)?,
        None => FormConfig::default(),
    };
    let form = match (&cli.profile, cli.sample) {
        (Some(path), _) => FormController::with_profile(config, &ProfileRecord::load(path)?),
        (None, true) => FormController::with_profile(config, &ProfileRecord::sample()),
        (None, false) => FormController::new(config),
    };

    let mut terminal = Terminal::new()?;
    terminal.enter_raw_mode()?;
    let mut app = App::new(form);
    let result = event_loop(&mut terminal, &mut app);
    terminal.exit_raw_mode()?;
    terminal.finish()?;
    result?;

    if let Some(errors) = app.form().visible_errors() {
        tracing::info!(errors = %serde_json::to_string(errors)?, "session ended");
    }
    Ok(())
}

fn event_loop(terminal: &mut Terminal, app: &mut App) -> std::io::Result<()> {
    let mut render_requested = true;

    loop {
        if render_requested {
            terminal.draw(&form_view::render(app))?;
            render_requested = false;
        }

        if terminal.poll(Duration::from_millis(100))? {
            match terminal.read_event()? {
                TerminalEvent::Key(key) => app.handle_key(key),
                TerminalEvent::Resize => {}
            }
            render_requested = true;
        }

        if app.should_exit() {
            return Ok(());
        }
    }
}

fn init_tracing(path: &Path) -> Result<(), FormError> {
    let file = File::create(path).map_err(|source| FormError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::DEBUG.into()),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}
