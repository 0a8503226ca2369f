use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use color_eyre::Result;
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use ratatui::DefaultTerminal;

use triemaster::app::App;
use triemaster::config::{self, Config, ConsistencyMode};
use triemaster::controller::Controller;
use triemaster::fetch::{FetchClients, worker::spawn_worker};

const LOG_FILE: &str = "triemaster.log";
const LOG_ENV: &str = "TRIEMASTER_LOG";
const TICK: Duration = Duration::from_millis(50);

/// Search and curate the words of a TrieMaster word store
#[derive(Parser, Debug)]
#[command(name = "triemaster", version, about)]
struct Args {
    /// Config file (default: ~/.config/triemaster/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Word store base URL, overrides the config file
    #[arg(long, value_name = "URL")]
    server: Option<String>,

    /// Do not fetch encyclopedia summaries
    #[arg(long)]
    no_enrichment: bool,

    /// How out-of-order responses are reconciled
    #[arg(long, value_enum, value_name = "MODE")]
    consistency: Option<ConsistencyMode>,
}

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;

    let args = Args::parse();
    init_logging();

    let config = resolve_config(&args)?;
    log::info!(
        "starting against {} ({:?}, enrichment {})",
        config.word_store.base_url,
        config.behavior.consistency,
        config.enrichment.enabled
    );

    let clients = FetchClients::from_config(&config)?;
    let (mut worker, channels) = spawn_worker(clients, config.request_timeout())?;

    let mut controller = Controller::new(config.behavior.consistency, config.enrichment.enabled);
    controller.set_channels(channels.request_tx, channels.response_rx);
    let app = App::new(controller, &config.word_store.base_url);

    // Initialize terminal (handles raw mode, alternate screen, etc.)
    let terminal = ratatui::init();
    if let Err(e) = execute!(std::io::stdout(), EnableMouseCapture) {
        log::warn!("failed to enable mouse capture: {}", e);
    }

    let result = run(terminal, app);

    let _ = execute!(std::io::stdout(), DisableMouseCapture);
    ratatui::restore();
    worker.shutdown();

    result
}

/// Config file plus command line overrides, validated
fn resolve_config(args: &Args) -> Result<Config> {
    let mut config = config::load_config(args.config.as_deref())?;

    if let Some(server) = &args.server {
        config.word_store.base_url = server.clone();
    }
    if args.no_enrichment {
        config.enrichment.enabled = false;
    }
    if let Some(mode) = args.consistency {
        config.behavior.consistency = mode;
    }

    config.validate()?;
    Ok(config)
}

/// Log to a file in the cache directory; the terminal belongs to the UI
fn init_logging() {
    let Some(dir) = dirs::cache_dir().map(|d| d.join("triemaster")) else {
        return;
    };
    if fs::create_dir_all(&dir).is_err() {
        return;
    }
    let Ok(file) = OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join(LOG_FILE))
    else {
        return;
    };

    env_logger::Builder::from_env(env_logger::Env::default().filter_or(LOG_ENV, "info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .format(|buf, record| {
            writeln!(
                buf,
                "{} {:<5} {} {}",
                chrono::Local::now().format("%Y-%m-%dT%H:%M:%S%.3f"),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}

fn run(mut terminal: DefaultTerminal, mut app: App) -> Result<()> {
    loop {
        app.tick();

        // Render the UI
        terminal.draw(|frame| app.render(frame))?;

        if event::poll(TICK)? {
            app.handle_event(event::read()?);
        }

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
