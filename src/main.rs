use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEvent},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{
    fs, io,
    path::{Path, PathBuf},
    sync::atomic::{AtomicBool, Ordering},
    time::Duration,
};

/// Jukebox TUI remote control
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable debug logging to the temp directory
    #[arg(short, long)]
    debug: bool,

    /// Enable vim keybindings (hjkl, /)
    #[arg(long)]
    vim: bool,

    /// Path to config file (default: platform-specific, see docs)
    #[arg(short, long)]
    config: Option<String>,
}

// Global flag for debug mode
static DEBUG_MODE: AtomicBool = AtomicBool::new(false);

mod api;
mod config;
mod handlers;
mod i18n;
mod logic;
mod model;
mod services;
mod ui;
mod utils;

use api::JukeboxClient;
use config::Config;
use logic::cards::CardRowCache;
use model::Route;
use services::api::{spawn_api_service, ApiRequest, ApiResponse};
use ui::icons::{IconMode, IconRenderer};

pub fn log_debug(msg: &str) {
    // Only log if debug mode is enabled
    if !DEBUG_MODE.load(Ordering::Relaxed) {
        return;
    }

    use std::fs::OpenOptions;
    use std::io::Write;
    if let Ok(mut file) = OpenOptions::new()
        .create(true)
        .append(true)
        .open(utils::get_debug_log_path())
    {
        let _ = writeln!(file, "{}", msg);
    }
}

pub struct App {
    pub model: model::Model,
    pub translations: i18n::Translations,
    pub cards_cache: CardRowCache,
    pub icon_renderer: IconRenderer,

    api_tx: tokio::sync::mpsc::UnboundedSender<ApiRequest>,
    api_rx: tokio::sync::mpsc::UnboundedReceiver<ApiResponse>,

    /// Monotonic stamp for listing requests; ties each completion to the
    /// request that produced it
    next_request_seq: u64,
}

impl App {
    fn new(config: Config) -> Result<Self> {
        let client = JukeboxClient::new(config.base_url.clone());
        let (api_tx, api_rx) = spawn_api_service(client);

        let mut translations = i18n::Translations::new();
        if let Some(overrides) = &config.translations {
            translations.load_overrides(Path::new(overrides))?;
        }

        let icon_renderer = IconRenderer::new(IconMode::from_config(&config.icon_mode));

        let mut app = Self {
            model: model::Model::new(config.vim_mode),
            translations,
            cards_cache: CardRowCache::new(),
            icon_renderer,
            api_tx,
            api_rx,
            next_request_seq: 0,
        };

        // Initial cards fetch; the library fetches on first entry
        app.request_cards();

        Ok(app)
    }

    fn next_seq(&mut self) -> u64 {
        self.next_request_seq += 1;
        self.next_request_seq
    }

    /// Enter a library path: reset to Loading and issue a stamped fetch
    pub fn navigate_library(&mut self, path: String) {
        let seq = self.next_seq();
        self.model.library.begin_fetch(path.clone(), seq);
        let _ = self.api_tx.send(ApiRequest::ListFiles { path, seq });
    }

    /// Re-fetch the current path
    pub fn refresh_library(&mut self) {
        self.navigate_library(self.model.library.path.clone());
    }

    pub fn switch_to_library(&mut self) {
        self.model.navigation.set_root(Route::Library);
        // Entering the view always re-fetches, like a fresh mount
        self.navigate_library(self.model.library.path.clone());
    }

    pub fn switch_to_cards(&mut self) {
        self.model.navigation.set_root(Route::Cards);
    }

    pub fn request_cards(&mut self) {
        let _ = self.api_tx.send(ApiRequest::ListCards);
    }

    pub fn register_music(&mut self, card_id: String, uri: String) {
        let _ = self.api_tx.send(ApiRequest::RegisterMusic { card_id, uri });
    }

    /// Handle keyboard input
    /// Delegated to handlers::keyboard module
    fn handle_key(&mut self, key: KeyEvent) {
        handlers::handle_key(self, key);
    }

    /// Handle API response from the background worker
    /// Delegated to handlers::api module
    fn handle_api_response(&mut self, response: ApiResponse) {
        handlers::handle_api_response(self, response);
    }
}

/// Determine the config file path with fallback logic
fn get_config_path(cli_path: Option<String>) -> Result<PathBuf> {
    // If CLI argument provided, use it
    if let Some(path) = cli_path {
        let p = PathBuf::from(&path);
        if p.exists() {
            return Ok(p);
        } else {
            anyhow::bail!("Config file not found at specified path: {}", path);
        }
    }

    // Try ~/.config/juketui/config.yaml
    if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join("juketui").join("config.yaml");
        if config_path.exists() {
            return Ok(config_path);
        }
    }

    // Fallback to ./config.yaml
    let local_config = PathBuf::from("config.yaml");
    if local_config.exists() {
        return Ok(local_config);
    }

    anyhow::bail!(
        "No config file found. Create ~/.config/juketui/config.yaml with at least:\n\
         base_url: http://jukebox.local:5555"
    )
}

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse();

    // Set debug mode
    DEBUG_MODE.store(args.debug, Ordering::Relaxed);

    if args.debug {
        log_debug("Debug mode enabled");
    }

    // Determine config file path
    let config_path = get_config_path(args.config)?;

    if args.debug {
        log_debug(&format!("Loading config from: {:?}", config_path));
    }

    // Load configuration
    let config_str = fs::read_to_string(&config_path)?;
    let mut config: Config = serde_yaml::from_str(&config_str)?;

    // Override config with CLI flags
    if args.vim {
        config.vim_mode = true;
    }

    // Initialize app
    let mut app = App::new(config)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app with error handler
    let result = run_app(&mut terminal, &mut app).await;

    // Cleanup terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Return result after cleanup
    result
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    loop {
        terminal.draw(|f| {
            ui::render(f, app);
        })?;

        // Auto-dismiss toast after its timeout
        if app.model.ui.should_dismiss_toast() {
            app.model.ui.dismiss_toast();
        }

        if app.model.ui.should_quit {
            break;
        }

        // Process API responses (non-blocking)
        while let Ok(response) = app.api_rx.try_recv() {
            app.handle_api_response(response);
        }

        if event::poll(Duration::from_millis(250))? {
            if let Event::Key(key) = event::read()? {
                app.handle_key(key);
            }
        }
    }

    Ok(())
}
