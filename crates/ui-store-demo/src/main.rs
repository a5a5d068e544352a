use anyhow::Result;
use ratatui::{
    backend::CrosstermBackend,
    crossterm::{
        event::{self, Event, KeyEventKind},
        execute,
        terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    },
    Terminal,
};
use std::io;
use std::time::Duration;

mod keymap;
mod logger;
mod views;

use keymap::{Command, Keymap};
use ui_store::Store;
use ui_store_config::AppConfig;
use views::{ProfileView, SidebarView, Views};

fn main() -> Result<()> {
    let config = AppConfig::load();
    let log_file = logger::init(&config.log_level)?;

    log::info!("Starting ui-store-demo, logging to {}", log_file.display());
    log::debug!("Config: {:?}", config);

    let keymap = keymap::default_keymap()?;

    // The one store for this process; views get a reference at construction
    let store = Store::default();
    let views = Views {
        sidebar: SidebarView::attach(&store, &config.sidebar_pages),
        profile: ProfileView::attach(&store),
    };

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &store, &views, &keymap, &config);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    log::info!(
        "Exiting ui-store-demo after {} dispatches ({} sidebar updates, {} profile updates)",
        store.dispatch_count(),
        views.sidebar.update_count(),
        views.profile.update_count()
    );
    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    store: &Store,
    views: &Views,
    keymap: &Keymap,
    config: &AppConfig,
) -> Result<()> {
    loop {
        terminal.draw(|f| {
            let area = f.area();
            views::render(views, keymap, config.sidebar_width, area, f);
        })?;

        if !event::poll(Duration::from_millis(100))? {
            continue;
        }

        if let Event::Key(key) = event::read()? {
            // Only process key press events (ignore key release)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            match keymap.command_for(key.code) {
                Some(Command::Dispatch(action)) => store.dispatch(action),
                Some(Command::Quit) => break,
                None => log::trace!("Unbound key: {:?}", key.code),
            }
        }
    }

    Ok(())
}
