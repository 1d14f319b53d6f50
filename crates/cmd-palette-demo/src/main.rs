use anyhow::Context;
use ratatui::{
    backend::CrosstermBackend,
    crossterm::{
        event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
        execute,
        terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    },
    layout::{Constraint, Layout},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};
use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

mod catalog;
mod config;
mod logger;

use cmd_palette::{Palette, PaletteEvent, PaletteWidget};
use config::DemoConfig;

struct App {
    palette: Palette,
    invoked: Arc<Mutex<Vec<String>>>,
    running: Arc<AtomicBool>,
    status: Option<String>,
}

impl App {
    fn new() -> Self {
        let config = DemoConfig::load();
        let invoked = Arc::new(Mutex::new(Vec::new()));
        let running = Arc::new(AtomicBool::new(true));
        let palette = Palette::new(
            config.palette,
            catalog::build(invoked.clone(), running.clone()),
        );
        Self {
            palette,
            invoked,
            running,
            status: None,
        }
    }

    fn on_key(&mut self, key: KeyEvent) {
        // Ctrl+C always quits
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.running.store(false, Ordering::SeqCst);
            return;
        }
        // 'q' quits while the palette is hidden
        if !self.palette.is_visible() && key.code == KeyCode::Char('q') {
            self.running.store(false, Ordering::SeqCst);
            return;
        }

        for event in self.palette.handle_key(key) {
            match event {
                PaletteEvent::Invoked(id) => {
                    self.status = Some(format!("ran `{id}`"));
                }
                PaletteEvent::HandlerFailed { id, message } => {
                    self.status = Some(format!("`{id}` failed: {message}"));
                }
                PaletteEvent::Opened => self.status = None,
                PaletteEvent::Closed | PaletteEvent::RootChanged(_) => {}
            }
        }
    }
}

fn main() -> anyhow::Result<()> {
    let log_file = logger::init();
    log::info!(
        "Starting cmd-palette-demo, logging to {}",
        log_file.display()
    );

    // Setup terminal
    enable_raw_mode().context("failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new();

    // Main event loop
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = result {
        eprintln!("Error: {}", err);
    }

    log::info!("Exiting cmd-palette-demo");
    Ok(())
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> io::Result<()> {
    loop {
        // Render
        terminal.draw(|frame| render(app, frame))?;

        // Check if we should quit
        if !app.running.load(Ordering::SeqCst) {
            break;
        }

        // Handle events
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (ignore key release)
                if key.kind == KeyEventKind::Press {
                    app.on_key(key);
                }
            }
        }
    }

    Ok(())
}

fn render(app: &App, frame: &mut Frame) {
    let area = frame.area();
    let chunks = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(1),
        Constraint::Length(1),
    ])
    .split(area);

    let header = Paragraph::new(Line::from(vec![
        Span::styled("Ctrl+K", Style::default().yellow().bold()),
        Span::raw(" opens the palette, "),
        Span::styled("Ctrl+G C", Style::default().yellow().bold()),
        Span::raw(" commits from anywhere, "),
        Span::styled("q", Style::default().yellow().bold()),
        Span::raw(" quits"),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(" cmd-palette demo "),
    );
    frame.render_widget(header, chunks[0]);

    let entries = app
        .invoked
        .lock()
        .map(|entries| entries.clone())
        .unwrap_or_default();
    let lines: Vec<Line> = if entries.is_empty() {
        vec![Line::from("Nothing invoked yet.")]
    } else {
        // Newest first
        entries
            .iter()
            .rev()
            .map(|entry| Line::from(format!("• {entry}")))
            .collect()
    };
    let log_view = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Invoked commands "),
    );
    frame.render_widget(log_view, chunks[1]);

    let status = app.status.as_deref().unwrap_or("");
    frame.render_widget(Paragraph::new(status).dim(), chunks[2]);

    // The palette draws itself over everything while visible
    frame.render_widget(PaletteWidget::new(&app.palette), area);
}
