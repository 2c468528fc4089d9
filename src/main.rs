//! Snack Shack - terminal order kiosk
//!
//! A fixed menu, one quantity field per item, a running cart display, and a
//! CSV export of the final cart on exit.
//!
//! Module structure:
//! - `domain/` - Core business types (Catalog, CartState, Cents)
//! - `services/` - Business logic (CartEngine)
//! - `io/` - External interfaces (Snapshot CSV export)
//! - `infra/` - Infrastructure (Config)

use clap::Parser;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Row, Table},
    Frame, Terminal,
};
use snack_shack::infra::Config;
use snack_shack::io::Snapshot;
use snack_shack::services::{CartEngine, PROMPT};
use std::collections::HashMap;
use std::fs::File;
use std::io;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::fmt::time::UtcTime;
use tracing_subscriber::EnvFilter;

/// Snack Shack - terminal order kiosk
#[derive(Parser, Debug)]
#[command(name = "snack-shack", version, about)]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "config/dev.toml")]
    config: String,
}

/// Kiosk state: the engine plus one raw entry buffer per catalog item
struct App {
    engine: CartEngine,
    fields: Vec<String>,
    focus: usize,
}

impl App {
    fn new(engine: CartEngine) -> Self {
        let fields = vec![String::new(); engine.catalog().len()];
        Self { engine, fields, focus: 0 }
    }

    fn focus_next(&mut self) {
        self.focus = (self.focus + 1) % self.fields.len();
    }

    fn focus_prev(&mut self) {
        self.focus = (self.focus + self.fields.len() - 1) % self.fields.len();
    }

    fn push_char(&mut self, c: char) {
        if !c.is_control() {
            self.fields[self.focus].push(c);
        }
    }

    fn backspace(&mut self) {
        self.fields[self.focus].pop();
    }

    /// Submit all entry fields to the engine; clear them on success.
    /// On failure the fields stay put so the user can fix them, and the
    /// engine's status message carries the rejection text.
    fn submit(&mut self) {
        let raw_inputs: HashMap<String, String> = self
            .engine
            .catalog()
            .items()
            .iter()
            .zip(&self.fields)
            .map(|(item, raw)| (item.name.clone(), raw.clone()))
            .collect();

        if self.engine.submit(&raw_inputs).is_ok() {
            for field in &mut self.fields {
                field.clear();
            }
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let config = Config::load_from_path(&args.config);

    init_logging(config.log_file())?;
    info!("snack-shack starting");
    info!(
        config_file = %config.config_file(),
        menu_items = %config.catalog().len(),
        snapshot_file = %config.snapshot_file(),
        tick_rate_ms = %config.tick_rate_ms(),
        "config_loaded"
    );

    let mut app = App::new(CartEngine::new(config.catalog().clone()));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let tick_rate = Duration::from_millis(config.tick_rate_ms());
    let result = run_ui(&mut terminal, &mut app, tick_rate);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    result?;

    // Export the final cart once the terminal is restored. A write failure
    // propagates out of main; there is no retry.
    Snapshot::new(config.snapshot_file()).write(&app.engine)?;

    info!("snack-shack shutdown complete");
    Ok(())
}

/// Structured logging to the configured file; level via RUST_LOG, default INFO
fn init_logging(path: &str) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let file = File::create(path)
        .map_err(|e| anyhow::anyhow!("Failed to create log file {}: {}", path, e))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(UtcTime::rfc_3339())
        .with_target(false)
        .with_ansi(false)
        .with_writer(Arc::new(file))
        .init();
    Ok(())
}

fn run_ui(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    tick_rate: Duration,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| draw_ui(f, app))?;

        if event::poll(tick_rate)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    match key.code {
                        KeyCode::Esc => return Ok(()),
                        KeyCode::Enter => app.submit(),
                        KeyCode::Down | KeyCode::Tab => app.focus_next(),
                        KeyCode::Up | KeyCode::BackTab => app.focus_prev(),
                        KeyCode::Backspace => app.backspace(),
                        KeyCode::Char(c) => app.push_char(c),
                        _ => {}
                    }
                }
            }
        }
    }
}

fn draw_ui(f: &mut Frame, app: &App) {
    let form_height = app.engine.catalog().len() as u16 + 3;

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),           // Header
            Constraint::Length(form_height), // Menu | Order form
            Constraint::Min(3),              // Cart
            Constraint::Length(3),           // Grand total
            Constraint::Length(3),           // Status line
        ])
        .split(f.area());

    draw_header(f, main_chunks[0]);

    let middle_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(main_chunks[1]);

    draw_menu(f, middle_chunks[0], app);
    draw_form(f, middle_chunks[1], app);
    draw_cart(f, main_chunks[2], app);
    draw_total(f, main_chunks[3], app);
    draw_status(f, main_chunks[4], app);
}

fn draw_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new(Line::from(vec![
        Span::styled("Snack Shack ", Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
        Span::raw("| Tab/Arrows move | Enter adds items | Esc saves & quits"),
    ]))
    .block(Block::default().borders(Borders::ALL));

    f.render_widget(header, area);
}

fn draw_menu(f: &mut Frame, area: Rect, app: &App) {
    let items: Vec<ListItem> = app
        .engine
        .catalog()
        .items()
        .iter()
        .map(|item| {
            ListItem::new(Line::from(vec![
                Span::raw(format!("{}: ", item.name)),
                Span::styled(item.unit_price.to_string(), Style::default().fg(Color::Green)),
            ]))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(" Menu ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Blue)),
    );

    f.render_widget(list, area);
}

fn draw_form(f: &mut Frame, area: Rect, app: &App) {
    let rows: Vec<Row> = app
        .engine
        .catalog()
        .items()
        .iter()
        .zip(&app.fields)
        .enumerate()
        .map(|(i, (item, raw))| {
            let focused = i == app.focus;
            let cursor = if focused { "_" } else { "" };
            let style = if focused {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            Row::new(vec![item.name.clone(), format!("{}{}", raw, cursor)]).style(style)
        })
        .collect();

    let table = Table::new(rows, [Constraint::Length(12), Constraint::Min(8)])
        .header(
            Row::new(vec!["Item", "Quantity"])
                .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
        )
        .block(
            Block::default()
                .title(" Order ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        );

    f.render_widget(table, area);
}

fn draw_cart(f: &mut Frame, area: Rect, app: &App) {
    let items: Vec<ListItem> =
        app.engine.summary().map(|line| ListItem::new(line.to_string())).collect();

    let list = List::new(items).block(
        Block::default()
            .title(" Shopping Cart ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Magenta)),
    );

    f.render_widget(list, area);
}

fn draw_total(f: &mut Frame, area: Rect, app: &App) {
    let state = app.engine.state();
    let total = Paragraph::new(Line::from(vec![
        Span::raw("GRAND TOTAL: "),
        Span::styled(
            state.total_price().to_string(),
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!("  ({} items)", state.grand_count())),
    ]))
    .block(Block::default().borders(Borders::ALL));

    f.render_widget(total, area);
}

fn draw_status(f: &mut Frame, area: Rect, app: &App) {
    let message = app.engine.message();
    let style = if message == PROMPT {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
    };

    let status =
        Paragraph::new(Span::styled(message, style)).block(Block::default().borders(Borders::ALL));

    f.render_widget(status, area);
}
