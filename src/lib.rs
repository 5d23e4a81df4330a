pub mod app;
pub mod cli;
pub mod config;
pub mod domain;
pub mod engine;
pub mod logging;
pub mod surface;
pub mod ui;

#[cfg(test)]
mod test_support;

use std::io::{self, Stdout};

use anyhow::{Context, Result};
use app::{
    effect::ThunderEffect,
    events::{AppEvent, spawn_input_task},
    scheduler::ManualScheduler,
    state::AppState,
};
use cli::Cli;
use config::EffectConfig;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use domain::random::SeededRandom;
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use surface::RasterSurface;
use tokio::sync::mpsc;
use tracing::info;

pub async fn run(cli: Cli) -> Result<()> {
    cli.validate()?;
    let config = config::resolve(&cli).context("loading configuration failed")?;
    logging::init(cli.log_file.as_deref())?;

    if let Some(frames) = cli.one_shot {
        let (cols, rows) = crossterm::terminal::size().unwrap_or((80, 24));
        println!("{}", one_shot(&config, frames, cols, rows, pixel_size())?);
        return Ok(());
    }

    let mut terminal = setup_terminal()?;
    let result = run_inner(&mut terminal, config).await;
    restore_terminal(&mut terminal)?;
    result
}

async fn run_inner(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    config: EffectConfig,
) -> Result<()> {
    let (tx, mut rx) = mpsc::channel::<AppEvent>(256);
    let input_stream = spawn_input_task();
    tokio::pin!(input_stream);

    let support = ui::capability::detect_surface_support(config.color);
    info!(?support, "surface probe");
    let mut app = AppState::new(config, support, tx);
    let size = terminal.size()?;
    app.mount(size.width, size.height, pixel_size())?;
    terminal.draw(|frame| ui::render(frame, &app))?;

    while app.running {
        tokio::select! {
            maybe_input = input_stream.next() => {
                match maybe_input {
                    Some(input) => app.handle_event(AppEvent::Input(input))?,
                    None => app.handle_event(AppEvent::Quit)?,
                }
            }
            maybe_event = rx.recv() => {
                if let Some(event) = maybe_event {
                    app.handle_event(event)?;
                }
            }
        }

        if app.running {
            terminal.draw(|frame| ui::render(frame, &app))?;
        }
    }

    Ok(())
}

/// Runs `frames` frames headlessly and returns the canvas as text.
pub fn one_shot(
    config: &EffectConfig,
    frames: u32,
    cols: u16,
    rows: u16,
    pixels: Option<(u16, u16)>,
) -> Result<String> {
    let viewport = ui::layout::viewport_for(cols, rows, pixels);
    let (grid_cols, grid_rows) = ui::layout::raster_grid(cols, rows);
    let surface = RasterSurface::new(
        viewport.width_f64(),
        viewport.height_f64(),
        grid_cols,
        grid_rows,
    );

    let mut scheduler = ManualScheduler::new();
    let mut rng = SeededRandom::from_seed_option(config.seed);
    let mut effect = ThunderEffect::new(config.effect_options());
    effect.mount(viewport, Some(surface), &mut scheduler)?;

    for _ in 0..frames {
        let Some(due) = scheduler.take_due() else {
            break;
        };
        effect.on_frame(due, &mut scheduler, &mut rng);
    }

    let text = effect
        .surface()
        .map(|surface| ui::present::ascii_frame(surface, effect.tint_filter()))
        .unwrap_or_default();
    effect.unmount(&mut scheduler);
    Ok(text)
}

fn pixel_size() -> Option<(u16, u16)> {
    crossterm::terminal::window_size()
        .ok()
        .filter(|size| size.width > 0 && size.height > 0)
        .map(|size| (size.width, size.height))
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    install_panic_hook();
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Ok(Terminal::new(backend)?)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

fn install_panic_hook() {
    let existing = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic| {
        let _ = disable_raw_mode();
        let mut stdout = io::stdout();
        let _ = execute!(stdout, LeaveAlternateScreen);
        existing(panic);
    }));
}
