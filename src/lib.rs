//! A terminal primer on Vue.js and Nuxt for React and Next.js developers:
//! topic quizzes, with a light/dark appearance preference that follows the
//! user across runs.

use color_eyre::eyre::Result;

use app::{App, AppReturn};
use inputs::handler::Event;
use tui::Tui;

pub mod app;
pub mod config;
pub mod inputs;
pub mod logger;
pub mod quiz;
pub mod session;
pub mod theme;
mod tui;
mod ui;

/// Runs the terminal interface until the user quits.
pub async fn start_ui(app: &mut App) -> Result<()> {
    let mut tui = Tui::new()?;
    tui.init()?;

    let result = run_loop(&mut tui, app).await;

    tui.exit()?;
    result
}

async fn run_loop(tui: &mut Tui, app: &mut App) -> Result<()> {
    loop {
        tui.draw(&mut app.state)?;

        let result = match tui.events.next().await {
            Event::Input(key_event) => app.process_key_event(key_event),
            Event::Tick => app.update_on_tick(),
        };
        if result == AppReturn::Exit {
            return Ok(());
        }
    }
}
