use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
};
use log::info;

use blog::page::BlogPage;
use tui::{app::App, blog_view::BlogView};

mod blog;
mod logging;
mod tasks;
mod tui;

#[derive(Parser)]
#[command(name = "tudu", version, about = "A small terminal to-do list")]
struct Cli {
    /// Directory for rotating log files (defaults to the system temp dir)
    #[arg(long, value_name = "DIR")]
    log_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Show the sample blog page instead of the task list
    Blog,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let log_dir = cli
        .log_dir
        .unwrap_or_else(|| std::env::temp_dir().join("tudu"));
    let _logger = logging::init(&log_dir)?;
    info!("starting up, logging to {}", log_dir.display());

    let mut terminal = ratatui::init();
    terminal.clear()?;
    let result = match cli.command {
        Some(Command::Blog) => BlogView::new(BlogPage::sample()).run(&mut terminal),
        None => {
            execute!(std::io::stdout(), EnableMouseCapture)?;
            let result = App::new().run(&mut terminal);
            let _ = execute!(std::io::stdout(), DisableMouseCapture);
            result
        }
    };
    ratatui::restore();
    info!("shut down");
    result
}
