mod app;
mod cli;
mod event;
mod projection;
mod timer;
mod tui;
mod types;
mod ui;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli_opts = cli::Cli::parse();

    let mut app = app::App::new(cli_opts.years, cli_opts.rate);
    let mut terminal = tui::init()?;
    let result = event::run(&mut app, &mut terminal);

    tui::restore()?;

    result
}
