//! meander - generative ambient music in the terminal
//!
//! Run with: cargo run [seed]

mod app;
mod engine;
mod ui;

use app::App;
use meander::Config;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let mut config = Config::default();
    if let Some(seed) = std::env::args().nth(1) {
        config.seed = Some(seed.parse()?);
    }

    App::new(config).run()
}
