//=========================================================================
// Overworld - Binary Entry Point
//=========================================================================

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::{error, info};

use overworld::{EngineBuilder, DEFAULT_FPS, DEFAULT_TITLE};

#[derive(Parser)]
#[command(name = "overworld")]
#[command(about = "Intro, title, overworld and two rooms, driven by a state machine", long_about = None)]
#[command(version)]
struct Cli {
    /// Directory holding the sprite images (placeholders are drawn if omitted)
    #[arg(short, long, value_name = "DIR")]
    assets: Option<PathBuf>,

    /// TrueType font for the screen text (defaults to lazy.ttf in the asset directory)
    #[arg(long, value_name = "FILE")]
    font: Option<PathBuf>,

    /// Frames per second
    #[arg(long, default_value_t = DEFAULT_FPS, value_parser = clap::value_parser!(u32).range(1..))]
    fps: u32,

    /// Window title
    #[arg(long, default_value = DEFAULT_TITLE)]
    title: String,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // RUST_LOG overrides the default level.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut builder = EngineBuilder::new().with_fps(cli.fps).with_title(cli.title);
    if let Some(dir) = cli.assets {
        builder = builder.with_assets(dir);
    }
    if let Some(font) = cli.font {
        builder = builder.with_font(font);
    }

    match builder.build().run() {
        Ok(()) => {
            info!("Goodbye");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
