extern crate sdl2;

use log::{error, info, LevelFilter, SetLoggerError};
use log4rs::{
    append::console::ConsoleAppender,
    config::{runtime::ConfigErrors, Appender, Config, Root},
    encode::pattern::PatternEncoder,
};
use rects::{
    render::{
        present_frame,
        sdl::{init_graphics, DisplayConfig, DisplayError},
        RenderError,
    },
    simulation::{FramePacer, Scene, SimulationConfig},
    world_gen::GenerationConfig,
};
use thiserror::Error;

const LOG_PATTERN: &str = "{d(%H:%M:%S%.3f)} {h({l})} {t} - {m}{n}";

#[derive(Debug, Error)]
enum AppError {
    #[error(transparent)]
    Display(#[from] DisplayError),
    #[error(transparent)]
    Render(#[from] RenderError),
    #[error("log4rs configuration: {0}")]
    LogConfig(#[from] ConfigErrors),
    #[error("logger already set: {0}")]
    Logger(#[from] SetLoggerError),
}

fn log_level() -> LevelFilter {
    match std::env::var("RECTS_LOG").as_deref() {
        Ok("trace") => LevelFilter::Trace,
        Ok("debug") => LevelFilter::Debug,
        _ => LevelFilter::Info,
    }
}

fn init_logging() -> Result<(), AppError> {
    let stdout = ConsoleAppender::builder()
        .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
        .build();
    let config = Config::builder()
        .appender(Appender::builder().build("stdout", Box::new(stdout)))
        .build(Root::builder().appender("stdout").build(log_level()))?;
    log4rs::init_config(config)?;
    Ok(())
}

fn run() -> Result<(), AppError> {
    let mut graphics = init_graphics(&DisplayConfig::default())?;
    let mut scene = Scene::new(&GenerationConfig::default());
    let mut pacer = FramePacer::new(&SimulationConfig::default());

    while !graphics.quit_requested() {
        scene.update();
        present_frame(&mut graphics.canvas, &scene)?;
        pacer.wait();
    }
    info!("Quit after {} ticks", scene.tick());
    Ok(())
}

pub fn main() {
    if let Err(e) = init_logging() {
        eprintln!("Failed to initialise logging: {}", e);
    }
    if let Err(e) = run() {
        error!("{}", e);
        std::process::exit(1);
    }
}
