//! boardsim - replay pointer event scripts against a component board

use std::{
    env,
    path::{Path, PathBuf},
};

use anyhow::{bail, Context, Result};
use boardsim_core::{BoardEvent, EditorState};
use boardsim_types::BoardSettings;

const USAGE: &str = "usage: boardsim [--board FILE] [--script FILE] [--out FILE] [--cell-size N]";

fn main() -> Result<()> {
    env_logger::init();

    let config = config_from_iter(env::args().skip(1))?;
    let mut editor = open_editor(&config)?;

    if let Some(script) = &config.script {
        let events = read_script(script)?;
        log::info!("replaying {} events from {}", events.len(), script.display());
        for (index, event) in events.into_iter().enumerate() {
            let response = editor
                .handle(event)
                .with_context(|| format!("event {} failed", index))?;
            println!("{}", serde_json::to_string(&response)?);
        }
    }

    match &config.out {
        Some(path) => editor
            .save(path)
            .with_context(|| format!("failed to save board to {}", path.display()))?,
        None => println!("{}", editor.to_file().to_json()?),
    }
    Ok(())
}

#[derive(Debug, Default, PartialEq)]
struct CliConfig {
    board: Option<PathBuf>,
    script: Option<PathBuf>,
    out: Option<PathBuf>,
    cell_size: Option<f32>,
}

fn config_from_iter<I>(mut args: I) -> Result<CliConfig>
where
    I: Iterator<Item = String>,
{
    let mut config = CliConfig::default();
    while let Some(arg) = args.next() {
        let mut value = || {
            args.next()
                .with_context(|| format!("{} expects a value\n{}", arg, USAGE))
        };
        match arg.as_str() {
            "--board" => config.board = Some(PathBuf::from(value()?)),
            "--script" => config.script = Some(PathBuf::from(value()?)),
            "--out" => config.out = Some(PathBuf::from(value()?)),
            "--cell-size" => {
                let raw = value()?;
                let size = raw
                    .parse::<f32>()
                    .with_context(|| format!("invalid cell size {}", raw))?;
                config.cell_size = Some(size);
            }
            other => bail!("unknown argument {}\n{}", other, USAGE),
        }
    }
    Ok(config)
}

fn open_editor(config: &CliConfig) -> Result<EditorState> {
    let editor = match &config.board {
        Some(path) => {
            let editor = EditorState::load(path)
                .with_context(|| format!("failed to load board from {}", path.display()))?;
            if config.cell_size.is_some() {
                log::warn!("--cell-size ignored; using the loaded board's settings");
            }
            editor
        }
        None => {
            let mut settings = BoardSettings::default();
            if let Some(size) = config.cell_size {
                settings.cell_size = size;
            }
            EditorState::new(settings).context("invalid board settings")?
        }
    };
    Ok(editor)
}

fn read_script(path: &Path) -> Result<Vec<BoardEvent>> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read script {}", path.display()))?;
    serde_json::from_str(&json).with_context(|| format!("invalid event script {}", path.display()))
}
