use slide_lines::view::OutlineView;
use slide_lines::{Command, Document, Editor, EditorConfig, MemoryClipboard, Motion};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("could not read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("unknown key '{0}'")]
    UnknownKey(String),
    #[error("{} is not normalized", .0.display())]
    NotNormalized(PathBuf),
}

fn read_source(path: &Path) -> Result<String, CliError> {
    fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Map one key script token to a command.
pub fn parse_key_token(token: &str) -> Result<Command, CliError> {
    if let Some(text) = token.strip_prefix("text:") {
        return Ok(Command::InsertText(text.to_string()));
    }

    let command = match token {
        "enter" => Command::Enter,
        "bs" => Command::DeleteBackward,
        "del" => Command::DeleteForward,
        "tab" => Command::Indent,
        "stab" => Command::Outdent,
        "bold" => Command::ToggleBold,
        "all" => Command::SelectAll,
        "copy" => Command::Copy,
        "cut" => Command::Cut,
        "paste" => Command::Paste,
        "undo" => Command::Undo,
        "redo" => Command::Redo,
        "left" => Command::Move(Motion::Left),
        "right" => Command::Move(Motion::Right),
        "up" => Command::Move(Motion::Up),
        "down" => Command::Move(Motion::Down),
        "home" => Command::Move(Motion::LineStart),
        "end" => Command::Move(Motion::LineEnd),
        _ => return Err(CliError::UnknownKey(token.to_string())),
    };
    Ok(command)
}

pub fn outline(path: &Path, config: &EditorConfig) -> Result<Vec<String>, CliError> {
    let document = Document::from_file(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let mut view = OutlineView::new(config.tab_stop);
    if let Ok((columns, _)) = crossterm::terminal::size() {
        view = view.with_max_width(columns as usize);
    }
    Ok(view.render_document(&document))
}

/// The normalized text, or `NotNormalized` under `check` when it differs
/// from the file.
pub fn normalize(path: &Path, check: bool) -> Result<String, CliError> {
    let source = read_source(path)?;
    let normalized = Document::deserialize(&source.replace("\r\n", "\n").replace('\r', "\n")).serialize();
    if check && normalized != source {
        return Err(CliError::NotNormalized(path.to_path_buf()));
    }
    Ok(normalized)
}

pub fn replay_keys(
    source: &str,
    keys: &[String],
    config: EditorConfig,
) -> Result<Editor, CliError> {
    let commands = keys
        .iter()
        .map(|key| parse_key_token(key))
        .collect::<Result<Vec<_>, _>>()?;

    let mut editor = Editor::new(
        Document::deserialize(source),
        config,
        Box::new(MemoryClipboard::new()),
    );
    for command in commands {
        let outcome = editor.execute(command);
        if let Some(message) = outcome.message {
            log::info!("{message}");
        }
    }
    Ok(editor)
}

pub fn keys(
    path: &Path,
    keys: &[String],
    config: EditorConfig,
    show_outline: bool,
    write: bool,
) -> Result<Vec<String>, CliError> {
    let tab_stop = config.tab_stop;
    let editor = replay_keys(&read_source(path)?, keys, config)?;
    if write {
        let bytes = editor.document().save(path).map_err(|source| CliError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("wrote {bytes} bytes to {}", path.display());
    }
    if show_outline {
        Ok(OutlineView::new(tab_stop).render_state(editor.state()))
    } else {
        Ok(vec![editor.document().serialize()])
    }
}
