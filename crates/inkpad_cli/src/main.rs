//! Terminal front end for the Inkpad editor.
//!
//! # Responsibility
//! - Read editor commands from stdin and print the resulting view.
//! - Wire configuration and logging from the environment.
//!
//! Environment:
//! - `INKPAD_CONFIG`: optional JSON config file.
//! - `INKPAD_LOG_DIR`: optional absolute log directory; logging is off when unset.

mod commands;

use commands::{parse_line, Command, HELP};
use inkpad_core::{
    init_logging_with, Clock, EditorConfig, EditorService, EditorView, LogSettings, SystemClock,
};
use log::{info, warn};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

fn main() -> ExitCode {
    let config = match load_config() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("inkpad: {err}");
            return ExitCode::FAILURE;
        }
    };
    if let Some(dir) = env_value("INKPAD_LOG_DIR") {
        let settings = LogSettings {
            level: config.log_level.clone(),
            log_dir: PathBuf::from(dir),
            echo_warnings: true,
        };
        if let Err(err) = init_logging_with(&settings) {
            eprintln!("inkpad: logging disabled: {err}");
        }
    }

    let clock = SystemClock;
    let mut editor = EditorService::from_config(config, clock.now_ms());
    match interactive(&mut editor, &clock) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("inkpad: {err}");
            ExitCode::FAILURE
        }
    }
}

fn interactive(editor: &mut EditorService, clock: &impl Clock) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "inkpad {} (type `help`)", inkpad_core::core_version())?;
    print_view(&mut stdout, &editor.view())?;
    run(editor, clock, io::stdin().lock(), &mut stdout)
}

/// Executes commands from `input` until `quit` or end of input.
fn run(
    editor: &mut EditorService,
    clock: &impl Clock,
    input: impl BufRead,
    mut out: impl Write,
) -> io::Result<()> {
    for line in input.lines() {
        let line = line?;
        editor.tick(clock.now_ms());
        let command = match parse_line(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(err) => {
                writeln!(out, "! {err}")?;
                continue;
            }
        };

        match command {
            Command::Quit => {
                if editor.has_unsaved_warning(clock.now_ms()) {
                    warn!("event=unsaved_guard module=cli status=discarded");
                    writeln!(out, "! unsaved changes are discarded on exit")?;
                }
                info!("event=cli_quit module=cli status=ok");
                return Ok(());
            }
            Command::Help => {
                writeln!(out, "{HELP}")?;
                continue;
            }
            Command::Login(email) => {
                if let Err(err) = editor.submit_login(&email) {
                    writeln!(out, "! {err}")?;
                }
            }
            Command::Logout => editor.logout(),
            Command::New => {
                editor.new_document();
            }
            Command::Open(key) => {
                editor.select_document(&key);
            }
            Command::Type(text) => editor.edit(text),
            Command::Toolbar(action, selection) => {
                if let Some(notice) = editor.apply_toolbar(action, selection, clock.now_ms()) {
                    writeln!(out, "* {}", notice.message())?;
                }
            }
            Command::Title(title) => {
                editor.set_window_title(&title);
            }
            Command::Tick | Command::View => {}
        }
        print_view(&mut out, &editor.view())?;
        out.flush()?;
    }
    Ok(())
}

fn print_view(out: &mut impl Write, view: &EditorView) -> io::Result<()> {
    writeln!(out, "== {} ==", view.window_title)?;
    let user = if view.login_prompt_visible {
        "(signed out: `login <email>`)".to_string()
    } else {
        view.user_name.clone()
    };
    writeln!(out, "user: {user}")?;
    for item in &view.documents {
        let marker = if item.active { '>' } else { ' ' };
        writeln!(out, "{marker} {}", item.key)?;
    }
    writeln!(out, "---\n{}\n---", view.content)?;
    writeln!(
        out,
        "{} | {} | {} | {}",
        view.word_count_label, view.char_count_label, view.status_label, view.last_saved_label
    )
}

fn load_config() -> Result<EditorConfig, String> {
    match env_value("INKPAD_CONFIG") {
        Some(path) => EditorConfig::load(&path).map_err(|err| format!("{path}: {err}")),
        None => Ok(EditorConfig::default()),
    }
}

fn env_value(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|raw| raw.trim().to_string())
        .filter(|value| !value.is_empty())
}
