//! Line-based REPL with rustyline
//!
//! Editing, tab completion and keystroke history come from rustyline; every
//! accepted line goes to a [`Session`].

use std::path::PathBuf;

use owo_colors::OwoColorize;
use rustyline::config::Config;
use rustyline::error::ReadlineError;
use rustyline::history::FileHistory;
use rustyline::{CompletionType, EditMode, Editor};
use tracing::{debug, warn};

use super::session::{Outcome, Session};
use crate::history::HistorySink;
use crate::util::config::ReplConfig;

mod completer;
pub use completer::CalcHelper;

/// Line REPL
pub struct LineRepl<H: HistorySink> {
    config: ReplConfig,
    editor: Editor<CalcHelper, FileHistory>,
    session: Session<H>,
}

impl<H: HistorySink> LineRepl<H> {
    pub fn new(
        session: Session<H>,
        config: ReplConfig,
    ) -> anyhow::Result<Self> {
        let rl_config = Config::builder()
            .history_ignore_space(true)
            .completion_type(CompletionType::List)
            .edit_mode(if config.vi_mode {
                EditMode::Vi
            } else {
                EditMode::Emacs
            })
            .max_history_size(config.input_history_size)?
            .build();

        let mut editor: Editor<CalcHelper, FileHistory> = Editor::with_config(rl_config)?;
        editor.set_helper(Some(CalcHelper::new()));

        if let Some(file) = input_history_file(&config) {
            if file.exists() {
                if let Err(e) = editor.load_history(&file) {
                    warn!("Could not load input history {}: {}", file.display(), e);
                }
            }
        }

        Ok(Self {
            config,
            editor,
            session,
        })
    }

    /// Run until `exit`, `quit` or Ctrl-D
    pub fn run(&mut self) -> anyhow::Result<()> {
        print_banner();

        loop {
            let line = match self.editor.readline(&self.config.prompt) {
                Ok(line) => line,
                Err(ReadlineError::Eof) => break,
                Err(ReadlineError::Interrupted) => {
                    println!("(Interrupted)");
                    continue;
                }
                Err(e) => return Err(e.into()),
            };

            if !line.trim().is_empty() {
                self.editor.add_history_entry(line.as_str())?;
            }

            match self.session.handle(&line) {
                Outcome::Exit => break,
                Outcome::Nothing => {}
                Outcome::Clear => {
                    self.editor.clear_screen()?;
                    print_banner();
                }
                Outcome::Output(text) => println!("{}", text),
                Outcome::Error(message) => self.print_error(&message),
            }
        }

        if let Some(file) = input_history_file(&self.config) {
            match self.editor.save_history(&file) {
                Ok(()) => debug!(path = %file.display(), "input history saved"),
                Err(e) => warn!("Could not save input history {}: {}", file.display(), e),
            }
        }

        println!("Goodbye!");
        Ok(())
    }

    fn print_error(
        &self,
        message: &str,
    ) {
        let text = format!("Error: {}", message);
        if self.config.colors {
            println!("{}", text.red());
        } else {
            println!("{}", text);
        }
    }
}

fn input_history_file(config: &ReplConfig) -> Option<PathBuf> {
    let file = config.input_history_file.clone()?;
    if let Some(dir) = file.parent() {
        if !dir.as_os_str().is_empty() && !dir.exists() {
            if let Err(e) = std::fs::create_dir_all(dir) {
                warn!("Could not create {}: {}", dir.display(), e);
                return None;
            }
        }
    }
    Some(file)
}

fn print_banner() {
    println!("Terminal Calculator {}", crate::VERSION);
    println!("Type 'help' for commands, 'exit' to quit");
}
