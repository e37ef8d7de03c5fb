#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use placemap::config::Config;
use placemap::errors::AppResult;
use placemap::ui::prompt::Prompter;
use std::collections::VecDeque;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn pm() -> Command {
    cargo_bin_cmd!("placemap")
}

/// Unique config path inside the system temp dir, removed if present.
pub fn temp_config(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_placemap.conf", name));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Binary invocation isolated from the user's configuration.
pub fn pm_isolated(name: &str) -> Command {
    let cfg = temp_config(name);
    let mut cmd = pm();
    cmd.args(["--config", &cfg, "--no-color"]);
    cmd
}

pub fn test_config() -> Config {
    Config::default()
}

/// Prompter fed from a script of answers.
///
/// `None` in `answers` cancels that prompt; an empty string takes the default.
#[derive(Default)]
pub struct ScriptedPrompter {
    answers: VecDeque<Option<String>>,
    confirms: VecDeque<bool>,
    pub asked: Vec<String>,
}

impl ScriptedPrompter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn answer(mut self, text: &str) -> Self {
        self.answers.push_back(Some(text.to_string()));
        self
    }

    pub fn cancel(mut self) -> Self {
        self.answers.push_back(None);
        self
    }

    pub fn confirm_with(mut self, yes: bool) -> Self {
        self.confirms.push_back(yes);
        self
    }
}

impl Prompter for ScriptedPrompter {
    fn prompt(&mut self, message: &str, default: &str) -> AppResult<Option<String>> {
        self.asked.push(message.to_string());
        Ok(match self.answers.pop_front().flatten() {
            Some(a) if a.is_empty() => Some(default.to_string()),
            other => other,
        })
    }

    fn confirm(&mut self, message: &str) -> AppResult<bool> {
        self.asked.push(message.to_string());
        Ok(self.confirms.pop_front().unwrap_or(false))
    }
}
