//! Shared test utilities and fixture generators

#![allow(dead_code)]

use std::collections::VecDeque;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use masscsv::cli::Console;
use masscsv::pipeline::{ColumnPrompt, Settings};
use tempfile::TempDir;

/// Sample input used across the scenario tests
pub const SAMPLE_TXT: &str = "foo   bar\nbaz\n";

/// A temporary working area with `input/` and `output/` folders
pub struct Workspace {
    pub dir: TempDir,
    pub settings: Settings,
}

impl Workspace {
    /// Create the workspace with both folders present
    pub fn new() -> Self {
        let ws = Self::without_folders();
        fs::create_dir(&ws.settings.input_dir).unwrap();
        fs::create_dir(&ws.settings.output_dir).unwrap();
        ws
    }

    /// Create the workspace but leave the folders for the code under test
    pub fn without_folders() -> Self {
        let dir = TempDir::new().unwrap();
        let settings = Settings::new(dir.path().join("input"), dir.path().join("output"));
        Self { dir, settings }
    }

    pub fn write_input(&self, name: &str, content: &str) -> PathBuf {
        let path = self.settings.input_dir.join(name);
        fs::write(&path, content).unwrap();
        path
    }

    pub fn write_input_bytes(&self, name: &str, content: &[u8]) -> PathBuf {
        let path = self.settings.input_dir.join(name);
        fs::write(&path, content).unwrap();
        path
    }

    pub fn write_output(&self, name: &str, content: &str) -> PathBuf {
        let path = self.settings.output_dir.join(name);
        fs::write(&path, content).unwrap();
        path
    }

    pub fn read_output(&self, name: &str) -> String {
        fs::read_to_string(self.settings.output_dir.join(name)).unwrap()
    }

    pub fn output_names(&self) -> Vec<String> {
        sorted_names(&self.settings.output_dir)
    }
}

/// Sorted file names directly inside `dir`
pub fn sorted_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

/// Console that replays scripted lines and records every prompt shown
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    lines: VecDeque<String>,
    pub prompts: Vec<String>,
}

impl ScriptedConsole {
    pub fn new(lines: &[&str]) -> Self {
        Self {
            lines: lines.iter().map(|s| s.to_string()).collect(),
            prompts: Vec::new(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl Console for ScriptedConsole {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        self.prompts.push(prompt.to_string());
        Ok(self.lines.pop_front())
    }
}

/// Column prompt that replays names and records rejections
#[derive(Debug, Default)]
pub struct ScriptedPrompt {
    answers: VecDeque<String>,
    pub asked: Vec<usize>,
    pub rejected: Vec<(usize, String)>,
    pub began: bool,
}

impl ScriptedPrompt {
    pub fn new(answers: &[&str]) -> Self {
        Self {
            answers: answers.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        }
    }
}

impl ColumnPrompt for ScriptedPrompt {
    fn begin(&mut self) {
        self.began = true;
    }

    fn ask(&mut self, index: usize) -> Result<Option<String>> {
        self.asked.push(index);
        Ok(self.answers.pop_front())
    }

    fn reject(&mut self, index: usize, name: &str) {
        self.rejected.push((index, name.to_string()));
    }
}
