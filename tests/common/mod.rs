//! Shared testing utilities for documentor tests.
#![allow(dead_code)]

use assert_cmd::Command;
use mockito::{Matcher, Mock, Server, ServerGuard};
use serde_json::json;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const MODEL: &str = "gemini-test";
pub const API_KEY: &str = "test-key";
pub const GENERATE_PATH: &str = "/models/gemini-test:generateContent";

/// Body patterns that tell the three request kinds apart.
pub const README_MARKER: &str = "Technical Writer|Технический Писатель";
pub const DISCOVERY_MARKER: &str = "responseSchema";
pub const DOCSTRING_MARKER: &str = "Google Python Style Guide";

/// Testing harness providing an isolated work directory and a mock Gemini API.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
    pub server: ServerGuard,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment with `documentor.toml` pointing at the mock server.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");

        let server = Server::new();
        let config = format!("[gemini]\napi_url = \"{}\"\nmodel = \"{}\"\n", server.url(), MODEL);
        fs::write(work_dir.join("documentor.toml"), config).expect("Failed to write config");

        Self { root, work_dir, server }
    }

    /// Path to the workspace directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Write a source file into the work directory and return its path.
    pub fn write_source(&self, name: &str, content: &str) -> PathBuf {
        let path = self.work_dir.join(name);
        fs::write(&path, content).expect("Failed to write source file");
        path
    }

    /// Build a command for invoking the compiled `documentor` binary with an API key set.
    pub fn cli(&self) -> Command {
        let mut cmd = self.cli_without_key();
        cmd.env("GEMINI_API_KEY", API_KEY);
        cmd
    }

    /// Build a command for invoking the compiled `documentor` binary with no API key.
    pub fn cli_without_key(&self) -> Command {
        let mut cmd = Command::cargo_bin("documentor").expect("Failed to locate documentor binary");
        cmd.current_dir(&self.work_dir)
            .env_remove("GEMINI_API_KEY")
            .env_remove("API_KEY")
            .env_remove("DOCUMENTOR_LOG")
            .env("LANG", "C");
        cmd
    }

    /// Answer README requests with `text`.
    pub fn mock_readme(&mut self, text: &str) -> Mock {
        self.mock_text(README_MARKER, text)
    }

    /// Answer discovery requests with a JSON array of `function_code` entries.
    pub fn mock_discovery(&mut self, functions: &[&str]) -> Mock {
        let entries: Vec<_> = functions.iter().map(|code| json!({ "function_code": code })).collect();
        self.mock_text(DISCOVERY_MARKER, &serde_json::Value::Array(entries).to_string())
    }

    /// Answer docstring requests with `text`.
    pub fn mock_docstring(&mut self, text: &str) -> Mock {
        self.mock_text(DOCSTRING_MARKER, text)
    }

    /// Answer requests whose body contains `marker` with a candidate holding `text`.
    pub fn mock_text(&mut self, marker: &str, text: &str) -> Mock {
        self.text_mock(marker, text).create()
    }

    /// Uncreated mock answering requests whose body contains `marker`.
    ///
    /// Mocks are removed from the server when dropped; keep the created value bound.
    pub fn text_mock(&mut self, marker: &str, text: &str) -> Mock {
        self.server
            .mock("POST", GENERATE_PATH)
            .match_header("x-goog-api-key", API_KEY)
            .match_body(Matcher::Regex(marker.to_string()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(candidate_body(text))
    }

    /// Fail requests whose body contains `marker` with `status`.
    pub fn mock_failure(&mut self, marker: &str, status: usize) -> Mock {
        self.server
            .mock("POST", GENERATE_PATH)
            .match_body(Matcher::Regex(marker.to_string()))
            .with_status(status)
            .with_body("upstream failure")
            .create()
    }

    /// Execute a closure after temporarily switching into the work directory.
    pub fn with_work_dir<F, R>(&self, action: F) -> R
    where
        F: FnOnce() -> R,
    {
        let original = env::current_dir().expect("Failed to capture current dir");
        env::set_current_dir(&self.work_dir).expect("Failed to switch current dir");
        let result = action();
        env::set_current_dir(original).expect("Failed to restore current dir");
        result
    }

    pub fn root(&self) -> &Path {
        self.root.path()
    }
}

/// Gemini response body with a single candidate.
pub fn candidate_body(text: &str) -> String {
    json!({
        "candidates": [{ "content": { "role": "model", "parts": [{ "text": text }] }, "finishReason": "STOP" }]
    })
    .to_string()
}
