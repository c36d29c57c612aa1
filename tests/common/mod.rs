//! Shared fixtures for composer-dev-switch integration tests
//!
//! Each test builds a throwaway project with a root `composer.json` and
//! sibling package checkouts, then runs the real binary inside it.

use assert_cmd::cargo::cargo_bin_cmd;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temp directory holding `app/composer.json` and sibling checkouts.
pub struct Project {
    pub temp: TempDir,
}

impl Project {
    /// Creates `app/composer.json` with the given content.
    pub fn new(root_manifest: &str) -> Self {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("app")).unwrap();
        fs::write(temp.path().join("app/composer.json"), root_manifest).unwrap();
        Self { temp }
    }

    pub fn app_dir(&self) -> PathBuf {
        self.temp.path().join("app")
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.app_dir().join("composer.json")
    }

    /// Creates a sibling checkout `<dir>/composer.json` declaring `name`.
    #[allow(unused)]
    pub fn package(&self, dir: &str, name: &str) -> &Self {
        let path = self.temp.path().join(dir);
        fs::create_dir_all(&path).unwrap();
        fs::write(
            path.join("composer.json"),
            format!("{{\n    \"name\": \"{}\",\n    \"type\": \"library\"\n}}\n", name),
        )
        .unwrap();
        self
    }

    pub fn root_raw(&self) -> String {
        fs::read_to_string(self.manifest_path()).unwrap()
    }

    #[allow(unused)]
    pub fn root_json(&self) -> Value {
        serde_json::from_str(&self.root_raw()).unwrap()
    }
}

/// Root manifest in Composer's usual layout.
#[allow(unused)]
pub const APP_MANIFEST: &str = r#"{
    "name": "acme/app",
    "type": "project",
    "require": {
        "php": ">=8.1",
        "acme/lib": "^1.0"
    },
    "require-dev": {
        "acme/testing": "^2.0"
    },
    "repositories": [
        {
            "type": "vcs",
            "url": "https://github.com/acme/fork.git"
        }
    ]
}
"#;

/// Runs the binary in `dir` with `args`.
pub fn run_switch(dir: &Path, args: &[&str]) -> assert_cmd::assert::Assert {
    let mut cmd = cargo_bin_cmd!("composer-dev-switch");
    cmd.args(args).current_dir(dir).env("NO_COLOR", "1");

    cmd.assert()
}

/// `url` values of every `repositories` entry, in order.
#[allow(unused)]
pub fn repository_urls(manifest: &Value) -> Vec<String> {
    manifest["repositories"]
        .as_array()
        .map(|repos| {
            repos
                .iter()
                .map(|r| r["url"].as_str().unwrap_or_default().to_string())
                .collect()
        })
        .unwrap_or_default()
}
