//! Shared testing utilities for pake-config CLI tests.

#![allow(dead_code)]

use assert_cmd::Command;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const PAKE_JSON: &str = r#"{
  "windows": [
    {
      "url": "https://weread.qq.com",
      "hide_title_bar": true,
      "fullscreen": false,
      "width": 1200,
      "height": 780,
      "resizable": true
    }
  ],
  "user_agent": {
    "macos": "",
    "linux": "",
    "windows": ""
  },
  "system_tray": {
    "macos": false,
    "linux": true,
    "windows": true
  }
}"#;

pub const TAURI_JSON: &str = r#"{
  "productName": "WeRead",
  "identifier": "com.pake.weread",
  "version": "1.0.0",
  "app": {
    "withGlobalTauri": true
  },
  "build": {
    "frontendDist": "../dist"
  }
}"#;

pub const LINUX_JSON: &str = r#"{
  "productName": "com-pake-weread",
  "identifier": "com.pake.weread",
  "bundle": {
    "icon": ["png/weread_512.png"],
    "active": true,
    "targets": ["deb", "appimage"],
    "linux": {
      "deb": {
        "depends": ["curl", "wget"],
        "files": {
          "/usr/share/applications/com-pake-weread.desktop": "assets/com-pake-weread.desktop"
        }
      }
    }
  }
}"#;

pub const MACOS_JSON: &str = r#"{
  "productName": "WeRead",
  "identifier": "com.pake.weread",
  "bundle": {
    "icon": ["icons/weread.icns"],
    "active": true,
    "targets": ["dmg"]
  }
}"#;

pub const WINDOWS_JSON: &str = r#"{
  "productName": "WeRead",
  "identifier": "com.pake.weread",
  "bundle": {
    "icon": ["png/weread_256.ico", "png/weread_32.ico"],
    "active": true,
    "resources": ["png/weread_32.ico"],
    "targets": ["msi"]
  }
}"#;

/// Bytes of the default icons; not valid images, only distinct.
pub const DEFAULT_512_PNG: &[u8] = &[0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a, 5, 1, 2];
pub const DEFAULT_32_ICO: &[u8] = &[0x00, 0x00, 0x01, 0x00, 3, 2];
pub const DEFAULT_256_ICO: &[u8] = &[0x00, 0x00, 0x01, 0x00, 2, 5, 6];
pub const DEFAULT_ICNS: &[u8] = b"icns\x00\x00\x00\x08";

/// Required variables for the example app.
pub const APP_ENV: [(&str, &str); 4] =
    [("URL", "https://example.com"), ("NAME", "foo"), ("TITLE", "Foo App"), ("NAME_ZH", "富")];

const MANAGED_VARS: [&str; 7] =
    ["URL", "NAME", "TITLE", "NAME_ZH", "SHORT_NAME", "ICON", "RUST_LOG"];

/// Testing harness providing an isolated Pake project for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a project with the five configuration documents and default icons.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let ctx = Self { root };

        ctx.write("src-tauri/pake.json", PAKE_JSON);
        ctx.write("src-tauri/tauri.conf.json", TAURI_JSON);
        ctx.write("src-tauri/tauri.linux.conf.json", LINUX_JSON);
        ctx.write("src-tauri/tauri.macos.conf.json", MACOS_JSON);
        ctx.write("src-tauri/tauri.windows.conf.json", WINDOWS_JSON);
        ctx.write_bytes("src-tauri/png/icon_512.png", DEFAULT_512_PNG);
        ctx.write_bytes("src-tauri/png/icon_32.ico", DEFAULT_32_ICO);
        ctx.write_bytes("src-tauri/png/icon_256.ico", DEFAULT_256_ICO);
        ctx.write_bytes("src-tauri/icons/icon.icns", DEFAULT_ICNS);

        ctx
    }

    /// Project root used as the working directory for CLI invocations.
    pub fn project_dir(&self) -> &Path {
        self.root.path()
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.root.path().join(relative)
    }

    /// Build a command for the `pake-config` binary with no app parameters set.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("pake-config").expect("Failed to locate pake-config binary");
        cmd.current_dir(self.project_dir());
        for var in MANAGED_VARS {
            cmd.env_remove(var);
        }
        cmd
    }

    /// Build a command with the example app's required parameters set.
    pub fn cli_with_app_env(&self) -> Command {
        let mut cmd = self.cli();
        cmd.envs(APP_ENV);
        cmd
    }

    pub fn write(&self, relative: &str, content: &str) {
        self.write_bytes(relative, content.as_bytes());
    }

    pub fn write_bytes(&self, relative: &str, content: &[u8]) {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create fixture directory");
        }
        fs::write(&path, content).expect("Failed to write fixture file");
    }

    pub fn remove(&self, relative: &str) {
        fs::remove_file(self.path(relative)).expect("Failed to remove fixture file");
    }

    pub fn read(&self, relative: &str) -> String {
        fs::read_to_string(self.path(relative))
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", relative, e))
    }

    pub fn read_bytes(&self, relative: &str) -> Vec<u8> {
        fs::read(self.path(relative)).unwrap_or_else(|e| panic!("Failed to read {}: {}", relative, e))
    }

    pub fn read_json(&self, relative: &str) -> Value {
        serde_json::from_str(&self.read(relative))
            .unwrap_or_else(|e| panic!("{} is not valid JSON: {}", relative, e))
    }

    pub fn exists(&self, relative: &str) -> bool {
        self.path(relative).exists()
    }

    /// Every file under the project with its contents, keyed by relative path.
    pub fn snapshot(&self) -> BTreeMap<PathBuf, Vec<u8>> {
        fn collect(dir: &Path, base: &Path, out: &mut BTreeMap<PathBuf, Vec<u8>>) {
            for entry in fs::read_dir(dir).expect("Failed to read fixture dir") {
                let path = entry.expect("Failed to read dir entry").path();
                if path.is_dir() {
                    collect(&path, base, out);
                } else {
                    let relative = path.strip_prefix(base).expect("path under base").to_path_buf();
                    out.insert(relative, fs::read(&path).expect("Failed to read fixture"));
                }
            }
        }

        let mut files = BTreeMap::new();
        collect(self.project_dir(), self.project_dir(), &mut files);
        files
    }
}
