//! Writes a settings file into a temp dir and loads it back.

use cmsutil_core::config::{self, CmsSettings};
use std::fs;
use tempfile::TempDir;

pub fn load(body: &str) -> (TempDir, CmsSettings) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, body).unwrap();
    let settings = config::load_from(&path).unwrap();
    (dir, settings)
}
