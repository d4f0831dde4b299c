//! `cmsutil levelize <path>` – print each level of a path.

use anyhow::Result;
use cmsutil_core::urlutils::levelize_path;

pub fn run_levelize(path: &str) -> Result<()> {
    for level in levelize_path(path)? {
        println!("{level}");
    }
    Ok(())
}
