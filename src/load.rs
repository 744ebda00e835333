#![allow(non_snake_case)]

use std::fs;
use std::io;
use std::path::Path;

use log::{debug, info};

use crate::error::GenError;
use crate::palette::ColorRecord;

/// Relative path of the color list when none is given.
pub const DEFAULT_INPUT: &str = "colors.json";

/// Reads the color list at `path`. The file is closed before parsing starts.
pub fn load(path: &Path) -> Result<Vec<ColorRecord>, GenError> {
    let colorFile = fs::read(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => GenError::InputNotFound(path.to_path_buf()),
        _ => GenError::Io(e),
    })?;
    debug!("read {} bytes from {}", colorFile.len(), path.display());

    let records = parse(&colorFile)?;
    info!("loaded {} colors from {}", records.len(), path.display());
    Ok(records)
}

pub fn parse(data: &[u8]) -> Result<Vec<ColorRecord>, GenError> {
    Ok(serde_json::from_slice(data)?)
}
