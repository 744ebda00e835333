#![allow(non_snake_case)]

use std::io::Write;
use std::path::{Path, PathBuf};

use log::debug;

use crate::error::GenError;
use crate::load::{load, DEFAULT_INPUT};
use crate::palette::{deriveIdentifier, ColorRecord};
use crate::render::{renderArray, renderEnum};

pub struct Generator {
    input: PathBuf,
}

impl Generator {
    pub fn new(input: &Path) -> Self {
        Generator {
            input: input.to_path_buf(),
        }
    }

    /// Loads the color list and writes both blocks to `out`.
    /// Nothing is written unless loading and rendering both succeed.
    pub fn run<W: Write>(&self, out: &mut W) -> Result<(), GenError> {
        let records = load(&self.input)?;
        let source = generate(&records);
        out.write_all(source.as_bytes())?;
        out.flush()?;
        Ok(())
    }
}

impl Default for Generator {
    fn default() -> Self {
        Generator::new(Path::new(DEFAULT_INPUT))
    }
}

/// Renders the enum block followed by the array block.
pub fn generate(records: &[ColorRecord]) -> String {
    let identifiers: Vec<String> = records.iter().map(deriveIdentifier).collect();
    debug!("derived {} identifiers", identifiers.len());

    let mut source = renderEnum(&identifiers);
    source.push_str(&renderArray(records));
    source
}
