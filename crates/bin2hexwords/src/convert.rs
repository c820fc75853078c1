use anyhow::{Context, Result};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::words;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Conversion {
    pub input_bytes: usize,
    pub padding: usize,
    pub words: usize,
}

pub fn convert(input: &Path, output: &Path) -> Result<Conversion> {
    let data = fs::read(input)
        .with_context(|| format!("failed to read input file {}", input.display()))?;
    let input_bytes = data.len();
    let padding = words::padding_len(input_bytes);
    tracing::debug!("Read {input_bytes} bytes from {}", input.display());

    let decoded = words::decode_words(&data);

    let file = File::create(output)
        .with_context(|| format!("failed to create output file {}", output.display()))?;
    let mut writer = BufWriter::new(file);
    words::write_words(&mut writer, &decoded)
        .and_then(|_| writer.flush())
        .with_context(|| format!("failed to write output file {}", output.display()))?;
    tracing::info!("Hex words written to {}", output.display());

    Ok(Conversion {
        input_bytes,
        padding,
        words: decoded.len(),
    })
}
