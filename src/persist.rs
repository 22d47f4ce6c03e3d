//! The codec's external collaborators: symbol sources and sinks over
//! `Read`/`Write`, and packed-blob persistence with all-or-nothing writes.

use std::fs;
use std::io::{Read, Write};
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::HuffmanError;
use crate::model::{bytes_from_symbols, symbols_from_bytes, Symbol};

/// Drain a reader and validate every byte against the alphabet.
pub fn read_symbols<R: Read>(mut reader: R) -> Result<Vec<Symbol>, HuffmanError> {
    let mut raw = Vec::new();
    reader.read_to_end(&mut raw)?;
    symbols_from_bytes(&raw)
}

/// Append symbols to a sink exactly in the order given.
pub fn write_symbols<W: Write>(mut writer: W, symbols: &[Symbol]) -> Result<(), HuffmanError> {
    writer.write_all(&bytes_from_symbols(symbols))?;
    Ok(())
}

pub fn read_packed(path: &Path) -> Result<Vec<u8>, HuffmanError> {
    Ok(fs::read(path)?)
}

/// Write the packed blob through a temporary file in the destination
/// directory, renaming into place only once the full write has succeeded.
/// A failure leaves the destination untouched.
pub fn write_packed(path: &Path, bytes: &[u8]) -> Result<(), HuffmanError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut staged = NamedTempFile::new_in(dir)?;
    staged.write_all(bytes)?;
    staged.persist(path).map_err(|e| HuffmanError::Io(e.error))?;
    Ok(())
}
