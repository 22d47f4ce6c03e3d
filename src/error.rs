use std::io;

use thiserror::Error;

use crate::model::Symbol;

/// Everything that can go wrong across the pipeline.
///
/// Variants fall into four families: model construction (`EmptyInput`,
/// `TooFewLeaves`), encoding (`SymbolNotInModel`), packed-format parsing
/// (`SymbolOutOfRange`, `EmptyBuffer`, `MissingPaddingMarker`,
/// `TruncatedStream`), and I/O propagated from the surrounding file
/// collaborators without interpretation.
#[derive(Debug, Error)]
pub enum HuffmanError {
    #[error("no input symbols")]
    EmptyInput,

    #[error("frequency model yielded {0} leaves, tree construction needs two")]
    TooFewLeaves(usize),

    #[error("symbol '{0}' has no code in the model")]
    SymbolNotInModel(Symbol),

    #[error("byte {0:#04x} is outside the 128-symbol alphabet")]
    SymbolOutOfRange(u8),

    #[error("packed buffer is empty")]
    EmptyBuffer,

    #[error("no padding marker in the first byte of the packed buffer")]
    MissingPaddingMarker,

    #[error("bit stream ended in the middle of a code")]
    TruncatedStream,

    #[error(transparent)]
    Io(#[from] io::Error),
}
