//! # huffpack
//!
//! Huffman coding for 7-bit text.
//!
//! Builds a prefix-free binary code from the observed character-frequency
//! distribution of an input, compresses the input with it, and
//! reconstructs the original exactly. Frequency analysis, two-queue tree
//! construction and code-table derivation run once per input; encode and
//! decode are then independent consumers of the resulting table and tree.
//!
//! ## Quick Start
//!
//! ```rust
//! use huffpack::HuffmanCodec;
//!
//! let codec = HuffmanCodec::from_bytes(b"abacabad")?;
//! let packed = codec.encode_bytes(b"abacabad")?;
//! assert!(packed.len() < b"abacabad".len());
//! assert_eq!(codec.decode_bytes(&packed)?, b"abacabad");
//! # Ok::<(), huffpack::HuffmanError>(())
//! ```

pub mod bits;
pub mod code;
pub mod codec;
pub mod error;
pub mod model;
pub mod persist;
pub mod tree;

// Re-export the main types for convenience
pub use code::CodeTable;
pub use codec::HuffmanCodec;
pub use error::HuffmanError;
pub use model::{FrequencyModel, Symbol, SymbolFrequency, ALPHABET_SIZE};
pub use tree::HuffmanTree;
