use crate::bits::{self, BitBuffer};
use crate::code::CodeTable;
use crate::error::HuffmanError;
use crate::model::{bytes_from_symbols, symbols_from_bytes, FrequencyModel, Symbol};
use crate::tree::{HuffmanTree, Node};

/// Ties the pipeline together: the tree built from one input's frequency
/// distribution plus the code table derived from it. Encode and decode are
/// independent consumers of the pair.
pub struct HuffmanCodec {
    tree: HuffmanTree,
    table: CodeTable,
}

impl HuffmanCodec {
    pub fn new(tree: HuffmanTree) -> Self {
        let table = CodeTable::from_tree(&tree);
        HuffmanCodec { tree, table }
    }

    /// Run the model -> tree -> table pipeline over one symbol sequence.
    pub fn from_symbols(symbols: &[Symbol]) -> Result<Self, HuffmanError> {
        let model = FrequencyModel::scan(symbols.iter().copied())?;
        let tree = HuffmanTree::from_model(&model)?;
        Ok(Self::new(tree))
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, HuffmanError> {
        Self::from_symbols(&symbols_from_bytes(bytes)?)
    }

    pub fn tree(&self) -> &HuffmanTree {
        &self.tree
    }

    pub fn table(&self) -> &CodeTable {
        &self.table
    }

    /// Concatenate each symbol's code in input order and pack the result.
    ///
    /// A symbol without a code means the input does not match the model the
    /// codec was built from; nothing is emitted in that case.
    pub fn encode(&self, symbols: &[Symbol]) -> Result<Vec<u8>, HuffmanError> {
        let mut payload = BitBuffer::new();
        for &symbol in symbols {
            let code = self
                .table
                .code(symbol)
                .ok_or(HuffmanError::SymbolNotInModel(symbol))?;
            payload.extend_from_bitslice(code);
        }
        let packed = bits::pack(&payload);
        log::debug!(
            "encoded {} symbols into {} bytes ({} payload bits)",
            symbols.len(),
            packed.len(),
            payload.len()
        );
        Ok(packed)
    }

    /// Walk the tree over the unpacked bit sequence.
    ///
    /// A leaf reached just before a bit is consumed emits its symbol first;
    /// that same bit then starts the next descent from the root. The final
    /// bit necessarily lands on a leaf, which is emitted once more after
    /// the sequence runs out. Ending anywhere else means the stream was cut
    /// off mid-code.
    pub fn decode(&self, bytes: &[u8]) -> Result<Vec<Symbol>, HuffmanError> {
        let payload = bits::unpack(bytes)?;
        let mut symbols = Vec::new();
        let mut node = self.tree.root();
        for bit in payload.iter().by_vals() {
            if let Node::Leaf { symbol, .. } = node {
                symbols.push(*symbol);
                node = self.tree.root();
            }
            node = node.child(bit).ok_or(HuffmanError::TruncatedStream)?;
        }
        match node {
            Node::Leaf { symbol, .. } => symbols.push(*symbol),
            Node::Internal { .. } => return Err(HuffmanError::TruncatedStream),
        }
        log::debug!("decoded {} bytes into {} symbols", bytes.len(), symbols.len());
        Ok(symbols)
    }

    pub fn encode_bytes(&self, bytes: &[u8]) -> Result<Vec<u8>, HuffmanError> {
        self.encode(&symbols_from_bytes(bytes)?)
    }

    pub fn decode_bytes(&self, bytes: &[u8]) -> Result<Vec<u8>, HuffmanError> {
        Ok(bytes_from_symbols(&self.decode(bytes)?))
    }
}
