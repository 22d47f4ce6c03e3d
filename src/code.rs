use bitvec::prelude::*;

use crate::model::{Symbol, ALPHABET_SIZE};
use crate::tree::{HuffmanTree, Node};

/// Per-symbol bit paths derived from one coding tree. Symbols the model
/// never observed have no entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeTable {
    codes: Vec<Option<BitVec<u8, Msb0>>>,
}

impl CodeTable {
    /// Depth-first walk accumulating the path: 0 descends left, 1 right.
    pub fn from_tree(tree: &HuffmanTree) -> Self {
        let mut codes = vec![None; ALPHABET_SIZE];
        let mut path = BitVec::new();
        Self::walk(tree.root(), &mut path, &mut codes);
        CodeTable { codes }
    }

    fn walk(node: &Node, path: &mut BitVec<u8, Msb0>, codes: &mut [Option<BitVec<u8, Msb0>>]) {
        match node {
            Node::Leaf { symbol, .. } => codes[symbol.index()] = Some(path.clone()),
            Node::Internal { left, right, .. } => {
                path.push(false);
                Self::walk(left, path, codes);
                path.pop();
                path.push(true);
                Self::walk(right, path, codes);
                path.pop();
            }
        }
    }

    pub fn code(&self, symbol: Symbol) -> Option<&BitSlice<u8, Msb0>> {
        self.codes[symbol.index()].as_deref()
    }

    /// Symbols that have a code, in alphabet order.
    pub fn iter(&self) -> impl Iterator<Item = (Symbol, &BitSlice<u8, Msb0>)> {
        self.codes.iter().enumerate().filter_map(|(index, code)| {
            let bits = code.as_deref()?;
            let symbol = Symbol::new(index as u8).ok()?;
            Some((symbol, bits))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FrequencyModel;

    fn table_for(input: &[u8]) -> CodeTable {
        let model = FrequencyModel::from_bytes(input).unwrap();
        let tree = HuffmanTree::from_model(&model).unwrap();
        CodeTable::from_tree(&tree)
    }

    fn code_str(table: &CodeTable, byte: u8) -> String {
        let symbol = Symbol::new(byte).unwrap();
        table
            .code(symbol)
            .unwrap()
            .iter()
            .by_vals()
            .map(|bit| if bit { '1' } else { '0' })
            .collect()
    }

    #[test]
    fn abacabad_gets_the_expected_assignment() {
        // a: 4/8, b: 2/8, c and d: 1/8 each; the equal-probability pair is
        // tie-broken by symbol value
        let table = table_for(b"abacabad");
        assert_eq!(code_str(&table, b'a'), "1");
        assert_eq!(code_str(&table, b'b'), "01");
        assert_eq!(code_str(&table, b'c'), "000");
        assert_eq!(code_str(&table, b'd'), "001");
    }

    #[test]
    fn unseen_symbols_have_no_code() {
        let table = table_for(b"abacabad");
        assert!(table.code(Symbol::new(b'z').unwrap()).is_none());
    }

    #[test]
    fn lone_symbol_still_gets_a_one_bit_code() {
        let table = table_for(b"aaaa");
        assert_eq!(code_str(&table, b'a'), "1");
        assert_eq!(table.iter().count(), 2);
    }

    #[test]
    fn codes_are_prefix_free() {
        let table = table_for(b"the quick brown fox jumps over the lazy dog");
        let codes: Vec<_> = table.iter().collect();
        for (i, (_, a)) in codes.iter().enumerate() {
            for (j, (_, b)) in codes.iter().enumerate() {
                if i != j {
                    assert!(!a.starts_with(b), "{:?} is a prefix of {:?}", b, a);
                }
            }
        }
    }

    #[test]
    fn identical_inputs_produce_identical_tables() {
        assert_eq!(table_for(b"abacabad"), table_for(b"abacabad"));
    }
}
