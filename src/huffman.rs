use std::collections::hash_map::Entry;
use std::collections::{HashMap, VecDeque};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SymbolFreq {
    pub symbol: char,
    pub frequency: u32,
}

#[derive(Debug, PartialEq, Eq)]
enum NodeKind {
    Leaf(char),
    Internal(Box<Node>, Box<Node>),
}

#[derive(Debug, PartialEq, Eq)]
pub struct Node {
    kind: NodeKind,
    freq: u32,
}

impl Node {
    fn new_leaf(symbol: char, freq: u32) -> Self {
        Node {
            kind: NodeKind::Leaf(symbol),
            freq,
        }
    }

    fn merge(left: Node, right: Node) -> Self {
        Node {
            freq: left.freq + right.freq,
            kind: NodeKind::Internal(Box::new(left), Box::new(right)),
        }
    }
}

pub type CodeTable = HashMap<char, String>;

pub fn sorted_frequencies(text: &str) -> Vec<SymbolFreq> {
    let mut counts: HashMap<char, u32> = HashMap::new();
    let mut seen: Vec<char> = Vec::new();
    for symbol in text.chars() {
        match counts.entry(symbol) {
            Entry::Vacant(slot) => {
                slot.insert(1);
                seen.push(symbol);
            }
            Entry::Occupied(mut slot) => *slot.get_mut() += 1,
        }
    }

    let mut frequencies: Vec<SymbolFreq> = seen
        .into_iter()
        .map(|symbol| SymbolFreq {
            symbol,
            frequency: counts[&symbol],
        })
        .collect();

    // Stable sort: symbols with equal counts keep first-occurrence order
    frequencies.sort_by_key(|entry| entry.frequency);
    frequencies
}

pub fn build_tree(sorted: Vec<SymbolFreq>) -> Option<Node> {
    let mut nodes: VecDeque<Node> = sorted
        .into_iter()
        .map(|entry| Node::new_leaf(entry.symbol, entry.frequency))
        .collect();

    while nodes.len() > 1 {
        let left = nodes.pop_front().expect("checked with while loop condition");
        let right = nodes.pop_front().expect("checked with while loop condition");

        let merge = Node::merge(left, right);

        // The merged node goes in front of nodes of equal frequency; this
        // tie-break fixes the tree shape and therefore the code lengths.
        let at = nodes.partition_point(|node| node.freq < merge.freq);
        nodes.insert(at, merge);
    }

    nodes.pop_front()
}

pub fn code_table(root: Option<&Node>) -> CodeTable {
    let mut table = CodeTable::new();
    if let Some(root) = root {
        fill(root, String::new(), &mut table);
    }
    table
}

fn fill(node: &Node, prefix: String, table: &mut CodeTable) {
    match &node.kind {
        NodeKind::Leaf(symbol) => {
            // A root that is also a leaf (single-symbol input) has an empty
            // path, yet must not get an empty code.
            let code = if prefix.is_empty() {
                "0".to_string()
            } else {
                prefix
            };
            table.insert(*symbol, code);
        }
        NodeKind::Internal(left, right) => {
            fill(left, format!("{}0", prefix), table);
            fill(right, format!("{}1", prefix), table);
        }
    }
}
