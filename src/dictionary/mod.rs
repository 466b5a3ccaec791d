// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Dictionary trie with sorted sibling chains.
//!
//! The dictionary is a multi-way prefix tree stored in an arena of nodes
//! indexed by [`NodeId`] handles. Each node carries one letter, a `child`
//! link to the first letter of the next depth, and a `sibling` link to the
//! next letter at the same depth. Sibling chains are kept strictly sorted
//! by letter value, which lets lookup stop scanning a chain as soon as a
//! sibling's letter exceeds the query letter.
//!
//! For the words `aa`, `aah`, `aal` the tree looks like (`.` marks a
//! terminal node, `->` a child link, `|` a sibling link):
//!
//! ```text
//! root -> a -> a. -> h.
//!                    |
//!                    l.
//! ```
//!
//! The dictionary is built once by incremental insertion and is read-only
//! for the rest of the program's life. Final shape does not depend on
//! insertion order because of the sorted-sibling invariant.

pub mod errors;
pub mod reader;

pub use errors::BuildError;
pub use reader::{WordReader, MAX_WORD_LEN};

use std::io::Read;
use strum_macros::EnumCount as EnumCountMacro;

/// Handle to a node in the dictionary arena.
///
/// Newtype wrapper so node handles cannot be mixed with other indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeId(u32);

impl NodeId {
    fn index(self) -> usize {
        self.0 as usize
    }
}

/// One letter at one depth of the dictionary.
#[derive(Debug)]
struct TrieNode {
    /// The letter this node represents.
    letter: u8,

    /// True if the path from the root to this node spells a complete word.
    terminal: bool,

    /// First letter of the next depth (letters following this one).
    child: Option<NodeId>,

    /// Next letter at the same depth, strictly greater than `letter`.
    sibling: Option<NodeId>,
}

/// Result of a dictionary lookup.
///
/// The trinary result is essential: `PrefixFound` drives search pruning
/// independently from word emission. A boolean "is word" query could not
/// tell a dead branch from a live prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumCountMacro)]
#[repr(u8)]
pub enum LookupResult {
    /// No stored word starts with the queried string.
    NotFound,

    /// The queried string is a proper prefix of at least one stored word,
    /// but is not itself a word.
    PrefixFound,

    /// The queried string is a stored word.
    WordFound,
}

/// Where the head link of a sibling chain lives.
///
/// Insertion needs to splice nodes into chains whose head may be the tree
/// root, a parent's child link, or a predecessor's sibling link; this enum
/// names the three cases so one splice routine covers all of them.
#[derive(Debug, Clone, Copy)]
enum ChainSlot {
    Root,
    ChildOf(NodeId),
    SiblingOf(NodeId),
}

/// A dictionary of words supporting exact-word and prefix-existence queries.
#[derive(Debug, Default)]
pub struct Dictionary {
    /// Arena of all nodes; never shrinks while the dictionary is alive.
    nodes: Vec<TrieNode>,

    /// Entry point to the depth-0 chain (first letters of all words).
    /// The root is not itself a letter.
    root: Option<NodeId>,

    /// Number of words inserted (duplicates included).
    word_count: usize,
}

impl Dictionary {
    /// Create an empty dictionary with zero allocated nodes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of words inserted so far.
    pub fn word_count(&self) -> usize {
        self.word_count
    }

    /// Number of nodes allocated so far.
    ///
    /// Every node participates in at least one stored word's prefix, so
    /// this equals the count [`teardown`](Self::teardown) must report.
    pub fn allocated_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// Build a dictionary by draining a word-list reader.
    ///
    /// Consumes words until the reader signals end of input. The first
    /// reader or insertion error aborts the build.
    pub fn build_from_reader<R: Read>(
        reader: &mut WordReader<R>,
    ) -> Result<Dictionary, BuildError> {
        let mut dict = Dictionary::new();
        while let Some(word) = reader.next_word()? {
            dict.insert(&word)?;
        }
        log::debug!(
            "dictionary built: {} words, {} nodes",
            dict.word_count,
            dict.nodes.len()
        );
        Ok(dict)
    }

    /// Insert one word, extending the tree one letter at a time.
    ///
    /// Inserting a word that is already present allocates no nodes and only
    /// (re)confirms the final node's terminal flag.
    ///
    /// On `OutOfMemory` the dictionary is left in its partially-built state;
    /// the caller must discard it (or tear it down), not reuse it.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if `word` is empty.
    pub fn insert(&mut self, word: &str) -> Result<(), BuildError> {
        let letters = word.as_bytes();
        debug_assert!(!letters.is_empty(), "cannot insert an empty word");

        let mut slot = ChainSlot::Root;
        for (i, &letter) in letters.iter().enumerate() {
            let id = self.find_or_splice(slot, letter)?;
            if i == letters.len() - 1 {
                self.nodes[id.index()].terminal = true;
            }
            slot = ChainSlot::ChildOf(id);
        }
        self.word_count += 1;
        Ok(())
    }

    /// Query the dictionary with a candidate string.
    ///
    /// Walks the tree depth by depth. At each depth the sibling chain is
    /// scanned in ascending letter order until the query letter is matched,
    /// exceeded (`NotFound`, no later sibling can match), or the chain is
    /// exhausted (`NotFound`).
    ///
    /// # Panics
    ///
    /// Panics in debug builds if `prefix` is empty.
    pub fn lookup(&self, prefix: &str) -> LookupResult {
        debug_assert!(!prefix.is_empty(), "cannot look up an empty string");

        let mut head = self.root;
        let mut terminal = false;
        for &letter in prefix.as_bytes() {
            let mut found = None;
            let mut cursor = head;
            while let Some(id) = cursor {
                let node = &self.nodes[id.index()];
                if node.letter == letter {
                    found = Some(node);
                    break;
                }
                if node.letter > letter {
                    // Siblings are sorted; no match can exist beyond here.
                    return LookupResult::NotFound;
                }
                cursor = node.sibling;
            }
            match found {
                None => return LookupResult::NotFound,
                Some(node) => {
                    terminal = node.terminal;
                    head = node.child;
                }
            }
        }

        if terminal {
            LookupResult::WordFound
        } else {
            LookupResult::PrefixFound
        }
    }

    /// Release the dictionary, returning the number of nodes visited.
    ///
    /// Walks every node exactly once using an explicit work-list rather
    /// than recursion, so very deep or very wide dictionaries cannot
    /// overflow the stack. The returned count can be verified against
    /// [`allocated_nodes`](Self::allocated_nodes).
    pub fn teardown(self) -> usize {
        let mut released = 0;
        let mut work = Vec::new();
        if let Some(root) = self.root {
            work.push(root);
        }
        while let Some(id) = work.pop() {
            let node = &self.nodes[id.index()];
            if let Some(child) = node.child {
                work.push(child);
            }
            if let Some(sibling) = node.sibling {
                work.push(sibling);
            }
            released += 1;
        }
        released
    }

    /// Find `letter` in the sibling chain headed at `slot`, splicing in a
    /// new node at the sorted position if it is absent.
    fn find_or_splice(&mut self, slot: ChainSlot, letter: u8) -> Result<NodeId, BuildError> {
        let mut at = slot;
        loop {
            match self.chain_head(at) {
                None => {
                    // Chain exhausted (or empty): append at the end.
                    let id = self.alloc(letter)?;
                    self.set_chain_head(at, id);
                    return Ok(id);
                }
                Some(cur) => {
                    let cur_letter = self.nodes[cur.index()].letter;
                    if cur_letter == letter {
                        // Already present at this depth: merge.
                        return Ok(cur);
                    }
                    if cur_letter > letter {
                        // Splice before the first greater sibling.
                        let id = self.alloc(letter)?;
                        self.nodes[id.index()].sibling = Some(cur);
                        self.set_chain_head(at, id);
                        return Ok(id);
                    }
                    at = ChainSlot::SiblingOf(cur);
                }
            }
        }
    }

    fn chain_head(&self, slot: ChainSlot) -> Option<NodeId> {
        match slot {
            ChainSlot::Root => self.root,
            ChainSlot::ChildOf(id) => self.nodes[id.index()].child,
            ChainSlot::SiblingOf(id) => self.nodes[id.index()].sibling,
        }
    }

    fn set_chain_head(&mut self, slot: ChainSlot, head: NodeId) {
        match slot {
            ChainSlot::Root => self.root = Some(head),
            ChainSlot::ChildOf(id) => self.nodes[id.index()].child = Some(head),
            ChainSlot::SiblingOf(id) => self.nodes[id.index()].sibling = Some(head),
        }
    }

    /// Allocate one node, reporting allocation failure instead of aborting.
    fn alloc(&mut self, letter: u8) -> Result<NodeId, BuildError> {
        self.nodes
            .try_reserve(1)
            .map_err(|_| BuildError::OutOfMemory)?;
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(TrieNode {
            letter,
            terminal: false,
            child: None,
            sibling: None,
        });
        Ok(id)
    }

    /// Letters of the depth-0 sibling chain, in chain order (tests only).
    #[cfg(test)]
    fn first_letters(&self) -> Vec<u8> {
        let mut letters = Vec::new();
        let mut cursor = self.root;
        while let Some(id) = cursor {
            let node = &self.nodes[id.index()];
            letters.push(node.letter);
            cursor = node.sibling;
        }
        letters
    }
}
