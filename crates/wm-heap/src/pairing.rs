//! Pairing heap over an index arena.
//!
//! A single multi-way heap-ordered tree.  Each node holds its first
//! child and its next sibling, both as `u32` arena indices.  Insert is
//! one comparison (merge a singleton with the root); extract-min
//! detaches the root and recombines its children with the classic
//! two-pass pairing: pair-and-merge consecutive siblings left to right,
//! then merge the pairs right to left.
//!
//! As with the Fibonacci variant, extracted nodes remain in the arena
//! as detached garbage until [`MinQueue::clear`].

use crate::MinQueue;

const NIL: u32 = u32::MAX;

/// Min-heap as a multi-way tree with first-child / next-sibling links.
pub struct PairingHeap<V> {
    // ── Node arena ────────────────────────────────────────────────────────
    key: Vec<f64>,
    seq: Vec<u64>,
    value: Vec<V>,
    child: Vec<u32>,
    sibling: Vec<u32>,

    root: u32,
    live: usize,
    next_seq: u64,

    /// First-pass pair results, reused across extracts.
    pairs: Vec<u32>,
}

impl<V: Copy> PairingHeap<V> {
    #[inline(always)]
    fn precedes(&self, a: u32, b: u32) -> bool {
        let (a, b) = (a as usize, b as usize);
        self.key[a] < self.key[b]
            || (self.key[a] == self.key[b] && self.seq[a] < self.seq[b])
    }

    /// Merge two trees; the root with the larger `(key, seq)` becomes
    /// the first child of the other.
    fn merge(&mut self, a: u32, b: u32) -> u32 {
        if a == NIL {
            return b;
        }
        if b == NIL {
            return a;
        }
        let (winner, loser) = if self.precedes(a, b) { (a, b) } else { (b, a) };
        self.sibling[loser as usize] = self.child[winner as usize];
        self.child[winner as usize] = loser;
        winner
    }
}

impl<V: Copy> MinQueue<V> for PairingHeap<V> {
    fn new() -> Self {
        Self {
            key: Vec::new(),
            seq: Vec::new(),
            value: Vec::new(),
            child: Vec::new(),
            sibling: Vec::new(),
            root: NIL,
            live: 0,
            next_seq: 0,
            pairs: Vec::new(),
        }
    }

    fn insert(&mut self, key: f64, value: V) {
        let n = self.key.len() as u32;
        self.key.push(key);
        self.seq.push(self.next_seq);
        self.next_seq += 1;
        self.value.push(value);
        self.child.push(NIL);
        self.sibling.push(NIL);

        self.root = self.merge(self.root, n);
        self.live += 1;
    }

    fn extract_min(&mut self) -> Option<V> {
        if self.root == NIL {
            return None;
        }
        let z = self.root;
        let out = self.value[z as usize];

        // Pass 1: pair consecutive children left to right.
        let mut pairs = std::mem::take(&mut self.pairs);
        pairs.clear();
        let mut c = self.child[z as usize];
        self.child[z as usize] = NIL;
        while c != NIL {
            let a = c;
            let b = self.sibling[a as usize];
            if b == NIL {
                self.sibling[a as usize] = NIL;
                pairs.push(a);
                break;
            }
            let rest = self.sibling[b as usize];
            self.sibling[a as usize] = NIL;
            self.sibling[b as usize] = NIL;
            let merged = self.merge(a, b);
            pairs.push(merged);
            c = rest;
        }

        // Pass 2: merge the pairs right to left.
        let mut new_root = NIL;
        for &t in pairs.iter().rev() {
            new_root = self.merge(new_root, t);
        }
        self.pairs = pairs;

        self.root = new_root;
        self.live -= 1;
        Some(out)
    }

    fn peek_min_key(&self) -> f64 {
        if self.root == NIL {
            f64::INFINITY
        } else {
            self.key[self.root as usize]
        }
    }

    fn len(&self) -> usize {
        self.live
    }

    fn clear(&mut self) {
        self.key.clear();
        self.seq.clear();
        self.value.clear();
        self.child.clear();
        self.sibling.clear();
        self.root = NIL;
        self.live = 0;
        self.next_seq = 0;
    }
}
