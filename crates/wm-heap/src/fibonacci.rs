//! Fibonacci heap over an index arena.
//!
//! # Representation
//!
//! Nodes live in flat parallel vectors indexed by `u32` — no boxed
//! per-node allocations and no reference cycles to reason about, even
//! though the root and child lists are circular and doubly linked.  The
//! list invariant: `next`/`prev` indices always stay inside the arena
//! and form a cycle within each sibling list.
//!
//! Extracted nodes stay in the arena as detached garbage until
//! [`MinQueue::clear`]; arena growth between clears is bounded by the
//! number of inserts, which is what the router's reuse pattern wants.
//!
//! Since `decrease_key` is not part of the capability set, trees only
//! form through consolidation links and stay binomial: the maximum
//! degree is `⌊log₂ n⌋`, which sizes the consolidation table.

use crate::MinQueue;

const NIL: u32 = u32::MAX;

/// Min-heap as a circular root list of heap-ordered trees with a
/// minimum pointer, consolidated by degree on extract-min.
pub struct FibonacciHeap<V> {
    // ── Node arena (parallel vectors, one slot per insert) ────────────────
    key: Vec<f64>,
    seq: Vec<u64>,
    value: Vec<V>,
    degree: Vec<u32>,
    parent: Vec<u32>,
    child: Vec<u32>,
    next: Vec<u32>,
    prev: Vec<u32>,

    /// Root with the least `(key, seq)`, or `NIL` when empty.
    min: u32,
    /// Live entry count (arena slots minus detached garbage).
    live: usize,
    next_seq: u64,

    // ── Consolidation scratch (reused across extracts) ────────────────────
    roots: Vec<u32>,
    by_degree: Vec<u32>,
}

impl<V: Copy> FibonacciHeap<V> {
    #[inline(always)]
    fn precedes(&self, a: u32, b: u32) -> bool {
        let (a, b) = (a as usize, b as usize);
        self.key[a] < self.key[b]
            || (self.key[a] == self.key[b] && self.seq[a] < self.seq[b])
    }

    /// Splice `n` into the circular list right after `at`.
    #[inline]
    fn splice_after(&mut self, at: u32, n: u32) {
        let after = self.next[at as usize];
        self.next[at as usize] = n;
        self.prev[n as usize] = at;
        self.next[n as usize] = after;
        self.prev[after as usize] = n;
    }

    /// Make `loser` a child of `winner` during consolidation.
    fn link(&mut self, loser: u32, winner: u32) {
        self.parent[loser as usize] = winner;
        let c = self.child[winner as usize];
        if c == NIL {
            self.child[winner as usize] = loser;
            self.next[loser as usize] = loser;
            self.prev[loser as usize] = loser;
        } else {
            self.splice_after(c, loser);
        }
        self.degree[winner as usize] += 1;
    }

    /// Merge roots of equal degree until at most one root per degree
    /// remains, then rebuild the root list and minimum pointer.
    fn consolidate(&mut self, start: u32) {
        // One table slot per possible degree (trees are binomial here).
        let table_len = self.live.ilog2() as usize + 2;
        self.by_degree.clear();
        self.by_degree.resize(table_len, NIL);

        // Snapshot the root list first; linking rewires it as we go.
        self.roots.clear();
        let mut r = start;
        loop {
            self.roots.push(r);
            r = self.next[r as usize];
            if r == start {
                break;
            }
        }

        let roots = std::mem::take(&mut self.roots);
        for &w in &roots {
            let mut x = w;
            let mut d = self.degree[x as usize] as usize;
            while self.by_degree[d] != NIL {
                let mut y = self.by_degree[d];
                if self.precedes(y, x) {
                    std::mem::swap(&mut x, &mut y);
                }
                self.link(y, x);
                self.by_degree[d] = NIL;
                d = self.degree[x as usize] as usize;
            }
            self.by_degree[d] = x;
        }
        self.roots = roots;

        // Rebuild the root list from the surviving trees.
        self.min = NIL;
        for i in 0..self.by_degree.len() {
            let t = self.by_degree[i];
            if t == NIL {
                continue;
            }
            self.parent[t as usize] = NIL;
            if self.min == NIL {
                self.next[t as usize] = t;
                self.prev[t as usize] = t;
                self.min = t;
            } else {
                self.splice_after(self.min, t);
                if self.precedes(t, self.min) {
                    self.min = t;
                }
            }
        }
    }
}

impl<V: Copy> MinQueue<V> for FibonacciHeap<V> {
    fn new() -> Self {
        Self {
            key: Vec::new(),
            seq: Vec::new(),
            value: Vec::new(),
            degree: Vec::new(),
            parent: Vec::new(),
            child: Vec::new(),
            next: Vec::new(),
            prev: Vec::new(),
            min: NIL,
            live: 0,
            next_seq: 0,
            roots: Vec::new(),
            by_degree: Vec::new(),
        }
    }

    fn insert(&mut self, key: f64, value: V) {
        let n = self.key.len() as u32;
        self.key.push(key);
        self.seq.push(self.next_seq);
        self.next_seq += 1;
        self.value.push(value);
        self.degree.push(0);
        self.parent.push(NIL);
        self.child.push(NIL);
        self.next.push(n);
        self.prev.push(n);

        if self.min == NIL {
            self.min = n;
        } else {
            self.splice_after(self.min, n);
            if self.precedes(n, self.min) {
                self.min = n;
            }
        }
        self.live += 1;
    }

    fn extract_min(&mut self) -> Option<V> {
        if self.min == NIL {
            return None;
        }
        let z = self.min;
        let out = self.value[z as usize];

        // Promote z's children to the root list.
        let first_child = self.child[z as usize];
        if first_child != NIL {
            self.roots.clear();
            let mut c = first_child;
            loop {
                self.roots.push(c);
                c = self.next[c as usize];
                if c == first_child {
                    break;
                }
            }
            let promoted = std::mem::take(&mut self.roots);
            for &c in &promoted {
                self.parent[c as usize] = NIL;
                self.splice_after(z, c);
            }
            self.roots = promoted;
            self.child[z as usize] = NIL;
            self.degree[z as usize] = 0;
        }

        // Unlink z; its arena slot becomes detached garbage.
        let zn = self.next[z as usize];
        let zp = self.prev[z as usize];
        self.next[zp as usize] = zn;
        self.prev[zn as usize] = zp;
        self.live -= 1;

        if zn == z {
            self.min = NIL;
        } else {
            self.consolidate(zn);
        }
        Some(out)
    }

    fn peek_min_key(&self) -> f64 {
        if self.min == NIL {
            f64::INFINITY
        } else {
            self.key[self.min as usize]
        }
    }

    fn len(&self) -> usize {
        self.live
    }

    fn clear(&mut self) {
        self.key.clear();
        self.seq.clear();
        self.value.clear();
        self.degree.clear();
        self.parent.clear();
        self.child.clear();
        self.next.clear();
        self.prev.clear();
        self.min = NIL;
        self.live = 0;
        self.next_seq = 0;
    }
}
