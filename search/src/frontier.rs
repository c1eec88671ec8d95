//! A* open set keyed by state fingerprint.
//!
//! The heap may hold superseded entries for a fingerprint whose cost was
//! later improved; `open` records the one live `g_cost` per fingerprint and
//! `pop` discards the rest. Maps are `BTreeMap` (not `HashMap`) for
//! deterministic iteration at serialization boundaries.

use std::cmp::Reverse;
use std::collections::{BTreeMap, BinaryHeap};

use crate::node::{FrontierKey, SearchNode};

/// A frontier entry wrapping a node with its ordering key.
///
/// `BinaryHeap` is a max-heap, so we use `Reverse<FrontierKey>` to get
/// min-heap behavior (lowest `f_cost` first).
#[derive(Debug)]
struct FrontierEntry<S> {
    key: Reverse<FrontierKey>,
    node: SearchNode<S>,
}

impl<S> PartialEq for FrontierEntry<S> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl<S> Eq for FrontierEntry<S> {}

impl<S> PartialOrd for FrontierEntry<S> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<S> Ord for FrontierEntry<S> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.key.cmp(&other.key)
    }
}

/// What [`AStarFrontier::offer`] did with a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OfferOutcome {
    /// First time this fingerprint was seen.
    Opened,
    /// Fingerprint seen before; the new path is cheaper and replaces it.
    Improved,
    /// Fingerprint seen before at equal or lower cost; node discarded.
    Suppressed,
}

/// A* frontier manager.
///
/// Maintains:
/// - A `BinaryHeap` for O(log n) pop of the best node
/// - `best_g`: lowest known path cost per fingerprint (open or closed)
/// - `open`: fingerprints currently awaiting expansion, with their live cost
pub struct AStarFrontier<S> {
    heap: BinaryHeap<FrontierEntry<S>>,
    best_g: BTreeMap<String, u64>,
    open: BTreeMap<String, u64>,
    high_water: u64,
}

impl<S> AStarFrontier<S> {
    /// Create a new empty frontier.
    #[must_use]
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            best_g: BTreeMap::new(),
            open: BTreeMap::new(),
            high_water: 0,
        }
    }

    /// Offer a node. It is queued only if its `g_cost` beats every earlier
    /// path to the same fingerprint.
    pub fn offer(&mut self, node: SearchNode<S>) -> OfferOutcome {
        let fp = node.fingerprint.hex_digest().to_string();
        let outcome = match self.best_g.get(&fp) {
            None => OfferOutcome::Opened,
            Some(&best) if node.g_cost < best => OfferOutcome::Improved,
            Some(_) => return OfferOutcome::Suppressed,
        };
        self.best_g.insert(fp.clone(), node.g_cost);
        self.open.insert(fp, node.g_cost);
        self.heap.push(FrontierEntry {
            key: Reverse(FrontierKey::from(&node)),
            node,
        });
        let size = self.open.len() as u64;
        if size > self.high_water {
            self.high_water = size;
        }
        outcome
    }

    /// Pop the live node with the lowest `(f_cost, creation_order)`.
    #[must_use]
    pub fn pop(&mut self) -> Option<SearchNode<S>> {
        while let Some(entry) = self.heap.pop() {
            let fp = entry.node.fingerprint.hex_digest();
            if self.open.get(fp) == Some(&entry.node.g_cost) {
                self.open.remove(fp);
                return Some(entry.node);
            }
        }
        None
    }

    /// Lowest known path cost to a fingerprint.
    #[must_use]
    pub fn best_cost(&self, fingerprint_hex: &str) -> Option<u64> {
        self.best_g.get(fingerprint_hex).copied()
    }

    /// Whether a fingerprint has ever been offered successfully.
    #[must_use]
    pub fn is_known(&self, fingerprint_hex: &str) -> bool {
        self.best_g.contains_key(fingerprint_hex)
    }

    /// Number of live open entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.open.len()
    }

    /// Whether no live entry awaits expansion.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.open.is_empty()
    }

    /// High-water mark of live open entries.
    #[must_use]
    pub fn high_water(&self) -> u64 {
        self.high_water
    }
}

impl<S> Default for AStarFrontier<S> {
    fn default() -> Self {
        Self::new()
    }
}
