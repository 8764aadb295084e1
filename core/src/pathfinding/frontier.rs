use std::{cmp::Ordering, collections::BinaryHeap};

use crate::graph::NodeId;

#[derive(Debug, Clone, Copy)]
struct FrontierEntry {
    priority: f64,
    sequence: u64,
    node: NodeId,
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierEntry {}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed on both keys: BinaryHeap is a max-heap, we want the lowest
        // priority first and, among equals, the earliest push.
        other
            .priority
            .total_cmp(&self.priority)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

/// Min-priority queue of pending expansions.
///
/// The same node may be pushed any number of times; stale entries are left in
/// place and it is up to the caller to skip them when they come out.
#[derive(Debug, Default)]
pub struct Frontier {
    heap: BinaryHeap<FrontierEntry>,
    next_sequence: u64,
    peak_len: usize,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, node: NodeId, priority: f64) {
        self.heap.push(FrontierEntry {
            priority,
            sequence: self.next_sequence,
            node,
        });
        self.next_sequence += 1;
        self.peak_len = self.peak_len.max(self.heap.len());
    }

    pub fn pop_min(&mut self) -> Option<(NodeId, f64)> {
        self.heap.pop().map(|entry| (entry.node, entry.priority))
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Largest number of entries held at once
    pub fn peak_len(&self) -> usize {
        self.peak_len
    }
}
