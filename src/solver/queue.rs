#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! Priority work-queue over lines: an indexed binary max-heap.
//!
//! The heap is keyed by an integer urgency and carries a side-array mapping
//! line id to heap slot, so re-pushing an id that is already queued updates
//! its key in place (an `O(log n)` sift) instead of creating a duplicate
//! entry.

use crate::solver::grid::LineId;

/// Resolution of one urgency component. The live solved-fraction of a line
/// is scaled by this and the static clue weight occupies `0..URGENCY_SCALE`
/// below it, so the weight only ever breaks ties between equally solved
/// lines.
pub const URGENCY_SCALE: i32 = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct QueueItem {
    id: LineId,
    factor: i32,
}

/// Indexed max-heap of `(line_id, urgency)` entries.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LineQueue {
    heap: Vec<QueueItem>,
    /// `id -> heap slot + 1`; `0` means the id is not queued.
    slots: Vec<usize>,
}

impl LineQueue {
    /// An empty queue able to hold line ids `0..lines`.
    #[must_use]
    pub fn new(lines: usize) -> Self {
        Self {
            heap: Vec::with_capacity(lines),
            slots: vec![0; lines],
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Inserts `id` with the given urgency, or updates its urgency if it is
    /// already queued. Returns `true` if the id was newly inserted.
    ///
    /// # Panics
    ///
    /// If `id` is outside the range the queue was created for.
    pub fn push(&mut self, id: LineId, factor: i32) -> bool {
        let slot = self.slots[id];
        if slot == 0 {
            self.heap.push(QueueItem { id, factor });
            let pos = self.heap.len() - 1;
            self.slots[id] = pos + 1;
            self.sift_up(pos);
            true
        } else {
            let pos = slot - 1;
            let old = self.heap[pos].factor;
            self.heap[pos].factor = factor;
            if factor > old {
                self.sift_up(pos);
            } else if factor < old {
                self.sift_down(pos);
            }
            false
        }
    }

    /// Removes and returns the id with the highest urgency.
    pub fn pop(&mut self) -> Option<LineId> {
        if self.heap.is_empty() {
            return None;
        }
        let last = self.heap.len() - 1;
        self.heap.swap(0, last);
        let item = self.heap.pop()?;
        self.slots[item.id] = 0;
        if !self.heap.is_empty() {
            self.slots[self.heap[0].id] = 1;
            self.sift_down(0);
        }
        Some(item.id)
    }

    fn sift_up(&mut self, mut pos: usize) {
        while pos > 0 {
            let parent = (pos - 1) / 2;
            if self.heap[pos].factor <= self.heap[parent].factor {
                break;
            }
            self.swap(pos, parent);
            pos = parent;
        }
    }

    fn sift_down(&mut self, mut pos: usize) {
        loop {
            let left = 2 * pos + 1;
            if left >= self.heap.len() {
                break;
            }
            let right = left + 1;
            let mut largest = pos;
            if self.heap[left].factor > self.heap[largest].factor {
                largest = left;
            }
            if right < self.heap.len() && self.heap[right].factor > self.heap[largest].factor {
                largest = right;
            }
            if largest == pos {
                break;
            }
            self.swap(pos, largest);
            pos = largest;
        }
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.heap.swap(a, b);
        self.slots[self.heap[a].id] = a + 1;
        self.slots[self.heap[b].id] = b + 1;
    }
}
