//! Indexed max-heap over vertices keyed by live out-degree.
//!
//! `std::collections::BinaryHeap` cannot remove or reprioritise an arbitrary
//! element, so the queue keeps its own binary heap of [`VertexId`]s plus a
//! per-slot position table. Every swap updates the table, which makes
//! removal-by-id and priority updates O(log n).
//!
//! Ties are broken by slot order: among equal priorities the vertex that was
//! inserted into the graph first is popped first. This keeps the greedy
//! constructor deterministic for a given population order.

use super::VertexId;

/// Max-priority queue with O(log n) removal and update by [`VertexId`].
#[derive(Debug, Clone, Default)]
pub struct Scheduler {
    heap: Vec<VertexId>,
    priority: Vec<usize>,
    position: Vec<Option<usize>>,
}

impl Scheduler {
    /// Creates an empty scheduler.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the queue content with `items`.
    ///
    /// `slot_count` sizes the per-slot tables; ids at or beyond it are
    /// ignored.
    pub fn seed(&mut self, items: impl IntoIterator<Item = (VertexId, usize)>, slot_count: usize) {
        self.heap.clear();
        self.priority = vec![0; slot_count];
        self.position = vec![None; slot_count];

        for (id, priority) in items {
            let Some(slot) = self.position.get_mut(id.index()) else {
                continue;
            };
            if slot.is_some() {
                continue;
            }
            *slot = Some(self.heap.len());
            self.priority[id.index()] = priority;
            self.heap.push(id);
        }

        for pos in (0..self.heap.len() / 2).rev() {
            self.sift_down(pos);
        }
    }

    /// Number of queued items.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns `true` if nothing is queued.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns `true` if `id` is currently queued.
    pub fn contains(&self, id: VertexId) -> bool {
        self.position_of(id).is_some()
    }

    /// Current priority of a queued item.
    pub fn priority(&self, id: VertexId) -> Option<usize> {
        self.position_of(id).map(|_| self.priority[id.index()])
    }

    /// Highest-priority item without removing it.
    pub fn peek_max(&self) -> Option<(VertexId, usize)> {
        self.heap
            .first()
            .map(|&id| (id, self.priority[id.index()]))
    }

    /// Removes and returns the highest-priority item.
    pub fn pop_max(&mut self) -> Option<(VertexId, usize)> {
        let top = self.peek_max()?;
        self.remove(top.0);
        Some(top)
    }

    /// Removes `id` from the queue. Returns `false` if it was not queued.
    pub fn remove(&mut self, id: VertexId) -> bool {
        let Some(pos) = self.position_of(id) else {
            return false;
        };
        let last = self.heap.len() - 1;
        self.swap(pos, last);
        self.heap.pop();
        self.position[id.index()] = None;

        if pos < self.heap.len() {
            self.sift_down(pos);
            self.sift_up(pos);
        }
        true
    }

    /// Sets the priority of a queued item and restores heap order.
    /// Unqueued ids are ignored.
    pub fn update(&mut self, id: VertexId, priority: usize) {
        let Some(pos) = self.position_of(id) else {
            return;
        };
        let old = std::mem::replace(&mut self.priority[id.index()], priority);
        if priority > old {
            self.sift_up(pos);
        } else if priority < old {
            self.sift_down(pos);
        }
    }

    fn position_of(&self, id: VertexId) -> Option<usize> {
        self.position.get(id.index()).copied().flatten()
    }

    /// `true` if `a` must sit above `b` in the heap.
    fn outranks(&self, a: VertexId, b: VertexId) -> bool {
        let (pa, pb) = (self.priority[a.index()], self.priority[b.index()]);
        pa > pb || (pa == pb && a < b)
    }

    fn swap(&mut self, i: usize, j: usize) {
        self.heap.swap(i, j);
        self.position[self.heap[i].index()] = Some(i);
        self.position[self.heap[j].index()] = Some(j);
    }

    fn sift_up(&mut self, mut pos: usize) {
        while pos > 0 {
            let parent = (pos - 1) / 2;
            if !self.outranks(self.heap[pos], self.heap[parent]) {
                break;
            }
            self.swap(pos, parent);
            pos = parent;
        }
    }

    fn sift_down(&mut self, mut pos: usize) {
        let len = self.heap.len();
        loop {
            let left = 2 * pos + 1;
            let right = left + 1;
            let mut best = pos;
            if left < len && self.outranks(self.heap[left], self.heap[best]) {
                best = left;
            }
            if right < len && self.outranks(self.heap[right], self.heap[best]) {
                best = right;
            }
            if best == pos {
                break;
            }
            self.swap(pos, best);
            pos = best;
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use super::*;

    fn id(i: usize) -> VertexId {
        VertexId(i)
    }

    fn seeded(priorities: &[usize]) -> Scheduler {
        let mut s = Scheduler::new();
        s.seed(
            priorities.iter().enumerate().map(|(i, &p)| (id(i), p)),
            priorities.len(),
        );
        s
    }

    fn drain(s: &mut Scheduler) -> Vec<usize> {
        std::iter::from_fn(|| s.pop_max().map(|(v, _)| v.index())).collect()
    }

    #[test]
    fn pops_in_priority_order() {
        let mut s = seeded(&[3, 9, 1, 7, 5]);
        assert_eq!(drain(&mut s), vec![1, 3, 4, 0, 2]);
        assert!(s.is_empty());
    }

    #[test]
    fn ties_pop_lowest_id_first() {
        let mut s = seeded(&[2, 4, 4, 2, 4]);
        assert_eq!(drain(&mut s), vec![1, 2, 4, 0, 3]);
    }

    #[test]
    fn remove_by_id_keeps_heap_valid() {
        let mut s = seeded(&[5, 8, 2, 6, 1, 9]);
        assert!(s.remove(id(5)));
        assert!(s.remove(id(0)));
        assert!(!s.remove(id(0)));
        assert_eq!(drain(&mut s), vec![1, 3, 2, 4]);
    }

    #[test]
    fn update_raises_and_lowers() {
        let mut s = seeded(&[1, 2, 3]);
        s.update(id(0), 10);
        assert_eq!(s.peek_max().map(|(v, p)| (v.index(), p)), Some((0, 10)));
        s.update(id(0), 0);
        assert_eq!(drain(&mut s), vec![2, 1, 0]);
    }

    #[test]
    fn update_ignores_unqueued_ids() {
        let mut s = seeded(&[1, 2]);
        s.pop_max();
        s.update(id(1), 50);
        assert_eq!(s.priority(id(1)), None);
        assert_eq!(s.len(), 1);
    }

    #[test]
    fn seed_skips_out_of_range_and_duplicate_ids() {
        let mut s = Scheduler::new();
        s.seed([(id(0), 1), (id(0), 7), (id(4), 3)], 2);
        assert_eq!(s.len(), 1);
        assert_eq!(s.priority(id(0)), Some(1));
    }

    #[test]
    fn reseeding_discards_previous_items() {
        let mut s = seeded(&[1, 2, 3]);
        s.seed([(id(1), 4)], 3);
        assert_eq!(drain(&mut s), vec![1]);
    }
}
