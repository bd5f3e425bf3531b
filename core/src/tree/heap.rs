//! tree/heap.rs
//! Array-backed binary min-heap used to merge tree nodes.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeapError {
    /// `pop()` called on an empty heap.
    Underflow,
}

impl fmt::Display for HeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapError::Underflow => write!(f, "pop from empty heap"),
        }
    }
}

impl std::error::Error for HeapError {}

/// Binary min-heap over `T: Ord`.
///
/// Children of index `i` live at `2i + 1` and `2i + 2`. Elements that compare
/// equal come out in an unspecified order; callers needing a stable order
/// must fold a tie-break into `T`'s ordering.
#[derive(Debug, Clone)]
pub struct MinHeap<T> {
    elements: Vec<T>,
}

impl<T> Default for MinHeap<T> {
    fn default() -> Self {
        Self { elements: Vec::new() }
    }
}

impl<T: Ord> MinHeap<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self { elements: Vec::with_capacity(capacity) }
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn peek(&self) -> Option<&T> {
        self.elements.first()
    }

    /// Insert in O(log n).
    pub fn push(&mut self, value: T) {
        self.elements.push(value);
        self.sift_up(self.elements.len() - 1);
    }

    /// Remove the minimum in O(log n).
    pub fn pop(&mut self) -> Result<T, HeapError> {
        if self.elements.is_empty() {
            return Err(HeapError::Underflow);
        }
        let last = self.elements.len() - 1;
        self.elements.swap(0, last);
        let min = self.elements.pop().ok_or(HeapError::Underflow)?;
        if !self.elements.is_empty() {
            self.sift_down(0);
        }
        Ok(min)
    }

    /// Consume the heap, returning its only element.
    pub fn into_single(mut self) -> Result<T, HeapError> {
        debug_assert!(self.elements.len() <= 1, "heap still holds {} elements", self.elements.len());
        self.pop()
    }

    fn sift_up(&mut self, mut i: usize) {
        while i > 0 {
            let parent = (i - 1) / 2;
            if self.elements[i] >= self.elements[parent] {
                break;
            }
            self.elements.swap(i, parent);
            i = parent;
        }
    }

    fn sift_down(&mut self, mut i: usize) {
        let n = self.elements.len();
        loop {
            let left = 2 * i + 1;
            let right = left + 1;
            let mut smallest = i;

            if left < n && self.elements[left] < self.elements[smallest] {
                smallest = left;
            }
            if right < n && self.elements[right] < self.elements[smallest] {
                smallest = right;
            }
            if smallest == i {
                break;
            }
            self.elements.swap(i, smallest);
            i = smallest;
        }
    }

    #[cfg(test)]
    fn is_valid(&self) -> bool {
        (1..self.elements.len()).all(|i| self.elements[(i - 1) / 2] <= self.elements[i])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pops_in_ascending_order() {
        let mut heap = MinHeap::new();
        for v in [5, 3, 9, 1, 1, 7, 2, 8] {
            heap.push(v);
            assert!(heap.is_valid());
        }
        let mut out = Vec::new();
        while !heap.is_empty() {
            out.push(heap.pop().unwrap());
            assert!(heap.is_valid());
        }
        assert_eq!(out, vec![1, 1, 2, 3, 5, 7, 8, 9]);
    }

    #[test]
    fn pop_empty_is_underflow() {
        let mut heap: MinHeap<u32> = MinHeap::new();
        assert_eq!(heap.pop(), Err(HeapError::Underflow));
    }

    #[test]
    fn len_tracks_push_and_pop() {
        let mut heap = MinHeap::with_capacity(4);
        heap.push(2);
        heap.push(1);
        assert_eq!(heap.len(), 2);
        assert_eq!(heap.peek(), Some(&1));
        heap.pop().unwrap();
        assert_eq!(heap.len(), 1);
        assert_eq!(heap.into_single(), Ok(2));
    }
}
