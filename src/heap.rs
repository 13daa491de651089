use std::collections::HashMap;
use std::hash::Hash;

/// Errors signalled by [`IndexedMinHeap`] operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    /// `peek` or `poll` was called on a heap with no entries.
    Empty,
    /// `add` was called with a value that is already queued.
    DuplicateValue,
    /// `change_priority` was called with a value that is not queued.
    ValueNotFound,
}

impl std::fmt::Display for HeapError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HeapError::Empty => write!(f, "the heap is empty"),
            HeapError::DuplicateValue => write!(f, "value is already in the heap"),
            HeapError::ValueNotFound => write!(f, "value is not in the heap"),
        }
    }
}

impl std::error::Error for HeapError {}

/// One heap slot: a value and the priority it is ordered by.
struct Entry<V, P> {
    value: V,
    priority: P,
}

/// A binary min-heap over `(value, priority)` pairs that additionally tracks
/// the slot of every queued value, so the priority of a value already in the
/// heap can be changed in O(log n) without a linear search.
///
/// Values act as unique keys. Duplicate priorities are allowed; among equal
/// priorities the drain order is deterministic but otherwise unspecified.
pub struct IndexedMinHeap<V, P> {
    /// The array representation of the heap.
    entries: Vec<Entry<V, P>>,
    /// Mapping from each queued value to its index in `entries`.
    positions: HashMap<V, usize>,
}

impl<V, P> IndexedMinHeap<V, P>
where
    V: Eq + Hash + Clone,
    P: Ord,
{
    /// Creates an empty heap.
    pub fn new() -> Self {
        IndexedMinHeap {
            entries: Vec::new(),
            positions: HashMap::new(),
        }
    }

    /// Creates an empty heap with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        IndexedMinHeap {
            entries: Vec::with_capacity(capacity),
            positions: HashMap::with_capacity(capacity),
        }
    }

    /// Number of queued entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Checks whether `value` is queued, via the position map.
    pub fn contains(&self, value: &V) -> bool {
        self.positions.contains_key(value)
    }

    /// Returns the value with the smallest priority without removing it.
    pub fn peek(&self) -> Result<&V, HeapError> {
        self.entries
            .first()
            .map(|entry| &entry.value)
            .ok_or(HeapError::Empty)
    }

    /// Queues `value` with the given priority.
    ///
    /// Fails with [`HeapError::DuplicateValue`] if the value is already
    /// queued, leaving the heap untouched.
    pub fn add(&mut self, value: V, priority: P) -> Result<(), HeapError> {
        if self.positions.contains_key(&value) {
            return Err(HeapError::DuplicateValue);
        }

        let idx = self.entries.len();
        self.positions.insert(value.clone(), idx);
        self.entries.push(Entry { value, priority });
        self.bubble_up(idx);
        Ok(())
    }

    /// Removes and returns the value with the smallest priority.
    pub fn poll(&mut self) -> Result<V, HeapError> {
        if self.entries.is_empty() {
            return Err(HeapError::Empty);
        }

        // Move the last entry to the root, drop the old root, sift down.
        let last = self.entries.len() - 1;
        self.swap(0, last);
        let entry = self.entries.pop().unwrap();
        self.positions.remove(&entry.value);
        if !self.entries.is_empty() {
            self.bubble_down(0);
        }
        Ok(entry.value)
    }

    /// Re-prioritizes a queued value, restoring heap order by bubbling it in
    /// whichever direction the new priority requires.
    ///
    /// Fails with [`HeapError::ValueNotFound`] if the value is not queued;
    /// the heap is never silently extended.
    pub fn change_priority(&mut self, value: &V, priority: P) -> Result<(), HeapError> {
        let idx = *self.positions.get(value).ok_or(HeapError::ValueNotFound)?;
        self.entries[idx].priority = priority;

        if idx > 0 && self.entries[idx].priority < self.entries[parent_of(idx)].priority {
            self.bubble_up(idx);
        } else {
            self.bubble_down(idx);
        }
        Ok(())
    }

    /// Sifts the entry at `idx` towards the root until its parent is no
    /// larger. Entries with equal priorities never move past each other.
    fn bubble_up(&mut self, mut idx: usize) {
        while idx > 0 {
            let parent = parent_of(idx);
            if self.entries[idx].priority >= self.entries[parent].priority {
                break;
            }
            self.swap(idx, parent);
            idx = parent;
        }
    }

    /// Sifts the entry at `idx` towards the leaves until no child is smaller.
    fn bubble_down(&mut self, mut idx: usize) {
        loop {
            let left = left_child_of(idx);
            if left >= self.entries.len() {
                break; // No children
            }

            // Pick the smaller child; on equal priorities the left one wins.
            let right = left + 1;
            let mut child = left;
            if right < self.entries.len()
                && self.entries[right].priority < self.entries[left].priority
            {
                child = right;
            }

            if self.entries[child].priority >= self.entries[idx].priority {
                break;
            }
            self.swap(idx, child);
            idx = child;
        }
    }

    /// Exchanges the entries at `i` and `j` and updates both position-map
    /// slots accordingly. Every relocation routes through here.
    fn swap(&mut self, i: usize, j: usize) {
        self.entries.swap(i, j);
        for idx in [i, j] {
            let value = &self.entries[idx].value;
            debug_assert!(self.positions.contains_key(value));
            if let Some(pos) = self.positions.get_mut(value) {
                *pos = idx;
            }
        }
    }
}

#[inline(always)]
fn parent_of(idx: usize) -> usize {
    (idx - 1) / 2
}

#[inline(always)]
fn left_child_of(idx: usize) -> usize {
    2 * idx + 1
}
