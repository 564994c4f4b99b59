use std::collections::VecDeque;

/// Undo/redo stacks of whole-state snapshots.
///
/// The editor records a `Scene` (shapes and window) before every mutation.
/// Restoring a clone of the arena keeps every `ShapeId` valid, so callers can
/// hold on to ids across undo and redo.
#[derive(Debug)]
pub struct HistoryManager<S> {
    past: VecDeque<S>,
    future: Vec<S>,
    /// Oldest snapshots are dropped beyond this many. `0` disables recording.
    pub max_history: usize,
}

impl<S> Default for HistoryManager<S> {
    fn default() -> Self {
        Self::new(50)
    }
}

impl<S> HistoryManager<S> {
    /// Creates an empty history that keeps at most `max_history` undo steps.
    pub fn new(max_history: usize) -> Self {
        Self {
            past: VecDeque::with_capacity(max_history),
            future: Vec::new(),
            max_history,
        }
    }

    /// True when there is a snapshot to step back to.
    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    /// True when an undone snapshot can be re-applied.
    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    /// Number of recorded undo steps.
    pub fn len(&self) -> usize {
        self.past.len()
    }

    /// True when nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.past.is_empty()
    }

    /// Forgets every snapshot.
    pub fn clear(&mut self) {
        self.past.clear();
        self.future.clear();
    }
}

impl<S: Clone> HistoryManager<S> {
    /// Records `state` as it is *before* a mutation. Starting a new branch
    /// discards the redo stack.
    pub fn commit(&mut self, state: &S) {
        if self.max_history == 0 {
            return;
        }
        while self.past.len() >= self.max_history {
            self.past.pop_front();
        }
        self.past.push_back(state.clone());
        self.future.clear();
    }

    /// Steps back one snapshot. Returns false when there is nothing to undo.
    pub fn undo(&mut self, state: &mut S) -> bool {
        match self.past.pop_back() {
            Some(previous) => {
                self.future.push(std::mem::replace(state, previous));
                true
            }
            None => false,
        }
    }

    /// Re-applies the last undone snapshot. Returns false when there is nothing to redo.
    pub fn redo(&mut self, state: &mut S) -> bool {
        match self.future.pop() {
            Some(next) => {
                self.past.push_back(std::mem::replace(state, next));
                true
            }
            None => false,
        }
    }
}
