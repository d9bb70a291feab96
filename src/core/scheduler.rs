//! Cancellable timers on a virtual millisecond timeline.
//!
//! A [`Scheduler`] owns every callback its owner has armed. Firing is pulled,
//! one task at a time, in due order: the owner handles the fired kind before
//! asking for the next one, so a handler that cancels other timers guarantees
//! they never fire afterwards.

/// Handle returned when scheduling, usable for targeted cancellation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(u64);

#[derive(Debug, Clone)]
struct Task<K> {
    id: TaskId,
    kind: K,
    due_ms: u64,
    every_ms: Option<u64>,
}

#[derive(Debug, Clone)]
pub struct Scheduler<K> {
    now_ms: u64,
    next_id: u64,
    tasks: Vec<Task<K>>,
}

impl<K: Copy + PartialEq> Scheduler<K> {
    pub fn new(now_ms: u64) -> Self {
        Self {
            now_ms,
            next_id: 0,
            tasks: Vec::new(),
        }
    }

    /// Current position of this scheduler's clock.
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Arms a one-shot timer `delay_ms` from now.
    pub fn schedule_once(&mut self, kind: K, delay_ms: u64) -> TaskId {
        self.push(kind, delay_ms, None)
    }

    /// Arms a repeating timer; the first firing is one interval from now.
    pub fn schedule_every(&mut self, kind: K, interval_ms: u64) -> TaskId {
        let interval_ms = interval_ms.max(1);
        self.push(kind, interval_ms, Some(interval_ms))
    }

    fn push(&mut self, kind: K, delay_ms: u64, every_ms: Option<u64>) -> TaskId {
        let id = TaskId(self.next_id);
        self.next_id += 1;
        self.tasks.push(Task {
            id,
            kind,
            due_ms: self.now_ms + delay_ms,
            every_ms,
        });
        id
    }

    /// Cancels a single task. Returns false if it already fired or was cancelled.
    pub fn cancel(&mut self, id: TaskId) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        self.tasks.len() != before
    }

    /// Cancels every task of the given kind, returning how many were removed.
    pub fn cancel_kind(&mut self, kind: K) -> usize {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.kind != kind);
        before - self.tasks.len()
    }

    pub fn cancel_all(&mut self) {
        self.tasks.clear();
    }

    pub fn is_scheduled(&self, kind: K) -> bool {
        self.tasks.iter().any(|t| t.kind == kind)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Due time of the earliest pending task.
    pub fn next_due_ms(&self) -> Option<u64> {
        self.tasks.iter().map(|t| t.due_ms).min()
    }

    /// Pops the earliest task due at or before `until_ms`, moving the clock to
    /// its due time. Repeating tasks are re-armed one interval later.
    ///
    /// Ties are broken by scheduling order.
    pub fn pop_due(&mut self, until_ms: u64) -> Option<K> {
        let index = self
            .tasks
            .iter()
            .enumerate()
            .filter(|(_, t)| t.due_ms <= until_ms)
            .min_by_key(|(_, t)| (t.due_ms, t.id))
            .map(|(i, _)| i)?;

        let due_ms = self.tasks[index].due_ms;
        self.now_ms = self.now_ms.max(due_ms);

        let kind = self.tasks[index].kind;
        match self.tasks[index].every_ms {
            Some(every) => self.tasks[index].due_ms = due_ms + every,
            None => {
                self.tasks.swap_remove(index);
            }
        }
        Some(kind)
    }

    /// Moves the clock forward without firing anything. Never moves it back.
    pub fn advance_clock(&mut self, now_ms: u64) {
        self.now_ms = self.now_ms.max(now_ms);
    }
}
