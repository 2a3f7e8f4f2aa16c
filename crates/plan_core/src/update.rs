//! Update applicator: computes the next task list from a baseline and one request.
//!
//! The order of operations is fixed:
//!
//! 1. clear completed tasks (if asked); later indices refer to the cleared list
//! 2. auto-promote untouched `new` tasks to `pending` (if enabled)
//! 3. mark in-progress, then mark done (so `done` wins for an index in both)
//! 4. build the additions
//! 5. splice them at `insert_at`, clamped to the list bounds, or append
//!
//! Nothing is removed except by step 1. Out-of-range indices are ignored.

use std::collections::HashSet;

use serde::{Deserialize, Deserializer, Serialize};

use crate::task::{Task, TaskList, TaskStatus};

/// A single mutation of the task list.
///
/// Field names on the wire follow the tool's published schema (`new`,
/// `inProgress`, `done`, `clearPreviouslyDone`, `insertAt`); the descriptive
/// names are accepted as aliases.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateRequest {
    /// Descriptions of tasks to add, each starting as `new`.
    #[serde(default, rename = "new", alias = "additions", deserialize_with = "null_as_default")]
    pub additions: Vec<String>,

    /// Indices (into the list after clearing) to mark `in-progress`.
    #[serde(
        default,
        rename = "inProgress",
        alias = "markInProgress",
        deserialize_with = "lenient_indices"
    )]
    pub mark_in_progress: Vec<i64>,

    /// Indices (into the list after clearing) to mark `done`.
    #[serde(default, rename = "done", alias = "markDone", deserialize_with = "lenient_indices")]
    pub mark_done: Vec<i64>,

    /// Drop every `done` task before anything else happens.
    #[serde(
        default,
        rename = "clearPreviouslyDone",
        alias = "clearCompleted",
        deserialize_with = "null_as_default"
    )]
    pub clear_completed: bool,

    /// Where to splice the additions; absent means append.
    #[serde(
        default,
        rename = "insertAt",
        deserialize_with = "lenient_position",
        skip_serializing_if = "Option::is_none"
    )]
    pub insert_at: Option<i64>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Any JSON number a model may send as an index.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawIndex {
    Signed(i64),
    Unsigned(u64),
    Float(f64),
}

/// Stands in for indices with no integer value; never a valid position.
const UNUSABLE_INDEX: i64 = i64::MIN;

impl RawIndex {
    /// The integer value, saturating at the `i64` bounds; `None` when fractional.
    fn integral(self) -> Option<i64> {
        match self {
            RawIndex::Signed(i) => Some(i),
            RawIndex::Unsigned(u) => Some(i64::try_from(u).unwrap_or(i64::MAX)),
            RawIndex::Float(f) if f.is_finite() && f.fract() == 0.0 => Some(f as i64),
            RawIndex::Float(_) => None,
        }
    }

    /// Nearest position toward zero, saturating at the `i64` bounds.
    fn truncated(self) -> i64 {
        match self {
            RawIndex::Float(f) => f as i64,
            other => other.integral().unwrap_or(UNUSABLE_INDEX),
        }
    }
}

fn lenient_indices<'de, D>(deserializer: D) -> Result<Vec<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Vec<RawIndex>>::deserialize(deserializer)?.unwrap_or_default();
    Ok(raw
        .into_iter()
        .map(|i| i.integral().unwrap_or(UNUSABLE_INDEX))
        .collect())
}

fn lenient_position<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<RawIndex>::deserialize(deserializer)?.map(RawIndex::truncated))
}

impl UpdateRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(mut self, text: impl Into<String>) -> Self {
        self.additions.push(text.into());
        self
    }

    pub fn start(mut self, index: i64) -> Self {
        self.mark_in_progress.push(index);
        self
    }

    pub fn finish(mut self, index: i64) -> Self {
        self.mark_done.push(index);
        self
    }

    pub fn clear_completed(mut self) -> Self {
        self.clear_completed = true;
        self
    }

    pub fn insert_at(mut self, index: i64) -> Self {
        self.insert_at = Some(index);
        self
    }

    /// True when applying this request cannot change the list.
    pub fn is_noop(&self) -> bool {
        self.additions.is_empty()
            && self.mark_in_progress.is_empty()
            && self.mark_done.is_empty()
            && !self.clear_completed
    }
}

/// Knobs that change how a request is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApplyOptions {
    pub auto_promote_new: bool,
    pub trim_additions: bool,
}

impl Default for ApplyOptions {
    fn default() -> Self {
        Self {
            auto_promote_new: true,
            trim_additions: false,
        }
    }
}

impl ApplyOptions {
    /// Exactly the documented steps, with no auto-promotion or trimming.
    pub fn strict() -> Self {
        Self {
            auto_promote_new: false,
            trim_additions: false,
        }
    }
}

/// Apply `request` to `baseline`, returning the new list.
///
/// Pure: the same inputs always produce an equal list.
pub fn apply(baseline: &TaskList, request: &UpdateRequest, options: &ApplyOptions) -> TaskList {
    if request.is_noop() {
        return baseline.clone();
    }

    let mut tasks: Vec<Task> = if request.clear_completed {
        baseline
            .iter()
            .filter(|t| t.status != TaskStatus::Done)
            .cloned()
            .collect()
    } else {
        baseline.as_slice().to_vec()
    };

    if options.auto_promote_new {
        let targeted: HashSet<usize> = request
            .mark_in_progress
            .iter()
            .chain(&request.mark_done)
            .filter_map(|&i| valid_index(i, tasks.len()))
            .collect();
        for (index, task) in tasks.iter_mut().enumerate() {
            if task.status == TaskStatus::New && !targeted.contains(&index) {
                task.status = TaskStatus::Pending;
            }
        }
    }

    mark(&mut tasks, &request.mark_in_progress, TaskStatus::InProgress);
    mark(&mut tasks, &request.mark_done, TaskStatus::Done);

    let additions = request.additions.iter().map(|text| {
        if options.trim_additions {
            Task::new(text.trim())
        } else {
            Task::new(text.as_str())
        }
    });

    match request.insert_at {
        Some(at) => {
            let tail = tasks.split_off(clamp_position(at, tasks.len()));
            tasks.extend(additions);
            tasks.extend(tail);
        }
        None => tasks.extend(additions),
    }

    TaskList::from(tasks)
}

fn mark(tasks: &mut [Task], indices: &[i64], status: TaskStatus) {
    for &index in indices {
        match valid_index(index, tasks.len()) {
            Some(i) => tasks[i].status = status,
            None => tracing::debug!(index, len = tasks.len(), %status, "ignoring out-of-range index"),
        }
    }
}

fn valid_index(index: i64, len: usize) -> Option<usize> {
    usize::try_from(index).ok().filter(|&i| i < len)
}

fn clamp_position(at: i64, len: usize) -> usize {
    usize::try_from(at).map_or(0, |at| at.min(len))
}
