use std::collections::{HashSet, VecDeque};
use std::fmt;
use std::iter::FusedIterator;

use nestwalk_types::{
    CircularReferenceError, Container, Identity, KeyPath, Order, Visit, WalkOptions,
};

use crate::keys::sorted_keys_with;

/// Pruning hook used when none is installed.
pub type NeverPrune<N> = fn(&Visit<N>) -> bool;

fn never_prune<N>(_: &Visit<N>) -> bool {
    false
}

/// Pending work: a container, the keys not yet visited, and the path to it.
///
/// A frame is only stored while `keys` is non-empty.
struct Frame<N> {
    node: N,
    keys: VecDeque<String>,
    path: KeyPath,
}

#[derive(Clone, Copy)]
enum End {
    Back,
    Front,
}

/// Lazy, non-recursive walk over a nested structure.
///
/// Each call to [`Walker::step`] (or [`Iterator::next`]) emits at most one
/// [`Visit`]. Keys of every container are visited in sorted order (see
/// [`KeyOrder`](nestwalk_types::KeyOrder)).
///
/// A container reached a second time after the walk has descended from it is
/// a circular reference: it is either skipped or reported as
/// [`CircularReferenceError`], depending on
/// [`WalkOptions::ignore_circular_references`]. The optional pruning hook
/// installed with [`Walker::prevent_step_into`] can veto descent into any
/// container; a vetoed entry is not emitted.
///
/// A walker is not thread-safe and not reentrant. Use one instance per
/// consumer.
pub struct Walker<N, P = NeverPrune<N>> {
    frames: VecDeque<Frame<N>>,
    visited: HashSet<Identity>,
    options: WalkOptions,
    prevent_step_into: P,
}

impl<N: Container> Walker<N> {
    /// Depth-first walk with lexicographic keys that fails on cycles.
    #[must_use]
    pub fn new(root: N) -> Self {
        Self::with_options(root, WalkOptions::default())
    }

    #[must_use]
    pub fn with_options(root: N, options: WalkOptions) -> Self {
        Walker::seeded(root, options, never_prune::<N> as NeverPrune<N>)
    }
}

impl<N, P> Walker<N, P>
where
    N: Container,
    P: FnMut(&Visit<N>) -> bool,
{
    fn seeded(root: N, options: WalkOptions, prevent_step_into: P) -> Self {
        let keys = sorted_keys_with(&root, options.key_order);
        tracing::debug!(
            order = options.order.as_str(),
            key_order = options.key_order.as_str(),
            root_keys = keys.len(),
            "walker created"
        );

        let mut walker = Self {
            frames: VecDeque::new(),
            visited: HashSet::new(),
            options,
            prevent_step_into,
        };
        walker.save(
            Frame {
                node: root,
                keys: keys.into(),
                path: KeyPath::root(),
            },
            End::Back,
        );
        walker
    }

    /// Install a pruning hook.
    ///
    /// The hook sees every visit whose value is a container. Returning `true`
    /// skips that value: its children are not walked and the visit itself is
    /// not emitted. Siblings are unaffected.
    pub fn prevent_step_into<Q>(self, predicate: Q) -> Walker<N, Q>
    where
        Q: FnMut(&Visit<N>) -> bool,
    {
        Walker {
            frames: self.frames,
            visited: self.visited,
            options: self.options,
            prevent_step_into: predicate,
        }
    }

    /// Advance by one record.
    ///
    /// Returns `Ok(None)` once the walk is exhausted, and on every call after
    /// that. A circular reference (when not ignored) terminates the walker
    /// before the error is returned.
    pub fn step(&mut self) -> Result<Option<Visit<N>>, CircularReferenceError> {
        loop {
            let Some(mut frame) = self.frames.pop_back() else {
                self.terminate();
                return Ok(None);
            };
            let Some(key) = frame.keys.pop_front() else {
                continue;
            };

            let node = frame.node.clone();
            let path = frame.path.child(&key);
            let value = node.child(&key);
            self.visited.insert(node.identity());
            self.save(frame, End::Back);

            let Some(value) = value else {
                // Removed from a shared container after its keys were listed.
                tracing::debug!(path = %path, "key vanished during walk");
                continue;
            };

            let visit = Visit {
                node,
                value,
                key,
                path,
            };

            if visit.value.is_container() {
                if (self.prevent_step_into)(&visit) {
                    tracing::debug!(path = %visit.path, "pruned");
                    continue;
                }

                if self.visited.contains(&visit.value.identity()) {
                    if self.options.ignore_circular_references {
                        tracing::debug!(path = %visit.path, "circular reference skipped");
                        continue;
                    }
                    self.terminate();
                    return Err(CircularReferenceError { path: visit.path });
                }

                let keys = sorted_keys_with(&visit.value, self.options.key_order);
                let end = match self.options.order {
                    Order::DepthFirst => End::Back,
                    Order::BreadthFirst => End::Front,
                };
                self.save(
                    Frame {
                        node: visit.value.clone(),
                        keys: keys.into(),
                        path: visit.path.clone(),
                    },
                    end,
                );
            }

            tracing::trace!(path = %visit.path, "visit");
            return Ok(Some(visit));
        }
    }
}

impl<N, P> Walker<N, P> {
    /// Drop all pending frames and the visited set.
    ///
    /// Idempotent. Every later step reports exhaustion.
    pub fn terminate(&mut self) {
        if !self.frames.is_empty() || !self.visited.is_empty() {
            tracing::debug!(
                pending = self.frames.len(),
                visited = self.visited.len(),
                "walker terminated"
            );
        }
        self.frames.clear();
        self.visited.clear();
    }

    /// True when the next step will report exhaustion.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.frames.is_empty()
    }

    /// Number of containers with keys still to visit.
    #[must_use]
    pub fn pending_frames(&self) -> usize {
        self.frames.len()
    }

    #[must_use]
    pub fn options(&self) -> WalkOptions {
        self.options
    }

    fn save(&mut self, frame: Frame<N>, end: End) {
        if frame.keys.is_empty() {
            return;
        }
        match end {
            End::Back => self.frames.push_back(frame),
            End::Front => self.frames.push_front(frame),
        }
    }
}

impl<N, P> Iterator for Walker<N, P>
where
    N: Container,
    P: FnMut(&Visit<N>) -> bool,
{
    type Item = Result<Visit<N>, CircularReferenceError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.step().transpose()
    }
}

impl<N, P> FusedIterator for Walker<N, P>
where
    N: Container,
    P: FnMut(&Visit<N>) -> bool,
{
}

impl<N, P> fmt::Debug for Walker<N, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Walker")
            .field("options", &self.options)
            .field("pending_frames", &self.frames.len())
            .field("visited", &self.visited.len())
            .finish_non_exhaustive()
    }
}
