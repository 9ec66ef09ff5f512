//! Accept sets: the kinds a suspended process will currently consume.

use super::event::EventKind;

/// The set of event kinds a process is willing to receive at its current
/// suspension point.
///
/// An accept set is never empty: construction starts from one kind and
/// further kinds are added with [`and`](AcceptSet::and). Membership is an
/// exact closed-set test, O(|set|) — no hierarchies, no wildcards.
///
/// A fresh set is declared at every suspension point; the engine discards
/// the previous one on resumption.
///
/// # Example
///
/// ```rust
/// use eventide::core::{AcceptSet, EventKind};
///
/// #[derive(Clone, Copy, PartialEq, Eq, Debug)]
/// enum DoorKind {
///     Open,
///     Close,
///     Knock,
/// }
///
/// impl EventKind for DoorKind {
///     fn name(&self) -> &str {
///         match self {
///             Self::Open => "Open",
///             Self::Close => "Close",
///             Self::Knock => "Knock",
///         }
///     }
/// }
///
/// let accept = AcceptSet::new(DoorKind::Open).and(DoorKind::Knock);
///
/// assert!(accept.contains(DoorKind::Open));
/// assert!(accept.contains(DoorKind::Knock));
/// assert!(!accept.contains(DoorKind::Close));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AcceptSet<K: EventKind> {
    kinds: Vec<K>,
}

impl<K: EventKind> AcceptSet<K> {
    /// Create a set accepting a single kind.
    pub fn new(kind: K) -> Self {
        Self { kinds: vec![kind] }
    }

    /// Add another kind, returning the extended set.
    ///
    /// Adding a kind that is already a member is a no-op, so each kind
    /// appears at most once.
    pub fn and(mut self, kind: K) -> Self {
        if !self.contains(kind) {
            self.kinds.push(kind);
        }
        self
    }

    /// Exact membership test.
    pub fn contains(&self, kind: K) -> bool {
        self.kinds.contains(&kind)
    }

    /// The kinds in this set, in declaration order.
    pub fn kinds(&self) -> &[K] {
        &self.kinds
    }
}
