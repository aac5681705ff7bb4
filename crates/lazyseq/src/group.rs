use std::cell::RefCell;
use std::iter::FusedIterator;
use std::rc::Rc;

use crate::pull::Cursor;

/// Groups consecutive elements of `sequence` that share a key.
///
/// The returned iterator yields `(key, group)` pairs, one per maximal run of
/// adjacent elements whose keys compare equal. Only *consecutive* elements
/// are grouped, so pre-sort the input by key if every element with the same
/// key should land in one group; equal keys separated by a different key
/// produce separate groups.
///
/// The whole pipeline is streaming: the input is pulled one element at a
/// time, each element's key is computed once on pull, and at most one
/// element of lookahead is held. The outer iterator and the current group
/// read from one shared cursor, so the pairs and their groups must be
/// consumed in order. Leaving a group partially consumed is fine - advancing
/// the outer iterator skips the group's remaining elements - but a handle to
/// an earlier group turns stale at that point and yields nothing from then
/// on.
///
/// A non-deterministic or impure key function makes the group boundaries
/// unspecified; the key function is the caller's contract.
///
/// # Examples
///
/// ```
/// use lazyseq::group_by;
///
/// let words = ["a", "b", "aa", "bb", "ccc"];
/// let mut by_length = Vec::new();
/// for (length, group) in group_by(words, |w| w.len()) {
///     by_length.push((length, group.collect::<Vec<_>>()));
/// }
/// assert_eq!(
///     by_length,
///     [
///         (1, vec!["a", "b"]),
///         (2, vec!["aa", "bb"]),
///         (3, vec!["ccc"]),
///     ],
/// );
/// ```
pub fn group_by<I, F, K>(sequence: I, key_of: F) -> GroupBy<I::IntoIter, F, K>
where
    I: IntoIterator,
    F: Fn(&I::Item) -> K,
    K: PartialEq + Clone,
{
    GroupBy {
        shared: Rc::new(RefCell::new(Shared {
            cursor: Cursor::new(sequence),
            key_of,
            current: None,
            live_group: 0,
        })),
        seeded: false,
        target: None,
    }
}

/// Iteration state shared between the outer [`GroupBy`] and the one live
/// [`Group`]. Access alternates on a single thread, which is what makes
/// `RefCell` sufficient.
struct Shared<I: Iterator, F, K> {
    cursor: Cursor<I>,
    key_of: F,
    /// One element of lookahead, paired with its key. `None` once the
    /// cursor is exhausted.
    current: Option<(K, I::Item)>,
    /// Identity of the group currently allowed to consume elements. The
    /// outer iterator bumps this, turning older handles stale.
    live_group: u64,
}

impl<I, F, K> Shared<I, F, K>
where
    I: Iterator,
    F: Fn(&I::Item) -> K,
{
    /// Pulls the next element and computes its key. The lookahead is cleared
    /// first; a key function that unwinds leaves the sequence terminated,
    /// not half-advanced.
    fn advance(&mut self) {
        self.current = None;
        if let Some(value) = self.cursor.next() {
            let key = (self.key_of)(&value);
            self.current = Some((key, value));
        }
    }
}

/// Iterator over `(key, group)` pairs. Created by [`group_by`].
pub struct GroupBy<I: Iterator, F, K> {
    shared: Rc<RefCell<Shared<I, F, K>>>,
    seeded: bool,
    /// Key of the most recently emitted group, used to skip its leftovers.
    target: Option<K>,
}

impl<I, F, K> Iterator for GroupBy<I, F, K>
where
    I: Iterator,
    F: Fn(&I::Item) -> K,
    K: PartialEq + Clone,
{
    type Item = (K, Group<I, F, K>);

    fn next(&mut self) -> Option<Self::Item> {
        let mut shared = self.shared.borrow_mut();

        // Whatever group was handed out before this call is now stale.
        shared.live_group += 1;

        if !self.seeded {
            self.seeded = true;
            shared.advance();
        } else if let Some(target) = self.target.take() {
            // Leftovers of a partially consumed group are skipped here, not
            // delivered anywhere.
            while matches!(&shared.current, Some((key, _)) if *key == target) {
                shared.advance();
            }
        }

        let key = match &shared.current {
            Some((key, _)) => key.clone(),
            None => return None,
        };
        self.target = Some(key.clone());

        let group = Group {
            shared: Rc::clone(&self.shared),
            target: key.clone(),
            id: shared.live_group,
        };
        Some((key, group))
    }
}

impl<I, F, K> FusedIterator for GroupBy<I, F, K>
where
    I: Iterator,
    F: Fn(&I::Item) -> K,
    K: PartialEq + Clone,
{
}

/// The elements of one consecutive run. Created by [`GroupBy`].
///
/// A group draws from the cursor it shares with its parent iterator. It
/// stays usable until the parent is advanced again; after that it is stale
/// and yields `None` without touching the shared state.
pub struct Group<I: Iterator, F, K> {
    shared: Rc<RefCell<Shared<I, F, K>>>,
    target: K,
    id: u64,
}

impl<I, F, K> Iterator for Group<I, F, K>
where
    I: Iterator,
    F: Fn(&I::Item) -> K,
    K: PartialEq + Clone,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let mut shared = self.shared.borrow_mut();

        if shared.live_group != self.id {
            return None;
        }

        match shared.current.take() {
            Some((key, value)) if key == self.target => {
                shared.advance();
                Some(value)
            }
            // Either the input ran out or the next element starts a new
            // group; leave it in place as that group's seed.
            boundary => {
                shared.current = boundary;
                None
            }
        }
    }
}

impl<I, F, K> FusedIterator for Group<I, F, K>
where
    I: Iterator,
    F: Fn(&I::Item) -> K,
    K: PartialEq + Clone,
{
}
