use std::iter::FusedIterator;

/// Creates an iterator that cycles through `sequence` endlessly.
///
/// The input is streamed exactly once: each element is handed out and a
/// clone of it saved, and when the input runs out the saved elements replay
/// forever. The source iterator is dropped as soon as that single pass
/// completes. An empty input produces an empty iterator rather than looping
/// without ever yielding.
///
/// ```
/// use lazyseq::cycle;
///
/// let looped: Vec<&str> = cycle(["A", "B", "C"]).take(8).collect();
/// assert_eq!(looped, ["A", "B", "C", "A", "B", "C", "A", "B"]);
/// ```
pub fn cycle<I>(sequence: I) -> Cycle<I::IntoIter>
where
    I: IntoIterator,
    I::Item: Clone,
{
    Cycle {
        source: Some(sequence.into_iter()),
        saved: Vec::new(),
        replay_at: 0,
    }
}

/// An endlessly repeating sequence. Created by [`cycle`].
pub struct Cycle<I: Iterator> {
    source: Option<I>,
    saved: Vec<I::Item>,
    replay_at: usize,
}

impl<I> Iterator for Cycle<I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(source) = self.source.as_mut() {
            match source.next() {
                Some(element) => {
                    self.saved.push(element.clone());
                    return Some(element);
                }
                // First pass complete; the source is no longer needed.
                None => self.source = None,
            }
        }

        let element = self.saved.get(self.replay_at)?.clone();
        self.replay_at = (self.replay_at + 1) % self.saved.len();
        Some(element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // A cycle is either empty or endless.
        if !self.saved.is_empty() {
            return (usize::MAX, None);
        }
        match &self.source {
            None => (0, Some(0)),
            Some(source) => match source.size_hint() {
                sz @ (0, Some(0)) => sz,
                (0, _) => (0, None),
                _ => (usize::MAX, None),
            },
        }
    }
}

impl<I> FusedIterator for Cycle<I>
where
    I: Iterator,
    I::Item: Clone,
{
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycle_replays_saved_elements() {
        let values: Vec<&str> = cycle(["A", "B", "C"]).take(8).collect();
        assert_eq!(values, vec!["A", "B", "C", "A", "B", "C", "A", "B"]);
    }

    #[test]
    fn cycle_over_single_element() {
        let values: Vec<i32> = cycle([42]).take(5).collect();
        assert_eq!(values, vec![42, 42, 42, 42, 42]);
    }

    #[test]
    fn cycle_over_empty_input_yields_nothing() {
        let mut empty = cycle(Vec::<i32>::new());
        assert_eq!(empty.next(), None);
        assert_eq!(empty.next(), None);
    }

    #[test]
    fn cycle_size_hint_distinguishes_empty_from_endless() {
        let empty = cycle(Vec::<i32>::new());
        assert_eq!(empty.size_hint(), (0, Some(0)));

        let mut looped = cycle(vec![1, 2]);
        assert_eq!(looped.size_hint(), (usize::MAX, None));
        looped.next();
        assert_eq!(looped.size_hint(), (usize::MAX, None));
    }
}
