use std::iter::FusedIterator;

/// An on-demand cursor over a producer sequence.
///
/// `Cursor` turns any [`IntoIterator`] into a single-consumer pull handle
/// with two guarantees beyond the plain iterator contract:
///
/// - exhaustion is permanent: once [`next`](Iterator::next) returns `None`
///   it returns `None` forever, and the producer is dropped at that point;
/// - [`release`](Cursor::release) stops production early, dropping the
///   producer and freeing whatever resources it holds.
///
/// Release is idempotent, and dropping the cursor releases as well, so the
/// producer is dropped exactly once on every exit path, early abandonment
/// and unwinding included.
#[derive(Debug)]
pub struct Cursor<I> {
    producer: Option<I>,
}

impl<I: Iterator> Cursor<I> {
    pub fn new(producer: impl IntoIterator<IntoIter = I>) -> Self {
        Self {
            producer: Some(producer.into_iter()),
        }
    }

    /// Stops production and drops the producer.
    ///
    /// Safe to call any number of times and safe after exhaustion; once
    /// released, `next` yields `None` forever.
    pub fn release(&mut self) {
        self.producer = None;
    }

    /// Whether the producer is still held, i.e. the cursor has neither been
    /// released nor reached exhaustion.
    pub fn is_active(&self) -> bool {
        self.producer.is_some()
    }
}

impl<I: Iterator> Iterator for Cursor<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        match self.producer.as_mut()?.next() {
            Some(item) => Some(item),
            None => {
                self.release();
                None
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.producer {
            Some(producer) => producer.size_hint(),
            None => (0, Some(0)),
        }
    }
}

impl<I: Iterator> FusedIterator for Cursor<I> {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    struct TrackedProducer {
        items: std::vec::IntoIter<i32>,
        drops: Rc<Cell<usize>>,
    }

    impl Iterator for TrackedProducer {
        type Item = i32;

        fn next(&mut self) -> Option<i32> {
            self.items.next()
        }
    }

    impl Drop for TrackedProducer {
        fn drop(&mut self) {
            self.drops.set(self.drops.get() + 1);
        }
    }

    fn tracked(items: Vec<i32>, drops: &Rc<Cell<usize>>) -> TrackedProducer {
        TrackedProducer {
            items: items.into_iter(),
            drops: Rc::clone(drops),
        }
    }

    #[test]
    fn cursor_yields_producer_elements_in_order() {
        let collected: Vec<i32> = Cursor::new(vec![1, 2, 3]).collect();
        assert_eq!(collected, vec![1, 2, 3]);
    }

    #[test]
    fn cursor_stays_exhausted_after_none() {
        let mut cursor = Cursor::new(vec![1]);
        assert_eq!(cursor.next(), Some(1));
        assert_eq!(cursor.next(), None);
        assert_eq!(cursor.next(), None);
    }

    #[test]
    fn release_stops_production_midway() {
        let mut cursor = Cursor::new(vec![1, 2, 3]);
        assert_eq!(cursor.next(), Some(1));
        cursor.release();
        assert!(!cursor.is_active());
        assert_eq!(cursor.next(), None);
    }

    #[test]
    fn release_drops_producer_exactly_once() {
        let drops = Rc::new(Cell::new(0));
        let mut cursor = Cursor::new(tracked(vec![1, 2, 3], &drops));

        assert_eq!(cursor.next(), Some(1));
        assert_eq!(drops.get(), 0);

        cursor.release();
        assert_eq!(drops.get(), 1);

        cursor.release();
        drop(cursor);
        assert_eq!(drops.get(), 1);
    }

    #[test]
    fn exhaustion_releases_producer_immediately() {
        let drops = Rc::new(Cell::new(0));
        let mut cursor = Cursor::new(tracked(vec![1], &drops));

        assert_eq!(cursor.next(), Some(1));
        assert_eq!(drops.get(), 0);
        assert_eq!(cursor.next(), None);
        assert_eq!(drops.get(), 1);
        assert!(!cursor.is_active());
    }

    #[test]
    fn dropping_cursor_releases_producer() {
        let drops = Rc::new(Cell::new(0));
        {
            let mut cursor = Cursor::new(tracked(vec![1, 2, 3], &drops));
            assert_eq!(cursor.next(), Some(1));
        }
        assert_eq!(drops.get(), 1);
    }

    #[test]
    fn size_hint_collapses_after_release() {
        let mut cursor = Cursor::new(vec![1, 2, 3]);
        assert_eq!(cursor.size_hint(), (3, Some(3)));
        cursor.release();
        assert_eq!(cursor.size_hint(), (0, Some(0)));
    }
}
