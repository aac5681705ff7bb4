use std::iter::FusedIterator;

/// Creates an iterator that yields clones of `value` endlessly.
///
/// ```
/// use lazyseq::repeat;
///
/// let xs: Vec<&str> = repeat("x").take(5).collect();
/// assert_eq!(xs, ["x", "x", "x", "x", "x"]);
/// ```
pub fn repeat<V: Clone>(value: V) -> Repeat<V> {
    Repeat {
        element: Some(value),
        remaining: None,
    }
}

/// Creates an iterator that yields clones of `value` exactly `times` times.
///
/// The final yield moves the stored value out instead of cloning it, and
/// `repeat_n(value, 0)` drops the value immediately and yields nothing.
///
/// ```
/// use lazyseq::repeat_n;
///
/// let tens: Vec<i32> = repeat_n(10, 3).collect();
/// assert_eq!(tens, [10, 10, 10]);
/// assert!(repeat_n("hello", 0).next().is_none());
/// ```
pub fn repeat_n<V: Clone>(value: V, times: usize) -> Repeat<V> {
    Repeat {
        element: if times == 0 { None } else { Some(value) },
        remaining: Some(times),
    }
}

/// A sequence of one repeated value, endless or bounded. Created by
/// [`repeat`] and [`repeat_n`].
#[derive(Clone, Debug)]
pub struct Repeat<V> {
    element: Option<V>,
    remaining: Option<usize>,
}

impl<V: Clone> Iterator for Repeat<V> {
    type Item = V;

    fn next(&mut self) -> Option<V> {
        match self.remaining {
            None => self.element.clone(),
            Some(0) => None,
            Some(1) => {
                self.remaining = Some(0);
                self.element.take()
            }
            Some(left) => {
                self.remaining = Some(left - 1);
                self.element.clone()
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.remaining {
            None => (usize::MAX, None),
            Some(left) => (left, Some(left)),
        }
    }
}

impl<V: Clone> FusedIterator for Repeat<V> {}
