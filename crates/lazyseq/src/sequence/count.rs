use std::iter::FusedIterator;
use std::ops::Add;

/// Creates an endless iterator of evenly spaced values, beginning with
/// `start` and advancing by `step`.
///
/// The progression is produced by repeated addition, so any type with a `+`
/// operator over itself works, floats and negative steps included:
///
/// ```
/// use lazyseq::count;
///
/// let ids: Vec<i32> = count(10, 1).take(5).collect();
/// assert_eq!(ids, [10, 11, 12, 13, 14]);
///
/// let halves: Vec<f64> = count(2.5, 0.5).take(4).collect();
/// assert_eq!(halves, [2.5, 3.0, 3.5, 4.0]);
///
/// let down: Vec<i32> = count(10, -2).take(5).collect();
/// assert_eq!(down, [10, 8, 6, 4, 2]);
/// ```
pub fn count<N>(start: N, step: N) -> Count<N>
where
    N: Copy + Add<Output = N>,
{
    Count {
        current: start,
        step,
    }
}

/// An endless arithmetic progression. Created by [`count`].
#[derive(Clone, Debug)]
pub struct Count<N> {
    current: N,
    step: N,
}

impl<N> Iterator for Count<N>
where
    N: Copy + Add<Output = N>,
{
    type Item = N;

    fn next(&mut self) -> Option<N> {
        let value = self.current;
        self.current = value + self.step;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl<N> FusedIterator for Count<N> where N: Copy + Add<Output = N> {}
