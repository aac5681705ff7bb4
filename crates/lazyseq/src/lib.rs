//! Lazy sequence combinators.
//!
//! The centerpiece is [`group_by`], which splits a sequence into maximal
//! runs of consecutive elements sharing a key, streaming both the runs and
//! the elements inside them. Around it sit three generators - [`count`],
//! [`cycle`] and [`repeat`]/[`repeat_n`] - and [`Cursor`], a pull handle
//! over any producer with an explicit, idempotent release.
//!
//! Everything is single-threaded and single-consumer; the combinators
//! compose with ordinary iterators on both ends.

pub mod group;
pub mod pull;
pub mod sequence;

pub use group::{group_by, Group, GroupBy};
pub use pull::Cursor;
pub use sequence::{count, cycle, repeat, repeat_n, Count, Cycle, Repeat};
