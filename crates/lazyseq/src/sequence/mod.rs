pub mod count;
pub mod cycle;
pub mod repeat;

pub use count::{count, Count};
pub use cycle::{cycle, Cycle};
pub use repeat::{repeat, repeat_n, Repeat};
