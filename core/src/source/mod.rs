pub mod clock;
pub mod random;

pub use clock::{Clock, FixedClock, SystemClock};
pub use random::{ConstantRandom, RandomSource, SeededRandom};
