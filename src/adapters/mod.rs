// Adapters layer: concrete implementations of the domain ports.

pub mod clock;
pub mod console;
pub mod random;

pub use clock::{FixedClock, SystemClock};
pub use console::{MemoryConsole, StdoutConsole};
pub use random::{FixedRandom, SystemRandom};
