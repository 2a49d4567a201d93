pub mod clock;
pub mod ease;
pub mod field;
pub mod orb;
pub mod radar;
pub mod skills;

pub use clock::*;
pub use ease::*;
pub use field::*;
pub use skills::*;
