//! Integer-weighted random selection.
//!
//! - [`WeightTable`]: insertion-ordered key/weight pairs, unvalidated until a draw.
//! - [`UniformSource`]: the injected "uniform integer below a bound" capability.
//! - [`WeightedRandomizer`] and [`take_one`]: the draw itself.
pub mod randomizer;
pub mod source;
pub mod table;

pub use randomizer::{take_one, WeightedRandomizer};
pub use source::{FnSource, UniformSource};
pub use table::{Weight, WeightTable};
