#![forbid(unsafe_code)]
//! modular_parts: data-driven modular part catalogs with integer-weighted random selection.
//!
//! Modules:
//! - selection: weight tables, injected uniform sources, and the weighted "take one" draw
//! - catalog: parts, part sets, pass-through configuration, assembly and events
//!
//! The typical flow builds a [`selection::WeightTable`] from a part set, hands it to
//! [`selection::WeightedRandomizer`], and draws one key with a caller-supplied RNG.
pub mod catalog;
pub mod error;
pub mod selection;

/// Convenient re-exports for common types. Import with `use modular_parts::prelude::*;`.
pub mod prelude {
    pub use crate::catalog::assembly::{Assembler, AssemblyResult, Selection};
    pub use crate::catalog::config::{ModularConfig, RandomSeedMode, StartingMethod};
    pub use crate::catalog::events::{AssemblyEvent, EventSink, FnSink, SkipReason, VecSink};
    pub use crate::catalog::{AttachPointId, Catalog, Part, PartSet, PrototypeId, Transform};
    pub use crate::error::{Error, Result};
    pub use crate::selection::{
        take_one, FnSource, UniformSource, Weight, WeightTable, WeightedRandomizer,
    };
}
