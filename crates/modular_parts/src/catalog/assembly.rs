//! Assembly: draw one part per part set of a [`Catalog`].
use glam::Vec3;
use tracing::{debug, info, warn};

use crate::catalog::config::ModularConfig;
use crate::catalog::events::{AssemblyEvent, EventSink, SkipReason};
use crate::catalog::{AttachPointId, Catalog, Part, PartSet, PrototypeId, Transform};
use crate::error::{Error, Result};
use crate::selection::UniformSource;

/// The part drawn for one set, resolved to what a host needs to instantiate it.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    /// Name of the set the part was drawn from.
    pub set_name: String,
    /// Attachment point of that set.
    pub attach_point: AttachPointId,
    /// Name of the drawn part.
    pub part_name: String,
    /// Prototype the host should instantiate.
    pub prototype: PrototypeId,
    /// Placement relative to the attachment point.
    pub transform: Transform,
}

impl Selection {
    fn new(set: &PartSet, part: &Part) -> Self {
        Self {
            set_name: set.name.clone(),
            attach_point: set.attach_point.clone(),
            part_name: part.name.clone(),
            prototype: part.prototype.clone(),
            transform: part.transform,
        }
    }

    pub fn position(&self) -> Vec3 {
        self.transform.position
    }
}

/// Result of assembling a catalog.
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AssemblyResult {
    /// One selection per drawn set, in catalog order.
    pub selections: Vec<Selection>,
    /// Sets passed over because they were inactive or could not be drawn; each one
    /// is reported as an [`AssemblyEvent::SetSkipped`].
    pub sets_skipped: usize,
}

impl AssemblyResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Selection made for the named set, if any.
    pub fn get(&self, set_name: &str) -> Option<&Selection> {
        self.selections.iter().find(|s| s.set_name == set_name)
    }
}

/// Draws parts for catalogs under one [`ModularConfig`].
#[derive(Debug, Clone)]
pub struct Assembler {
    /// Configuration applied to this assembler.
    pub config: ModularConfig,
}

impl Assembler {
    pub fn try_new(config: ModularConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn new(config: ModularConfig) -> Self {
        debug_assert!(config.validate().is_ok(), "invalid modular config");
        Self { config }
    }

    /// Draws one part for every eligible set.
    pub fn assemble<S: UniformSource + ?Sized>(
        &self,
        catalog: &Catalog,
        source: &mut S,
    ) -> AssemblyResult {
        self.assemble_with_events(catalog, source, &mut ())
    }

    /// Like [`Assembler::assemble`], reporting progress to `sink`.
    ///
    /// A set whose draw fails (e.g. no parts, negative weight) is reported as a
    /// [`AssemblyEvent::Warning`] followed by [`AssemblyEvent::SetSkipped`], and counted
    /// as skipped.
    pub fn assemble_with_events<S: UniformSource + ?Sized>(
        &self,
        catalog: &Catalog,
        source: &mut S,
        sink: &mut dyn EventSink,
    ) -> AssemblyResult {
        sink.send(AssemblyEvent::AssemblyStarted {
            config: self.config.clone(),
            set_count: catalog.sets.len(),
        });

        if catalog.sets.is_empty() {
            warn!("Catalog has no part sets.");
            sink.send(AssemblyEvent::Warning {
                context: "catalog".into(),
                message: "Catalog has no part sets".into(),
            });
        }

        let mut result = AssemblyResult::new();
        for (set_index, set) in catalog.sets.iter().enumerate() {
            if !set.active && !self.config.include_inactive {
                debug!("Set '{}' is inactive; skipping.", set.name);
                result.sets_skipped += 1;
                sink.send(AssemblyEvent::SetSkipped {
                    set_index,
                    set_name: set.name.clone(),
                    reason: SkipReason::Inactive,
                });
                continue;
            }

            match set.take_one(source) {
                Ok(part) => {
                    let selection = Selection::new(set, part);
                    debug!("Set '{}' -> part '{}'.", set.name, part.name);
                    sink.send(AssemblyEvent::PartSelected {
                        set_index,
                        selection: selection.clone(),
                    });
                    result.selections.push(selection);
                }
                Err(e) => {
                    warn!("Failed to draw a part for set '{}': {}.", set.name, e);
                    result.sets_skipped += 1;
                    sink.send(AssemblyEvent::Warning {
                        context: format!("set:{}", set.name),
                        message: format!("Failed to draw a part: {e}"),
                    });
                    sink.send(AssemblyEvent::SetSkipped {
                        set_index,
                        set_name: set.name.clone(),
                        reason: SkipReason::DrawFailed,
                    });
                }
            }
        }

        info!(
            "Assembled {} sets ({} skipped).",
            result.selections.len(),
            result.sets_skipped
        );
        sink.send(AssemblyEvent::AssemblyFinished {
            result: result.clone(),
        });
        result
    }

    /// Draws one part for the named set, regardless of its `active` flag.
    pub fn assemble_set<S: UniformSource + ?Sized>(
        &self,
        catalog: &Catalog,
        set_name: &str,
        source: &mut S,
    ) -> Result<Selection> {
        let set = catalog.get(set_name).ok_or_else(|| Error::UnknownPartSet {
            name: set_name.to_owned(),
        })?;
        let part = set.take_one(source)?;
        Ok(Selection::new(set, part))
    }
}
