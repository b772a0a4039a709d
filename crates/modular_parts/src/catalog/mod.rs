//! Declarative catalog of modular parts: variants, the sets that group them, and assembly.
use glam::Vec3;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::selection::{take_one, UniformSource, Weight, WeightTable};

pub mod assembly;
pub mod config;
pub mod events;

/// Handle to a renderable prototype owned by the host engine.
pub type PrototypeId = String;

/// Handle to the host attachment point a part set is bound to.
pub type AttachPointId = String;

/// Local placement of a part relative to its attachment point.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    /// Euler angles in degrees.
    pub rotation: Vec3,
    pub scale: Vec3,
}

impl Transform {
    pub const IDENTITY: Self = Self {
        position: Vec3::ZERO,
        rotation: Vec3::ZERO,
        scale: Vec3::ONE,
    };

    /// Accepts anything convertible into [`Vec3`], including `mint::Vector3<f32>`.
    pub fn new(
        position: impl Into<Vec3>,
        rotation: impl Into<Vec3>,
        scale: impl Into<Vec3>,
    ) -> Self {
        Self {
            position: position.into(),
            rotation: rotation.into(),
            scale: scale.into(),
        }
    }

    pub fn from_position(position: impl Into<Vec3>) -> Self {
        Self {
            position: position.into(),
            ..Self::IDENTITY
        }
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// A named visual variant with a placement, a prototype and a spawn weight.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub struct Part {
    pub name: String,
    pub transform: Transform,
    pub prototype: PrototypeId,
    /// Relative spawn weight; zero never wins under a positive-sum table.
    pub weight: Weight,
}

impl Part {
    /// Create a part with an identity transform and weight 1.
    pub fn new(name: impl Into<String>, prototype: impl Into<PrototypeId>) -> Self {
        Self {
            name: name.into(),
            transform: Transform::IDENTITY,
            prototype: prototype.into(),
            weight: 1,
        }
    }

    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }

    pub fn with_weight(mut self, weight: Weight) -> Self {
        self.weight = weight;
        self
    }
}

/// A named group of alternative [`Part`]s bound to one attachment point.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub struct PartSet {
    pub name: String,
    pub active: bool,
    pub attach_point: AttachPointId,
    pub parts: Vec<Part>,
}

impl PartSet {
    /// Create an active, empty set.
    pub fn new(name: impl Into<String>, attach_point: impl Into<AttachPointId>) -> Self {
        Self {
            name: name.into(),
            active: true,
            attach_point: attach_point.into(),
            parts: Vec::new(),
        }
    }

    pub fn with_part(mut self, part: Part) -> Self {
        self.parts.push(part);
        self
    }

    pub fn with_parts(mut self, parts: impl IntoIterator<Item = Part>) -> Self {
        self.parts.extend(parts);
        self
    }

    pub fn with_active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// Weight table keyed by part index.
    pub fn weight_table(&self) -> WeightTable<usize> {
        WeightTable::from_distinct(
            self.parts
                .iter()
                .enumerate()
                .map(|(index, part)| (index, part.weight))
                .collect(),
        )
    }

    /// Draw one part according to the part weights.
    pub fn take_one<S: UniformSource + ?Sized>(&self, source: &mut S) -> Result<&Part> {
        let weights = self.weight_table();
        let index = *take_one(&weights, source)?;
        Ok(&self.parts[index])
    }
}

/// Ordered collection of [`PartSet`]s describing one modular object.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Default, PartialEq)]
#[non_exhaustive]
pub struct Catalog {
    pub sets: Vec<PartSet>,
}

impl Catalog {
    pub fn new() -> Self {
        Self { sets: Vec::new() }
    }

    pub fn with_set(mut self, set: PartSet) -> Self {
        self.sets.push(set);
        self
    }

    pub fn with_sets(mut self, sets: Vec<PartSet>) -> Self {
        self.sets.extend(sets);
        self
    }

    /// First set with the given name.
    pub fn get(&self, name: &str) -> Option<&PartSet> {
        self.sets.iter().find(|set| set.name == name)
    }

    pub fn active_sets(&self) -> impl Iterator<Item = &PartSet> {
        self.sets.iter().filter(|set| set.active)
    }
}
