//! Per-variant material instance table
//!
//! Every variant owns its uniform storage for the lifetime of the sandbox.
//! Only the active variant is rewritten each frame; the others keep whatever
//! was last bound to them.

use super::binder::bind;
use super::params::SandboxParameters;
use super::uniforms::{UniformSet, UniformSlots};
use super::variant::VariantId;

/// Uniform storage for every precompiled variant
#[derive(Debug, Clone, Default)]
pub struct MaterialInstances {
    instances: [UniformSet; VariantId::COUNT],
}

impl MaterialInstances {
    /// Create one empty instance per variant
    pub fn new() -> Self {
        Self::default()
    }

    /// Uniform storage of a variant
    pub fn get(&self, variant: VariantId) -> &UniformSet {
        &self.instances[variant.index()]
    }

    /// Mutable uniform storage of a variant
    pub fn get_mut(&mut self, variant: VariantId) -> &mut UniformSet {
        &mut self.instances[variant.index()]
    }

    /// Bind `params` into the storage of `variant`
    pub fn bind(&mut self, variant: VariantId, params: &SandboxParameters) -> UniformSlots {
        bind(variant, params, self.get_mut(variant))
    }

    /// Iterate `(variant, uniforms)` pairs in table order
    pub fn iter(&self) -> impl Iterator<Item = (VariantId, &UniformSet)> {
        VariantId::ALL.into_iter().zip(self.instances.iter())
    }
}
