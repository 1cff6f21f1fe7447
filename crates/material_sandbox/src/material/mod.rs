//! Material system
//!
//! Material model selection, variant resolution, the editable parameter
//! record, and binding of that record into per-variant uniform storage.

pub mod binder;
pub mod instances;
pub mod model;
pub mod params;
pub mod ubo;
pub mod uniforms;
pub mod variant;

// Re-export commonly used types
pub use binder::{applicable_slots, bind, slot_value};
pub use instances::MaterialInstances;
pub use model::{BlendingMode, MaterialModel, RefractionOptions};
pub use params::SandboxParameters;
pub use ubo::MaterialUbo;
pub use uniforms::{UniformSet, UniformSlot, UniformSlots, UniformValue};
pub use variant::{resolve, VariantId};
