//! # Material Sandbox
//!
//! Interactive PBR material editing core. Every frame the UI edits a single
//! parameter record; the sandbox resolves which material variant to draw,
//! binds the uniforms that variant declares, keeps the optional lights in the
//! scene in step with their toggles and pushes light and view state to the
//! renderer.
//!
//! ## Features
//!
//! - **Variant Resolution**: Eleven precompiled material variants selected from
//!   shading model, blending mode and refraction settings
//! - **Uniform Binding**: Per-variant uniform sets with color space and
//!   photometric conversions applied
//! - **Scene Toggles**: Optional lights added and removed without redundant
//!   membership calls
//! - **Presets**: Parameter records saved and loaded as TOML or RON
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use material_sandbox::prelude::*;
//!
//! let mut entities = EntityManager::new();
//! let sun = entities.create(EntityKind::DirectionalLight);
//! let spot = entities.create(EntityKind::SpotLight);
//! entities.create(EntityKind::Renderable { primitives: 1 });
//!
//! struct NoLights;
//! impl LightingBackend for NoLights {
//!     fn set_directional_light(&mut self, _: Entity, _: &DirectionalLightState) {}
//!     fn set_spot_light(&mut self, _: Entity, _: &SpotLightState) {}
//! }
//!
//! let mut scene = SceneRegistry::new();
//! let mut sandbox = Sandbox::new(sun, spot);
//! sandbox.setup(&mut scene, None);
//!
//! sandbox.params_mut().material_model = MaterialModel::Cloth;
//! let frame = sandbox.update_frame(&entities.renderables(), &mut scene, &mut NoLights);
//! assert_eq!(frame.variant, VariantId::Cloth);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod foundation;
pub mod config;
pub mod material;
pub mod scene;
pub mod lighting;
pub mod render;

mod sandbox;

pub use sandbox::{material_targets, FrameOutput, Sandbox};

/// Common imports for sandbox users
pub mod prelude {
    pub use crate::{
        config::{Backend, CameraMode, Config, ConfigError, ConfigFormat, SandboxConfig},
        foundation::math::{Mat3, Vec3, Vec4},
        lighting::{
            DirectionalLightState, IblEstimate, IndirectLightState, LightingBackend, ShadowOptions,
            SpotLightState,
        },
        material::{
            BlendingMode, MaterialInstances, MaterialModel, MaterialUbo, RefractionOptions,
            SandboxParameters, UniformSet, UniformSlot, UniformSlots, UniformValue, VariantId,
        },
        render::ViewOptions,
        scene::{
            Entity, EntityKind, EntityManager, EntityToggle, SceneCommand, SceneMembership,
            SceneRegistry, ToggleAction,
        },
        FrameOutput, Sandbox,
    };
}
