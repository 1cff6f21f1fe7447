//! Sandbox context and per-frame orchestration
//!
//! [`Sandbox`] owns everything that persists across frames: the parameter
//! record, per-variant uniform storage and the presence state of the optional
//! lights. Collaborators are borrowed for the duration of a single
//! [`Sandbox::update_frame`] call, which runs one strictly sequential
//! resolve -> bind -> reconcile -> sync pass.

use crate::config::SandboxConfig;
use crate::lighting::{
    DirectionalLightState, IblEstimate, IndirectLightState, LightingBackend, SpotLightState,
};
use crate::material::{MaterialInstances, SandboxParameters, UniformSet, UniformSlots, VariantId};
use crate::render::ViewOptions;
use crate::scene::{Entity, EntityToggle, SceneCommand, SceneMembership};

/// Everything a frame pass produced for the collaborators
#[derive(Debug, Clone)]
pub struct FrameOutput {
    /// Variant to draw every targeted primitive with
    pub variant: VariantId,
    /// Whether the variant differs from the previous frame's
    pub variant_changed: bool,
    /// Uniforms bound to `variant` this frame
    pub uniforms: UniformSet,
    /// Slots written this frame
    pub bound_slots: UniformSlots,
    /// Renderables whose primitives all receive `variant`
    pub material_targets: Vec<Entity>,
    /// Cast-shadows flag for every renderable
    pub cast_shadows: bool,
    /// Membership changes issued this frame
    pub scene_commands: Vec<SceneCommand>,
    /// Directional light state pushed this frame
    pub directional_light: DirectionalLightState,
    /// Spot light state pushed this frame
    pub spot_light: SpotLightState,
    /// Indirect light state, when an IBL is loaded
    pub indirect_light: Option<IndirectLightState>,
    /// View options for the pre-render phase
    pub view: ViewOptions,
}

/// Renderables that receive the edited material
///
/// In single mode only the first renderable is edited; the others keep the
/// materials they were loaded with.
pub fn material_targets(renderables: &[Entity], single_mode: bool) -> &[Entity] {
    if single_mode {
        &renderables[..renderables.len().min(1)]
    } else {
        renderables
    }
}

/// Explicitly owned sandbox state
#[derive(Debug)]
pub struct Sandbox {
    params: SandboxParameters,
    instances: MaterialInstances,
    active_variant: Option<VariantId>,
    directional_light: EntityToggle,
    spot_light: EntityToggle,
    single_mode: bool,
    frame: u64,
}

impl Sandbox {
    /// Create the sandbox with default parameters
    ///
    /// Neither light is in the scene yet; the first reconciliation adds the
    /// ones that are enabled.
    pub fn new(directional_light: Entity, spot_light: Entity) -> Self {
        Self::with_params(SandboxParameters::default(), directional_light, spot_light)
    }

    /// Create the sandbox from an existing parameter record
    pub fn with_params(params: SandboxParameters, directional_light: Entity, spot_light: Entity) -> Self {
        Self {
            params,
            instances: MaterialInstances::new(),
            active_variant: None,
            directional_light: EntityToggle::new(directional_light),
            spot_light: EntityToggle::new(spot_light),
            single_mode: false,
            frame: 0,
        }
    }

    /// Apply the application configuration
    pub fn configure(&mut self, config: &SandboxConfig) {
        self.single_mode = config.single_mode;
    }

    /// One-time setup before the first frame
    ///
    /// Seeds the sun from the IBL when one is available and brings the
    /// enabled lights into the scene.
    pub fn setup(&mut self, scene: &mut dyn SceneMembership, ibl: Option<&IblEstimate>) -> Vec<SceneCommand> {
        if let Some(estimate) = ibl {
            self.params.seed_from_ibl(estimate);
            log::info!("Seeded directional light from IBL: intensity {}", estimate.intensity);
        }
        self.reconcile_lights(scene)
    }

    /// The parameter record
    pub fn params(&self) -> &SandboxParameters {
        &self.params
    }

    /// The parameter record, for the UI edit phase
    pub fn params_mut(&mut self) -> &mut SandboxParameters {
        &mut self.params
    }

    /// Per-variant uniform storage
    pub fn instances(&self) -> &MaterialInstances {
        &self.instances
    }

    /// Variant bound by the last frame
    pub fn active_variant(&self) -> Option<VariantId> {
        self.active_variant
    }

    /// Whether the directional light is in the scene
    pub fn directional_light_present(&self) -> bool {
        self.directional_light.is_present()
    }

    /// Whether the spot light is in the scene
    pub fn spot_light_present(&self) -> bool {
        self.spot_light.is_present()
    }

    /// Whether only the first renderable is edited
    pub fn single_mode(&self) -> bool {
        self.single_mode
    }

    /// Restrict editing to the first renderable
    pub fn set_single_mode(&mut self, single_mode: bool) {
        self.single_mode = single_mode;
    }

    /// Frames processed so far
    pub fn frame_count(&self) -> u64 {
        self.frame
    }

    /// Run one frame pass
    ///
    /// Must be called after the UI has applied this frame's edits to the
    /// record.
    pub fn update_frame(
        &mut self,
        renderables: &[Entity],
        scene: &mut dyn SceneMembership,
        lighting: &mut dyn LightingBackend,
    ) -> FrameOutput {
        self.frame += 1;

        // Resolve
        let variant = self.params.variant();
        let variant_changed = self.active_variant != Some(variant);
        if variant_changed {
            match self.active_variant {
                Some(previous) => log::info!("Material variant {:?} -> {:?}", previous, variant),
                None => log::info!("Material variant {:?}", variant),
            }
        }
        self.active_variant = Some(variant);

        // Bind
        let bound_slots = self.instances.bind(variant, &self.params);

        // Reconcile
        let scene_commands = self.reconcile_lights(scene);

        // Sync lights
        let directional_light = DirectionalLightState::from_params(&self.params);
        lighting.set_directional_light(self.directional_light.entity(), &directional_light);

        let indirect_light = lighting.has_indirect_light().then(|| {
            let state = IndirectLightState::from_params(&self.params);
            lighting.set_indirect_light(&state);
            state
        });

        let spot_light = SpotLightState::from_params(&self.params);
        lighting.set_spot_light(self.spot_light.entity(), &spot_light);

        log::trace!(
            "Frame {}: {:?} with {} uniforms, {} scene commands",
            self.frame,
            variant,
            bound_slots.bits().count_ones(),
            scene_commands.len()
        );

        FrameOutput {
            variant,
            variant_changed,
            uniforms: self.instances.get(variant).clone(),
            bound_slots,
            material_targets: material_targets(renderables, self.single_mode).to_vec(),
            cast_shadows: self.params.cast_shadows,
            scene_commands,
            directional_light,
            spot_light,
            indirect_light,
            view: ViewOptions::from_params(&self.params),
        }
    }

    fn reconcile_lights(&mut self, scene: &mut dyn SceneMembership) -> Vec<SceneCommand> {
        let requests = [
            (&mut self.directional_light, self.params.directional_light_enabled, "Directional"),
            (&mut self.spot_light, self.params.spot_light_enabled, "Spot"),
        ];

        let mut commands = Vec::new();
        for (toggle, enabled, label) in requests {
            if let Some(command) = toggle.sync_command(enabled, scene) {
                log::debug!("{} light {:?}", label, command.action);
                commands.push(command);
            }
        }
        commands
    }
}
