//! Headless material sandbox
//!
//! Plays a scripted edit session against an in-memory scene and logs what
//! each frame hands to the renderer. The configuration file path is the
//! first positional argument; without one the built-in defaults are used.

use material_sandbox::prelude::*;

/// Application errors
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    /// Configuration could not be loaded or is invalid
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A scripted frame did not produce the expected result
    #[error("Frame {frame} ({label}): {reason}")]
    Script {
        /// Frame number
        frame: u64,
        /// Script step label
        label: &'static str,
        /// What went wrong
        reason: String,
    },
}

/// Lighting collaborator that logs what it receives
struct LoggingLights {
    ibl_loaded: bool,
}

impl LightingBackend for LoggingLights {
    fn set_directional_light(&mut self, _entity: Entity, state: &DirectionalLightState) {
        log::trace!(
            "Sun: {:.0} lux toward ({:.2}, {:.2}, {:.2})",
            state.intensity,
            state.direction.x,
            state.direction.y,
            state.direction.z
        );
    }

    fn set_spot_light(&mut self, _entity: Entity, state: &SpotLightState) {
        log::trace!(
            "Spot: {:.0} lm, cone {:.3}..{:.3}",
            state.intensity,
            state.inner_cone,
            state.outer_cone
        );
    }

    fn set_indirect_light(&mut self, state: &IndirectLightState) {
        log::trace!("IBL: intensity {:.0}", state.intensity);
    }

    fn has_indirect_light(&self) -> bool {
        self.ibl_loaded
    }
}

/// One scripted UI edit and the variant it should select
struct ScriptStep {
    label: &'static str,
    edit: fn(&mut SandboxParameters),
    expected: VariantId,
}

fn script() -> Vec<ScriptStep> {
    vec![
        ScriptStep {
            label: "defaults",
            edit: |_| {},
            expected: VariantId::LitOpaque,
        },
        ScriptStep {
            label: "thin refraction",
            edit: |p| {
                p.blending = BlendingMode::ThinRefraction;
                p.transmission = 0.9;
            },
            expected: VariantId::ThinRefraction,
        },
        ScriptStep {
            label: "screen-space refraction",
            edit: |p| p.refraction.screen_space_refraction = true,
            expected: VariantId::ThinSsRefraction,
        },
        ScriptStep {
            label: "spot light on",
            edit: |p| p.spot_light_enabled = true,
            expected: VariantId::ThinSsRefraction,
        },
        ScriptStep {
            label: "cloth",
            edit: |p| {
                p.material_model = MaterialModel::Cloth;
                p.sheen_color = Vec3::new(0.9, 0.2, 0.3);
            },
            expected: VariantId::Cloth,
        },
        ScriptStep {
            label: "spot light off, sun off",
            edit: |p| {
                p.spot_light_enabled = false;
                p.directional_light_enabled = false;
            },
            expected: VariantId::Cloth,
        },
        ScriptStep {
            label: "back to lit",
            edit: |p| {
                p.material_model = MaterialModel::Lit;
                p.blending = BlendingMode::Opaque;
                p.directional_light_enabled = true;
            },
            expected: VariantId::LitOpaque,
        },
    ]
}

/// Model and blending as the UI labels them
fn describe_material(params: &SandboxParameters) -> String {
    if params.material_model.supports_blending() {
        format!("{} / {}", params.material_model.label(), params.blending.label())
    } else {
        params.material_model.label().to_string()
    }
}

fn load_config() -> Result<SandboxConfig, AppError> {
    let config = match std::env::args().nth(1) {
        Some(path) => {
            log::info!("Loading configuration from {}", path);
            SandboxConfig::load_from_file(&path)?
        }
        None => {
            log::info!("No configuration given, using defaults");
            SandboxConfig {
                meshes: vec!["teapot.obj".into()],
                ..SandboxConfig::default()
            }
        }
    };
    config.validate()?;
    Ok(config)
}

fn run() -> Result<(), AppError> {
    let config = load_config()?;
    log::info!(
        "{}: backend {}, camera {}, {} mesh(es)",
        config.title,
        config.backend(),
        config.camera_mode(),
        config.meshes.len()
    );

    let mut entities = EntityManager::new();
    let sun = entities.create(EntityKind::DirectionalLight);
    let spot = entities.create(EntityKind::SpotLight);
    for mesh in &config.meshes {
        let entity = entities.create(EntityKind::Renderable { primitives: 1 });
        log::debug!("Renderable {:?} for {}", entity, mesh.display());
    }

    let mut scene = SceneRegistry::new();
    let mut lights = LoggingLights {
        ibl_loaded: config.ibl_directory.is_some(),
    };

    let mut sandbox = Sandbox::new(sun, spot);
    sandbox.configure(&config);
    for command in sandbox.setup(&mut scene, None) {
        log::info!("Setup: {:?} {:?}", command.action, command.entity);
    }

    let renderables = entities.renderables();
    for step in script() {
        (step.edit)(sandbox.params_mut());
        let frame = sandbox.update_frame(&renderables, &mut scene, &mut lights);

        if frame.variant != step.expected {
            return Err(AppError::Script {
                frame: sandbox.frame_count(),
                label: step.label,
                reason: format!("expected {:?}, got {:?}", step.expected, frame.variant),
            });
        }

        let ubo = MaterialUbo::from_uniforms(&frame.uniforms);
        log::info!(
            "Frame {} ({}): {} as {} [{}], {} uniforms, {} bytes, {} target(s), {} scene command(s), EV100 {:.2}",
            sandbox.frame_count(),
            step.label,
            describe_material(sandbox.params()),
            frame.variant.package_name(),
            if frame.variant_changed { "changed" } else { "kept" },
            frame.uniforms.len(),
            ubo.as_bytes().len(),
            frame.material_targets.len(),
            frame.scene_commands.len(),
            frame.view.exposure.ev100()
        );
        for (slot, value) in frame.uniforms.iter() {
            log::debug!("  {} = {:?}", slot.name(), value);
        }
    }

    log::info!(
        "Session finished: {} entities in scene, {} redundant membership calls",
        scene.entity_count(),
        scene.redundant_count()
    );
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    material_sandbox::foundation::logging::init_with_default("info");

    log::info!("Starting material sandbox");

    match run() {
        Ok(()) => {
            log::info!("Material sandbox completed successfully");
            Ok(())
        }
        Err(e) => {
            log::error!("Material sandbox failed: {}", e);
            Err(e.into())
        }
    }
}
