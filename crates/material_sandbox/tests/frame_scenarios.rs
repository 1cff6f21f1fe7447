//! Multi-frame editing sessions driven through the public API

use approx::assert_relative_eq;
use material_sandbox::prelude::*;

#[derive(Default)]
struct CountingLights {
    directional_updates: usize,
    spot_updates: usize,
    last_spot: Option<SpotLightState>,
}

impl LightingBackend for CountingLights {
    fn set_directional_light(&mut self, _entity: Entity, _state: &DirectionalLightState) {
        self.directional_updates += 1;
    }

    fn set_spot_light(&mut self, _entity: Entity, state: &SpotLightState) {
        self.spot_updates += 1;
        self.last_spot = Some(*state);
    }
}

struct Session {
    entities: EntityManager,
    scene: SceneRegistry,
    lights: CountingLights,
    sandbox: Sandbox,
    sun: Entity,
    spot: Entity,
}

impl Session {
    fn new(renderables: usize) -> Self {
        let mut entities = EntityManager::new();
        let sun = entities.create(EntityKind::DirectionalLight);
        let spot = entities.create(EntityKind::SpotLight);
        for _ in 0..renderables {
            entities.create(EntityKind::Renderable { primitives: 3 });
        }
        let mut scene = SceneRegistry::new();
        let mut sandbox = Sandbox::new(sun, spot);
        sandbox.setup(&mut scene, None);
        Self {
            entities,
            scene,
            lights: CountingLights::default(),
            sandbox,
            sun,
            spot,
        }
    }

    fn frame(&mut self) -> FrameOutput {
        let renderables = self.entities.renderables();
        self.sandbox.update_frame(&renderables, &mut self.scene, &mut self.lights)
    }
}

#[test]
fn test_refraction_round_trip_keeps_shared_values() {
    let mut session = Session::new(1);
    {
        let params = session.sandbox.params_mut();
        params.roughness = 0.35;
        params.clear_coat = 0.7;
        params.anisotropy = -0.4;
    }

    let opaque = session.frame();
    assert_eq!(opaque.variant, VariantId::LitOpaque);

    session.sandbox.params_mut().blending = BlendingMode::ThinRefraction;
    let thin = session.frame();
    assert_eq!(thin.variant, VariantId::ThinRefraction);
    assert!(thin.variant_changed);
    assert!(thin.uniforms.contains(UniformSlot::Transmission));
    assert!(!thin.uniforms.contains(UniformSlot::Metallic));

    session.sandbox.params_mut().refraction.screen_space_refraction = true;
    let thin_ss = session.frame();
    assert_eq!(thin_ss.variant, VariantId::ThinSsRefraction);

    for frame in [&opaque, &thin, &thin_ss] {
        assert_eq!(frame.uniforms.float(UniformSlot::Roughness), Some(0.35));
        assert_eq!(frame.uniforms.float(UniformSlot::ClearCoat), Some(0.7));
        assert_eq!(frame.uniforms.float(UniformSlot::Anisotropy), Some(-0.4));
    }

    // Nothing was removed or added besides the startup sun
    assert!(opaque.scene_commands.is_empty());
    assert!(thin.scene_commands.is_empty());
    assert!(thin_ss.scene_commands.is_empty());
}

#[test]
fn test_spot_light_toggle_issues_single_commands() {
    let mut session = Session::new(2);
    assert_eq!(session.scene.add_count(), 1);

    let first = session.frame();
    assert!(first.scene_commands.is_empty());

    session.sandbox.params_mut().spot_light_enabled = true;
    let second = session.frame();
    assert_eq!(
        second.scene_commands,
        vec![SceneCommand { entity: session.spot, action: ToggleAction::Add }]
    );
    assert!(session.scene.contains(session.spot));

    // Holding the toggle does not re-add
    let held = session.frame();
    assert!(held.scene_commands.is_empty());

    session.sandbox.params_mut().spot_light_enabled = false;
    let third = session.frame();
    assert_eq!(
        third.scene_commands,
        vec![SceneCommand { entity: session.spot, action: ToggleAction::Remove }]
    );
    assert!(!session.scene.contains(session.spot));
    assert!(session.scene.contains(session.sun));
    assert_eq!(session.scene.redundant_count(), 0);

    // State is pushed every frame whether or not the light is in the scene
    assert_eq!(session.lights.spot_updates, 4);
    assert_eq!(session.lights.directional_updates, 4);
}

#[test]
fn test_disabling_sun_at_startup_never_adds_it() {
    let mut session = Session::new(1);
    session.sandbox.params_mut().directional_light_enabled = false;
    let output = session.frame();
    assert_eq!(
        output.scene_commands,
        vec![SceneCommand { entity: session.sun, action: ToggleAction::Remove }]
    );
    assert_eq!(session.scene.entity_count(), 0);
}

#[test]
fn test_single_mode_edits_first_renderable_only() {
    let mut session = Session::new(3);
    let renderables = session.entities.renderables();

    let all = session.frame();
    assert_eq!(all.material_targets, renderables);

    session.sandbox.set_single_mode(true);
    let single = session.frame();
    assert_eq!(single.material_targets, vec![renderables[0]]);
}

#[test]
fn test_single_mode_target_survives_slot_reuse() {
    let mut session = Session::new(2);
    let original = session.entities.renderables();
    session.entities.destroy(original[0]);
    let replacement = session.entities.create(EntityKind::Renderable { primitives: 1 });

    session.sandbox.set_single_mode(true);
    let output = session.frame();
    assert_eq!(output.material_targets, vec![original[1]]);
    assert_eq!(session.entities.renderables(), vec![original[1], replacement]);
}

#[test]
fn test_spot_cone_follows_edits() {
    let mut session = Session::new(1);
    {
        let params = session.sandbox.params_mut();
        params.spot_light_cone_angle = 0.5;
        params.spot_light_cone_fade = 0.5;
    }
    session.frame();

    let spot = session.lights.last_spot.expect("spot state pushed");
    assert_relative_eq!(spot.inner_cone, 0.25);
    assert_relative_eq!(spot.outer_cone, 0.5);
}

#[test]
fn test_emissive_and_exposure_encoding() {
    let mut session = Session::new(1);
    {
        let params = session.sandbox.params_mut();
        params.emissive_color = Vec3::new(1.0, 1.0, 1.0);
        params.emissive_ev = 3.0;
        params.emissive_exposure_weight = 0.5;
    }
    let output = session.frame();

    let emissive = output.uniforms.float4(UniformSlot::Emissive).expect("emissive bound");
    assert_relative_eq!(emissive.x, 1.0, epsilon = 1e-5);
    assert_relative_eq!(emissive.w, 0.5);

    let ubo = MaterialUbo::from_uniforms(&output.uniforms);
    assert_eq!(ubo.as_bytes().len(), std::mem::size_of::<MaterialUbo>());
}

#[test]
fn test_preset_drives_frame() {
    let dir = std::env::temp_dir().join(format!("material_sandbox_preset_{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("velvet.ron");
    let path = path.to_str().unwrap();

    let mut preset = SandboxParameters::default();
    preset.material_model = MaterialModel::Cloth;
    preset.sheen_color = Vec3::new(1.0, 0.0, 0.0);
    preset.save_to_file(path).unwrap();

    let loaded = SandboxParameters::load_from_file(path).unwrap();
    let mut entities = EntityManager::new();
    let sun = entities.create(EntityKind::DirectionalLight);
    let spot = entities.create(EntityKind::SpotLight);
    entities.create(EntityKind::Renderable { primitives: 1 });

    let mut scene = SceneRegistry::new();
    let mut sandbox = Sandbox::with_params(loaded, sun, spot);
    let output = sandbox.update_frame(&entities.renderables(), &mut scene, &mut CountingLights::default());

    assert_eq!(output.variant, VariantId::Cloth);
    assert!(!output.uniforms.contains(UniformSlot::Emissive));
    assert_eq!(output.uniforms.float3(UniformSlot::SheenColor), Some(Vec3::new(1.0, 0.0, 0.0)));

    std::fs::remove_dir_all(&dir).ok();
}
