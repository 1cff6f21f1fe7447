//! Parameter binding
//!
//! Pushes the subset of the parameter record that applies to a variant into
//! that variant's uniform slots. Which subset applies is a pure function of
//! the variant's model and the blending mode ([`applicable_slots`]); how each
//! slot is encoded is a pure function of the record ([`slot_value`]).

use crate::foundation::color::{absorption_at_distance, luminance, srgb_to_linear};

use super::model::{BlendingMode, MaterialModel};
use super::params::SandboxParameters;
use super::uniforms::{UniformSet, UniformSlot, UniformSlots, UniformValue};
use super::variant::VariantId;

/// Slots written for a model under a blending mode
///
/// `blending` only matters for [`MaterialModel::Lit`].
pub fn applicable_slots(model: MaterialModel, blending: BlendingMode) -> UniformSlots {
    let mut slots = UniformSlots::BASE_COLOR;

    if model != MaterialModel::Cloth {
        slots |= UniformSlots::EMISSIVE;
    }
    if model != MaterialModel::Unlit {
        slots |= UniformSlots::SPECULAR_AA;
    }

    slots | match model {
        MaterialModel::Unlit => UniformSlots::empty(),
        MaterialModel::Lit => lit_slots(blending),
        MaterialModel::SpecularGlossiness => {
            UniformSlots::GLOSSINESS
                | UniformSlots::SPECULAR_COLOR
                | UniformSlots::REFLECTANCE
                | UniformSlots::CLEAR_COAT_LAYER
                | UniformSlots::ANISOTROPY
        }
        MaterialModel::Subsurface => {
            UniformSlots::ROUGHNESS
                | UniformSlots::METALLIC
                | UniformSlots::REFLECTANCE
                | UniformSlots::THICKNESS
                | UniformSlots::SUBSURFACE_POWER
                | UniformSlots::SUBSURFACE_COLOR
        }
        MaterialModel::Cloth => {
            UniformSlots::ROUGHNESS | UniformSlots::SHEEN_COLOR | UniformSlots::SUBSURFACE_COLOR
        }
    }
}

fn lit_slots(blending: BlendingMode) -> UniformSlots {
    let mut slots = UniformSlots::ROUGHNESS | UniformSlots::CLEAR_COAT_LAYER | UniformSlots::ANISOTROPY;

    if blending.has_refraction() {
        // Refraction takes over metallic and reflectance
        slots |= UniformSlots::REFRACTION;
    } else {
        slots |= UniformSlots::METALLIC | UniformSlots::REFLECTANCE;
    }
    if blending.uses_alpha() {
        slots |= UniformSlots::ALPHA;
    }
    slots
}

/// Encoded value of one slot for the current record
pub fn slot_value(slot: UniformSlot, params: &SandboxParameters) -> UniformValue {
    use UniformValue::{Float, Float3, Float4};

    match slot {
        UniformSlot::BaseColor => Float3(srgb_to_linear(params.base_color)),
        UniformSlot::Emissive => {
            let rgb = srgb_to_linear(params.emissive_color) * luminance(params.emissive_ev);
            Float4(rgb.push(params.emissive_exposure_weight))
        }
        UniformSlot::Roughness => Float(params.roughness),
        UniformSlot::Metallic => Float(params.metallic),
        UniformSlot::Reflectance => Float(params.reflectance),
        UniformSlot::ClearCoat => Float(params.clear_coat),
        UniformSlot::ClearCoatRoughness => Float(params.clear_coat_roughness),
        UniformSlot::Anisotropy => Float(params.anisotropy),
        UniformSlot::Alpha => Float(params.alpha),
        UniformSlot::Absorption => Float3(absorption_at_distance(
            srgb_to_linear(params.transmittance_color),
            params.distance,
        )),
        UniformSlot::Ior => Float(params.ior),
        UniformSlot::Transmission => Float(params.transmission),
        UniformSlot::Thickness => Float(params.thickness),
        UniformSlot::Glossiness => Float(params.glossiness),
        UniformSlot::SpecularColor => Float3(params.specular_color),
        UniformSlot::SubsurfacePower => Float(params.subsurface_power),
        UniformSlot::SubsurfaceColor => Float3(srgb_to_linear(params.subsurface_color)),
        UniformSlot::SheenColor => Float3(srgb_to_linear(params.sheen_color)),
        UniformSlot::SpecularAntiAliasingVariance => Float(params.specular_anti_aliasing_variance),
        UniformSlot::SpecularAntiAliasingThreshold => Float(params.specular_anti_aliasing_threshold),
    }
}

/// Rewrite `uniforms` with the fields of `params` that apply to `variant`
///
/// The set is cleared first: binding is a full rewrite, never a diff.
/// Returns the slots that were written.
pub fn bind(variant: VariantId, params: &SandboxParameters, uniforms: &mut UniformSet) -> UniformSlots {
    let slots = applicable_slots(variant.model(), params.blending);

    uniforms.clear();
    for slot in slots.slots() {
        uniforms.set(slot, slot_value(slot, params));
    }

    log::trace!("Bound {} uniforms for {:?}", uniforms.len(), variant);
    slots
}
