//! Material Uniform Buffer Object for GPU data transfer
//!
//! Packs a bound [`UniformSet`] into a fixed std140-compatible block the
//! render collaborator uploads for the active variant. Slots that were not
//! bound keep neutral values; `slot_mask` tells the shader which are live.

use bytemuck::{Pod, Zeroable};

use super::uniforms::{UniformSet, UniformSlot};

/// Sandbox material uniform data for GPU
///
/// Layout must match the corresponding uniform block of the sandbox
/// materials. Every member is a 16-byte vector.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct MaterialUbo {
    /// Linear base color (rgb) + alpha
    pub base_color: [f32; 4],
    /// Emissive (rgb) + exposure weight
    pub emissive: [f32; 4],
    /// Roughness, metallic, reflectance, anisotropy
    pub roughness_metallic_reflectance_anisotropy: [f32; 4],
    /// Clear coat, clear coat roughness, transmission, thickness
    pub clear_coat_transmission_thickness: [f32; 4],
    /// Absorption (rgb) + index of refraction
    pub absorption_ior: [f32; 4],
    /// Specular color (rgb) + glossiness
    pub specular_glossiness: [f32; 4],
    /// Subsurface color (rgb) + subsurface power
    pub subsurface: [f32; 4],
    /// Sheen color (rgb), w unused
    pub sheen: [f32; 4],
    /// Specular AA variance, specular AA threshold, unused, unused
    pub specular_anti_aliasing: [f32; 4],
    /// Bound slots as a bitmask in x, yzw unused
    pub slot_mask: [u32; 4],
}

impl MaterialUbo {
    /// Pack a bound uniform set
    pub fn from_uniforms(uniforms: &UniformSet) -> Self {
        let scalar = |slot: UniformSlot, default: f32| uniforms.float(slot).unwrap_or(default);
        let rgb = |slot: UniformSlot| uniforms.float3(slot).map_or([0.0; 3], |v| [v.x, v.y, v.z]);
        let rgb_w = |slot: UniformSlot, w: f32| {
            let [x, y, z] = rgb(slot);
            [x, y, z, w]
        };

        let emissive = uniforms
            .float4(UniformSlot::Emissive)
            .map_or([0.0, 0.0, 0.0, 1.0], |v| [v.x, v.y, v.z, v.w]);

        Self {
            base_color: rgb_w(UniformSlot::BaseColor, scalar(UniformSlot::Alpha, 1.0)),
            emissive,
            roughness_metallic_reflectance_anisotropy: [
                scalar(UniformSlot::Roughness, 1.0),
                scalar(UniformSlot::Metallic, 0.0),
                scalar(UniformSlot::Reflectance, 0.5),
                scalar(UniformSlot::Anisotropy, 0.0),
            ],
            clear_coat_transmission_thickness: [
                scalar(UniformSlot::ClearCoat, 0.0),
                scalar(UniformSlot::ClearCoatRoughness, 0.0),
                scalar(UniformSlot::Transmission, 0.0),
                scalar(UniformSlot::Thickness, 0.0),
            ],
            absorption_ior: rgb_w(UniformSlot::Absorption, scalar(UniformSlot::Ior, 1.5)),
            specular_glossiness: rgb_w(UniformSlot::SpecularColor, scalar(UniformSlot::Glossiness, 0.0)),
            subsurface: rgb_w(UniformSlot::SubsurfaceColor, scalar(UniformSlot::SubsurfacePower, 0.0)),
            sheen: rgb_w(UniformSlot::SheenColor, 0.0),
            specular_anti_aliasing: [
                scalar(UniformSlot::SpecularAntiAliasingVariance, 0.0),
                scalar(UniformSlot::SpecularAntiAliasingThreshold, 0.0),
                0.0,
                0.0,
            ],
            slot_mask: [uniforms.written().bits(), 0, 0, 0],
        }
    }

    /// Byte view for GPU upload
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::material::{bind, BlendingMode, SandboxParameters, VariantId};

    #[test]
    fn test_material_ubo_size() {
        assert_eq!(std::mem::size_of::<MaterialUbo>(), 160); // 10 * 16 bytes
    }

    #[test]
    fn test_pack_lit_opaque() {
        let params = SandboxParameters {
            roughness: 0.3,
            metallic: 0.9,
            anisotropy: -0.5,
            ..Default::default()
        };
        let mut uniforms = UniformSet::new();
        bind(VariantId::LitOpaque, &params, &mut uniforms);
        let ubo = MaterialUbo::from_uniforms(&uniforms);

        assert_eq!(ubo.roughness_metallic_reflectance_anisotropy, [0.3, 0.9, 0.5, -0.5]);
        // Opaque never binds alpha
        assert_eq!(ubo.base_color[3], 1.0);
        assert_eq!(ubo.slot_mask[0], uniforms.written().bits());
        assert_eq!(ubo.as_bytes().len(), 160);
    }

    #[test]
    fn test_pack_refraction() {
        let params = SandboxParameters {
            blending: BlendingMode::SolidRefraction,
            ior: 1.33,
            alpha: 0.5,
            ..Default::default()
        };
        let mut uniforms = UniformSet::new();
        bind(VariantId::SolidRefraction, &params, &mut uniforms);
        let ubo = MaterialUbo::from_uniforms(&uniforms);

        assert_eq!(ubo.absorption_ior[3], 1.33);
        assert_eq!(ubo.base_color[3], 0.5);
        // White transmittance absorbs nothing
        assert_eq!(&ubo.absorption_ior[..3], &[0.0, 0.0, 0.0]);
    }
}
