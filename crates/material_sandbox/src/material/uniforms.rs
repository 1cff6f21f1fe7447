//! Named uniform slots and per-variant uniform storage

use bitflags::bitflags;

use crate::foundation::math::{Vec3, Vec4};

/// A named input parameter of a material variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UniformSlot {
    /// Linear base color
    BaseColor,
    /// Linear emissive color scaled by luminance, exposure weight in alpha
    Emissive,
    /// Perceptual roughness
    Roughness,
    /// Metalness
    Metallic,
    /// Dielectric reflectance
    Reflectance,
    /// Clear coat strength
    ClearCoat,
    /// Clear coat roughness
    ClearCoatRoughness,
    /// Anisotropy
    Anisotropy,
    /// Opacity
    Alpha,
    /// Absorption coefficients of the refracting medium
    Absorption,
    /// Index of refraction
    Ior,
    /// Transmission factor
    Transmission,
    /// Thickness
    Thickness,
    /// Glossiness
    Glossiness,
    /// Specular color
    SpecularColor,
    /// Subsurface scattering power
    SubsurfacePower,
    /// Linear subsurface color
    SubsurfaceColor,
    /// Linear sheen color
    SheenColor,
    /// Specular anti-aliasing variance
    SpecularAntiAliasingVariance,
    /// Specular anti-aliasing threshold
    SpecularAntiAliasingThreshold,
}

impl UniformSlot {
    /// Number of slots
    pub const COUNT: usize = 20;

    /// Every slot, in bit order
    pub const ALL: [Self; Self::COUNT] = [
        Self::BaseColor,
        Self::Emissive,
        Self::Roughness,
        Self::Metallic,
        Self::Reflectance,
        Self::ClearCoat,
        Self::ClearCoatRoughness,
        Self::Anisotropy,
        Self::Alpha,
        Self::Absorption,
        Self::Ior,
        Self::Transmission,
        Self::Thickness,
        Self::Glossiness,
        Self::SpecularColor,
        Self::SubsurfacePower,
        Self::SubsurfaceColor,
        Self::SheenColor,
        Self::SpecularAntiAliasingVariance,
        Self::SpecularAntiAliasingThreshold,
    ];

    /// Parameter name as declared by the material
    pub fn name(self) -> &'static str {
        match self {
            Self::BaseColor => "baseColor",
            Self::Emissive => "emissive",
            Self::Roughness => "roughness",
            Self::Metallic => "metallic",
            Self::Reflectance => "reflectance",
            Self::ClearCoat => "clearCoat",
            Self::ClearCoatRoughness => "clearCoatRoughness",
            Self::Anisotropy => "anisotropy",
            Self::Alpha => "alpha",
            Self::Absorption => "absorption",
            Self::Ior => "ior",
            Self::Transmission => "transmission",
            Self::Thickness => "thickness",
            Self::Glossiness => "glossiness",
            Self::SpecularColor => "specularColor",
            Self::SubsurfacePower => "subsurfacePower",
            Self::SubsurfaceColor => "subsurfaceColor",
            Self::SheenColor => "sheenColor",
            Self::SpecularAntiAliasingVariance => "_specularAntiAliasingVariance",
            Self::SpecularAntiAliasingThreshold => "_specularAntiAliasingThreshold",
        }
    }

    /// Bit of this slot in a [`UniformSlots`] set
    pub fn flag(self) -> UniformSlots {
        UniformSlots::from_bits_truncate(1 << self as u32)
    }
}

bitflags! {
    /// A set of uniform slots
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct UniformSlots: u32 {
        /// [`UniformSlot::BaseColor`]
        const BASE_COLOR = 1 << 0;
        /// [`UniformSlot::Emissive`]
        const EMISSIVE = 1 << 1;
        /// [`UniformSlot::Roughness`]
        const ROUGHNESS = 1 << 2;
        /// [`UniformSlot::Metallic`]
        const METALLIC = 1 << 3;
        /// [`UniformSlot::Reflectance`]
        const REFLECTANCE = 1 << 4;
        /// [`UniformSlot::ClearCoat`]
        const CLEAR_COAT = 1 << 5;
        /// [`UniformSlot::ClearCoatRoughness`]
        const CLEAR_COAT_ROUGHNESS = 1 << 6;
        /// [`UniformSlot::Anisotropy`]
        const ANISOTROPY = 1 << 7;
        /// [`UniformSlot::Alpha`]
        const ALPHA = 1 << 8;
        /// [`UniformSlot::Absorption`]
        const ABSORPTION = 1 << 9;
        /// [`UniformSlot::Ior`]
        const IOR = 1 << 10;
        /// [`UniformSlot::Transmission`]
        const TRANSMISSION = 1 << 11;
        /// [`UniformSlot::Thickness`]
        const THICKNESS = 1 << 12;
        /// [`UniformSlot::Glossiness`]
        const GLOSSINESS = 1 << 13;
        /// [`UniformSlot::SpecularColor`]
        const SPECULAR_COLOR = 1 << 14;
        /// [`UniformSlot::SubsurfacePower`]
        const SUBSURFACE_POWER = 1 << 15;
        /// [`UniformSlot::SubsurfaceColor`]
        const SUBSURFACE_COLOR = 1 << 16;
        /// [`UniformSlot::SheenColor`]
        const SHEEN_COLOR = 1 << 17;
        /// [`UniformSlot::SpecularAntiAliasingVariance`]
        const SPECULAR_AA_VARIANCE = 1 << 18;
        /// [`UniformSlot::SpecularAntiAliasingThreshold`]
        const SPECULAR_AA_THRESHOLD = 1 << 19;

        /// Clear coat layer
        const CLEAR_COAT_LAYER = Self::CLEAR_COAT.bits() | Self::CLEAR_COAT_ROUGHNESS.bits();
        /// Specular anti-aliasing controls
        const SPECULAR_AA = Self::SPECULAR_AA_VARIANCE.bits() | Self::SPECULAR_AA_THRESHOLD.bits();
        /// Refraction inputs
        const REFRACTION = Self::ABSORPTION.bits()
            | Self::IOR.bits()
            | Self::TRANSMISSION.bits()
            | Self::THICKNESS.bits();
    }
}

impl UniformSlots {
    /// Iterate the individual slots in this set, in bit order
    pub fn slots(self) -> impl Iterator<Item = UniformSlot> {
        UniformSlot::ALL.into_iter().filter(move |slot| self.contains(slot.flag()))
    }
}

/// Value written to a uniform slot
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UniformValue {
    /// Scalar
    Float(f32),
    /// Three-component vector or RGB color
    Float3(Vec3),
    /// Four-component vector or RGBA color
    Float4(Vec4),
}

impl UniformValue {
    /// Scalar payload, if this is a scalar
    pub fn as_float(&self) -> Option<f32> {
        match *self {
            Self::Float(v) => Some(v),
            _ => None,
        }
    }

    /// Vector payload, if this is a three-component value
    pub fn as_float3(&self) -> Option<Vec3> {
        match *self {
            Self::Float3(v) => Some(v),
            _ => None,
        }
    }

    /// Vector payload, if this is a four-component value
    pub fn as_float4(&self) -> Option<Vec4> {
        match *self {
            Self::Float4(v) => Some(v),
            _ => None,
        }
    }
}

/// Uniform storage of one material variant
///
/// Tracks which slots hold a value so a consumer can tell a slot that was
/// never written from one that was written with zero.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UniformSet {
    values: [Option<UniformValue>; UniformSlot::COUNT],
    written: UniformSlots,
}

impl UniformSet {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Write a slot
    pub fn set(&mut self, slot: UniformSlot, value: UniformValue) {
        self.values[slot as usize] = Some(value);
        self.written |= slot.flag();
    }

    /// Read a slot
    pub fn get(&self, slot: UniformSlot) -> Option<UniformValue> {
        self.values[slot as usize]
    }

    /// Read a scalar slot
    pub fn float(&self, slot: UniformSlot) -> Option<f32> {
        self.get(slot).and_then(|v| v.as_float())
    }

    /// Read a three-component slot
    pub fn float3(&self, slot: UniformSlot) -> Option<Vec3> {
        self.get(slot).and_then(|v| v.as_float3())
    }

    /// Read a four-component slot
    pub fn float4(&self, slot: UniformSlot) -> Option<Vec4> {
        self.get(slot).and_then(|v| v.as_float4())
    }

    /// Whether a slot holds a value
    pub fn contains(&self, slot: UniformSlot) -> bool {
        self.written.contains(slot.flag())
    }

    /// Slots that hold a value
    pub fn written(&self) -> UniformSlots {
        self.written
    }

    /// Number of slots that hold a value
    pub fn len(&self) -> usize {
        self.written.bits().count_ones() as usize
    }

    /// Whether no slot holds a value
    pub fn is_empty(&self) -> bool {
        self.written.is_empty()
    }

    /// Drop every value
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Iterate `(slot, value)` pairs in slot order
    pub fn iter(&self) -> impl Iterator<Item = (UniformSlot, UniformValue)> + '_ {
        self.written.slots().filter_map(move |slot| self.get(slot).map(|value| (slot, value)))
    }
}
