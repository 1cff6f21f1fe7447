//! Precompiled material variants and variant resolution

use super::model::{BlendingMode, MaterialModel};

/// Identifier of one precompiled material variant
///
/// This is the cross product of model, blending and refraction technique,
/// reduced to the combinations that actually ship as materials.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VariantId {
    /// Unlit model
    Unlit,
    /// Lit model, opaque
    LitOpaque,
    /// Lit model, transparent blending
    Transparent,
    /// Lit model, fade blending
    Fade,
    /// Lit model, thin refraction from the IBL
    ThinRefraction,
    /// Lit model, thin screen-space refraction
    ThinSsRefraction,
    /// Lit model, solid refraction from the IBL
    SolidRefraction,
    /// Lit model, solid screen-space refraction
    SolidSsRefraction,
    /// Subsurface model
    Subsurface,
    /// Cloth model
    Cloth,
    /// Specular-glossiness model
    SpecGloss,
}

impl VariantId {
    /// Number of variants
    pub const COUNT: usize = 11;

    /// Every variant, in table order
    pub const ALL: [Self; Self::COUNT] = [
        Self::Unlit,
        Self::LitOpaque,
        Self::Transparent,
        Self::Fade,
        Self::ThinRefraction,
        Self::ThinSsRefraction,
        Self::SolidRefraction,
        Self::SolidSsRefraction,
        Self::Subsurface,
        Self::Cloth,
        Self::SpecGloss,
    ];

    /// Slot of this variant in per-variant tables
    pub fn index(self) -> usize {
        self as usize
    }

    /// Material model this variant was compiled for
    pub fn model(self) -> MaterialModel {
        match self {
            Self::Unlit => MaterialModel::Unlit,
            Self::LitOpaque
            | Self::Transparent
            | Self::Fade
            | Self::ThinRefraction
            | Self::ThinSsRefraction
            | Self::SolidRefraction
            | Self::SolidSsRefraction => MaterialModel::Lit,
            Self::Subsurface => MaterialModel::Subsurface,
            Self::Cloth => MaterialModel::Cloth,
            Self::SpecGloss => MaterialModel::SpecularGlossiness,
        }
    }

    /// Whether this variant refracts
    pub fn is_refraction(self) -> bool {
        matches!(
            self,
            Self::ThinRefraction | Self::ThinSsRefraction | Self::SolidRefraction | Self::SolidSsRefraction
        )
    }

    /// Whether this variant samples the frame buffer for refraction
    pub fn is_screen_space(self) -> bool {
        matches!(self, Self::ThinSsRefraction | Self::SolidSsRefraction)
    }

    /// Name of the compiled material package backing this variant
    pub fn package_name(self) -> &'static str {
        match self {
            Self::Unlit => "sandboxUnlit",
            Self::LitOpaque => "sandboxLit",
            Self::Transparent => "sandboxLitTransparent",
            Self::Fade => "sandboxLitFade",
            Self::ThinRefraction => "sandboxLitThinRefraction",
            Self::ThinSsRefraction => "sandboxLitThinRefractionSsr",
            Self::SolidRefraction => "sandboxLitSolidRefraction",
            Self::SolidSsRefraction => "sandboxLitSolidRefractionSsr",
            Self::Subsurface => "sandboxSubsurface",
            Self::Cloth => "sandboxCloth",
            Self::SpecGloss => "sandboxSpecGloss",
        }
    }
}

/// Resolve the active variant from the user-facing toggles
///
/// Total over its inputs. Blending and the screen-space flag are ignored for
/// every model except [`MaterialModel::Lit`].
pub fn resolve(model: MaterialModel, blending: BlendingMode, screen_space_refraction: bool) -> VariantId {
    match model {
        MaterialModel::Unlit => VariantId::Unlit,
        MaterialModel::Subsurface => VariantId::Subsurface,
        MaterialModel::Cloth => VariantId::Cloth,
        MaterialModel::SpecularGlossiness => VariantId::SpecGloss,
        MaterialModel::Lit => match (blending, screen_space_refraction) {
            (BlendingMode::Opaque, _) => VariantId::LitOpaque,
            (BlendingMode::Transparent, _) => VariantId::Transparent,
            (BlendingMode::Fade, _) => VariantId::Fade,
            (BlendingMode::ThinRefraction, true) => VariantId::ThinSsRefraction,
            (BlendingMode::ThinRefraction, false) => VariantId::ThinRefraction,
            (BlendingMode::SolidRefraction, true) => VariantId::SolidSsRefraction,
            (BlendingMode::SolidRefraction, false) => VariantId::SolidRefraction,
        },
    }
}
