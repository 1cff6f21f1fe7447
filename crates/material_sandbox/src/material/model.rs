//! Material model and blending mode selections
//!
//! These are the orthogonal toggles the user flips in the material panel.
//! Together with [`RefractionOptions`] they fully determine which precompiled
//! variant is active (see [`super::variant::resolve`]).

use serde::{Deserialize, Serialize};

/// Shading model of the edited material
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum MaterialModel {
    /// No lighting, base color and emissive only
    Unlit,
    /// Standard metallic-roughness PBR
    #[default]
    Lit,
    /// Lit model with a wrapped subsurface term
    Subsurface,
    /// Cloth model with sheen
    Cloth,
    /// Specular-glossiness PBR workflow
    SpecularGlossiness,
}

impl MaterialModel {
    /// Every model, in UI order
    pub const ALL: [Self; 5] = [
        Self::Unlit,
        Self::Lit,
        Self::Subsurface,
        Self::Cloth,
        Self::SpecularGlossiness,
    ];

    /// Label shown in the model combo box
    pub fn label(self) -> &'static str {
        match self {
            Self::Unlit => "Unlit",
            Self::Lit => "Lit",
            Self::Subsurface => "Subsurface",
            Self::Cloth => "Cloth",
            Self::SpecularGlossiness => "Specular glossiness",
        }
    }

    /// Whether the blending and refraction controls apply to this model
    pub fn supports_blending(self) -> bool {
        self == Self::Lit
    }
}

/// Blending mode, meaningful only for [`MaterialModel::Lit`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum BlendingMode {
    /// No blending
    #[default]
    Opaque,
    /// Alpha blending with premultiplied specular
    Transparent,
    /// Alpha blending that also fades specular
    Fade,
    /// Refraction through a thin surface
    ThinRefraction,
    /// Refraction through a solid volume
    SolidRefraction,
}

impl BlendingMode {
    /// Every blending mode, in UI order
    pub const ALL: [Self; 5] = [
        Self::Opaque,
        Self::Transparent,
        Self::Fade,
        Self::ThinRefraction,
        Self::SolidRefraction,
    ];

    /// Label shown in the blending combo box
    pub fn label(self) -> &'static str {
        match self {
            Self::Opaque => "Opaque",
            Self::Transparent => "Transparent",
            Self::Fade => "Fade",
            Self::ThinRefraction => "Thin refraction",
            Self::SolidRefraction => "Solid refraction",
        }
    }

    /// Whether this mode refracts
    ///
    /// Independent of the screen-space flag: this decides which Lit fields are
    /// bound, the flag only decides which variant is selected.
    pub fn has_refraction(self) -> bool {
        matches!(self, Self::ThinRefraction | Self::SolidRefraction)
    }

    /// Whether an alpha value is consumed
    pub fn uses_alpha(self) -> bool {
        self != Self::Opaque
    }
}

/// Refraction technique selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct RefractionOptions {
    /// Approximate refraction from the rendered frame instead of the IBL
    pub screen_space_refraction: bool,
}
