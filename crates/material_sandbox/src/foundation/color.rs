//! Color space and photometric conversions
//!
//! Colors edited in the sandbox UI are display-encoded (sRGB). Uniform slots
//! consume linear values, so every color that crosses into a material goes
//! through [`srgb_to_linear`] first.

use super::math::Vec3;

/// Lower clamp for transmittance before taking its logarithm
const MIN_TRANSMITTANCE: f32 = 1e-5;

/// Lower clamp for the at-distance parameter of [`absorption_at_distance`]
const MIN_DISTANCE: f32 = 1e-5;

/// Convert a single sRGB-encoded channel to linear
pub fn srgb_channel_to_linear(c: f32) -> f32 {
    if c <= 0.040_45 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Convert an sRGB-encoded color to linear
pub fn srgb_to_linear(color: Vec3) -> Vec3 {
    color.map(srgb_channel_to_linear)
}

/// Luminance in cd/m² for an exposure value at ISO 100
pub fn luminance(ev100: f32) -> f32 {
    // L = 2^EV100 * K / 100 with K = 12.5
    2.0_f32.powf(ev100 - 3.0)
}

/// Absorption coefficients so that light crossing `distance` units of the
/// medium is attenuated to `transmittance` (Beer-Lambert)
pub fn absorption_at_distance(transmittance: Vec3, distance: f32) -> Vec3 {
    let distance = distance.max(MIN_DISTANCE);
    transmittance.map(|t| -t.clamp(MIN_TRANSMITTANCE, 1.0).ln() / distance)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_srgb_endpoints() {
        assert_eq!(srgb_channel_to_linear(0.0), 0.0);
        assert_relative_eq!(srgb_channel_to_linear(1.0), 1.0, epsilon = 1e-6);
        // Linear segment below the knee
        assert_relative_eq!(srgb_channel_to_linear(0.04), 0.04 / 12.92);
    }

    #[test]
    fn test_srgb_mid_gray() {
        let linear = srgb_to_linear(Vec3::new(0.5, 0.5, 0.5));
        assert_relative_eq!(linear.x, 0.214_041, epsilon = 1e-5);
        assert_eq!(linear.x, linear.y);
    }

    #[test]
    fn test_luminance() {
        assert_relative_eq!(luminance(3.0), 1.0);
        assert_relative_eq!(luminance(0.0), 0.125);
        assert_relative_eq!(luminance(4.0), 2.0 * luminance(3.0));
    }

    #[test]
    fn test_absorption_white_is_clear() {
        let absorption = absorption_at_distance(Vec3::new(1.0, 1.0, 1.0), 1.0);
        assert_relative_eq!(absorption, Vec3::zeros());
    }

    #[test]
    fn test_absorption_round_trips_through_beer_lambert() {
        let transmittance = Vec3::new(0.5, 0.25, 0.8);
        let distance = 2.0;
        let absorption = absorption_at_distance(transmittance, distance);
        let recovered = absorption.map(|a| (-a * distance).exp());
        assert_relative_eq!(recovered, transmittance, epsilon = 1e-5);
    }

    #[test]
    fn test_absorption_clamps_degenerate_input() {
        let absorption = absorption_at_distance(Vec3::zeros(), 0.0);
        assert!(absorption.iter().all(|a| a.is_finite() && *a > 0.0));
    }
}
