//! Material resolution: one representative diffuse color per object.

use crate::document::MaterialSpec;
use crate::types::MaterialInput;

/// Color used when an object has no material assigned.
pub const DEFAULT_GRAY: [i32; 3] = [128, 128, 128];

/// Resolve an object's material slots to a single Lambertian color.
///
/// Only slot 0 is consulted; additional slots are ignored. Preference order:
/// the physically-based shader's base color when the material exposes one,
/// then the legacy diffuse color, then a default gray.
pub fn resolve_material(slots: &[Option<MaterialInput>]) -> MaterialSpec {
    let color = match slots.first().and_then(|slot| slot.as_ref()) {
        Some(material) => {
            let rgba = material.base_color.unwrap_or(material.diffuse_color);
            color_to_bytes([rgba[0], rgba[1], rgba[2]])
        }
        None => DEFAULT_GRAY,
    };
    MaterialSpec::Lambertian { color }
}

/// Truncating float-to-int channel conversion. No clamping: values outside
/// 0-1 pass through out of range, matching what downstream scenes were
/// authored against.
fn color_to_bytes(rgb: [f32; 3]) -> [i32; 3] {
    [
        (rgb[0] * 255.0) as i32,
        (rgb[1] * 255.0) as i32,
        (rgb[2] * 255.0) as i32,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn principled(base_color: [f32; 4]) -> MaterialInput {
        MaterialInput {
            base_color: Some(base_color),
            diffuse_color: [0.0, 0.0, 0.0, 1.0],
        }
    }

    #[test]
    fn test_no_slots_defaults_to_gray() {
        let spec = resolve_material(&[]);
        assert_eq!(spec.color(), DEFAULT_GRAY);
    }

    #[test]
    fn test_empty_slot_defaults_to_gray() {
        let spec = resolve_material(&[None]);
        assert_eq!(spec.color(), DEFAULT_GRAY);
    }

    #[test]
    fn test_base_color_truncates() {
        let spec = resolve_material(&[Some(principled([1.0, 0.5, 0.0, 1.0]))]);
        // 0.5 * 255 = 127.5 truncates to 127, not 128.
        assert_eq!(spec.color(), [255, 127, 0]);
    }

    #[test]
    fn test_diffuse_fallback() {
        let material = MaterialInput {
            base_color: None,
            diffuse_color: [0.2, 0.4, 0.8, 1.0],
        };
        let spec = resolve_material(&[Some(material)]);
        assert_eq!(spec.color(), [51, 102, 204]);
    }

    #[test]
    fn test_only_first_slot_counts() {
        let slots = vec![None, Some(principled([1.0, 0.0, 0.0, 1.0]))];
        let spec = resolve_material(&slots);
        assert_eq!(spec.color(), DEFAULT_GRAY);
    }

    #[test]
    fn test_out_of_range_values_are_not_clamped() {
        let spec = resolve_material(&[Some(principled([1.5, -0.5, 0.0, 1.0]))]);
        assert_eq!(spec.color(), [382, -127, 0]);
    }
}
