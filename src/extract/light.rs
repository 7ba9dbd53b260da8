//! Light extraction.

use crate::document::LightRecord;
use crate::types::{AxisTransform, LightInput, LightKind};

// Host energy (watts-like) to renderer intensity. A unit conversion chosen to
// make typical scene energies land in a usable range, not physically derived.
const ENERGY_PER_INTENSITY: f64 = 100.0;

/// Extract point lights, in input order.
///
/// Sun, spot, and area lights are dropped: the output format only represents
/// positional lights.
pub fn extract_lights(lights: &[LightInput], axis: &AxisTransform) -> Vec<LightRecord> {
    lights
        .iter()
        .filter(|light| light.kind == LightKind::Point)
        .map(|light| LightRecord {
            position: axis.point(light.location).into(),
            intensity: light.energy / ENERGY_PER_INTENSITY,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Vec3;
    use glam::DVec3;

    #[test]
    fn test_non_point_lights_are_filtered() {
        let lights = vec![
            LightInput {
                kind: LightKind::Point,
                location: DVec3::new(1.0, 2.0, 3.0),
                energy: 300.0,
            },
            LightInput {
                kind: LightKind::Sun,
                location: DVec3::ZERO,
                energy: 5.0,
            },
        ];

        let records = extract_lights(&lights, &AxisTransform::Z_UP_TO_Y_UP);

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].intensity, 3.0);
        assert_eq!(records[0].position, Vec3::new(1.0, 3.0, -2.0));
    }

    #[test]
    fn test_input_order_is_preserved() {
        let lights = vec![
            LightInput {
                kind: LightKind::Point,
                location: DVec3::ZERO,
                energy: 100.0,
            },
            LightInput {
                kind: LightKind::Point,
                location: DVec3::ZERO,
                energy: 200.0,
            },
        ];

        let records = extract_lights(&lights, &AxisTransform::Z_UP_TO_Y_UP);
        assert_eq!(records[0].intensity, 1.0);
        assert_eq!(records[1].intensity, 2.0);
    }
}
