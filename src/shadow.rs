/*
MIT License
Copyright (c) 2021 Germán Molina
Permission is hereby granted, free of charge, to any person obtaining a copy
of this software and associated documentation files (the "Software"), to deal
in the Software without restriction, including without limitation the rights
to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
copies of the Software, and to permit persons to whom the Software is
furnished to do so, subject to the following conditions:
The above copyright notice and this permission notice shall be included in all
copies or substantial portions of the Software.
THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
SOFTWARE.
*/
use crate::{Float, Panel, Shadow, SunState};
use geometry3d::{Point3D, Ray3D};
use log::trace;

/// Height of a shadow over the panel it falls on. This only exists
/// so that shadows are drawn on top of the panels.
pub const DELTA: Float = 0.001;

/// Finds where the ray leaving `corner` along the sun direction
/// crosses the horizontal plane at height `z`.
///
/// The sun must be above the horizon.
fn project_onto_plane(corner: Point3D, sun: &SunState, z: Float) -> Point3D {
    debug_assert!(sun.is_up());
    let ray = Ray3D {
        origin: corner,
        direction: sun.direction,
    };
    let t = (z - corner.z) / sun.direction.z;
    ray.project(t)
}

/// Calculates the shadow that `upper` casts over `lower`, if any.
fn cast_shadow(lower: &Panel, upper: &Panel, sun: &SunState, panel_width: Float) -> Option<Shadow> {
    // The leading corner is the one closest to the mast
    let corner = Point3D::new(upper.x0, upper.y0, upper.z);
    let hit = project_onto_plane(corner, sun, lower.z);

    let shadow = Shadow {
        x0: hit.x.max(lower.x0),
        y0: hit.y.max(lower.y0),
        x1: (hit.x + upper.length()).min(lower.x1),
        y1: (hit.y + panel_width).min(lower.y1),
        z: lower.z + DELTA,
    };

    if shadow.x0 >= shadow.x1 || shadow.y0 >= shadow.y1 {
        None
    } else {
        Some(shadow)
    }
}

/// Calculates the shadows that each panel casts over the one right below it.
///
/// `panels` must be sorted by tier. The result holds, at most, one shadow
/// per pair of consecutive panels, in the same order; pairs that do not
/// overlap produce nothing. If the sun is not up, there are no shadows.
pub fn cast_shadows(panels: &[Panel], sun: &SunState, panel_width: Float) -> Vec<Shadow> {
    if !sun.is_up() {
        return Vec::new();
    }

    panels
        .windows(2)
        .enumerate()
        .filter_map(|(i, pair)| {
            let shadow = cast_shadow(&pair[0], &pair[1], sun, panel_width);
            if shadow.is_none() {
                trace!("Tier {} does not shade tier {}", i + 1, i);
            }
            shadow
        })
        .collect()
}

#[cfg(test)]
mod testing {
    use super::*;
    use validate::assert_close;

    fn two_panels() -> Vec<Panel> {
        vec![
            Panel {
                x0: 10.,
                y0: 0.,
                x1: 15.,
                y1: 2.,
                z: 1.,
            },
            Panel {
                x0: 9.,
                y0: 0.,
                x1: 13.,
                y1: 2.,
                z: 4.,
            },
        ]
    }

    #[test]
    fn test_overhead_sun() {
        let panels = two_panels();
        let sun = SunState::new(90., 0.);
        let shadows = cast_shadows(&panels, &sun, 2.);
        assert_eq!(shadows.len(), 1);

        // The upper panel is projected straight down, and clipped
        let s = shadows[0];
        assert_close!(s.x0, 10., 1e-9);
        assert_close!(s.x1, 13., 1e-9);
        assert_close!(s.y0, 0., 1e-9);
        assert_close!(s.y1, 2., 1e-9);
        assert_close!(s.z, 1. + DELTA, 1e-9);
        assert!(panels[0].contains_footprint(&s));
    }

    #[test]
    fn test_oblique_sun() {
        let panels = two_panels();
        // Sun to the west (towards -x), 45 degrees up... the shadow
        // moves 3 units towards +x
        let sun = SunState::new(45., 270.);
        let shadows = cast_shadows(&panels, &sun, 2.);
        assert_eq!(shadows.len(), 1);
        let s = shadows[0];
        assert_close!(s.x0, 12., 1e-9);
        assert_close!(s.x1, 15., 1e-9);
        assert_close!(s.area(), 6., 1e-9);
    }

    #[test]
    fn test_shadow_misses() {
        let panels = two_panels();
        // Sun to the east, low. The shadow lands far behind the lower panel
        let sun = SunState::new(10., 90.);
        let shadows = cast_shadows(&panels, &sun, 2.);
        assert!(shadows.is_empty());

        // Sun to the north, low. The shadow lands beside the lower panel
        let sun = SunState::new(10., 0.);
        let shadows = cast_shadows(&panels, &sun, 2.);
        assert!(shadows.is_empty());
    }

    #[test]
    fn test_sun_down() {
        let panels = two_panels();
        for elevation in [0., -0.0, -20.] {
            let sun = SunState::new(elevation, 180.);
            assert!(cast_shadows(&panels, &sun, 2.).is_empty());
        }
    }

    #[test]
    fn test_single_panel() {
        let panels = vec![two_panels()[0]];
        let sun = SunState::new(60., 180.);
        assert!(cast_shadows(&panels, &sun, 2.).is_empty());
    }
}
