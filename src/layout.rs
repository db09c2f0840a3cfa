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
use crate::{Float, Panel, StackConfig};

/// The radius of the mast
pub const MAST_RADIUS: Float = 0.3;

/// Where the mast stands, as a fraction of the boat length
pub const MAST_POSITION_FRACTION: Float = 0.55;

/// The height of the mast apex, as a multiple of the boat length.
///
/// The apex is only used as the point where the sightlines
/// of the stack converge.
pub const MAST_HEIGHT_FACTOR: Float = 1.1;

/// The position of the centre of the mast along the boat
pub fn mast_x(boat_length: Float) -> Float {
    MAST_POSITION_FRACTION * boat_length + MAST_RADIUS
}

/// The height of the mast apex
pub fn mast_height(boat_length: Float) -> Float {
    MAST_HEIGHT_FACTOR * boat_length
}

/// The panels of a stack, from the base panel (tier 0) upwards
#[derive(Debug, Clone)]
pub struct Layout {
    /// The panels, sorted by tier
    pub panels: Vec<Panel>,

    /// The sum of the areas of all the panels
    pub total_area: Float,
}

impl Layout {
    /// Derives the panels from the base panel.
    ///
    /// Each tier is pulled towards the mast by following the lines
    /// that join the ends of the base panel with the mast apex, so
    /// the stack tapers as it rises.
    pub fn new(config: &StackConfig) -> Self {
        let mast_x = mast_x(config.boat_length);
        let mast_height = mast_height(config.boat_length);

        let base_x0 = mast_x + config.base_mast_offset;
        let base_x1 = base_x0 + config.base_length;

        let back_offset = config.panel_spacing * config.base_mast_offset / mast_height;
        let front_offset = config.panel_spacing * (base_x1 - mast_x) / mast_height;

        let mut total_area = 0.0;
        let panels: Vec<Panel> = (0..config.num_panels)
            .map(|i| {
                let i = i as Float;
                let panel = Panel {
                    x0: base_x0 - i * back_offset,
                    y0: 0.0,
                    x1: base_x1 - i * front_offset,
                    y1: config.panel_width,
                    z: i * config.panel_spacing + config.base_height,
                };
                total_area += panel.length() * config.panel_width;
                panel
            })
            .collect();

        Self { panels, total_area }
    }
}

#[cfg(test)]
mod testing {
    use super::*;
    use validate::assert_close;

    #[test]
    fn test_single_panel() {
        let config = StackConfig {
            num_panels: 1,
            ..StackConfig::default()
        };
        let layout = Layout::new(&config);
        assert_eq!(layout.panels.len(), 1);

        let p = &layout.panels[0];
        // mast at 0.55 * 40 + 0.3 = 22.3
        assert_close!(p.x0, 26.3, 1e-9);
        assert_close!(p.x1, 31.3, 1e-9);
        assert_close!(p.y0, 0.0);
        assert_close!(p.y1, 2.0);
        assert_close!(p.z, 1.0);
        assert_close!(layout.total_area, 10.0, 1e-9);
    }

    #[test]
    fn test_tiers_taper_towards_the_mast() {
        let config = StackConfig::default();
        let layout = Layout::new(&config);
        assert_eq!(layout.panels.len(), config.num_panels);

        // apex at 44: back offset is 3*4/44, front offset is 3*9/44
        let back = 3. * 4. / 44.;
        let front = 3. * 9. / 44.;
        for (i, p) in layout.panels.iter().enumerate() {
            let i = i as Float;
            assert_close!(p.x0, 26.3 - i * back, 1e-9);
            assert_close!(p.x1, 31.3 - i * front, 1e-9);
            assert_close!(p.z, 1.0 + 3.0 * i, 1e-9);
        }

        for pair in layout.panels.windows(2) {
            assert!(pair[1].z > pair[0].z);
            assert!(pair[1].x0 < pair[0].x0);
            assert!(pair[1].length() < pair[0].length());
            assert!(pair[1].x1 > pair[1].x0);
        }

        let sum: Float = layout
            .panels
            .iter()
            .map(|p| (p.x1 - p.x0) * config.panel_width)
            .sum();
        assert_close!(layout.total_area, sum, 1e-9);
    }

    #[test]
    fn test_spacing_moves_tiers_up() {
        let a = Layout::new(&StackConfig::default());
        let b = Layout::new(&StackConfig {
            panel_spacing: 3.5,
            ..StackConfig::default()
        });
        for (i, (pa, pb)) in a.panels.iter().zip(b.panels.iter()).enumerate() {
            assert_close!(pb.z - pa.z, 0.5 * i as Float, 1e-9);
        }
        // The base panel does not depend on the spacing
        assert_eq!(a.panels[0], b.panels[0]);

        // Taller stacks converge more, so upper tiers are shorter
        assert!(b.total_area < a.total_area);
    }

    #[test]
    fn test_spacing_does_not_change_single_tier_area() {
        let config = StackConfig {
            num_panels: 1,
            ..StackConfig::default()
        };
        let a = Layout::new(&config);
        let b = Layout::new(&StackConfig {
            panel_spacing: 7.,
            ..config
        });
        assert_eq!(a.total_area, b.total_area);
    }
}
