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
use crate::layout::{self, Layout};
use crate::sun::{sun_lines, SunLine};
use crate::{power, shadow};
use crate::{ConfigError, Float, Panel, Shadow, StackConfig, SunState};
use geometry3d::Point3D;
use log::debug;

/// A stack of solar panels in front of the mast.
///
/// The geometry is fixed when the `Stack` is built. Changing any of
/// the parameters in the [`StackConfig`] means building a new one. The
/// position of the sun, on the other hand, can be updated at will.
#[derive(Debug, Clone)]
pub struct Stack {
    config: StackConfig,

    /// Sorted by tier
    panels: Vec<Panel>,

    total_panel_area: Float,

    sun: SunState,

    /// Replaced every time the sun moves
    shadows: Vec<Shadow>,
}

impl Stack {
    /// Builds a new `Stack`, with the sun on the horizon.
    pub fn new(config: StackConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let Layout { panels, total_area } = Layout::new(&config);
        debug!(
            "Built stack of {} panels, total area = {:.3}",
            panels.len(),
            total_area
        );

        Ok(Self {
            config,
            panels,
            total_panel_area: total_area,
            sun: SunState::default(),
            shadows: Vec::new(),
        })
    }

    /// Moves the sun, recalculating all the shadows
    pub fn update_sun(&mut self, elevation: Float, azimuth: Float) {
        let sun = SunState::new(elevation, azimuth);
        let shadows = shadow::cast_shadows(&self.panels, &sun, self.config.panel_width);
        debug!(
            "Sun at elevation {}, azimuth {}... {} shadows",
            elevation,
            azimuth,
            shadows.len()
        );
        self.sun = sun;
        self.shadows = shadows;
    }

    /// The configuration this stack was built from
    pub fn config(&self) -> &StackConfig {
        &self.config
    }

    /// The panels, from the base panel upwards
    pub fn panels(&self) -> &[Panel] {
        &self.panels
    }

    /// The shadows cast over the panels, from the base panel upwards
    pub fn shadows(&self) -> &[Shadow] {
        &self.shadows
    }

    /// The current position of the sun
    pub fn sun(&self) -> &SunState {
        &self.sun
    }

    /// The sum of the areas of all the panels
    pub fn total_panel_area(&self) -> Float {
        self.total_panel_area
    }

    /// The sum of the areas of all the shadows
    pub fn total_shadow_area(&self) -> Float {
        self.shadows.iter().map(|s| s.area()).sum()
    }

    /// The power produced by the stack under the current sun [W]
    pub fn power(&self) -> i64 {
        power::power(
            self.total_panel_area,
            self.total_shadow_area(),
            self.config.efficiency,
            self.sun.elevation,
        )
    }

    /// The cost of the panels and their frame
    pub fn cost(&self) -> i64 {
        power::cost(
            self.total_panel_area,
            self.config.panel_width,
            self.config.cost_panel,
            self.config.cost_frame,
        )
    }

    /// The midpoints of the panels, from the base panel upwards
    pub fn panel_midpoints(&self) -> Vec<Point3D> {
        self.panels.iter().map(|p| p.midpoint()).collect()
    }

    /// One segment per panel, pointing towards the sun. Their length
    /// is the panel spacing.
    pub fn sun_lines(&self) -> Vec<SunLine> {
        sun_lines(
            &self.panel_midpoints(),
            &self.sun,
            self.config.panel_spacing,
        )
    }

    /// The position of the mast along the boat
    pub fn mast_x(&self) -> Float {
        layout::mast_x(self.config.boat_length)
    }

    /// The length of the boat
    pub fn boat_length(&self) -> Float {
        self.config.boat_length
    }

    /// The width of the panels
    pub fn panel_width(&self) -> Float {
        self.config.panel_width
    }
}

#[cfg(test)]
mod testing {
    use super::*;
    use validate::assert_close;

    fn single_panel_config() -> StackConfig {
        StackConfig {
            num_panels: 1,
            panel_spacing: 3.,
            panel_width: 2.,
            boat_length: 40.,
            base_mast_offset: 4.,
            base_length: 5.,
            base_height: 1.,
            efficiency: 0.15,
            cost_panel: 5.,
            cost_frame: 5.,
        }
    }

    #[test]
    fn test_single_panel_scenario() {
        let mut stack = Stack::new(single_panel_config()).unwrap();
        stack.update_sun(90., 180.);
        assert!(stack.shadows().is_empty());
        assert_close!(stack.total_panel_area(), 10., 1e-9);
        assert_eq!(stack.power(), 132);
        assert_eq!(stack.cost(), 120);
    }

    #[test]
    fn test_starts_in_the_dark() {
        let stack = Stack::new(StackConfig::default()).unwrap();
        assert!(stack.shadows().is_empty());
        assert_eq!(stack.power(), 0);
        assert!(stack.cost() > 0);
    }

    #[test]
    fn test_invalid_config() {
        let config = StackConfig {
            panel_width: 0.0,
            ..StackConfig::default()
        };
        assert!(matches!(
            Stack::new(config),
            Err(ConfigError::PanelWidth(_))
        ));
    }

    #[test]
    fn test_sun_update_replaces_shadows() {
        let mut stack = Stack::new(StackConfig::default()).unwrap();
        stack.update_sun(90., 0.);
        assert_eq!(stack.shadows().len(), stack.panels().len() - 1);
        assert_eq!(stack.sun().elevation, 90.);

        // Straight down, each panel shades the overlap with the one below
        let expected: Float = stack
            .panels()
            .windows(2)
            .map(|pair| (pair[1].x1 - pair[0].x0) * 2.0)
            .sum();
        let shadow_area = stack.total_shadow_area();
        assert_close!(shadow_area, expected, 1e-9);
        assert!(shadow_area > 0.0);

        let area = stack.total_panel_area();
        assert_eq!(stack.power(), power::power(area, shadow_area, 0.15, 90.));
        assert!(stack.power() < power::power(area, 0.0, 0.15, 90.));

        stack.update_sun(-1., 0.);
        assert!(stack.shadows().is_empty());
        assert_eq!(stack.total_shadow_area(), 0.0);
        assert_eq!(stack.power(), 0);
        assert_eq!(stack.sun().elevation, -1.);
    }

    #[test]
    fn test_midpoints_and_lines() {
        let mut stack = Stack::new(StackConfig::default()).unwrap();
        stack.update_sun(90., 0.);
        let mids = stack.panel_midpoints();
        assert_eq!(mids.len(), 6);
        for (m, p) in mids.iter().zip(stack.panels()) {
            assert_close!(m.x, (p.x0 + p.x1) / 2., 1e-9);
            assert_close!(m.y, 1.0, 1e-9);
            assert_close!(m.z, p.z, 1e-9);
        }

        let lines = stack.sun_lines();
        assert_eq!(lines.len(), 6);
        assert_close!(lines[0].end.z - lines[0].start.z, 3.0, 1e-9);
    }

    #[test]
    fn test_deck_information() {
        let stack = Stack::new(StackConfig::default()).unwrap();
        assert_close!(stack.mast_x(), 22.3, 1e-9);
        assert_eq!(stack.boat_length(), 40.);
        assert_eq!(stack.panel_width(), 2.);
        assert_eq!(stack.config(), &StackConfig::default());
    }
}
