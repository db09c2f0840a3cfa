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
use crate::Float;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// The reasons why a [`StackConfig`] cannot become a [`Stack`](crate::Stack)
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A stack needs at least one panel
    #[error("Number of panels must be at least 1... found {0}")]
    NumPanels(usize),

    /// The vertical distance between tiers must be positive
    #[error("Panel spacing must be positive... found {0}")]
    PanelSpacing(Float),

    /// The cross-axis width of the panels must be positive
    #[error("Panel width must be positive... found {0}")]
    PanelWidth(Float),

    /// The length of the base panel must be positive
    #[error("Base panel length must be positive... found {0}")]
    BaseLength(Float),

    /// The boat length must be positive
    #[error("Boat length must be positive... found {0}")]
    BoatLength(Float),

    /// Efficiency is a fraction in (0, 1]
    #[error("Efficiency must be within (0, 1]... found {0}")]
    Efficiency(Float),

    /// Offsets, heights and costs cannot be negative
    #[error("Field '{field}' cannot be negative... found {value}")]
    Negative {
        /// The name of the field
        field: &'static str,
        /// The value that was given
        value: Float,
    },

    /// The top tier would reach the apex of the mast, where the tiers
    /// have no length left
    #[error("Top tier at height {top} reaches the mast apex at {apex}")]
    AboveApex {
        /// Height of the top tier over the base panel
        top: Float,
        /// Height of the mast apex
        apex: Float,
    },

    /// NaN or infinite values are not geometry
    #[error("Field '{0}' must be a finite number")]
    NotFinite(&'static str),

    /// The configuration document could not be parsed
    #[error("Could not parse configuration: {0}")]
    Parse(#[from] serde_json::Error),

    /// The configuration file could not be read
    #[error("Could not read configuration file: {0}")]
    Io(#[from] std::io::Error),
}

/// The geometric and economic parameters of a stack of panels.
///
/// Lengths are in feet, `cost_panel` is per square foot and
/// `cost_frame` is per foot of frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StackConfig {
    /// The number of tiers in the stack
    pub num_panels: usize,

    /// The vertical distance between consecutive tiers
    pub panel_spacing: Float,

    /// The width of every panel, across the boat
    pub panel_width: Float,

    /// The length of the boat
    pub boat_length: Float,

    /// The distance between the mast and the back of the base panel
    pub base_mast_offset: Float,

    /// The length of the base panel, along the boat
    pub base_length: Float,

    /// The height of the base panel over the deck
    pub base_height: Float,

    /// The fraction of the incident energy that becomes electricity
    pub efficiency: Float,

    /// The cost of the panels, per unit area
    pub cost_panel: Float,

    /// The cost of the frame, per unit length
    pub cost_frame: Float,
}

impl Default for StackConfig {
    fn default() -> Self {
        Self {
            num_panels: 6,
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
}

impl StackConfig {
    /// Checks that this configuration describes a buildable stack
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("panel_spacing", self.panel_spacing),
            ("panel_width", self.panel_width),
            ("boat_length", self.boat_length),
            ("base_mast_offset", self.base_mast_offset),
            ("base_length", self.base_length),
            ("base_height", self.base_height),
            ("efficiency", self.efficiency),
            ("cost_panel", self.cost_panel),
            ("cost_frame", self.cost_frame),
        ];
        if let Some((name, _)) = fields.iter().find(|(_, v)| !v.is_finite()) {
            return Err(ConfigError::NotFinite(*name));
        }

        if self.num_panels < 1 {
            return Err(ConfigError::NumPanels(self.num_panels));
        }
        if self.panel_spacing <= 0.0 {
            return Err(ConfigError::PanelSpacing(self.panel_spacing));
        }
        if self.panel_width <= 0.0 {
            return Err(ConfigError::PanelWidth(self.panel_width));
        }
        if self.base_length <= 0.0 {
            return Err(ConfigError::BaseLength(self.base_length));
        }
        if self.boat_length <= 0.0 {
            return Err(ConfigError::BoatLength(self.boat_length));
        }
        if self.efficiency <= 0.0 || self.efficiency > 1.0 {
            return Err(ConfigError::Efficiency(self.efficiency));
        }

        let non_negative = [
            ("base_mast_offset", self.base_mast_offset),
            ("base_height", self.base_height),
            ("cost_panel", self.cost_panel),
            ("cost_frame", self.cost_frame),
        ];
        for (field, value) in non_negative {
            if value < 0.0 {
                return Err(ConfigError::Negative { field, value });
            }
        }

        let top = (self.num_panels - 1) as Float * self.panel_spacing;
        let apex = crate::layout::mast_height(self.boat_length);
        if top >= apex {
            return Err(ConfigError::AboveApex { top, apex });
        }

        Ok(())
    }

    /// Reads a configuration from a JSON document. Missing fields
    /// take their default value.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads a configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }
}
