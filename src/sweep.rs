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
use crate::{ConfigError, Float, Stack, StackConfig};
use log::{debug, warn};
use serde::{Deserialize, Serialize};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// An inclusive range of values, separated by `step`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StepRange {
    /// The first value
    pub min: Float,
    /// The last value (included, if it falls on a step)
    pub max: Float,
    /// The distance between values. Must be positive.
    pub step: Float,
}

/// The largest number of values a [`StepRange`] produces
pub const MAX_VALUES: usize = 100_000;

impl StepRange {
    /// Builds a new `StepRange`
    pub fn new(min: Float, max: Float, step: Float) -> Self {
        Self { min, max, step }
    }

    /// Builds a new `StepRange` from values in inches; the values are
    /// stored in feet.
    pub fn inches(min: Float, max: Float, step: Float) -> Self {
        Self::new(min / 12., max / 12., step / 12.)
    }

    /// All the values in the range, up to [`MAX_VALUES`] of them
    pub fn values(&self) -> Vec<Float> {
        if self.step <= 0.0 || self.max < self.min {
            return vec![self.min];
        }
        let mut n = ((self.max - self.min) / self.step + 1e-6).floor() as usize;
        if n >= MAX_VALUES {
            warn!(
                "Range {}..={} in steps of {} truncated to {} values",
                self.min, self.max, self.step, MAX_VALUES
            );
            n = MAX_VALUES - 1;
        }
        (0..=n).map(|i| self.min + i as Float * self.step).collect()
    }
}

/// The parameters explored by a [`sweep`], and the positions
/// of the sun each stack is evaluated at
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SweepRanges {
    /// Smallest and largest number of panels
    pub num_panels: (usize, usize),

    /// Panel widths [ft]
    pub panel_width: StepRange,

    /// Panel spacings [ft]
    pub panel_spacing: StepRange,

    /// Compass headings of the sun [deg]
    pub azimuths: StepRange,

    /// Elevations of the sun [deg]
    pub elevations: StepRange,
}

impl Default for SweepRanges {
    fn default() -> Self {
        Self {
            num_panels: (1, 6),
            panel_width: StepRange::inches(12., 36., 4.),
            panel_spacing: StepRange::inches(8., 36., 2.),
            azimuths: StepRange::new(0., 360., 5.),
            elevations: StepRange::new(15., 90., 5.),
        }
    }
}

/// The result of evaluating one combination of parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SweepRow {
    /// Number of panels
    pub num_panels: usize,
    /// Width of the panels [ft]
    pub panel_width: Float,
    /// Spacing between panels [ft]
    pub panel_spacing: Float,
    /// Power averaged over all the positions of the sun [W]
    pub average_power: Float,
    /// Cost of the stack
    pub cost: i64,
}

/// The power produced by a stack with the sun at a certain position
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PowerSample {
    /// Compass heading of the sun [deg]
    pub azimuth: Float,
    /// Elevation of the sun [deg]
    pub elevation: Float,
    /// Power produced [W]
    pub power: i64,
}

/// The best stack that can be bought with a certain budget
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrontierPoint {
    /// The budget
    pub budget: Float,
    /// The stack with the highest average power that costs no more than `budget`
    pub row: SweepRow,
}

/// Calculates the power of `stack` for every combination of azimuth and
/// elevation. Samples are sorted by azimuth, then elevation.
///
/// The stack is left with the sun at the last position.
pub fn power_map(
    stack: &mut Stack,
    azimuths: &StepRange,
    elevations: &StepRange,
) -> Vec<PowerSample> {
    let elevations = elevations.values();
    let azimuths = azimuths.values();
    let mut ret = Vec::with_capacity(azimuths.len() * elevations.len());
    for azimuth in &azimuths {
        for elevation in &elevations {
            stack.update_sun(*elevation, *azimuth);
            ret.push(PowerSample {
                azimuth: *azimuth,
                elevation: *elevation,
                power: stack.power(),
            });
        }
    }
    ret
}

fn evaluate(config: StackConfig, ranges: &SweepRanges) -> Result<SweepRow, ConfigError> {
    let mut stack = Stack::new(config)?;
    let map = power_map(&mut stack, &ranges.azimuths, &ranges.elevations);
    let total_power: Float = map.iter().map(|s| s.power as Float).sum();
    let average_power = if map.is_empty() {
        0.0
    } else {
        total_power / map.len() as Float
    };

    Ok(SweepRow {
        num_panels: config.num_panels,
        panel_width: config.panel_width,
        panel_spacing: config.panel_spacing,
        average_power,
        cost: stack.cost(),
    })
}

/// Evaluates every combination of number of panels, panel width and
/// panel spacing in `ranges`. The rest of the parameters are taken from `base`.
///
/// Rows are sorted by number of panels, then width, then spacing.
pub fn sweep(base: &StackConfig, ranges: &SweepRanges) -> Result<Vec<SweepRow>, ConfigError> {
    let (n_min, n_max) = ranges.num_panels;
    let mut configs = Vec::new();
    for num_panels in n_min..=n_max {
        for panel_width in ranges.panel_width.values() {
            for panel_spacing in ranges.panel_spacing.values() {
                configs.push(StackConfig {
                    num_panels,
                    panel_width,
                    panel_spacing,
                    ..*base
                })
            }
        }
    }
    debug!(
        "Sweeping {} stacks over {} sun positions",
        configs.len(),
        ranges.azimuths.values().len() * ranges.elevations.values().len()
    );

    #[cfg(not(feature = "parallel"))]
    let aux_iter = configs.into_iter();
    #[cfg(feature = "parallel")]
    let aux_iter = configs.into_par_iter();

    aux_iter
        .map(|config| evaluate(config, ranges))
        .collect()
}

/// For `n_budgets` budgets evenly spread between the cheapest and the most
/// expensive rows, finds the row with the highest average power that fits
/// in the budget.
///
/// A budget is only reported when its best power was not reached by a
/// smaller budget.
pub fn budget_frontier(rows: &[SweepRow], n_budgets: usize) -> Vec<FrontierPoint> {
    if rows.is_empty() || n_budgets == 0 {
        return Vec::new();
    }

    let min_cost = rows.iter().map(|r| r.cost).min().unwrap_or(0) as Float;
    let max_cost = rows.iter().map(|r| r.cost).max().unwrap_or(0) as Float;
    let delta = if n_budgets > 1 {
        (max_cost - min_cost) / (n_budgets - 1) as Float
    } else {
        0.0
    };

    let mut seen_powers: Vec<Float> = Vec::new();
    let mut ret = Vec::new();
    for i in 0..n_budgets {
        let budget = min_cost + i as Float * delta;

        let mut best: Option<&SweepRow> = None;
        for row in rows.iter().filter(|r| r.cost as Float <= budget) {
            match best {
                Some(b) if b.average_power >= row.average_power => {}
                _ => best = Some(row),
            }
        }

        if let Some(row) = best {
            if !seen_powers.contains(&row.average_power) {
                seen_powers.push(row.average_power);
                ret.push(FrontierPoint { budget, row: *row });
            }
        }
    }
    ret
}
