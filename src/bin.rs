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
use clap::Parser;
use log::{info, warn};
use mast_stack::sweep::{budget_frontier, power_map, sweep, StepRange, SweepRanges};
use mast_stack::{Float, Rectangle, Stack, StackConfig};
use serde::Serialize;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Inputs {
    /// JSON file with the configuration of the stack. Defaults are used otherwise.
    #[arg(short, long)]
    config: Option<String>,

    /// Angle of the sun above the horizon [deg]
    #[arg(short, long, default_value_t = 45., allow_negative_numbers = true)]
    elevation: Float,

    /// Compass heading of the sun [deg]
    #[arg(short, long, default_value_t = 180., allow_negative_numbers = true)]
    azimuth: Float,

    /// Sweep number of panels, width and spacing, and report the best stack for each budget
    #[arg(short, long)]
    sweep: bool,

    /// Report the power of the stack for every position of the sun, in steps of 5 degrees
    #[arg(short, long)]
    map: bool,

    /// Number of budgets analysed when sweeping
    #[arg(short, long, default_value_t = 100)]
    budgets: usize,
}

#[derive(Serialize)]
struct Report<'a> {
    elevation: Float,
    azimuth: Float,
    sun_direction: [Float; 3],
    panels: &'a [Rectangle],
    shadows: &'a [Rectangle],
    panel_midpoints: Vec<[Float; 3]>,
    total_panel_area: Float,
    total_shadow_area: Float,
    power: i64,
    cost: i64,
}

fn run(args: Inputs) -> Result<String, String> {
    let config = match &args.config {
        Some(path) => StackConfig::from_file(path).map_err(|e| e.to_string())?,
        None => StackConfig::default(),
    };

    if args.sweep {
        let rows = sweep(&config, &SweepRanges::default()).map_err(|e| e.to_string())?;
        info!("Evaluated {} stacks", rows.len());
        let frontier = budget_frontier(&rows, args.budgets);
        return serde_json::to_string_pretty(&frontier).map_err(|e| e.to_string());
    }

    let mut stack = Stack::new(config).map_err(|e| e.to_string())?;

    if args.map {
        let azimuths = StepRange::new(0., 360., 5.);
        let elevations = StepRange::new(0., 90., 5.);
        let map = power_map(&mut stack, &azimuths, &elevations);
        return serde_json::to_string_pretty(&map).map_err(|e| e.to_string());
    }

    stack.update_sun(args.elevation, args.azimuth);

    let sun = stack.sun();
    let report = Report {
        elevation: sun.elevation,
        azimuth: sun.azimuth,
        sun_direction: [sun.direction.x, sun.direction.y, sun.direction.z],
        panels: stack.panels(),
        shadows: stack.shadows(),
        panel_midpoints: stack
            .panel_midpoints()
            .iter()
            .map(|p| [p.x, p.y, p.z])
            .collect(),
        total_panel_area: stack.total_panel_area(),
        total_shadow_area: stack.total_shadow_area(),
        power: stack.power(),
        cost: stack.cost(),
    };
    serde_json::to_string_pretty(&report).map_err(|e| e.to_string())
}

fn main() {
    env_logger::init();
    let args = Inputs::parse();

    match run(args) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            warn!("Could not run: {}", e);
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }
}
