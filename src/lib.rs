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

#![deny(missing_docs)]

//! This is a small simulation engine for a tiered stack of rectangular solar panels
//! mounted in front of the mast of a sailboat. It is responsible for:
//!
//! * **Laying out the panels**: every tier is derived from the base panel by following the sightlines that converge at the top of the mast, so upper tiers are never wider than they need to be.
//! * **Casting shadows**: the leading edge of each panel is projected along the sun direction onto the panel right below it, and the result is clipped against that panel.
//! * **Estimating power and cost**: a clear-sky irradiance approximation is applied to the area that is not in shadow, and the panel area and frame length are priced.
//!
//! All lengths are in feet. Angles are always given in degrees: the `elevation` is the angle
//! above the horizon and the `azimuth` is the compass heading of the sun in the horizontal plane.

/// The kind of Floating point number used in the
/// library... the `"float"` feature means it becomes `f32`
/// and `f64` is used otherwise.
#[cfg(feature = "float")]
pub type Float = f32;
/// Well, Pi.
#[cfg(feature = "float")]
pub const PI: Float = std::f32::consts::PI;

/// The kind of Floating point number used in the
/// library... the `"float"` feature means it becomes `f32`
/// and `f64` is used otherwise.
#[cfg(not(feature = "float"))]
pub type Float = f64;

/// Well, Pi.
#[cfg(not(feature = "float"))]
pub const PI: Float = std::f64::consts::PI;

/// The configuration of a stack of panels, and its validation.
pub mod config;
pub use config::{ConfigError, StackConfig};

/// Rectangles used for panels and shadows.
pub mod rectangle;
pub use rectangle::{Panel, Rectangle, Shadow};

/// Derives the footprint and height of every tier.
pub mod layout;
pub use layout::Layout;

/// Position of the sun.
pub mod sun;
pub use sun::{SunLine, SunState};

/// Shadows cast by each tier onto the one below.
pub mod shadow;

/// Irradiance, power and cost.
pub mod power;

/// The main export of this module: a `Stack` of panels that
/// can be exposed to the sun.
pub mod stack;
pub use stack::Stack;

/// Parameter sweeps and budget analysis over many stacks.
pub mod sweep;
pub use sweep::{FrontierPoint, PowerSample, StepRange, SweepRanges, SweepRow};
