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
use geometry3d::{Point3D, Vector3D};

/// The position of the sun, as seen from the boat
#[derive(Debug, Clone, Copy)]
pub struct SunState {
    /// Angle above the horizon, in degrees
    pub elevation: Float,

    /// Compass heading of the sun, in degrees
    pub azimuth: Float,

    /// Unit vector pointing towards the sun
    pub direction: Vector3D,
}

impl Default for SunState {
    /// The sun sitting on the horizon, due north.
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

impl SunState {
    /// Builds a new `SunState` from the elevation and azimuth of the sun, in degrees
    pub fn new(elevation: Float, azimuth: Float) -> Self {
        let elev = elevation.to_radians();
        let az = azimuth.to_radians();
        let direction = Vector3D::new(
            elev.cos() * az.sin(),
            elev.cos() * az.cos(),
            elev.sin(),
        );
        Self {
            elevation,
            azimuth,
            direction,
        }
    }

    /// Is the sun above the horizon? Nothing is lit (and nothing
    /// casts shadows) otherwise.
    pub fn is_up(&self) -> bool {
        self.elevation > 0.0
    }
}

/// A segment pointing from a panel towards the sun. Used for drawing.
#[derive(Debug, Clone, Copy)]
pub struct SunLine {
    /// Where the line starts (i.e., the midpoint of a panel)
    pub start: Point3D,
    /// Where the line ends
    pub end: Point3D,
}

/// Builds one [`SunLine`] of length `length` per point in `midpoints`
pub fn sun_lines(midpoints: &[Point3D], sun: &SunState, length: Float) -> Vec<SunLine> {
    midpoints
        .iter()
        .map(|p| SunLine {
            start: *p,
            end: *p + sun.direction * length,
        })
        .collect()
}
