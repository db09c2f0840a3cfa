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
use geometry3d::Point3D;
use serde::{Deserialize, Serialize};

/// A horizontal, axis-aligned rectangle.
///
/// `x` runs along the boat, `y` runs across it and `z` is the
/// height over the deck.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    /// The start of the rectangle along the boat
    pub x0: Float,
    /// The start of the rectangle across the boat
    pub y0: Float,
    /// The end of the rectangle along the boat
    pub x1: Float,
    /// The end of the rectangle across the boat
    pub y1: Float,
    /// The height of the rectangle
    pub z: Float,
}

/// One tier of the stack
pub type Panel = Rectangle;

/// The portion of a panel darkened by the panel above it
pub type Shadow = Rectangle;

impl Rectangle {
    /// The extent along the boat
    pub fn length(&self) -> Float {
        self.x1 - self.x0
    }

    /// The extent across the boat
    pub fn width(&self) -> Float {
        self.y1 - self.y0
    }

    /// The area
    pub fn area(&self) -> Float {
        self.length() * self.width()
    }

    /// The centre of the rectangle. Panels always start at `y = 0`,
    /// so this is also `(x0 + x1)/2, y1/2, z`.
    pub fn midpoint(&self) -> Point3D {
        Point3D::new(
            (self.x0 + self.x1) / 2.,
            (self.y0 + self.y1) / 2.,
            self.z,
        )
    }

    /// Checks whether the footprint of `other` (ignoring `z`) lies
    /// within this rectangle
    pub fn contains_footprint(&self, other: &Rectangle) -> bool {
        other.x0 >= self.x0 && other.x1 <= self.x1 && other.y0 >= self.y0 && other.y1 <= self.y1
    }
}

#[cfg(test)]
mod testing {
    use super::*;
    use validate::assert_close;

    #[test]
    fn test_area_and_midpoint() {
        let r = Rectangle {
            x0: 1.,
            y0: 0.,
            x1: 4.,
            y1: 2.,
            z: 7.,
        };
        assert_close!(r.length(), 3.);
        assert_close!(r.width(), 2.);
        assert_close!(r.area(), 6.);

        let m = r.midpoint();
        assert_close!(m.x, 2.5);
        assert_close!(m.y, 1.);
        assert_close!(m.z, 7.);
    }

    #[test]
    fn test_contains_footprint() {
        let outer = Rectangle {
            x0: 0.,
            y0: 0.,
            x1: 4.,
            y1: 2.,
            z: 1.,
        };
        let inner = Rectangle {
            x0: 1.,
            y0: 0.5,
            x1: 4.,
            y1: 2.,
            z: 1.001,
        };
        assert!(outer.contains_footprint(&inner));
        assert!(!inner.contains_footprint(&outer));
    }
}
