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

/// The solar energy that reaches a unit area perpendicular to the
/// sun's rays, at one astronomical unit from the sun [W/m2]
pub const SOLAR_CONSTANT: Float = 1361.;

/// Square feet to square meters
pub const SQFT_TO_SQM: Float = 0.092903;

/// Fraction of the beam that survives one air mass, in the clear-sky approximation
const TRANSMITTANCE: Float = 0.7;

/// Exponent applied to the air mass, in the clear-sky approximation
const AIRMASS_EXPONENT: Float = 0.678;

/// Calculates the clear-sky irradiance over a horizontal surface [W/m2].
///
/// Returns zero when the sun is on or below the horizon.
pub fn irradiance(elevation: Float) -> Float {
    if elevation <= 0.0 {
        return 0.0;
    }
    let sin_elev = elevation.to_radians().sin();
    let airmass = 1. / sin_elev;
    SOLAR_CONSTANT * sin_elev * TRANSMITTANCE.powf(airmass.powf(AIRMASS_EXPONENT))
}

/// Calculates the electric power [W] produced by the area of the panels
/// that is not in shadow. `total_area` and `shadow_area` are in square feet.
pub fn power(total_area: Float, shadow_area: Float, efficiency: Float, elevation: Float) -> i64 {
    let exposed_area = (total_area - shadow_area) * SQFT_TO_SQM;
    (exposed_area * efficiency * irradiance(elevation)) as i64
}

/// Calculates the cost of the panels plus the cost of their frame.
///
/// All panels have the same width, so the frame is measured as a single
/// panel as long as all the panels together.
pub fn cost(total_area: Float, panel_width: Float, cost_panel: Float, cost_frame: Float) -> i64 {
    let sum_of_lengths = total_area / panel_width;
    let perimeter = 2. * (sum_of_lengths + panel_width);
    (cost_panel * total_area + cost_frame * perimeter) as i64
}

#[cfg(test)]
mod testing {
    use super::*;
    use validate::assert_close;

    #[test]
    fn test_irradiance() {
        assert_close!(irradiance(90.), 952.7, 1e-6);
        assert_eq!(irradiance(0.), 0.0);
        assert_eq!(irradiance(-30.), 0.0);

        // Lower sun means less energy
        let mut last = irradiance(90.);
        for elevation in [75., 60., 45., 30., 15., 5.] {
            let v = irradiance(elevation);
            assert!(v > 0.0);
            assert!(v < last);
            last = v;
        }
    }

    #[test]
    fn test_power() {
        assert_eq!(power(10., 0., 0.15, 90.), 132);
        assert_eq!(power(10., 0., 0.15, 0.), 0);
        assert_eq!(power(10., 10., 0.15, 90.), 0);

        // shadows take energy away
        assert!(power(10., 4., 0.15, 90.) < power(10., 0., 0.15, 90.));
    }

    #[test]
    fn test_cost() {
        assert_eq!(cost(10., 2., 5., 5.), 120);
        assert_eq!(cost(10., 2., 0., 0.), 0);
        // truncated, not rounded
        assert_eq!(cost(1., 1., 0.99, 0.), 0);
    }
}
