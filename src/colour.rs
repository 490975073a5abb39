// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Turns a visit count into a colour.  The ramp runs black, red,
//! yellow, white, filling one channel at a time, so a cell needs 765
//! visits before it burns white.

use num::clamp;

/// Map a temperature to `[red, green, blue]`.
pub fn temperature_to_rgb(temperature: u32) -> [u8; 3] {
    let t = i64::from(temperature);
    [
        clamp(t, 0, 255) as u8,
        clamp(t - 255, 0, 255) as u8,
        clamp(t - 2 * 255, 0, 255) as u8,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cold_is_black() {
        assert_eq!(temperature_to_rgb(0), [0, 0, 0]);
    }

    #[test]
    fn red_fills_first() {
        for t in 0..255 {
            assert_eq!(temperature_to_rgb(t), [t as u8, 0, 0]);
        }
    }

    #[test]
    fn then_green() {
        for t in 255..510 {
            assert_eq!(temperature_to_rgb(t), [255, (t - 255) as u8, 0]);
        }
        assert_eq!(temperature_to_rgb(300), [255, 45, 0]);
    }

    #[test]
    fn then_blue() {
        for t in 510..765 {
            assert_eq!(temperature_to_rgb(t), [255, 255, (t - 510) as u8]);
        }
    }

    #[test]
    fn white_hot_saturates() {
        assert_eq!(temperature_to_rgb(765), [255, 255, 255]);
        assert_eq!(temperature_to_rgb(100_000), [255, 255, 255]);
        assert_eq!(temperature_to_rgb(u32::max_value()), [255, 255, 255]);
    }
}
