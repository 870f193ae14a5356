//! Blackbody spectral math used to tint stars.
//!
//! A star's surface temperature determines its peak emission wavelength
//! (Wien's displacement law), which maps to an approximate visible colour.
//!
//! ## Units
//!
//! All constants here are **pre-scaled**: Wien's constant is stored directly
//! as `2.8977719e-3` m·K, so `b / T` stays comfortably inside the `f64`
//! exponent range.  Do not reintroduce Planck-constant-scale arithmetic
//! (`6.626e-34` built up from native exponentiation) — naive `10 ^ -34`
//! style expressions underflow/misparse and were an observed bug source in
//! photon-energy calculations.  The Wien path below never touches values
//! smaller than ~1e-8, so plain `f64` is safe.

/// Wien's displacement constant `b`, in metre-kelvins.
pub const WIEN_DISPLACEMENT_M_K: f64 = 2.8977719e-3;

/// Default gamma used by [`wavelength_to_rgb`].
pub const DEFAULT_GAMMA: f64 = 0.8;

/// Wien's displacement law `λₘ = b / T`.
///
/// Hotter bodies peak at shorter (bluer) wavelengths, cooler bodies at
/// longer (redder) ones.  Input kelvin, output metres.
pub fn temperature_to_wavelength(kelvin: f64) -> f64 {
    WIEN_DISPLACEMENT_M_K / kelvin
}

/// Peak wavelength in nanometres for a blackbody at `kelvin`.
///
/// Convenience wrapper over [`temperature_to_wavelength`] with the m → nm
/// scaling (×1e9) applied in one documented place.
pub fn temperature_to_wavelength_nm(kelvin: f64) -> f64 {
    temperature_to_wavelength(kelvin) * 1.0e9
}

/// Inverse of Wien's law: `T = b / λₘ` (wavelength in metres).
pub fn wavelength_to_temperature(wavelength: f64) -> f64 {
    WIEN_DISPLACEMENT_M_K / wavelength
}

/// Approximate RGB values in `[0, 255]` for a wavelength in nanometres
/// between 380 and 780 nm.
///
/// Piecewise-linear fit over seven visible-spectrum bands with intensity
/// falloff near the vision limits, gamma-corrected per channel.  Wavelengths
/// outside the visible range return black.
///
/// Ported from "RGB VALUES FOR VISIBLE WAVELENGTHS" by Dan Bruton:
/// <http://www.physics.sfasu.edu/astro/color/spectra.html>
pub fn wavelength_to_rgb(wavelength: f64, gamma: f64) -> [u8; 3] {
    let (red, green, blue) = if (380.0..440.0).contains(&wavelength) {
        (-(wavelength - 440.0) / (440.0 - 380.0), 0.0, 1.0)
    } else if (440.0..490.0).contains(&wavelength) {
        (0.0, (wavelength - 440.0) / (490.0 - 440.0), 1.0)
    } else if (490.0..510.0).contains(&wavelength) {
        (0.0, 1.0, -(wavelength - 510.0) / (510.0 - 490.0))
    } else if (510.0..580.0).contains(&wavelength) {
        ((wavelength - 510.0) / (580.0 - 510.0), 1.0, 0.0)
    } else if (580.0..645.0).contains(&wavelength) {
        (1.0, -(wavelength - 645.0) / (645.0 - 580.0), 0.0)
    } else if (645.0..781.0).contains(&wavelength) {
        (1.0, 0.0, 0.0)
    } else {
        (0.0, 0.0, 0.0)
    };

    // Intensity falls off near the vision limits.
    let factor = if (380.0..420.0).contains(&wavelength) {
        0.3 + 0.7 * (wavelength - 380.0) / (420.0 - 380.0)
    } else if (420.0..701.0).contains(&wavelength) {
        1.0
    } else if (701.0..781.0).contains(&wavelength) {
        0.3 + 0.7 * (780.0 - wavelength) / (780.0 - 700.0)
    } else {
        0.0
    };

    // A zero channel must stay zero: 0^gamma would otherwise yield 1.
    let correct = |channel: f64| -> u8 {
        if channel == 0.0 {
            0
        } else {
            (255.0 * (channel * factor).powf(gamma)).round() as u8
        }
    };

    [correct(red), correct(green), correct(blue)]
}

/// [`wavelength_to_rgb`] with the default gamma of 0.8.
pub fn wavelength_to_rgb_default(wavelength: f64) -> [u8; 3] {
    wavelength_to_rgb(wavelength, DEFAULT_GAMMA)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sun_peaks_in_green() {
        // The Sun's effective temperature is 5772 K; Wien's law puts the peak
        // at ~502 nm, squarely in the green band (it looks yellow for other
        // reasons).
        let nm = temperature_to_wavelength_nm(5772.0);
        assert!((nm - 502.0).abs() < 1.0, "expected ~502 nm, got {nm}");
    }

    #[test]
    fn wien_round_trips() {
        let kelvin = 5772.0;
        let back = wavelength_to_temperature(temperature_to_wavelength(kelvin));
        assert!((back - kelvin).abs() < 1e-6);
    }

    #[test]
    fn hotter_is_bluer() {
        assert!(temperature_to_wavelength_nm(30_000.0) < temperature_to_wavelength_nm(3_000.0));
    }

    #[test]
    fn red_wavelength_is_red() {
        let [r, g, b] = wavelength_to_rgb(650.0, DEFAULT_GAMMA);
        assert_eq!((g, b), (0, 0));
        assert!(r > 200, "650 nm should be strongly red, got {r}");
    }

    #[test]
    fn green_wavelength_is_green() {
        let [r, g, b] = wavelength_to_rgb(540.0, DEFAULT_GAMMA);
        assert!(g > 200, "540 nm should be strongly green, got {g}");
        assert!(r < g && b == 0);
    }

    #[test]
    fn blue_wavelength_is_blue() {
        let [r, g, b] = wavelength_to_rgb(470.0, DEFAULT_GAMMA);
        assert_eq!(r, 0);
        assert!(b > 200, "470 nm should be strongly blue, got {b}");
        assert!(g < b);
    }

    #[test]
    fn out_of_range_is_black() {
        assert_eq!(wavelength_to_rgb(200.0, DEFAULT_GAMMA), [0, 0, 0]);
        assert_eq!(wavelength_to_rgb(900.0, DEFAULT_GAMMA), [0, 0, 0]);
    }

    #[test]
    fn edge_intensity_falls_off() {
        // Deep violet is dimmer than mid-band blue of the same channel.
        let [_, _, violet_b] = wavelength_to_rgb(385.0, DEFAULT_GAMMA);
        let [_, _, blue_b] = wavelength_to_rgb(460.0, DEFAULT_GAMMA);
        assert!(violet_b < blue_b);
    }

    #[test]
    fn zero_channel_never_gamma_inflates() {
        // 700 nm has green == blue == 0; gamma correction must keep them 0.
        let [_, g, b] = wavelength_to_rgb(700.0, DEFAULT_GAMMA);
        assert_eq!((g, b), (0, 0));
    }
}
