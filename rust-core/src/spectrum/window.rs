//! Analysis window functions
//!
//! Optional tapering applied to the time-domain slice before packing.
//! The default rectangular window leaves samples untouched.

use std::f32::consts::PI;

/// Window function types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WindowType {
    /// No tapering
    #[default]
    Rectangular,

    /// Hann window: w[n] = 0.5 - 0.5*cos(2πn/(M-1))
    Hann,

    /// Hamming window: w[n] = 0.54 - 0.46*cos(2πn/(M-1))
    Hamming,

    /// Blackman window: w[n] = 0.42 - 0.5*cos(2πn/(M-1)) + 0.08*cos(4πn/(M-1))
    Blackman,
}

/// Generate window coefficients
///
/// # Arguments
/// * `window_type` - Type of window function
/// * `length` - Number of samples (M)
///
/// # Returns
/// Vector of window coefficients w[n] for n = 0..M-1
pub fn generate_window(window_type: WindowType, length: usize) -> Vec<f32> {
    if length < 2 {
        return vec![1.0; length];
    }

    let m = length as f32;
    let mut window = Vec::with_capacity(length);

    match window_type {
        WindowType::Rectangular => {
            window.resize(length, 1.0);
        }

        WindowType::Hann => {
            for n in 0..length {
                let angle = 2.0 * PI * n as f32 / (m - 1.0);
                window.push(0.5 - 0.5 * angle.cos());
            }
        }

        WindowType::Hamming => {
            for n in 0..length {
                let angle = 2.0 * PI * n as f32 / (m - 1.0);
                window.push(0.54 - 0.46 * angle.cos());
            }
        }

        WindowType::Blackman => {
            for n in 0..length {
                let angle1 = 2.0 * PI * n as f32 / (m - 1.0);
                let angle2 = 4.0 * PI * n as f32 / (m - 1.0);
                window.push(0.42 - 0.5 * angle1.cos() + 0.08 * angle2.cos());
            }
        }
    }

    window
}

/// Apply a window to a signal in place
pub fn apply_window_inplace(signal: &mut [f32], window_type: WindowType) {
    if window_type == WindowType::Rectangular {
        return;
    }

    let window = generate_window(window_type, signal.len());
    for (s, w) in signal.iter_mut().zip(window.iter()) {
        *s *= w;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_generation() {
        let length = 161;

        let hann = generate_window(WindowType::Hann, length);
        let hamming = generate_window(WindowType::Hamming, length);
        let blackman = generate_window(WindowType::Blackman, length);

        assert_eq!(hann.len(), length);
        assert_eq!(hamming.len(), length);
        assert_eq!(blackman.len(), length);

        // Symmetric windows
        assert!((hann[0] - hann[length - 1]).abs() < 1e-6);
        assert!((hamming[0] - hamming[length - 1]).abs() < 1e-6);
        assert!((blackman[0] - blackman[length - 1]).abs() < 1e-6);

        // Center values should be 1.0
        let center = length / 2;
        assert!((hann[center] - 1.0).abs() < 1e-6);
        assert!((hamming[center] - 1.0).abs() < 1e-6);
        assert!((blackman[center] - 1.0).abs() < 1e-6);

        // Hamming has non-zero endpoints (0.08)
        assert!(hamming[0] > 0.07 && hamming[0] < 0.09);
    }

    #[test]
    fn test_rectangular_window() {
        let window = generate_window(WindowType::Rectangular, 100);

        assert_eq!(window.len(), 100);
        assert!(window.iter().all(|&w| w == 1.0));
    }

    #[test]
    fn test_apply_window_inplace() {
        let mut signal = vec![1.0; 100];
        apply_window_inplace(&mut signal, WindowType::Hann);

        // Center close to 1.0, edges close to zero
        assert!((signal[50] - 1.0).abs() < 0.01);
        assert!(signal[0] < 0.01);
        assert!(signal[99] < 0.01);
    }

    #[test]
    fn test_apply_rectangular_is_identity() {
        let mut signal = vec![0.25; 16];
        apply_window_inplace(&mut signal, WindowType::Rectangular);

        assert!(signal.iter().all(|&s| s == 0.25));
    }
}
