//! Sequential output palette for recoloured blobs.

use crate::color::Rgb;

/// Returns the output colour for the blob at `rank` out of `count`.
///
/// The target colour is dimmed progressively with rank so the largest blob
/// keeps the strongest tint. Pure black is lifted to near-black and pure
/// white lowered to near-white so recoloured blobs stay distinguishable
/// from a black or white background.
///
/// # Examples
/// ```
/// use blobfish_providers_raster::{Rgb, blob_color};
///
/// let target = Rgb::new(50, 50, 220);
/// assert_eq!(blob_color(target, 0, 1), target);
/// assert_eq!(blob_color(Rgb::new(0, 0, 0), 0, 1), Rgb::new(10, 10, 10));
/// ```
#[must_use]
pub fn blob_color(target: Rgb, rank: usize, count: usize) -> Rgb {
    let count = count.max(1);
    let rank = rank.min(count - 1);
    let scale = (count - rank + 1) as f64 / (count + 1) as f64;
    let channel = |value: u8| (scale * f64::from(value)) as u8;

    let (r, g, b) = (channel(target.r), channel(target.g), channel(target.b));
    if r == 0 && g == 0 && b == 0 {
        Rgb::new(10, 10, 10)
    } else if r == 255 && g == 255 && b == 255 {
        Rgb::new(245, 245, 245)
    } else {
        Rgb::new(r, g, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn the_top_blob_keeps_the_target_colour() {
        let target = Rgb::new(120, 60, 30);
        assert_eq!(blob_color(target, 0, 1), target);
        assert_eq!(blob_color(target, 0, 3), target);
    }

    #[test]
    fn later_ranks_are_progressively_dimmer() {
        let target = Rgb::new(200, 100, 240);
        let first = blob_color(target, 0, 4);
        let second = blob_color(target, 1, 4);
        let last = blob_color(target, 3, 4);
        assert!(first.r > second.r && second.r > last.r);
        assert!(first.b > second.b && second.b > last.b);
    }

    #[rstest]
    #[case(Rgb::new(0, 0, 0), Rgb::new(10, 10, 10))]
    #[case(Rgb::new(255, 255, 255), Rgb::new(245, 245, 245))]
    fn black_and_white_endpoints_are_adjusted(#[case] target: Rgb, #[case] expected: Rgb) {
        assert_eq!(blob_color(target, 0, 1), expected);
    }

    #[test]
    fn out_of_range_ranks_are_clamped() {
        let target = Rgb::new(90, 90, 90);
        assert_eq!(blob_color(target, 9, 2), blob_color(target, 1, 2));
    }
}
