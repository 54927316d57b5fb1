//! Display helpers shared by every client.

use crate::icons::Icon;
use std::cmp::Ordering;

pub const MAX_STARS: usize = 5;

/// Full stars for the whole part, one half star for any fraction, empty stars up to five.
pub fn rating_stars(rating: f32) -> Vec<Icon> {
    let rating = rating.clamp(0.0, MAX_STARS as f32);
    let full = rating.floor() as usize;
    let half = rating.fract() > 0.0;

    let mut stars = vec![Icon::Star; full];
    if half {
        stars.push(Icon::StarHalf);
    }
    stars.resize(MAX_STARS, Icon::StarEmpty);
    stars
}

pub fn stars_glyphs(rating: f32) -> String {
    rating_stars(rating).into_iter().map(Icon::glyph).collect()
}

/// "1234" becomes "1.2k"; anything under a thousand is shown as is.
///
/// Rounds to the nearest tenth of a thousand. An exact half rounds up unless the
/// binary value of `count / 1000` sits below the half, as with 1150.
pub fn downloads(count: u64) -> String {
    if count < 1000 {
        return count.to_string();
    }
    let round_up = match (count % 100).cmp(&50) {
        Ordering::Less => false,
        Ordering::Greater => true,
        Ordering::Equal => {
            let thousands = count as f64 / 1000.0;
            thousands.mul_add(1000.0, -(count as f64)) >= 0.0
        }
    };
    let tenths = count / 100 + u64::from(round_up);
    format!("{}.{}k", tenths / 10, tenths % 10)
}
