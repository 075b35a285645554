use image::{GrayImage, Luma, Rgb, RgbImage};

/// Binary mask: 255 where the source pixel matched, 0 elsewhere
pub type Mask = GrayImage;

/// Inclusive per-channel color band
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorRange {
    pub lower: [u8; 3],
    pub upper: [u8; 3],
}

impl ColorRange {
    pub fn new(lower: [u8; 3], upper: [u8; 3]) -> Self {
        Self { lower, upper }
    }

    /// Band of +/- `tolerance` around `color`, clamped to the channel range
    pub fn around(color: [u8; 3], tolerance: u8) -> Self {
        Self {
            lower: color.map(|c| c.saturating_sub(tolerance)),
            upper: color.map(|c| c.saturating_add(tolerance)),
        }
    }

    pub fn contains(&self, pixel: &Rgb<u8>) -> bool {
        (0..3).all(|i| self.lower[i] <= pixel[i] && pixel[i] <= self.upper[i])
    }
}

/// Mark every pixel of `image` whose color falls inside `range`
pub fn segment(image: &RgbImage, range: &ColorRange) -> Mask {
    GrayImage::from_fn(image.width(), image.height(), |x, y| {
        if range.contains(image.get_pixel(x, y)) {
            Luma([255u8])
        } else {
            Luma([0u8])
        }
    })
}

/// Number of foreground pixels in a mask
pub fn coverage(mask: &Mask) -> usize {
    mask.pixels().filter(|p| p[0] > 0).count()
}
