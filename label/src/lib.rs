//! Class-labeled rectangles and their conversion to ratio units.

use anyhow::{ensure, Result};
use bbox::{prelude::*, HW, TLBR};
use num_traits::{Num, ToPrimitive};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label<R, C>
where
    R: Rect,
{
    pub rect: R,
    pub class: C,
}

/// A label in pixel units.
pub type PixelLabel<C> = Label<TLBR<f64>, C>;

/// A label whose coordinates are ratios of the image extent.
///
/// This is the same type as [PixelLabel]. The name only marks which unit the
/// coordinates are in.
pub type RatioLabel<C> = Label<TLBR<f64>, C>;

impl<C> Label<TLBR<f64>, C>
where
    C: Clone,
{
    /// Convert a pixel-unit label into ratio units of an image of `size`.
    ///
    /// Every coordinate is truncated to a whole pixel and clamped into
    /// `[0, extent]` before it is divided by the extent. Corners are scaled
    /// independently and keep their order, even when it is inverted.
    pub fn to_ratio<T>(&self, size: &HW<T>) -> Result<RatioLabel<C>>
    where
        T: Num + PartialOrd + ToPrimitive + Copy,
    {
        let (h, w) = match (size.h().to_f64(), size.w().to_f64()) {
            (Some(h), Some(w)) => (h, w),
            _ => anyhow::bail!("image size is not representable as f64"),
        };
        ensure!(h > 0.0 && w > 0.0, "image size must be positive");

        let [t, l, b, r] = self.rect.tlbr();
        let rect = TLBR::from_tlbr([
            pixel_ratio(t, h),
            pixel_ratio(l, w),
            pixel_ratio(b, h),
            pixel_ratio(r, w),
        ]);

        Ok(Label {
            rect,
            class: self.class.clone(),
        })
    }
}

/// Truncate, clamp into `[0, extent]` and scale by the extent.
pub fn pixel_ratio(value: f64, extent: f64) -> f64 {
    value.trunc().max(0.0).min(extent) / extent
}
