use super::Rect;
use crate::common::*;

/// Bounding box in TLBR format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TLBR<T> {
    pub(crate) t: T,
    pub(crate) l: T,
    pub(crate) b: T,
    pub(crate) r: T,
}

impl<T> TLBR<T>
where
    T: Num + Copy,
{
    /// The degenerate box at the origin.
    pub fn zeros() -> Self {
        let zero = T::zero();
        Self {
            t: zero,
            l: zero,
            b: zero,
            r: zero,
        }
    }

    pub fn from_tlbr(tlbr: [T; 4]) -> Self {
        let [t, l, b, r] = tlbr;
        Self { t, l, b, r }
    }

    /// Build from the left, top, width and height, the layout tube
    /// annotations are stored in.
    ///
    /// The extent is not checked, so a negative width or height gives a box
    /// whose far corner lies before its near corner.
    pub fn from_ltwh(ltwh: [T; 4]) -> Self {
        let [l, t, w, h] = ltwh;
        Self::from_tlbr([t, l, t + h, l + w])
    }
}

impl<T> Rect for TLBR<T>
where
    T: Copy + Num + PartialOrd,
{
    type Type = T;

    fn t(&self) -> Self::Type {
        self.t
    }

    fn l(&self) -> Self::Type {
        self.l
    }

    fn b(&self) -> Self::Type {
        self.b
    }

    fn r(&self) -> Self::Type {
        self.r
    }

    fn h(&self) -> Self::Type {
        self.b - self.t
    }

    fn w(&self) -> Self::Type {
        self.r - self.l
    }
}
