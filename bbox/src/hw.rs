use crate::common::*;

/// Image or box extent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HW<T> {
    h: T,
    w: T,
}

impl<T> HW<T>
where
    T: Num + PartialOrd + Copy,
{
    pub fn try_from_hw(hw: [T; 2]) -> Result<Self> {
        let [h, w] = hw;
        let zero = T::zero();
        ensure!(
            h >= zero && w >= zero,
            "height and width parameters must be non-negative"
        );
        Ok(Self { h, w })
    }

    pub fn is_empty(&self) -> bool {
        self.h == T::zero() || self.w == T::zero()
    }

    pub fn w(&self) -> T {
        self.w
    }

    pub fn h(&self) -> T {
        self.h
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_accessors() {
        let s1 = HW::try_from_hw([50usize, 100]).unwrap();
        assert_eq!(s1.h(), 50);
        assert_eq!(s1.w(), 100);
        assert!(!s1.is_empty());
        assert!(HW::try_from_hw([0usize, 3]).unwrap().is_empty());
    }

    #[test]
    fn negative_size_is_rejected() {
        assert!(HW::try_from_hw([-1.0, 2.0]).is_err());
    }
}
