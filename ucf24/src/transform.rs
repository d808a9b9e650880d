use crate::{
    class::NO_GT_LABEL,
    common::*,
    index::{FrameTargets, Sample},
};

/// A normalized target `[xmin, ymin, xmax, ymax, label]`.
pub type TargetRow = [f64; 5];

/// Converts pixel-unit sample targets into ratios of the image extent.
///
/// Coordinates are truncated to whole pixels and clipped to the image before
/// scaling, so every output coordinate lies in `[0, 1]`. A frame without
/// ground truth maps to one all-zero box labeled [NO_GT_LABEL].
#[derive(Debug, Clone, Copy, Default)]
pub struct AnnotationTransform;

impl AnnotationTransform {
    pub fn apply(&self, sample: &Sample, size: &HW<usize>) -> Result<Vec<TargetRow>> {
        if size.is_empty() {
            return Err(Error::InvalidImageSize {
                height: size.h(),
                width: size.w(),
            });
        }

        match &sample.targets {
            FrameTargets::Tubes(tubes) => tubes
                .iter()
                .map(|tube| {
                    let ratio = tube.to_ratio(size).map_err(|_| Error::InvalidImageSize {
                        height: size.h(),
                        width: size.w(),
                    })?;
                    let [x1, y1, x2, y2] = ratio.rect.xyxy();
                    Ok([x1, y1, x2, y2, ratio.class.index() as f64])
                })
                .collect(),
            FrameTargets::NoGroundTruth => Ok(vec![[0.0, 0.0, 0.0, 0.0, NO_GT_LABEL as f64]]),
        }
    }
}
