use crate::{annotation::VideoAnnotation, class::ActionClass, common::*};

/// A tube box in pixel units labeled with its action class.
pub type TubeLabel = PixelLabel<ActionClass>;

/// The state of one tube at one frame.
#[derive(Debug, Clone, PartialEq)]
pub enum TubeCell {
    Absent,
    Present(TubeLabel),
}

impl TubeCell {
    pub fn label(&self) -> Option<&TubeLabel> {
        match self {
            Self::Absent => None,
            Self::Present(label) => Some(label),
        }
    }
}

/// Dense frame-by-tube table of one video.
#[derive(Debug, Clone)]
pub struct FrameTable {
    num_frames: usize,
    num_tubes: usize,
    /// Row-major cells, `num_tubes` cells per frame.
    cells: Vec<TubeCell>,
}

impl FrameTable {
    /// Expand the tubes of a video into per-frame cells.
    ///
    /// Raw `[left, top, width, height]` boxes are converted into corner form
    /// as they are, a negative extent included. A tube labeled differently
    /// from its video is rejected.
    pub fn rasterize(video_name: &str, video: &VideoAnnotation) -> Result<Self> {
        let num_tubes = video.annotations.len();
        let mut cells = vec![TubeCell::Absent; video.numf * num_tubes];

        for (tube_id, tube) in video.annotations.iter().enumerate() {
            if tube.label != video.label {
                return Err(Error::LabelMismatch {
                    video: video_name.to_owned(),
                    tube: tube_id,
                    expected: video.label,
                    found: tube.label,
                });
            }

            for (frame, ltwh) in tube.frames().zip(&tube.boxes) {
                let rect = TLBR::from_ltwh(*ltwh);
                if rect.w() < 0.0 || rect.h() < 0.0 {
                    warn!(
                        "tube {} of video '{}' has a negative box extent {:?} at frame {}",
                        tube_id, video_name, ltwh, frame
                    );
                }
                let cell = (frame < video.numf)
                    .then(|| cells.get_mut(frame * num_tubes + tube_id))
                    .flatten()
                    .ok_or_else(|| Error::CorruptAnnotationStore {
                        origin: video_name.to_owned(),
                        reason: format!(
                            "tube {} reaches frame {} beyond the video length {}",
                            tube_id, frame, video.numf
                        ),
                    })?;
                *cell = TubeCell::Present(Label {
                    rect,
                    class: tube.label,
                });
            }
        }

        Ok(Self {
            num_frames: video.numf,
            num_tubes,
            cells,
        })
    }

    pub fn num_frames(&self) -> usize {
        self.num_frames
    }

    pub fn num_tubes(&self) -> usize {
        self.num_tubes
    }

    /// The cells of all tubes at `frame`, in tube order.
    pub fn row(&self, frame: usize) -> &[TubeCell] {
        let begin = frame * self.num_tubes;
        self.cells
            .get(begin..begin + self.num_tubes)
            .unwrap_or(&[])
    }

    /// Labels of the tubes present at `frame`, in tube order.
    pub fn active_tubes(&self, frame: usize) -> impl Iterator<Item = &TubeLabel> + '_ {
        self.row(frame).iter().filter_map(TubeCell::label)
    }

    pub fn num_active(&self, frame: usize) -> usize {
        self.active_tubes(frame).count()
    }
}
