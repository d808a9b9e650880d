use crate::{
    class::{ActionClass, NO_GT_LABEL, NUM_CLASSES},
    common::*,
    raster::TubeLabel,
};

/// The ground truth attached to a sampled frame.
#[derive(Debug, Clone, PartialEq)]
pub enum FrameTargets {
    /// Boxes of the tubes present at the frame, in tube order.
    Tubes(Vec<TubeLabel>),
    /// A test frame without any tube, kept in exhaustive test mode.
    NoGroundTruth,
}

/// One indexed frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    pub video_id: usize,
    /// 1-based frame number, matching the image file name.
    pub frame_number: usize,
    pub targets: FrameTargets,
}

impl Sample {
    /// Class indices of the targets.
    ///
    /// A frame without ground truth reports the single label [NO_GT_LABEL].
    pub fn labels(&self) -> Vec<usize> {
        match &self.targets {
            FrameTargets::Tubes(tubes) => tubes.iter().map(|tube| tube.class.index()).collect(),
            FrameTargets::NoGroundTruth => vec![NO_GT_LABEL],
        }
    }

    /// Pixel boxes in `[xmin, ymin, xmax, ymax]` order, paired with [Self::labels].
    pub fn boxes(&self) -> Vec<[f64; 4]> {
        match &self.targets {
            FrameTargets::Tubes(tubes) => tubes.iter().map(|tube| tube.rect.xyxy()).collect(),
            FrameTargets::NoGroundTruth => vec![TLBR::<f64>::zeros().xyxy()],
        }
    }

    pub fn has_ground_truth(&self) -> bool {
        matches!(self.targets, FrameTargets::Tubes(_))
    }
}

/// Per-class number of boxes in the train and test lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionCounts {
    pub train: [usize; NUM_CLASSES],
    pub test: [usize; NUM_CLASSES],
}

impl Default for ActionCounts {
    fn default() -> Self {
        Self {
            train: [0; NUM_CLASSES],
            test: [0; NUM_CLASSES],
        }
    }
}

impl ActionCounts {
    pub fn add(&mut self, sample: &Sample, is_train: bool) {
        let counts = if is_train {
            &mut self.train
        } else {
            &mut self.test
        };
        if let FrameTargets::Tubes(tubes) = &sample.targets {
            tubes
                .iter()
                .for_each(|tube| counts[tube.class.index()] += 1);
        }
    }

    /// Iterate `(class, train_count, test_count)` in class order.
    pub fn iter(&self) -> impl Iterator<Item = (ActionClass, usize, usize)> + '_ {
        ActionClass::iter().map(move |class| {
            let index = class.index();
            (class, self.train[index], self.test[index])
        })
    }
}

/// The train and test sample lists of the whole corpus.
///
/// The index is immutable once built and can be shared across threads.
#[derive(Debug, Clone)]
pub struct SampleIndex {
    video_names: Vec<String>,
    train: Vec<Sample>,
    test: Vec<Sample>,
    train_runs: IndexMap<usize, Vec<Range<usize>>>,
    counts: ActionCounts,
}

impl SampleIndex {
    pub fn new(
        video_names: Vec<String>,
        train: Vec<Sample>,
        test: Vec<Sample>,
        counts: ActionCounts,
    ) -> Self {
        let train_runs = group_runs(&train);
        Self {
            video_names,
            train,
            test,
            train_runs,
            counts,
        }
    }

    pub fn train(&self) -> &[Sample] {
        &self.train
    }

    pub fn test(&self) -> &[Sample] {
        &self.test
    }

    pub fn video_names(&self) -> &[String] {
        &self.video_names
    }

    pub fn video_name(&self, video_id: usize) -> Option<&str> {
        self.video_names.get(video_id).map(String::as_str)
    }

    pub fn num_videos(&self) -> usize {
        self.video_names.len()
    }

    pub fn action_counts(&self) -> &ActionCounts {
        &self.counts
    }

    /// The runs of consecutive train samples of a video, as offsets into the
    /// train list.
    pub fn train_runs(&self, video_id: usize) -> Option<&[Range<usize>]> {
        self.train_runs.get(&video_id).map(Vec::as_slice)
    }

    /// The cumulative train-list length at the end of each run of a video.
    pub fn train_run_boundaries(&self, video_id: usize) -> Option<Vec<usize>> {
        self.train_runs(video_id)
            .map(|runs| runs.iter().map(|run| run.end).collect())
    }

    /// Video ids that own train samples, in train-list order.
    pub fn train_video_ids(&self) -> impl Iterator<Item = usize> + '_ {
        self.train_runs.keys().copied()
    }
}

/// Group adjacent samples by video id.
fn group_runs(samples: &[Sample]) -> IndexMap<usize, Vec<Range<usize>>> {
    samples
        .iter()
        .map(|sample| sample.video_id)
        .dedup_with_count()
        .scan(0, |end, (count, video_id)| {
            let begin = *end;
            *end += count;
            Some((video_id, begin..*end))
        })
        .fold(IndexMap::new(), |mut runs, (video_id, run)| {
            runs.entry(video_id).or_insert_with(Vec::new).push(run);
            runs
        })
}
