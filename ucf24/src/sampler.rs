use crate::{
    annotation::AnnotationStore,
    class::ActionClass,
    common::*,
    index::{ActionCounts, FrameTargets, Sample, SampleIndex},
    raster::FrameTable,
    split::TrainSplit,
};

/// The frame stride and frame ceiling of one video.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stride {
    pub step: f64,
    /// Candidate frames stay strictly below this index.
    pub last_frame: usize,
}

impl Stride {
    pub fn new(class: ActionClass, num_frames: usize, is_train: bool, full_test: bool) -> Self {
        if full_test {
            Self {
                step: 1.0,
                last_frame: num_frames,
            }
        } else {
            Self {
                step: class.stride(is_train),
                last_frame: num_frames.saturating_sub(1),
            }
        }
    }

    /// Frame indices `0, step, 2 * step, ...` below the ceiling, truncated to
    /// integers.
    ///
    /// A fractional step may truncate two positions to the same frame. Such a
    /// frame is yielded once.
    pub fn frames(&self) -> impl Iterator<Item = usize> {
        let Self { step, last_frame } = *self;
        let last = last_frame as f64;
        (0usize..)
            .map(move |nth| nth as f64 * step)
            .take_while(move |&position| step > 0.0 && position < last)
            .map(|position| position as usize)
            .dedup()
    }
}

/// Chooses the frames of each video that become samples.
#[derive(Debug, Clone)]
pub struct FrameSampler<'a> {
    split: &'a TrainSplit,
    full_test: bool,
}

impl<'a> FrameSampler<'a> {
    /// Create a sampler.
    ///
    /// In exhaustive test mode (`full_test`) every frame is a candidate, and
    /// test frames without ground truth are kept as sentinel samples.
    pub fn new(split: &'a TrainSplit, full_test: bool) -> Self {
        Self { split, full_test }
    }

    pub fn is_train(&self, video_name: &str) -> bool {
        self.split.contains(video_name)
    }

    /// Sample the frames of one rasterized video.
    pub fn sample_video(
        &self,
        video_id: usize,
        class: ActionClass,
        is_train: bool,
        table: &FrameTable,
    ) -> Vec<Sample> {
        let stride = Stride::new(class, table.num_frames(), is_train, self.full_test);

        stride
            .frames()
            .filter_map(|frame| {
                let tubes: Vec<_> = table.active_tubes(frame).cloned().collect();
                let targets = if !tubes.is_empty() {
                    FrameTargets::Tubes(tubes)
                } else if self.full_test && !is_train {
                    FrameTargets::NoGroundTruth
                } else {
                    return None;
                };

                Some(Sample {
                    video_id,
                    frame_number: frame + 1,
                    targets,
                })
            })
            .collect()
    }

    /// Rasterize and sample every video of the store in id order.
    ///
    /// Fails on the first inconsistent video without producing an index.
    pub fn build(&self, store: &AnnotationStore) -> Result<SampleIndex> {
        let mut train = vec![];
        let mut test = vec![];
        let mut counts = ActionCounts::default();

        for (video_id, name, video) in store.iter() {
            if video.numf == 0 {
                warn!("video '{}' has no frames", name);
            }

            let table = FrameTable::rasterize(name, video)?;
            let is_train = self.is_train(name);
            let samples = self.sample_video(video_id, video.label, is_train, &table);
            debug!(
                "sampled {} of {} frames from {} video '{}'",
                samples.len(),
                video.numf,
                if is_train { "train" } else { "test" },
                name
            );

            samples.iter().for_each(|sample| counts.add(sample, is_train));
            if is_train {
                train.extend(samples);
            } else {
                test.extend(samples);
            }
        }

        for (class, num_train, num_test) in counts.iter() {
            info!(
                "train {:05} test {:05} action {:02} {}",
                num_train,
                num_test,
                class.index(),
                class
            );
        }
        info!("train list {} samples, test list {} samples", train.len(), test.len());

        let video_names = store.video_names().map(ToOwned::to_owned).collect();
        Ok(SampleIndex::new(video_names, train, test, counts))
    }
}
