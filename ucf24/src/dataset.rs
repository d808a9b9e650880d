use crate::{
    annotation::AnnotationStore,
    common::*,
    config::{DatasetConfig, Subset},
    index::{Sample, SampleIndex},
    layout::ImageLayout,
    sampler::FrameSampler,
    split::TrainSplit,
    transform::{AnnotationTransform, TargetRow},
};

/// Random access to one subset of the UCF101-24 sample index.
#[derive(Debug, Clone)]
pub struct Ucf24Dataset {
    index: Arc<SampleIndex>,
    subset: Subset,
    layout: ImageLayout,
    transform: AnnotationTransform,
}

impl Ucf24Dataset {
    /// Load the split and annotations, then build the sample index.
    pub fn open(config: &DatasetConfig) -> Result<Self> {
        let index = Arc::new(build_index(config)?);
        Ok(Self::from_index(index, config.subset, config.layout()))
    }

    /// Share an already built index, for example between the train and test
    /// datasets.
    pub fn from_index(index: Arc<SampleIndex>, subset: Subset, layout: ImageLayout) -> Self {
        Self {
            index,
            subset,
            layout,
            transform: AnnotationTransform,
        }
    }

    pub fn index(&self) -> &Arc<SampleIndex> {
        &self.index
    }

    pub fn subset(&self) -> Subset {
        self.subset
    }

    pub fn layout(&self) -> &ImageLayout {
        &self.layout
    }

    pub fn samples(&self) -> &[Sample] {
        match self.subset {
            Subset::Train => self.index.train(),
            Subset::Test => self.index.test(),
        }
    }

    pub fn len(&self) -> usize {
        self.samples().len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples().is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Sample> {
        self.samples().get(index)
    }

    pub fn video_name(&self, video_id: usize) -> Option<&str> {
        self.index.video_name(video_id)
    }

    /// Cumulative end offsets of the train-list runs of a video.
    pub fn train_run_boundaries(&self, video_id: usize) -> Option<Vec<usize>> {
        self.index.train_run_boundaries(video_id)
    }

    pub fn train_runs(&self, video_id: usize) -> Option<&[Range<usize>]> {
        self.index.train_runs(video_id)
    }

    pub fn image_path(&self, index: usize) -> Option<PathBuf> {
        let sample = self.get(index)?;
        let name = self.video_name(sample.video_id)?;
        Some(self.layout.image_path(name, sample.frame_number))
    }

    /// Tell whether the sample at `index` starts a new video, compared with
    /// the sample right before it.
    pub fn is_video_start(&self, index: usize) -> bool {
        let samples = self.samples();
        match index {
            0 => !samples.is_empty(),
            _ => match (samples.get(index - 1), samples.get(index)) {
                (Some(prev), Some(curr)) => prev.video_id != curr.video_id,
                _ => false,
            },
        }
    }

    /// Read the image size of a sample and normalize its targets.
    ///
    /// Returns `None` if the index is out of range.
    pub fn load_targets(&self, index: usize) -> Option<Result<Vec<TargetRow>>> {
        let sample = self.get(index)?;
        let name = self.video_name(sample.video_id)?;
        let result = self
            .layout
            .image_size(name, sample.frame_number)
            .and_then(|size| self.transform.apply(sample, &size));
        Some(result)
    }
}

/// Build the train and test lists from the files named by the config.
pub fn build_index(config: &DatasetConfig) -> Result<SampleIndex> {
    let split = TrainSplit::load(config.split_file())?;
    let store = AnnotationStore::load(config.annotation_file())?;
    let index = FrameSampler::new(&split, config.full_test).build(&store)?;

    if config.verify_images {
        let layout = config.layout();
        index
            .train()
            .iter()
            .chain(index.test())
            .try_for_each(|sample| {
                let name = index.video_name(sample.video_id).unwrap_or_default();
                layout.check_image(name, sample.frame_number)
            })?;
        info!(
            "verified images of {} samples under '{}'",
            index.train().len() + index.test().len(),
            layout.image_dir().display()
        );
    }

    Ok(index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::{ActionCounts, FrameTargets};

    fn test_dataset(video_ids: &[usize]) -> Ucf24Dataset {
        let test = video_ids
            .iter()
            .enumerate()
            .map(|(nth, &video_id)| Sample {
                video_id,
                frame_number: nth + 1,
                targets: FrameTargets::NoGroundTruth,
            })
            .collect();
        let index = SampleIndex::new(
            vec!["a/v_a".into(), "b/v_b".into()],
            vec![],
            test,
            ActionCounts::default(),
        );
        Ucf24Dataset::from_index(
            Arc::new(index),
            Subset::Test,
            ImageLayout::new("/data", "rgb"),
        )
    }

    #[test]
    fn video_start_flags() {
        let dataset = test_dataset(&[0, 0, 1, 1, 0]);
        let flags: Vec<_> = (0..6).map(|index| dataset.is_video_start(index)).collect();
        assert_eq!(flags, [true, false, true, false, true, false]);
        assert!(!test_dataset(&[]).is_video_start(0));
    }

    #[test]
    fn image_paths() {
        let dataset = test_dataset(&[0, 1]);
        assert_eq!(
            dataset.image_path(1),
            Some(PathBuf::from("/data/rgb-images/b/v_b/00002.jpg"))
        );
        assert_eq!(dataset.image_path(2), None);
        assert!(dataset.load_targets(2).is_none());
        assert!(matches!(
            dataset.load_targets(0),
            Some(Err(Error::ImageNotFound { .. }))
        ));
    }

    #[test]
    fn dataset_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Ucf24Dataset>();
        assert_send_sync::<SampleIndex>();
    }
}
