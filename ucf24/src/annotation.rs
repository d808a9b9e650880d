use crate::{class::ActionClass, common::*};

/// The annotation of one video.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct VideoAnnotation {
    /// The action class of the whole video.
    pub label: ActionClass,
    /// The number of frames.
    pub numf: usize,
    /// The action tubes in the video.
    pub annotations: Vec<TubeAnnotation>,
}

/// One action instance spanning the frames `sf..ef`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TubeAnnotation {
    /// The first frame, zero-based.
    pub sf: usize,
    /// The frame after the last one.
    pub ef: usize,
    pub label: ActionClass,
    /// Per-frame boxes in `[left, top, width, height]` pixel layout, one for
    /// each frame in `sf..ef`.
    pub boxes: Vec<[f64; 4]>,
}

impl TubeAnnotation {
    pub fn frames(&self) -> Range<usize> {
        self.sf..self.ef
    }
}

/// The per-video annotation database.
///
/// Videos are kept in sorted name order. The rank of a name in this order is
/// the video id used throughout the index.
#[derive(Debug, Clone, Default)]
pub struct AnnotationStore {
    videos: IndexMap<String, VideoAnnotation>,
}

impl AnnotationStore {
    /// Load the store from a JSON file keyed by video name.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let origin = path.display().to_string();
        let text = fs::read_to_string(path).map_err(|err| Error::CorruptAnnotationStore {
            origin: origin.clone(),
            reason: format!("unable to read file: {}", err),
        })?;
        let store = Self::parse(&text, origin)?;
        info!(
            "loaded annotations of {} videos from '{}'",
            store.len(),
            path.display()
        );
        Ok(store)
    }

    /// Parse the store from JSON text.
    pub fn from_json_str(text: &str) -> Result<Self> {
        Self::parse(text, "<memory>".to_owned())
    }

    pub fn from_videos<I>(videos: I) -> Result<Self>
    where
        I: IntoIterator<Item = (String, VideoAnnotation)>,
    {
        Self::validated(videos.into_iter().collect(), "<memory>".to_owned())
    }

    fn parse(text: &str, origin: String) -> Result<Self> {
        let videos: IndexMap<String, VideoAnnotation> =
            serde_json::from_str(text).map_err(|err| Error::CorruptAnnotationStore {
                origin: origin.clone(),
                reason: err.to_string(),
            })?;
        Self::validated(videos, origin)
    }

    fn validated(mut videos: IndexMap<String, VideoAnnotation>, origin: String) -> Result<Self> {
        videos.iter().try_for_each(|(name, video)| {
            check_video(video).map_err(|reason| Error::CorruptAnnotationStore {
                origin: origin.clone(),
                reason: format!("video '{}': {}", name, reason),
            })
        })?;
        videos.sort_keys();
        Ok(Self { videos })
    }

    pub fn len(&self) -> usize {
        self.videos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.videos.is_empty()
    }

    /// Video names in id order.
    pub fn video_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.videos.keys().map(String::as_str)
    }

    pub fn video_id(&self, name: &str) -> Option<usize> {
        self.videos.get_index_of(name)
    }

    /// Look up a video by id.
    pub fn get(&self, video_id: usize) -> Option<(&str, &VideoAnnotation)> {
        self.videos
            .get_index(video_id)
            .map(|(name, video)| (name.as_str(), video))
    }

    /// Iterate `(video_id, name, annotation)` in id order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &str, &VideoAnnotation)> + '_ {
        self.videos
            .iter()
            .enumerate()
            .map(|(video_id, (name, video))| (video_id, name.as_str(), video))
    }
}

fn check_video(video: &VideoAnnotation) -> Result<(), String> {
    video
        .annotations
        .iter()
        .enumerate()
        .try_for_each(|(tube_id, tube)| {
            let TubeAnnotation { sf, ef, .. } = *tube;
            if sf > ef {
                return Err(format!(
                    "tube {} starts at frame {} after its end frame {}",
                    tube_id, sf, ef
                ));
            }
            if ef > video.numf {
                return Err(format!(
                    "tube {} ends at frame {} beyond the frame count {}",
                    tube_id, ef, video.numf
                ));
            }
            if tube.boxes.len() != ef - sf {
                return Err(format!(
                    "tube {} has {} boxes, but it spans {} frames",
                    tube_id,
                    tube.boxes.len(),
                    ef - sf
                ));
            }
            Ok(())
        })
}
