use crate::common::*;

/// On-disk layout of a UCF101-24 dataset directory.
///
/// ```text
/// <root>/splitfiles/trainlist01.txt
/// <root>/splitfiles/pyannot.json
/// <root>/<input_type>-images/<video_name>/00001.jpg
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageLayout {
    root: PathBuf,
    input_type: String,
}

impl ImageLayout {
    pub fn new(root: impl Into<PathBuf>, input_type: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            input_type: input_type.into(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn input_type(&self) -> &str {
        &self.input_type
    }

    pub fn image_dir(&self) -> PathBuf {
        self.root.join(format!("{}-images", self.input_type))
    }

    /// The image file of a 1-based frame number.
    pub fn image_path(&self, video_name: &str, frame_number: usize) -> PathBuf {
        self.image_dir()
            .join(video_name)
            .join(format!("{:05}.jpg", frame_number))
    }

    pub fn split_file(&self, split: usize) -> PathBuf {
        self.root
            .join("splitfiles")
            .join(format!("trainlist{:02}.txt", split))
    }

    pub fn annotation_file(&self) -> PathBuf {
        self.root.join("splitfiles").join("pyannot.json")
    }

    /// Read the image extent from the file header.
    pub fn image_size(&self, video_name: &str, frame_number: usize) -> Result<HW<usize>> {
        let path = self.image_path(video_name, frame_number);
        let imagesize::ImageSize { width, height } =
            imagesize::size(&path).map_err(|_| Error::ImageNotFound { path: path.clone() })?;
        HW::try_from_hw([height, width]).map_err(|_| Error::ImageNotFound { path })
    }

    pub fn check_image(&self, video_name: &str, frame_number: usize) -> Result<()> {
        let path = self.image_path(video_name, frame_number);
        if path.is_file() {
            Ok(())
        } else {
            Err(Error::ImageNotFound { path })
        }
    }
}
