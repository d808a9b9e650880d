//! Dataset configuration format.

use crate::{common::*, layout::ImageLayout};

/// The sample list exposed by a dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Subset {
    Train,
    Test,
}

impl Subset {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Train => "train",
            Self::Test => "test",
        }
    }
}

impl FromStr for Subset {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "train" => Ok(Self::Train),
            "test" => Ok(Self::Test),
            _ => Err(Error::InvalidSubset(name.to_owned())),
        }
    }
}

impl TryFrom<String> for Subset {
    type Error = Error;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        name.parse()
    }
}

impl From<Subset> for String {
    fn from(subset: Subset) -> Self {
        subset.as_str().to_owned()
    }
}

impl fmt::Display for Subset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Dataset options.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetConfig {
    /// The dataset root directory.
    pub root: PathBuf,
    /// The image kind, naming the `<input_type>-images` directory.
    #[serde(default = "default_input_type")]
    pub input_type: String,
    /// The split number selecting `splitfiles/trainlistNN.txt`.
    #[serde(default = "default_split")]
    pub split: usize,
    pub subset: Subset,
    /// Sample every frame of test videos, keeping frames without ground truth.
    #[serde(default)]
    pub full_test: bool,
    /// Check that the image of every sample exists while building the index.
    #[serde(default)]
    pub verify_images: bool,
    /// Overrides the split file path.
    #[serde(default)]
    pub split_file: Option<PathBuf>,
    /// Overrides the annotation store path.
    #[serde(default)]
    pub annotation_file: Option<PathBuf>,
}

impl DatasetConfig {
    pub fn open<P>(path: P) -> anyhow::Result<Self>
    where
        P: AsRef<Path>,
    {
        let text = fs::read_to_string(path)?;
        let config = json5::from_str(&text)?;
        Ok(config)
    }

    pub fn layout(&self) -> ImageLayout {
        ImageLayout::new(&self.root, &self.input_type)
    }

    pub fn split_file(&self) -> PathBuf {
        self.split_file
            .clone()
            .unwrap_or_else(|| self.layout().split_file(self.split))
    }

    pub fn annotation_file(&self) -> PathBuf {
        self.annotation_file
            .clone()
            .unwrap_or_else(|| self.layout().annotation_file())
    }
}

fn default_input_type() -> String {
    "rgb".into()
}

fn default_split() -> usize {
    1
}
