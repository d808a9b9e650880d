use crate::common::*;

/// The list of training video names.
///
/// Videos absent from the list belong to the test set.
#[derive(Debug, Clone, Default)]
pub struct TrainSplit {
    members: HashSet<String>,
}

impl TrainSplit {
    /// Read a split file with one video name per line.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| Error::MissingSplitFile {
            path: path.to_owned(),
            source,
        })?;
        let split = Self::from_names(text.lines());
        debug!(
            "loaded {} training video names from '{}'",
            split.len(),
            path.display()
        );
        Ok(split)
    }

    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let members = names
            .into_iter()
            .map(|name| name.as_ref().trim_end_matches(&['\r', '\n'][..]).to_owned())
            .filter(|name| !name.is_empty())
            .collect();
        Self { members }
    }

    pub fn contains(&self, video_name: &str) -> bool {
        self.members.contains(video_name)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    #[test]
    fn load_split_file() -> Result<()> {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            "Basketball/v_Basketball_g01_c01\r\nBiking/v_Biking_g02_c03\n\n"
        )
        .unwrap();

        let split = TrainSplit::load(file.path())?;
        assert_eq!(split.len(), 2);
        assert!(split.contains("Basketball/v_Basketball_g01_c01"));
        assert!(split.contains("Biking/v_Biking_g02_c03"));
        assert!(!split.contains("Biking/v_Biking_g02_c04"));
        Ok(())
    }

    #[test]
    fn missing_split_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = TrainSplit::load(dir.path().join("trainlist01.txt"));
        assert!(matches!(result, Err(Error::MissingSplitFile { .. })));
    }
}
