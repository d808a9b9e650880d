use anyhow::Result;
use approx::assert_abs_diff_eq;
use std::{fs, path::Path};
use ucf24::{ActionClass, DatasetConfig, Error, FrameTargets, Subset, Ucf24Dataset, NO_GT_LABEL};

const TRAIN_VIDEO: &str = "Basketball/v_Basketball_g01_c01";
const TEST_VIDEO: &str = "WalkingWithDog/v_WalkingWithDog_g02_c01";

const ANNOTATIONS: &str = r#"{
    "WalkingWithDog/v_WalkingWithDog_g02_c01": {
        "label": 23,
        "numf": 4,
        "annotations": [
            { "sf": 1, "ef": 3, "label": 23, "boxes": [[10, 10, 50, 30], [20, 5, 100, 60]] }
        ]
    },
    "Basketball/v_Basketball_g01_c01": {
        "label": 0,
        "numf": 6,
        "annotations": [
            { "sf": 0, "ef": 6, "label": 0, "boxes": [
                [1, 1, 2, 2], [1, 1, 2, 2], [1, 1, 2, 2], [1, 1, 2, 2], [1, 1, 2, 2], [1, 1, 2, 2]
            ] }
        ]
    }
}"#;

fn write_dataset(root: &Path, with_images: bool) -> Result<()> {
    let split_dir = root.join("splitfiles");
    fs::create_dir_all(&split_dir)?;
    fs::write(split_dir.join("trainlist01.txt"), format!("{}\n", TRAIN_VIDEO))?;
    fs::write(split_dir.join("pyannot.json"), ANNOTATIONS)?;

    if with_images {
        for (video, numf) in [(TRAIN_VIDEO, 6), (TEST_VIDEO, 4)] {
            let dir = root.join("rgb-images").join(video);
            fs::create_dir_all(&dir)?;
            for frame in 1..=numf {
                image::RgbImage::new(100, 50).save(dir.join(format!("{:05}.jpg", frame)))?;
            }
        }
    }

    Ok(())
}

fn config(root: &Path, subset: Subset, full_test: bool, verify_images: bool) -> DatasetConfig {
    DatasetConfig {
        root: root.to_owned(),
        input_type: "rgb".into(),
        split: 1,
        subset,
        full_test,
        verify_images,
        split_file: None,
        annotation_file: None,
    }
}

#[test]
fn exhaustive_test_set() -> Result<()> {
    let dir = tempfile::tempdir()?;
    write_dataset(dir.path(), true)?;

    let dataset = Ucf24Dataset::open(&config(dir.path(), Subset::Test, true, true))?;
    assert_eq!(dataset.len(), 4);
    assert_eq!(dataset.video_name(0), Some(TRAIN_VIDEO));
    assert_eq!(dataset.video_name(1), Some(TEST_VIDEO));

    let frames: Vec<_> = dataset
        .samples()
        .iter()
        .map(|sample| (sample.video_id, sample.frame_number, sample.has_ground_truth()))
        .collect();
    assert_eq!(
        frames,
        [(1, 1, false), (1, 2, true), (1, 3, true), (1, 4, false)]
    );
    assert_eq!(dataset.get(0).unwrap().targets, FrameTargets::NoGroundTruth);
    assert_eq!(dataset.get(0).unwrap().labels(), [NO_GT_LABEL]);

    let targets = dataset.load_targets(1).unwrap()?;
    assert_eq!(targets.len(), 1);
    let [x1, y1, x2, y2, label] = targets[0];
    assert_abs_diff_eq!(x1, 0.1);
    assert_abs_diff_eq!(y1, 0.2);
    assert_abs_diff_eq!(x2, 0.6);
    assert_abs_diff_eq!(y2, 0.8);
    assert_abs_diff_eq!(label, ActionClass::WalkingWithDog.index() as f64);

    // [20, 5, 100, 60] spans beyond the 100x50 image
    let [x1, y1, x2, y2, _] = dataset.load_targets(2).unwrap()?[0];
    assert_abs_diff_eq!(x1, 0.2);
    assert_abs_diff_eq!(y1, 0.1);
    assert_abs_diff_eq!(x2, 1.0);
    assert_abs_diff_eq!(y2, 1.0);

    let sentinel = dataset.load_targets(0).unwrap()?;
    assert_eq!(sentinel, [[0.0, 0.0, 0.0, 0.0, NO_GT_LABEL as f64]]);
    Ok(())
}

#[test]
fn shared_index_between_subsets() -> Result<()> {
    let dir = tempfile::tempdir()?;
    write_dataset(dir.path(), false)?;

    let config = config(dir.path(), Subset::Train, false, false);
    let train = Ucf24Dataset::open(&config)?;
    let test = Ucf24Dataset::from_index(train.index().clone(), Subset::Test, config.layout());

    // Basketball strides 1.1 frames below frame 5
    let frames: Vec<_> = train.samples().iter().map(|s| s.frame_number).collect();
    assert_eq!(frames, [1, 2, 3, 4, 5]);
    assert_eq!(train.train_run_boundaries(0), Some(vec![5]));
    assert_eq!(train.train_runs(0).unwrap(), [0..5]);
    assert_eq!(test.train_run_boundaries(1), None);
    assert!(train.is_video_start(0));
    assert!(!train.is_video_start(1));

    // WalkingWithDog strides 8.6 frames, only frame 0 is a candidate
    assert!(test.is_empty());

    let counts = train.index().action_counts();
    assert_eq!(counts.train[ActionClass::Basketball.index()], 5);
    assert_eq!(counts.test[ActionClass::WalkingWithDog.index()], 0);
    Ok(())
}

#[test]
fn eager_image_verification() -> Result<()> {
    let dir = tempfile::tempdir()?;
    write_dataset(dir.path(), false)?;

    let lazy = Ucf24Dataset::open(&config(dir.path(), Subset::Train, false, false));
    assert!(lazy.is_ok());

    let eager = Ucf24Dataset::open(&config(dir.path(), Subset::Train, false, true));
    assert!(matches!(eager, Err(Error::ImageNotFound { .. })));
    Ok(())
}

#[test]
fn missing_split_file() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let result = Ucf24Dataset::open(&config(dir.path(), Subset::Train, false, false));
    assert!(matches!(result, Err(Error::MissingSplitFile { .. })));
    Ok(())
}

#[test]
fn label_mismatch_is_fatal() -> Result<()> {
    let dir = tempfile::tempdir()?;
    write_dataset(dir.path(), false)?;
    let bad = ANNOTATIONS.replacen(
        r#""sf": 1, "ef": 3, "label": 23"#,
        r#""sf": 1, "ef": 3, "label": 22"#,
        1,
    );
    fs::write(dir.path().join("splitfiles").join("pyannot.json"), bad)?;

    let result = Ucf24Dataset::open(&config(dir.path(), Subset::Test, false, false));
    assert!(matches!(
        result,
        Err(Error::LabelMismatch {
            expected: ActionClass::WalkingWithDog,
            found: ActionClass::VolleyballSpiking,
            ..
        })
    ));
    Ok(())
}
