use anyhow::{format_err, Context, Result};
use log::info;
use prettytable::{cell, row, Table};
use std::path::{Path, PathBuf};
use structopt::StructOpt;
use ucf24::{DatasetConfig, SampleIndex, Ucf24Dataset};

#[derive(Debug, Clone, StructOpt)]
/// Build the UCF101-24 sample index and inspect it.
enum Args {
    /// Show per-class box counts of the train and test lists.
    Info {
        /// configuration file
        config_file: PathBuf,
    },
    /// List the samples of the configured subset.
    List {
        /// configuration file
        config_file: PathBuf,
        #[structopt(long)]
        /// only list samples of this video
        video: Option<String>,
        #[structopt(long)]
        /// read image sizes and print normalized boxes
        normalize: bool,
    },
    /// Show the train-list runs of each training video.
    Runs {
        /// configuration file
        config_file: PathBuf,
    },
}

fn main() -> Result<()> {
    pretty_env_logger::init();

    match Args::from_args() {
        Args::Info { config_file } => info(config_file)?,
        Args::List {
            config_file,
            video,
            normalize,
        } => list(config_file, video.as_deref(), normalize)?,
        Args::Runs { config_file } => runs(config_file)?,
    }

    Ok(())
}

fn open(config_file: &Path) -> Result<Ucf24Dataset> {
    let config = DatasetConfig::open(config_file)
        .with_context(|| format!("failed to load config file '{}'", config_file.display()))?;
    let dataset = Ucf24Dataset::open(&config)?;
    info!(
        "built {} index with {} samples",
        dataset.subset(),
        dataset.len()
    );
    Ok(dataset)
}

fn info(config_file: impl AsRef<Path>) -> Result<()> {
    let dataset = open(config_file.as_ref())?;
    let index: &SampleIndex = dataset.index();

    let mut table = Table::new();
    table.add_row(row!["index", "class", "train boxes", "test boxes"]);
    index
        .action_counts()
        .iter()
        .for_each(|(class, num_train, num_test)| {
            table.add_row(row![class.index(), class, num_train, num_test]);
        });
    table.printstd();

    println!(
        "{} videos, {} train samples, {} test samples",
        index.num_videos(),
        index.train().len(),
        index.test().len()
    );

    Ok(())
}

fn list(config_file: impl AsRef<Path>, video: Option<&str>, normalize: bool) -> Result<()> {
    let dataset = open(config_file.as_ref())?;
    let video_id = video
        .map(|name| {
            dataset
                .index()
                .video_names()
                .iter()
                .position(|other| other == name)
                .ok_or_else(|| format_err!("video '{}' is not in the annotation store", name))
        })
        .transpose()?;

    let mut table = Table::new();
    table.add_row(row!["index", "video", "frame", "labels", "boxes"]);

    for (index, sample) in dataset.samples().iter().enumerate() {
        if video_id.map_or(false, |video_id| video_id != sample.video_id) {
            continue;
        }
        let name = dataset.video_name(sample.video_id).unwrap_or_default();
        let boxes = if normalize {
            match dataset.load_targets(index) {
                Some(targets) => format!("{:?}", targets?),
                None => String::new(),
            }
        } else {
            format!("{:?}", sample.boxes())
        };
        table.add_row(row![
            index,
            name,
            sample.frame_number,
            format!("{:?}", sample.labels()),
            boxes
        ]);
    }
    table.printstd();

    Ok(())
}

fn runs(config_file: impl AsRef<Path>) -> Result<()> {
    let dataset = open(config_file.as_ref())?;
    let index = dataset.index();

    let mut table = Table::new();
    table.add_row(row!["video id", "video", "runs", "boundaries"]);
    for video_id in index.train_video_ids() {
        table.add_row(row![
            video_id,
            index.video_name(video_id).unwrap_or_default(),
            format!("{:?}", index.train_runs(video_id).unwrap_or_default()),
            format!("{:?}", index.train_run_boundaries(video_id).unwrap_or_default())
        ]);
    }
    table.printstd();

    Ok(())
}
