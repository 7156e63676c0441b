//! Command-line interface and the load, compose, save pipeline

use crate::imaging::buffer::PixelBuffer;
use crate::imaging::resize::resize_shorter_edge;
use crate::io::configuration::{
    BASE_SHORT_EDGE, DEFAULT_IMAGE_PATH, DEFAULT_TILE_DIRECTORY, DEFAULT_TILE_FORMAT,
    OUTPUT_FILENAME, TILE_SIZE,
};
use crate::io::error::Result;
use crate::io::image::{load_base_image, save_image};
use crate::io::pattern::TilePattern;
use crate::io::progress::ProgressManager;
use crate::io::renumber::renumber_directory;
use crate::io::tiles::{TileLoadReport, count_entries, load_numbered_tiles};
use crate::mosaic::bank::TileBank;
use crate::mosaic::compositor::{RandomSelector, compose_with_progress};
use clap::Parser;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

#[derive(Parser, Debug)]
#[command(name = "photomosaic")]
#[command(
    author,
    version,
    about = "Rebuild an image as a mosaic of color-matched tiles"
)]
/// Command-line arguments for the mosaic tool
pub struct Cli {
    /// Path of the base image
    #[arg(short, long, value_name = "FILE", default_value = DEFAULT_IMAGE_PATH)]
    pub image: PathBuf,

    /// Folder containing the tiles
    #[arg(short, long, value_name = "DIR", default_value = DEFAULT_TILE_DIRECTORY)]
    pub path: PathBuf,

    /// Format of the tile filenames, e.g. img-{0:05d}.jpg
    #[arg(short, long, value_name = "PATTERN", default_value = DEFAULT_TILE_FORMAT)]
    pub format: String,

    /// Random seed for reproducible tile choices (fresh each run if omitted)
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Copy the tiles into <path>_renamed under pattern names before loading
    #[arg(short, long)]
    pub renumber: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Build the tile random source, seeded from the OS when no seed is given
    pub fn selector(&self) -> RandomSelector {
        self.seed
            .map_or_else(RandomSelector::from_os_rng, RandomSelector::new)
    }
}

/// Summary of a finished mosaic run
#[derive(Debug, Clone)]
pub struct MosaicSummary {
    /// Where the mosaic was written
    pub output: PathBuf,
    /// Tile loading outcome
    pub tiles: TileLoadReport,
    /// Number of distinct average colors in the bank
    pub distinct_keys: usize,
    /// Dimensions of the normalized base image (rows, cols)
    pub base_dimensions: (usize, usize),
    /// Dimensions of the written canvas (rows, cols)
    pub canvas_dimensions: (usize, usize),
    /// Wall-clock time of the whole run
    pub elapsed: Duration,
}

/// Runs one mosaic from the CLI arguments with progress tracking
pub struct MosaicProcessor {
    cli: Cli,
    output: PathBuf,
    progress_manager: Option<ProgressManager>,
}

impl MosaicProcessor {
    /// Create a processor writing to [`OUTPUT_FILENAME`]
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            output: PathBuf::from(OUTPUT_FILENAME),
            progress_manager,
        }
    }

    /// Redirect the output file
    #[must_use]
    pub fn with_output<P: Into<PathBuf>>(mut self, output: P) -> Self {
        self.output = output.into();
        self
    }

    /// Path the mosaic will be written to
    pub fn output(&self) -> &Path {
        &self.output
    }

    /// Load, compose and save the mosaic
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The base image is missing or cannot be decoded
    /// - The tile format string is malformed
    /// - The tile directory cannot be read, renumbered, or yields no tile
    /// - The mosaic cannot be written
    pub fn process(&mut self) -> Result<MosaicSummary> {
        let start_time = Instant::now();
        let pattern = TilePattern::parse(&self.cli.format)?;

        let base = self.load_base()?;
        let (bank, tiles) = self.load_bank(&pattern)?;

        self.status(&format!(
            "Loaded {} of {} tiles ({} distinct colors, {} failed)",
            tiles.loaded,
            tiles.attempted,
            bank.len(),
            tiles.failed
        ));

        let mut selector = self.cli.selector();
        if let Some(ref mut pm) = self.progress_manager {
            pm.start_phase("Creating mosaic", base.rows());
        }
        let progress = self.progress_manager.as_ref();
        let canvas = compose_with_progress(&base, &bank, &mut selector, |row| {
            if let Some(pm) = progress {
                pm.update(row);
            }
        })?;

        save_image(&canvas, &self.output)?;

        if let Some(ref mut pm) = self.progress_manager {
            pm.finish();
        }

        let elapsed = start_time.elapsed();
        self.status(&format!("Total time: {:.2} sec", elapsed.as_secs_f64()));

        Ok(MosaicSummary {
            output: self.output.clone(),
            tiles,
            distinct_keys: bank.len(),
            base_dimensions: (base.rows(), base.cols()),
            canvas_dimensions: (canvas.rows(), canvas.cols()),
            elapsed,
        })
    }

    fn load_base(&self) -> Result<PixelBuffer> {
        let base = load_base_image(&self.cli.image)?;
        resize_shorter_edge(&base, BASE_SHORT_EDGE)
    }

    fn load_bank(&mut self, pattern: &TilePattern) -> Result<(TileBank, TileLoadReport)> {
        let directory = if self.cli.renumber {
            let renamed = renumber_directory(&self.cli.path, pattern)?;
            self.status(&format!("Renumbered tiles into {}", renamed.display()));
            renamed
        } else {
            self.cli.path.clone()
        };

        let count = count_entries(&directory)?;
        if let Some(ref mut pm) = self.progress_manager {
            pm.start_phase("Loading tiles", count);
        }
        let progress = self.progress_manager.as_ref();
        let loaded = load_numbered_tiles(&directory, pattern, TILE_SIZE, count, |tried| {
            if let Some(pm) = progress {
                pm.update(tried);
            }
        })?;

        if let Some(ref mut pm) = self.progress_manager {
            pm.finish_phase();
        }
        Ok(loaded)
    }

    // Allow print for user feedback on progress messages
    #[allow(clippy::print_stderr)]
    fn status(&self, message: &str) {
        if !self.cli.quiet {
            eprintln!("{message}");
        }
    }
}
