//! Progress bar construction for the CLI

use indicatif::{ProgressBar, ProgressStyle};

/// Create a progress bar for training
pub fn create_training_progress(total_episodes: u64) -> ProgressBar {
    let pb = ProgressBar::new(total_episodes);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} episodes ({msg})")
            .expect("Invalid progress bar template")
            .progress_chars("=>-"),
    );
    pb
}
