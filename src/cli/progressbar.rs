use crate::upload::{UploadError, progress::ProgressSink};
use indicatif::{ProgressBar, ProgressStyle};

// "█▉▊▋▌▍▎▏  ·"
const PROGRES_CHARS: &str =
    "\u{2588}\u{2589}\u{258a}\u{258b}\u{258c}\u{258d}\u{258e}\u{258f}  \u{b7}";

/// Upload progress bar, positions are percentages.
#[derive(Default, Debug)]
pub struct Bar {
    pub progress: Option<ProgressBar>,
}

impl Bar {
    #[must_use]
    pub fn new(quiet: bool) -> Self {
        if quiet {
            return Self::default();
        }

        let pb = ProgressBar::new(100);

        let style_result =
            ProgressStyle::default_bar().template("[{elapsed_precise}] {bar:50.green/blue} {pos:>3}%");

        let style = match style_result {
            Ok(style) => style,
            Err(err) => {
                eprintln!("Error creating progress bar style: {err}");
                return Self { progress: None };
            }
        };

        pb.set_style(style.progress_chars(PROGRES_CHARS));

        Self { progress: Some(pb) }
    }
}

impl ProgressSink for Bar {
    fn progress(&self, pct: u8) {
        if let Some(pb) = &self.progress {
            pb.set_position(u64::from(pct));
        }
    }

    fn completed(&self, _video_id: &str) {
        if let Some(pb) = &self.progress {
            pb.finish();
        }
    }

    fn failed(&self, _error: &UploadError) {
        if let Some(pb) = &self.progress {
            pb.abandon();
        }
    }
}
