//! Progress accounting for one upload.
//!
//! The sink is a pure observer: it receives integer percentages and a terminal
//! notification, and a panic raised inside it is logged and swallowed so the
//! upload keeps going.

use crate::upload::UploadError;
use std::panic::{AssertUnwindSafe, catch_unwind};

pub trait ProgressSink: Send + Sync {
    /// Percentage of bytes uploaded, in `[0, 100]`, never lower than the
    /// previously reported value.
    fn progress(&self, pct: u8);

    fn completed(&self, _video_id: &str) {}

    fn failed(&self, _error: &UploadError) {}
}

impl<F> ProgressSink for F
where
    F: Fn(u8) + Send + Sync,
{
    fn progress(&self, pct: u8) {
        self(pct);
    }
}

/// Sink that ignores every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProgress;

impl ProgressSink for NoProgress {
    fn progress(&self, _pct: u8) {}
}

fn observe<T: FnOnce()>(event: &str, f: T) {
    if catch_unwind(AssertUnwindSafe(f)).is_err() {
        log::warn!("progress observer panicked on {event}, ignoring");
    }
}

pub(crate) fn notify_completed<P: ProgressSink + ?Sized>(sink: &P, video_id: &str) {
    observe("completed", || sink.completed(video_id));
}

pub(crate) fn notify_failed<P: ProgressSink + ?Sized>(sink: &P, error: &UploadError) {
    observe("failed", || sink.failed(error));
}

/// Tracks uploaded bytes and reports a monotonic percentage to the sink.
pub struct Progress<'a, P: ?Sized> {
    sink: &'a P,
    uploaded: u64,
    total: u64,
    last: Option<u8>,
}

impl<'a, P: ProgressSink + ?Sized> Progress<'a, P> {
    pub const fn new(sink: &'a P, total: u64) -> Self {
        Self {
            sink,
            uploaded: 0,
            total,
            last: None,
        }
    }

    #[must_use]
    pub const fn uploaded(&self) -> u64 {
        self.uploaded
    }

    #[must_use]
    pub const fn last(&self) -> Option<u8> {
        self.last
    }

    /// `floor(100 * uploaded / total)`, clamped to 100. An empty file is
    /// complete as soon as anything is reported.
    #[must_use]
    pub fn percent(&self) -> u8 {
        if self.total == 0 {
            return 100;
        }

        let pct = u128::from(self.uploaded) * 100 / u128::from(self.total);
        u8::try_from(pct.min(100)).unwrap_or(100)
    }

    /// Record `bytes` more as uploaded and report the new percentage.
    pub fn advance(&mut self, bytes: u64) {
        self.uploaded = self.uploaded.saturating_add(bytes);
        self.emit(self.percent());
    }

    /// Report 100 unless it was already reported.
    pub fn finish(&mut self) {
        if self.last != Some(100) {
            self.emit(100);
        }
    }

    fn emit(&mut self, pct: u8) {
        let pct = self.last.map_or(pct, |last| pct.max(last));
        self.last = Some(pct);

        log::debug!("progress: {pct}% ({}/{} bytes)", self.uploaded, self.total);

        observe("progress", || self.sink.progress(pct));
    }
}
