//! Upload orchestrator.
//!
//! One upload runs `presign → (single PUT | N part PUTs) → complete`:
//!
//! 1. ask the API for presigned URLs, the server picks the strategy
//! 2. PUT the file, or each byte range in `partNumber` order collecting ETags
//! 3. post the completion manifest so the server can register the object
//!
//! Failures are terminal and nothing is retried. Parts already uploaded when a
//! later step fails are left for the server to garbage collect.

pub mod file;
pub mod iterator;
pub mod part;
pub mod progress;
pub mod state;
pub mod store;
pub mod upload_multipart;
pub mod upload_single;

mod error;
pub use self::error::UploadError;

use crate::api::{
    ApiClient,
    actions::{CompleteUpload, CreateUploadUrl},
    responses::PresignResponse,
};
use self::{
    file::FileHandle,
    progress::{Progress, ProgressSink, notify_completed, notify_failed},
    state::{StateMachine, UploadState},
    store::ObjectStore,
};
use std::future::Future;
use tokio_util::sync::CancellationToken;

/// Result of a successful upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Uploaded {
    pub video_id: String,
}

/// Race `future` against the cancellation token; a token that is already
/// cancelled wins before `future` is polled.
pub(crate) async fn cancellable<T, Fut>(
    cancel: &CancellationToken,
    future: Fut,
) -> Result<T, UploadError>
where
    Fut: Future<Output = T>,
{
    if cancel.is_cancelled() {
        return Err(UploadError::Cancelled);
    }

    tokio::select! {
        biased;
        () = cancel.cancelled() => Err(UploadError::Cancelled),
        output = future => Ok(output),
    }
}

#[derive(Debug)]
pub struct Uploader {
    api: ApiClient,
    store: ObjectStore,
    max_requests: usize,
}

impl Uploader {
    /// Parts are uploaded one at a time unless [`Uploader::with_max_requests`]
    /// says otherwise.
    #[must_use]
    pub const fn new(api: ApiClient, store: ObjectStore) -> Self {
        Self {
            api,
            store,
            max_requests: 1,
        }
    }

    /// Allow up to `max_requests` part PUTs in flight. Receipts and progress
    /// still follow `partNumber` order.
    #[must_use]
    pub fn with_max_requests(mut self, max_requests: usize) -> Self {
        self.max_requests = max_requests.max(1);
        self
    }

    /// # Errors
    /// Will return an error if any step of the upload fails
    pub async fn upload<F, P>(&self, file: &F, progress: &P) -> Result<Uploaded, UploadError>
    where
        F: FileHandle,
        P: ProgressSink + ?Sized,
    {
        self.upload_cancellable(file, progress, &CancellationToken::new())
            .await
    }

    /// Same as [`Uploader::upload`], aborting with `Cancelled` once `cancel`
    /// fires. No completion is sent after a cancellation.
    ///
    /// # Errors
    /// Will return an error if any step of the upload fails or it is cancelled
    pub async fn upload_cancellable<F, P>(
        &self,
        file: &F,
        progress: &P,
        cancel: &CancellationToken,
    ) -> Result<Uploaded, UploadError>
    where
        F: FileHandle,
        P: ProgressSink + ?Sized,
    {
        let mut machine = StateMachine::new();

        let result = self.run(file, progress, cancel, &mut machine).await;

        match &result {
            Ok(uploaded) => {
                machine.advance(UploadState::Done);
                log::info!("Upload finished, videoId: {}", uploaded.video_id);
                notify_completed(progress, &uploaded.video_id);
            }

            Err(e) => {
                machine.advance(UploadState::Failed);
                log::error!("Upload of {} failed: {e}", file.name());
                notify_failed(progress, e);
            }
        }

        result
    }

    async fn run<F, P>(
        &self,
        file: &F,
        progress: &P,
        cancel: &CancellationToken,
        machine: &mut StateMachine,
    ) -> Result<Uploaded, UploadError>
    where
        F: FileHandle,
        P: ProgressSink + ?Sized,
    {
        machine.advance(UploadState::Presigning);

        let presign = cancellable(
            cancel,
            CreateUploadUrl::new(file.name(), file.size()).request(&self.api),
        )
        .await?
        .map_err(UploadError::presign)?;

        let mut tracker = Progress::new(progress, file.size());

        let manifest = match presign {
            PresignResponse::Single(presign) => {
                machine.advance(UploadState::SingleUploading);
                upload_single::upload(&self.store, file, presign, &mut tracker, cancel).await?
            }

            PresignResponse::Multipart(presign) => {
                machine.advance(UploadState::MultipartUploading);
                upload_multipart::upload(
                    &self.store,
                    file,
                    presign,
                    &mut tracker,
                    self.max_requests,
                    cancel,
                )
                .await?
            }
        };

        machine.advance(UploadState::Completing);

        cancellable(cancel, CompleteUpload::new(&manifest).request(&self.api))
            .await?
            .map_err(UploadError::completion)?;

        Ok(Uploaded {
            video_id: manifest.video_id().to_string(),
        })
    }
}
