use crate::{
    api::{
        actions::CONTENT_TYPE_MP4,
        responses::{CompletionManifest, SinglePresign},
    },
    upload::{
        UploadError, cancellable,
        file::FileHandle,
        progress::{Progress, ProgressSink},
        store::ObjectStore,
    },
};
use tokio_util::sync::CancellationToken;

/// PUT the whole file to the presigned URL and build the single-form manifest.
///
/// # Errors
/// Will return an error if the file can not be read or the PUT is not a success
pub async fn upload<F, P>(
    store: &ObjectStore,
    file: &F,
    presign: SinglePresign,
    progress: &mut Progress<'_, P>,
    cancel: &CancellationToken,
) -> Result<CompletionManifest, UploadError>
where
    F: FileHandle,
    P: ProgressSink + ?Sized,
{
    let size = file.size();

    log::debug!(
        "Starting single upload:
        key: {}
        file: {}
        file_size: {size}",
        presign.key,
        file.name()
    );

    let chunk = file.slice(0, size).await?;

    let response = cancellable(cancel, store.put(&presign.url, CONTENT_TYPE_MP4, chunk))
        .await?
        .map_err(UploadError::Network)?;

    if !response.status.is_success() {
        log::error!("single upload failed: {}", response.status);
        return Err(UploadError::SingleUploadFailed(response.status.as_u16()));
    }

    progress.advance(size);
    progress.finish();

    log::info!("Uploaded {} ({size} bytes)", presign.key);

    Ok(CompletionManifest::single(presign.video_id, presign.key))
}
