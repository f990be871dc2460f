use crate::{
    api::responses::{CompletionManifest, MultipartPresign},
    upload::{
        UploadError, cancellable,
        file::FileHandle,
        part::Part,
        progress::{Progress, ProgressSink},
        store::{ObjectStore, PutResponse},
    },
};
use futures::stream::{self, StreamExt};
use tokio_util::sync::CancellationToken;

pub const CONTENT_TYPE_PART: &str = "application/octet-stream";

// * Plan the part ranges from the presign
// * Upload Part (in partNumber order)
// * Build the completion manifest from the collected ETags
/// # Errors
/// Will return an error if the presign does not match the file or any part fails
pub async fn upload<F, P>(
    store: &ObjectStore,
    file: &F,
    presign: MultipartPresign,
    progress: &mut Progress<'_, P>,
    max_requests: usize,
    cancel: &CancellationToken,
) -> Result<CompletionManifest, UploadError>
where
    F: FileHandle,
    P: ProgressSink + ?Sized,
{
    log::debug!(
        "Starting multi part upload:
        key: {}
        upload_id: {}
        file: {}
        file_size: {}
        part size: {}
        parts: {}",
        presign.key,
        presign.upload_id,
        file.name(),
        file.size(),
        presign.part_size_bytes,
        presign.parts.len()
    );

    let parts = Part::plan(&presign, file.size())?;

    // buffered() yields in part order, so receipts stay sorted and progress
    // only moves forward even when several PUTs are in flight
    let mut tasks = stream::iter(parts)
        .map(|part| upload_part(store, file, part))
        .buffered(max_requests.max(1));

    let mut sent = Vec::with_capacity(presign.parts.len());

    while let Some(result) = cancellable(cancel, tasks.next()).await? {
        let (part, response) = result?;

        if !response.status.is_success() {
            log::error!(
                "Error uploading part: {}, status: {}",
                part.number(),
                response.status
            );

            return Err(UploadError::PartUploadFailed {
                part_number: part.number(),
                status: response.status.as_u16(),
            });
        }

        let Some(etag) = response.etag else {
            log::error!("Missing ETag for part: {}", part.number());
            return Err(UploadError::MissingETag(part.number()));
        };

        log::info!("Uploaded part: {}, etag: {}", part.number(), etag);

        let chunk = part.chunk();
        sent.push(part.into_receipt(etag));
        progress.advance(chunk);
    }

    progress.finish();

    Ok(CompletionManifest::multipart(
        presign.video_id,
        presign.key,
        presign.upload_id,
        sent,
    ))
}

async fn upload_part<F: FileHandle>(
    store: &ObjectStore,
    file: &F,
    part: Part,
) -> Result<(Part, PutResponse), UploadError> {
    log::debug!("Uploading part: {}", part.number());

    let chunk = file.slice(part.seek(), part.end()).await?;

    let response = store
        .put(part.url(), CONTENT_TYPE_PART, chunk)
        .await
        .map_err(UploadError::Network)?;

    Ok((part, response))
}
