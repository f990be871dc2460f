use crate::{
    api::ApiClient,
    cli::{actions::Action, globals::GlobalArgs, progressbar::Bar},
    upload::{
        Uploader,
        file::{FileHandle, LocalFile},
        store::ObjectStore,
    },
};
use anyhow::{Context, Result};
use bytesize::ByteSize;
use colored::Colorize;
use tokio_util::sync::CancellationToken;

/// # Errors
/// Will return an error if the action fails
pub async fn handle(api: ApiClient, action: Action, globals: &GlobalArgs) -> Result<()> {
    if let Action::Upload {
        file,
        quiet,
        max_requests,
    } = action
    {
        if !file
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("mp4"))
        {
            log::warn!("{} does not look like an MP4 file", file.display());
        }

        let file = LocalFile::open(&file)
            .await
            .with_context(|| format!("cannot read the file: {}", file.display()))?;

        log::info!(
            "file path: {}\nfile size: {}",
            file.path().display(),
            ByteSize(file.size())
        );

        let store = ObjectStore::new(globals.timeout)?;

        let uploader = Uploader::new(api, store).with_max_requests(max_requests);

        let cancel = CancellationToken::new();

        // Ctrl-C stops the upload before the completion is sent
        let ctrl_c = cancel.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                log::warn!("interrupted, cancelling upload");
                ctrl_c.cancel();
            }
        });

        let pb = Bar::new(quiet);

        let uploaded = uploader
            .upload_cancellable(&file, &pb, &cancel)
            .await
            .with_context(|| format!("upload of {} failed", file.path().display()))?;

        if !quiet {
            println!("{} {}", "videoId:".green(), uploaded.video_id);
        }
    }

    Ok(())
}
