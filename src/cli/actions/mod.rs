pub mod auth;
pub mod video_delete;
pub mod video_edit;
pub mod video_list;
pub mod video_show;
pub mod video_transcode;
pub mod video_upload;

use crate::{
    api::{ApiClient, ApiError, actions::ListQuery, actions::VideoPatch},
    cli::globals::GlobalArgs,
    upload::UploadError,
};
use anyhow::Result;
use colored::Colorize;
use secrecy::SecretString;
use std::path::PathBuf;

#[derive(Debug)]
pub enum Action {
    Upload {
        file: PathBuf,
        quiet: bool,
        max_requests: usize,
    },
    Login {
        username: String,
        password: Option<SecretString>,
    },
    Logout,
    ListVideos {
        query: ListQuery,
    },
    ShowVideo {
        video_id: String,
    },
    EditVideo {
        video_id: String,
        patch: VideoPatch,
    },
    DeleteVideo {
        video_id: String,
    },
    Transcode {
        video_id: String,
        force: bool,
    },
}

/// Run the action, forgetting the saved token when the API rejects it.
///
/// # Errors
/// Will return an error if the action fails
pub async fn handle(api: ApiClient, action: Action, globals: &GlobalArgs) -> Result<()> {
    let result = match action {
        Action::Upload { .. } => video_upload::handle(api, action, globals).await,
        Action::Login { .. } | Action::Logout => auth::handle(&api, action, globals).await,
        Action::ListVideos { .. } => video_list::handle(&api, action).await,
        Action::ShowVideo { .. } => video_show::handle(&api, action).await,
        Action::EditVideo { .. } => video_edit::handle(&api, action).await,
        Action::DeleteVideo { .. } => video_delete::handle(&api, action).await,
        Action::Transcode { .. } => video_transcode::handle(&api, action).await,
    };

    if let Err(e) = &result {
        if is_unauthorized(e) {
            forget_token(globals);
        }
    }

    result
}

fn forget_token(globals: &GlobalArgs) {
    match globals.tokens.remove(&globals.host) {
        Ok(true) => eprintln!(
            "{}, saved token for {} removed, log in again with: {}",
            "unauthorized".red(),
            globals.host,
            "vidup login <username>".green()
        ),
        Ok(false) => {}
        Err(e) => log::error!("{e:#}"),
    }
}

#[must_use]
pub fn is_unauthorized(error: &anyhow::Error) -> bool {
    error.chain().any(|cause| {
        matches!(cause.downcast_ref::<ApiError>(), Some(ApiError::Unauthorized))
            || matches!(
                cause.downcast_ref::<UploadError>(),
                Some(UploadError::Unauthorized)
            )
    })
}
