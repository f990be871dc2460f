use crate::{
    api::{ApiClient, actions::UpdateVideo},
    cli::actions::{Action, video_show::print_video},
};
use anyhow::Result;

/// # Errors
/// Will return an error if the action fails
pub async fn handle(api: &ApiClient, action: Action) -> Result<()> {
    if let Action::EditVideo { video_id, patch } = action {
        let video = UpdateVideo::new(&video_id, patch).request(api).await?;
        print_video(&video);
    }

    Ok(())
}
