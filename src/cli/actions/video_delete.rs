use crate::{
    api::{ApiClient, actions::DeleteVideo},
    cli::actions::Action,
};
use anyhow::{Result, anyhow};
use colored::Colorize;

/// # Errors
/// Will return an error if the action fails
pub async fn handle(api: &ApiClient, action: Action) -> Result<()> {
    if let Action::DeleteVideo { video_id } = action {
        let rs = DeleteVideo::new(&video_id).request(api).await?;

        if !rs.ok {
            return Err(anyhow!("video {video_id} was not deleted"));
        }

        println!("{} {video_id}", "deleted".green());
    }

    Ok(())
}
