use crate::{
    api::{ApiClient, actions::StartTranscode},
    cli::actions::Action,
};
use anyhow::Result;

/// # Errors
/// Will return an error if the action fails
pub async fn handle(api: &ApiClient, action: Action) -> Result<()> {
    if let Action::Transcode { video_id, force } = action {
        let mut transcode = StartTranscode::new(&video_id);
        transcode.force = force;

        let rs = transcode.request(api).await?;

        println!("{}", serde_json::to_string_pretty(&rs)?);
    }

    Ok(())
}
