use crate::{
    api::{ApiClient, actions::ListVideos, responses::VideoItem},
    cli::actions::Action,
};
use anyhow::Result;
use colored::Colorize;

/// # Errors
/// Will return an error if the action fails
pub async fn handle(api: &ApiClient, action: Action) -> Result<()> {
    if let Action::ListVideos { query } = action {
        let rs = ListVideos::new(query).request(api).await?;

        for video in &rs.videos {
            print_video_info(video);
        }

        if let Some(total) = rs.total {
            println!("total: {total}");
        }

        if let Some(cursor) = rs.next_cursor() {
            println!("{} {}", "next page: --cursor".green(), quote(&cursor));
        }
    }

    Ok(())
}

fn print_video_info(video: &VideoItem) {
    println!(
        "{} {} {:<} {}",
        format!("[{}]", video.created_at.as_deref().unwrap_or("-")).green(),
        video.video_id.yellow(),
        video.file_name,
        video.title.as_deref().unwrap_or_default()
    );
}

// single quoted for the shell, cursors are usually JSON
fn quote(cursor: &str) -> String {
    format!("'{}'", cursor.replace('\'', r"'\''"))
}
