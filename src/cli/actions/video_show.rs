use crate::{
    api::{
        ApiClient,
        actions::GetVideo,
        responses::{TranscodeStatus, VideoItem},
    },
    cli::actions::Action,
};
use anyhow::Result;
use bytesize::ByteSize;
use colored::Colorize;

/// # Errors
/// Will return an error if the action fails
pub async fn handle(api: &ApiClient, action: Action) -> Result<()> {
    if let Action::ShowVideo { video_id } = action {
        let video = GetVideo::new(&video_id).request(api).await?;
        print_video(&video);
    }

    Ok(())
}

pub fn print_video(video: &VideoItem) {
    println!("{:>12} {}", "videoId:".green(), video.video_id);
    println!("{:>12} {}", "file:".green(), video.file_name);

    if let Some(title) = &video.title {
        println!("{:>12} {title}", "title:".green());
    }

    if let Some(description) = &video.description {
        println!("{:>12} {description}", "description:".green());
    }

    if let Some(created_at) = &video.created_at {
        println!("{:>12} {created_at}", "created:".green());
    }

    if let Some(created_by) = &video.created_by {
        println!("{:>12} {created_by}", "created by:".green());
    }

    if video.variants.is_empty() {
        return;
    }

    println!("{:>12}", "variants:".green());

    for variant in &video.variants {
        let status = variant.transcode_status.to_string();
        let status = match variant.transcode_status {
            TranscodeStatus::Completed => status.green(),
            TranscodeStatus::Failed => status.red(),
            TranscodeStatus::Queued | TranscodeStatus::Processing => status.yellow(),
        };

        println!(
            "  {} {:<6} {:<10} {:>10} {} {}",
            variant.variant_id,
            variant.format,
            variant.resolution,
            variant
                .size
                .map_or_else(|| "-".to_string(), |size| ByteSize(size).to_string())
                .yellow(),
            status,
            variant.url
        );
    }
}
