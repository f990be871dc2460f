use clap::{Arg, Command};

pub fn command() -> Command {
    Command::new("rm")
        .about("Delete a video and its variants")
        .arg(
            Arg::new("video")
                .help("Video id")
                .value_name("VIDEO_ID")
                .required(true)
                .num_args(1),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;

    #[test]
    fn test_check_arguments() -> Result<()> {
        let cmd = command();
        let m = cmd.try_get_matches_from(vec!["rm", "v1"])?;
        assert_eq!(m.get_one::<String>("video").map(String::as_str), Some("v1"));
        Ok(())
    }

    #[test]
    fn test_check_video_required() {
        let cmd = command();
        assert!(cmd.try_get_matches_from(vec!["rm"]).is_err());
    }
}
