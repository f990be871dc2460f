use clap::{Arg, ArgGroup, Command};

pub fn command() -> Command {
    Command::new("edit")
        .about("Update the title or description of a video")
        .arg(
            Arg::new("video")
                .help("Video id")
                .value_name("VIDEO_ID")
                .required(true)
                .num_args(1),
        )
        .arg(
            Arg::new("title")
                .help("New title")
                .long("title")
                .num_args(1),
        )
        .arg(
            Arg::new("description")
                .help("New description")
                .long("description")
                .short('d')
                .num_args(1),
        )
        .group(
            ArgGroup::new("patch")
                .args(["title", "description"])
                .required(true)
                .multiple(true),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;

    #[test]
    fn test_check_arguments() -> Result<()> {
        let cmd = command();
        let m = cmd.try_get_matches_from(vec![
            "edit",
            "v1",
            "--title",
            "Holidays",
            "-d",
            "Beach",
        ])?;
        assert_eq!(m.get_one::<String>("video").map(String::as_str), Some("v1"));
        assert_eq!(m.get_one::<String>("title").map(String::as_str), Some("Holidays"));
        assert_eq!(
            m.get_one::<String>("description").map(String::as_str),
            Some("Beach")
        );
        Ok(())
    }

    #[test]
    fn test_check_nothing_to_edit() {
        let cmd = command();
        assert!(cmd.try_get_matches_from(vec!["edit", "v1"]).is_err());
    }
}
