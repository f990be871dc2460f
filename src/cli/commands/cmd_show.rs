use clap::{Arg, Command};

pub fn command() -> Command {
    Command::new("show")
        .about("Show a video and its variants")
        .arg(
            Arg::new("video")
                .help("Video id")
                .value_name("VIDEO_ID")
                .required(true)
                .num_args(1),
        )
}
