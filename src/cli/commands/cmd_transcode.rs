use clap::{Arg, Command};

pub fn command() -> Command {
    Command::new("transcode")
        .about("Start transcoding a video")
        .arg(
            Arg::new("video")
                .help("Video id")
                .value_name("VIDEO_ID")
                .required(true)
                .num_args(1),
        )
        .arg(
            Arg::new("no-force")
                .help("Don't re-create variants that already exist")
                .long("no-force")
                .num_args(0),
        )
}
