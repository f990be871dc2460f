use clap::{Arg, Command};

pub fn command() -> Command {
    Command::new("ls")
        .about("List videos")
        .arg(
            Arg::new("limit")
                .help("Limits the number of videos returned in the response")
                .long("limit")
                .short('l')
                .value_name("NUMBER")
                .value_parser(clap::value_parser!(usize))
                .num_args(1),
        )
        .arg(
            Arg::new("sort")
                .help("Sort order, example: createdAt:desc")
                .long("sort")
                .short('s')
                .num_args(1),
        )
        .arg(
            Arg::new("mine")
                .help("Only videos uploaded by the current user")
                .long("mine")
                .short('m')
                .conflicts_with("created-by")
                .num_args(0),
        )
        .arg(
            Arg::new("created-by")
                .help("Only videos uploaded by this user id")
                .long("created-by")
                .value_name("USER")
                .num_args(1),
        )
        .arg(
            Arg::new("filter")
                .help("Filter expression, example: transcode_status:completed")
                .long("filter")
                .short('f')
                .num_args(1),
        )
        .arg(
            Arg::new("query")
                .help("Free text search")
                .long("query")
                .num_args(1),
        )
        .arg(
            Arg::new("cursor")
                .help("Cursor printed by a previous listing, to fetch the next page")
                .long("cursor")
                .num_args(1),
        )
}
