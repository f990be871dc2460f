pub mod cmd_edit;
pub mod cmd_hosts;
pub mod cmd_login;
pub mod cmd_logout;
pub mod cmd_ls;
pub mod cmd_rm;
pub mod cmd_show;
pub mod cmd_transcode;

use clap::{
    Arg, ColorChoice, Command,
    builder::ValueParser,
    builder::styling::{AnsiColor, Effects, Styles},
};
use std::{
    fs,
    path::{Path, PathBuf},
};

pub fn validator_is_num() -> ValueParser {
    ValueParser::from(move |s: &str| -> std::result::Result<u64, String> {
        s.parse::<u64>()
            .map_err(|_| String::from("Not a valid number"))
    })
}

pub fn validator_is_file() -> ValueParser {
    ValueParser::from(move |s: &str| -> std::result::Result<PathBuf, String> {
        if let Ok(metadata) = fs::metadata(s) {
            if metadata.is_file() {
                return Ok(PathBuf::from(s));
            }
        }

        Err(format!("Invalid file path or file does not exist: '{s}'"))
    })
}

pub fn new(config_path: &Path) -> Command {
    // get config file path (default: ~/.config/vidup/config.yml)
    let config_file_path = config_path.join("config.yml");

    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Blue.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Green.on_default());

    Command::new("vidup")
        .about("Upload MP4 videos and manage them through the video API")
        .version(env!("CARGO_PKG_VERSION"))
        .subcommand_negates_reqs(true)
        .color(ColorChoice::Auto)
        .styles(styles)
        .arg(
            Arg::new("quiet")
            .long("quiet")
            .short('q')
            .help("Don't show progress bar")
            .num_args(0)
        )
        .arg(
            Arg::new("config")
            .default_value(config_file_path.into_os_string())
            .long("config")
            .num_args(1)
            .short('c')
            .value_parser(validator_is_file())
            .value_name("config.yml")
            .global(true)
        )
        .arg(
            Arg::new("host")
            .help("Host name as defined in config.yml, optional when only one host is defined")
            .long("host")
            .short('H')
            .num_args(1)
            .global(true)
        )
        .arg(
            Arg::new("arguments")
            .help("/path/to/video.mp4")
            .value_name("FILE")
            .required(true)
            .value_parser(validator_is_file())
            .num_args(1)
        )
        .arg(
            Arg::new("verbose")
            .help("Verbosity level")
            .short('v')
            .long("verbose")
            .global(true)
            .action(clap::ArgAction::Count)
        )
        .arg(
            Arg::new("number")
            .help("Number of max concurrent part uploads")
            .short('n')
            .long("number")
            .default_value("1")
            .value_parser(clap::value_parser!(u8).range(1..=255))
            .num_args(1)
        )
        .arg(
            Arg::new("timeout")
            .help("Request timeout in seconds, 0 to disable")
            .long("timeout")
            .short('t')
            .default_value("60")
            .value_name("seconds")
            .value_parser(validator_is_num())
            .global(true)
            .num_args(1)
        )
        .subcommand(cmd_edit::command())
        .subcommand(cmd_hosts::command())
        .subcommand(cmd_login::command())
        .subcommand(cmd_logout::command())
        .subcommand(cmd_ls::command())
        .subcommand(cmd_rm::command())
        .subcommand(cmd_show::command())
        .subcommand(cmd_transcode::command())
}
