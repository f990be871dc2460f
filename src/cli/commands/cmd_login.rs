use clap::{Arg, Command};

pub fn command() -> Command {
    Command::new("login")
        .about("Log in and save the token for the host")
        .arg(
            Arg::new("username")
                .help("User name")
                .required(true)
                .num_args(1),
        )
        .arg(
            Arg::new("password")
                .help("Password, prompted for when missing")
                .long("password")
                .short('p')
                .env("VIDUP_PASSWORD")
                .hide_env_values(true)
                .num_args(1),
        )
}
