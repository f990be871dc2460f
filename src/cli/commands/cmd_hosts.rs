use clap::Command;

pub fn command() -> Command {
    Command::new("hosts").about("List the hosts defined in config.yml")
}
