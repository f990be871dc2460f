use clap::Command;

pub fn command() -> Command {
    Command::new("logout").about("Remove the saved token for the host")
}
