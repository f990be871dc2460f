use crate::{
    api::{ApiClient, actions::Login},
    cli::{actions::Action, globals::GlobalArgs},
};
use anyhow::{Context, Result, anyhow};
use colored::Colorize;
use secrecy::{ExposeSecret, SecretString};
use std::io::{self, BufRead, Write};

/// # Errors
/// Will return an error if the action fails
pub async fn handle(api: &ApiClient, action: Action, globals: &GlobalArgs) -> Result<()> {
    match action {
        Action::Login { username, password } => {
            let password = match password {
                Some(password) => password,
                None => prompt_password(&username)?,
            };

            let rs = Login::new(&username, password.expose_secret())
                .request(api)
                .await
                .context("login failed")?;

            let path = globals.tokens.save(&globals.host, &rs.token)?;

            log::info!("token saved: {}", path.display());

            println!("{} {} as {}", "logged in to".green(), globals.host, username);
        }

        Action::Logout => {
            if globals.tokens.remove(&globals.host)? {
                println!("{} {}", "logged out from".green(), globals.host);
            } else {
                println!("no saved token for {}", globals.host);
            }
        }

        _ => {}
    }

    Ok(())
}

fn prompt_password(username: &str) -> Result<SecretString> {
    eprint!("password for {username}: ");
    io::stderr().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;

    let password = line.trim_end_matches(['\r', '\n']);

    if password.is_empty() {
        return Err(anyhow!("password missing"));
    }

    Ok(SecretString::new(password.into()))
}
