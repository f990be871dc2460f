use crate::{
    api::ApiClient,
    cli::{
        Config,
        actions::Action,
        commands, dispatch,
        globals::GlobalArgs,
        token::{self, TokenStore},
    },
};
use anyhow::{Context, Result};
use std::{
    fs,
    path::{Path, PathBuf},
    process::exit,
};

/// # Errors
/// Will return an error if the config directory can not be created
pub fn get_config_path() -> Result<PathBuf> {
    let home_dir = dirs::home_dir().map_or_else(|| PathBuf::from("/tmp"), |h| h);

    let config_path = Path::new(&home_dir).join(".config").join("vidup");
    fs::create_dir_all(&config_path)
        .with_context(|| format!("unable to create: {}", config_path.display()))?;

    Ok(config_path)
}

/// # Errors
/// Will return an error if the config file is not found
pub fn start() -> Result<(ApiClient, Action, GlobalArgs)> {
    let config_path = get_config_path()?;

    // start the command line interface
    let cmd = commands::new(&config_path);

    // get the matches
    let matches = cmd.get_matches();

    let verbosity_level = match matches.get_one::<u8>("verbose").copied().unwrap_or(0) {
        0 => log::LevelFilter::Off,
        1 => log::LevelFilter::Info,
        _ => log::LevelFilter::Debug,
    };

    env_logger::Builder::new()
        .filter_level(verbosity_level)
        .init();

    log::info!("config path: {}", config_path.display());

    // define global args
    let mut global_args = GlobalArgs::new();

    if let Some(timeout) = matches.get_one::<u64>("timeout") {
        global_args.set_timeout(*timeout);
    }

    // Config file is required
    let config_file: PathBuf = matches.get_one::<PathBuf>("config").map_or_else(
        || {
            eprintln!("no config file found");
            exit(1);
        },
        Into::into,
    );

    // load the config file
    let config = Config::new(config_file)?;

    log::debug!("config: {config:#?}");

    // list hosts
    if matches.subcommand_matches("hosts").is_some() {
        println!("Hosts:");
        for (name, host) in &config.hosts {
            println!("   - {name}: {}", host.url);
        }
        exit(0);
    }

    let (name, host) =
        config.select_host(matches.get_one::<String>("host").map(String::as_str))?;

    log::info!("host: {name}, url: {}", host.url);

    let tokens = TokenStore::new(&config_path);

    let token = token::resolve(&tokens, name, host)?;

    global_args.set_host(name, tokens);

    let api = ApiClient::new(&host.url, global_args.timeout)
        .with_context(|| format!("invalid url for host {name}: {}", host.url))?
        .with_token(token);

    // create the action
    let action = dispatch::dispatch(&matches)?;

    log::debug!("globals: {global_args:#?}, action: {action:#?}");

    Ok((api, action, global_args))
}
