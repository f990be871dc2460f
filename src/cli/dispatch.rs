use crate::{
    api::actions::{ListQuery, VideoPatch},
    cli::actions::Action,
};
use anyhow::{Context, Result};
use clap::ArgMatches;
use secrecy::SecretString;
use std::path::PathBuf;

// return Action based on the command or subcommand
pub fn dispatch(matches: &ArgMatches) -> Result<Action> {
    // Closure to return subcommand_matches
    let sub_m = |subcommand| -> Result<&ArgMatches> {
        matches
            .subcommand_matches(subcommand)
            .context("arguments missing")
    };

    let video_id = |sub_m: &ArgMatches| -> Result<String> {
        sub_m
            .get_one::<String>("video")
            .cloned()
            .context("video id missing")
    };

    let string = |sub_m: &ArgMatches, id: &str| sub_m.get_one::<String>(id).cloned();

    match matches.subcommand_name() {
        Some("login") => {
            let sub_m = sub_m("login")?;
            Ok(Action::Login {
                username: string(sub_m, "username").context("username missing")?,
                password: string(sub_m, "password").map(|p| SecretString::new(p.into())),
            })
        }

        Some("logout") => Ok(Action::Logout),

        Some("ls") => {
            let sub_m = sub_m("ls")?;
            let created_by = if sub_m.get_flag("mine") {
                Some(String::from("me"))
            } else {
                string(sub_m, "created-by")
            };
            Ok(Action::ListVideos {
                query: ListQuery {
                    limit: sub_m.get_one::<usize>("limit").copied(),
                    sort: string(sub_m, "sort"),
                    created_by,
                    filter: string(sub_m, "filter"),
                    q: string(sub_m, "query"),
                    cursor: string(sub_m, "cursor"),
                },
            })
        }

        Some("show") => Ok(Action::ShowVideo {
            video_id: video_id(sub_m("show")?)?,
        }),

        Some("edit") => {
            let sub_m = sub_m("edit")?;
            Ok(Action::EditVideo {
                video_id: video_id(sub_m)?,
                patch: VideoPatch {
                    title: string(sub_m, "title"),
                    description: string(sub_m, "description"),
                },
            })
        }

        Some("rm") => Ok(Action::DeleteVideo {
            video_id: video_id(sub_m("rm")?)?,
        }),

        Some("transcode") => {
            let sub_m = sub_m("transcode")?;
            Ok(Action::Transcode {
                video_id: video_id(sub_m)?,
                force: !sub_m.get_flag("no-force"),
            })
        }

        // Upload
        _ => {
            let file = matches
                .get_one::<PathBuf>("arguments")
                .cloned()
                .context("file missing")?;
            Ok(Action::Upload {
                file,
                quiet: matches.get_flag("quiet"),
                max_requests: matches
                    .get_one::<u8>("number")
                    .map_or(1, |n| usize::from(*n)),
            })
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;
    use crate::cli::commands;
    use secrecy::ExposeSecret;
    use std::{fs::File, io::Write};
    use tempfile::{Builder, TempDir};

    fn config_dir() -> TempDir {
        let tmp_dir = Builder::new().prefix("test-vidup-").tempdir().unwrap();
        let mut config = File::create(tmp_dir.path().join("config.yml")).unwrap();
        config
            .write_all(b"---\nhosts:\n  local:\n    url: http://localhost:3000")
            .unwrap();
        tmp_dir
    }

    fn action(args: &[&str]) -> Result<Action> {
        let dir = config_dir();
        let matches = commands::new(dir.path()).try_get_matches_from(args)?;
        dispatch(&matches)
    }

    #[test]
    fn test_dispatch_upload() {
        let dir = config_dir();
        let video = dir.path().join("video.mp4");
        File::create(&video).unwrap().write_all(b"mp4").unwrap();

        let matches = commands::new(dir.path())
            .try_get_matches_from(vec!["vidup", "-q", "-n", "3", video.to_str().unwrap()])
            .unwrap();

        match dispatch(&matches).unwrap() {
            Action::Upload {
                file,
                quiet,
                max_requests,
            } => {
                assert_eq!(file, video);
                assert!(quiet);
                assert_eq!(max_requests, 3);
            }
            action => panic!("unexpected action: {action:?}"),
        }
    }

    #[test]
    fn test_dispatch_ls() {
        match action(&["vidup", "ls", "--mine", "-l", "5", "--cursor", "abc"]).unwrap() {
            Action::ListVideos { query } => {
                assert_eq!(
                    query,
                    ListQuery {
                        limit: Some(5),
                        created_by: Some("me".to_string()),
                        cursor: Some("abc".to_string()),
                        ..ListQuery::default()
                    }
                );
            }
            action => panic!("unexpected action: {action:?}"),
        }
    }

    #[test]
    fn test_dispatch_ls_created_by() {
        match action(&["vidup", "ls", "--created-by", "u1", "--query", "cats"]).unwrap() {
            Action::ListVideos { query } => {
                assert_eq!(query.created_by.as_deref(), Some("u1"));
                assert_eq!(query.q.as_deref(), Some("cats"));
            }
            action => panic!("unexpected action: {action:?}"),
        }
    }

    #[test]
    fn test_dispatch_edit() {
        match action(&["vidup", "edit", "v1", "--title", "Holidays"]).unwrap() {
            Action::EditVideo { video_id, patch } => {
                assert_eq!(video_id, "v1");
                assert_eq!(patch.title.as_deref(), Some("Holidays"));
                assert!(patch.description.is_none());
            }
            action => panic!("unexpected action: {action:?}"),
        }
    }

    #[test]
    fn test_dispatch_video_commands() {
        assert!(matches!(
            action(&["vidup", "show", "v1"]).unwrap(),
            Action::ShowVideo { video_id } if video_id == "v1"
        ));
        assert!(matches!(
            action(&["vidup", "rm", "v2"]).unwrap(),
            Action::DeleteVideo { video_id } if video_id == "v2"
        ));
        assert!(matches!(
            action(&["vidup", "transcode", "v3"]).unwrap(),
            Action::Transcode { video_id, force: true } if video_id == "v3"
        ));
        assert!(matches!(
            action(&["vidup", "transcode", "v3", "--no-force"]).unwrap(),
            Action::Transcode { force: false, .. }
        ));
        assert!(matches!(
            action(&["vidup", "logout"]).unwrap(),
            Action::Logout
        ));
    }

    #[test]
    fn test_dispatch_login() {
        temp_env::with_var("VIDUP_PASSWORD", None::<&str>, || {
            match action(&["vidup", "login", "alice", "-p", "secret"]).unwrap() {
                Action::Login { username, password } => {
                    assert_eq!(username, "alice");
                    assert_eq!(password.unwrap().expose_secret(), "secret");
                }
                action => panic!("unexpected action: {action:?}"),
            }

            match action(&["vidup", "login", "alice"]).unwrap() {
                Action::Login { password, .. } => assert!(password.is_none()),
                action => panic!("unexpected action: {action:?}"),
            }
        });
    }
}
