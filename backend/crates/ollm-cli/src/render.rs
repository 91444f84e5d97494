use ollm_session::Identity;

const SESSION_PREFIX: &str = "[session]";

/// Line shown whenever the session changes
pub fn session_banner(identity: Option<&Identity>) -> String {
    match identity {
        Some(identity) => format!("{SESSION_PREFIX} signed in as {identity}"),
        None => format!("{SESSION_PREFIX} signed out"),
    }
}

/// Reply to `whoami`
pub fn whoami(identity: Option<&Identity>) -> String {
    match identity {
        Some(identity) => identity.to_string(),
        None => String::from("not signed in"),
    }
}

/// Reply to `status`
pub fn status(logged_in: bool) -> &'static str {
    if logged_in { "logged in" } else { "logged out" }
}

pub const HELP: &str = "\
commands:
  login <email> <nickname>  sign in (nickname may contain spaces)
  logout                    sign out
  whoami                    show the signed-in identity
  status                    show whether someone is signed in
  help                      show this list
  quit                      leave the console";
