use crate::{CliError, CliErrorResult, render};

use std::io::{BufRead, Write};
use std::sync::{Arc, Mutex, PoisonError};

use log::{debug, info, warn};
use ollm_session::{Identity, SessionError, SessionStore, Subscription};

/// One line of console input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleCommand {
    Login { email: String, nickname: String },
    Logout,
    Whoami,
    Status,
    Help,
    Quit,
    Empty,
}

impl ConsoleCommand {
    pub fn parse(line: &str) -> CliErrorResult<Self> {
        let mut words = line.split_whitespace();
        let Some(verb) = words.next() else {
            return Ok(Self::Empty);
        };

        let command = match verb.to_lowercase().as_str() {
            "login" => {
                let email = words.next();
                let nickname = words.collect::<Vec<_>>().join(" ");
                match email {
                    Some(email) if !nickname.is_empty() => Self::Login {
                        email: email.to_string(),
                        nickname,
                    },
                    _ => return Err(CliError::usage("usage: login <email> <nickname>")),
                }
            }
            "logout" => Self::Logout,
            "whoami" => Self::Whoami,
            "status" => Self::Status,
            "help" | "?" => Self::Help,
            "quit" | "exit" => Self::Quit,
            other => {
                return Err(CliError::usage(format!(
                    "unknown command '{other}' (try 'help')"
                )));
            }
        };

        Ok(command)
    }
}

/// Line-oriented session console.
///
/// Acts as the login flow for the store it is given: identities are
/// validated here before they reach `SessionStore::login`. A render observer
/// prints a banner on every session change, including the initial state.
pub struct Console<R, W> {
    store: SessionStore,
    input: R,
    output: Arc<Mutex<W>>,
}

impl<R, W> Console<R, W>
where
    R: BufRead,
    W: Write + Send + 'static,
{
    pub fn new(store: SessionStore, input: R, output: W) -> Self {
        Self {
            store,
            input,
            output: Arc::new(Mutex::new(output)),
        }
    }

    /// Read commands until `quit` or end of input.
    pub fn run(&mut self) -> CliErrorResult<()> {
        let subscription = self.subscribe_renderer();
        info!("Session console started");

        let result = self.read_loop();

        subscription.unsubscribe();
        info!("Session console stopped");
        result
    }

    fn subscribe_renderer(&self) -> Subscription {
        let output = Arc::clone(&self.output);
        self.store.subscribe(move |identity| {
            let mut out = output.lock().unwrap_or_else(PoisonError::into_inner);
            if let Err(e) = writeln!(out, "{}", render::session_banner(identity)) {
                warn!("Failed to render session change: {e}");
            }
        })
    }

    fn read_loop(&mut self) -> CliErrorResult<()> {
        let mut line = String::new();
        loop {
            line.clear();
            let read = self
                .input
                .read_line(&mut line)
                .map_err(|e| CliError::io("Failed to read console input", e))?;
            if read == 0 {
                debug!("Console input closed");
                return Ok(());
            }

            match ConsoleCommand::parse(&line) {
                Ok(ConsoleCommand::Quit) => return Ok(()),
                Ok(command) => self.execute(command)?,
                Err(e) => self.write_line(&format!("error: {e}"))?,
            }
        }
    }

    fn execute(&self, command: ConsoleCommand) -> CliErrorResult<()> {
        debug!("Console command: {command:?}");
        match command {
            ConsoleCommand::Login { email, nickname } => match Identity::new(email, nickname) {
                Ok(identity) => self.store.login(identity),
                Err(SessionError::InvalidIdentity { field, message, .. }) => {
                    warn!("Rejected login: invalid {field}");
                    self.write_line(&format!("error: invalid {field}: {message}"))?;
                }
            },
            ConsoleCommand::Logout => self.store.logout(),
            ConsoleCommand::Whoami => {
                let current = self.store.get();
                self.write_line(&render::whoami(current.as_deref()))?;
            }
            ConsoleCommand::Status => {
                self.write_line(render::status(self.store.is_logged_in()))?;
            }
            ConsoleCommand::Help => self.write_line(render::HELP)?,
            ConsoleCommand::Quit | ConsoleCommand::Empty => {}
        }
        Ok(())
    }

    fn write_line(&self, text: &str) -> CliErrorResult<()> {
        let mut out = self.output.lock().unwrap_or_else(PoisonError::into_inner);
        writeln!(out, "{text}").map_err(|e| CliError::io("Failed to write console output", e))?;
        out.flush()
            .map_err(|e| CliError::io("Failed to flush console output", e))
    }
}
