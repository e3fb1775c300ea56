use std::ffi::OsStr;
use std::process::{Command, ExitStatus};

use anyhow::{Context, Result};
use log::info;

use crate::credentials::Credentials;

/// External program that does the actual collection work.
pub const SCRAPER_PROGRAM: &str = "instagram-scraper";

/// File listing the account names to collect, one per line.
pub const USER_LIST: &str = "ig_users.txt";

/// Directory the scraper writes collected media and metadata into.
pub const DATA_DIR: &str = "data";

/// Media types requested from the scraper.
pub const MEDIA_TYPES: &str = "image";

/// Maximum number of items collected per account.
pub const MAX_ITEMS: u32 = 10;

#[derive(Debug)]
pub struct Scraper {
    cmd: Command,
}

impl Scraper {
    pub fn cmd(self) -> Command {
        self.cmd
    }

    pub fn arg(&mut self, arg: &str) -> &mut Scraper {
        self.cmd.arg(arg);
        self
    }

    pub fn args<Iter, Str>(&mut self, args: Iter) -> &mut Scraper
    where
        Iter: IntoIterator<Item = Str>,
        Str: AsRef<OsStr>,
    {
        self.cmd.args(args);
        return self;
    }

    pub fn user_list(&mut self, file: &str) -> &mut Scraper {
        self.args(["--filename", file])
    }

    pub fn comments(&mut self) -> &mut Scraper {
        self.arg("--comments")
    }

    pub fn media_types(&mut self, types: &str) -> &mut Scraper {
        self.args(["--media-types", types])
    }

    pub fn destination(&mut self, dir: &str) -> &mut Scraper {
        self.args(["--destination", dir])
    }

    /// Credentials are appended as separate argv entries, so no shell
    /// quoting rules apply to them.
    pub fn login(&mut self, credentials: &Credentials) -> &mut Scraper {
        self.args(["-u", credentials.username.as_str()]);
        self.args(["-p", credentials.password.as_str()])
    }

    pub fn max_items(&mut self, count: u32) -> &mut Scraper {
        let count = count.to_string();
        self.args(["-m", count.as_str()])
    }
}

pub fn create_scraper_command() -> Scraper {
    let cmd = Command::new(SCRAPER_PROGRAM);
    Scraper { cmd }
}

/// The fixed collection invocation. Only the credentials vary between runs.
pub fn collect_command(credentials: &Credentials) -> Command {
    let mut scraper = create_scraper_command();
    scraper
        .user_list(USER_LIST)
        .comments()
        .media_types(MEDIA_TYPES)
        .destination(DATA_DIR)
        .login(credentials)
        .max_items(MAX_ITEMS);
    scraper.cmd()
}

/// Run the fixed collection, inheriting stdin/stdout/stderr, and block
/// until the scraper exits. Progress and error reporting belong to the
/// scraper itself; the caller only sees the exit status.
pub fn run_collection(credentials: &Credentials) -> Result<ExitStatus> {
    info!("Launching {}", SCRAPER_PROGRAM);
    let status = collect_command(credentials)
        .status()
        .with_context(|| format!("Failed to run {}, is it installed?", SCRAPER_PROGRAM))?;
    Ok(status)
}
