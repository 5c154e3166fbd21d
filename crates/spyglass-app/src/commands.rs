//! Shell command parsing.

/// A parsed shell command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Open(String),
    Back,
    Forward,
    Bookmarks,
    BookmarkAdd(String),
    BookmarkRemove(String),
    Current,
    Help,
    Quit,
    Unknown(String),
}

impl ShellCommand {
    /// Parse one input line. Blank lines parse to `None`.
    pub fn parse(line: &str) -> Option<Self> {
        let mut parts = line.split_whitespace();
        let head = parts.next()?;
        let rest: Vec<&str> = parts.collect();
        let cmd = match (head, rest.as_slice()) {
            ("open" | "go", [url]) => Self::Open((*url).to_string()),
            ("back" | "b", []) => Self::Back,
            ("forward" | "f", []) => Self::Forward,
            ("bookmarks", []) => Self::Bookmarks,
            ("bookmark", ["add", url]) => Self::BookmarkAdd((*url).to_string()),
            ("bookmark", ["rm", url]) => Self::BookmarkRemove((*url).to_string()),
            ("current", []) => Self::Current,
            ("help", []) => Self::Help,
            ("quit" | "exit", []) => Self::Quit,
            _ => Self::Unknown(line.trim().to_string()),
        };
        Some(cmd)
    }
}

/// One-line usage summary per command, for `help`.
pub const HELP_TEXT: &str = "\
open <url>           load a page (aliases: go)
back                 go back in history (alias: b)
forward              go forward in history (alias: f)
current              print the displayed location
bookmarks            list saved bookmarks
bookmark add <url>   save a bookmark
bookmark rm <url>    delete a bookmark
help                 show this text
quit                 exit (alias: exit)";
