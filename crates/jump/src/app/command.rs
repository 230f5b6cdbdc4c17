//! Argv parsing into a closed command set.

/// Everything the binary can be asked to do.
///
/// The surface is a legacy single-token one: the first argument alone selects
/// the command (`-add` is one word, not a flag cluster, and `?` is valid), so
/// parsing is a plain match rather than a flag parser. Anything outside the
/// known set becomes [`Command::Unrecognized`] and is reported, never guessed
/// at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// No arguments: show the interactive list.
    Interactive,
    /// `-a` / `-add`, with an optional path (working directory when omitted).
    Add(Option<String>),
    /// `-e` / `-edit`: open the bookmark file in an editor.
    Edit,
    /// `-h` / `-help` / `?`: print usage.
    Help,
    /// A bare index: jump straight to that row.
    Jump(usize),
    /// Anything else, kept verbatim for the error message.
    Unrecognized(String),
}

impl Command {
    /// Parse the arguments following the program name. The first token picks
    /// the command; later tokens beyond what the command consumes are
    /// ignored.
    pub fn from_args<I>(args: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut args = args.into_iter();
        let Some(selector) = args.next() else {
            return Self::Interactive;
        };

        match selector.as_str() {
            "-a" | "-add" => Self::Add(args.next()),
            "-e" | "-edit" => Self::Edit,
            "-h" | "-help" | "?" => Self::Help,
            token if is_index(token) => {
                // A token too large for usize cannot name a real row; MAX is
                // out of range for any list and falls through to the no-op.
                Self::Jump(token.parse().unwrap_or(usize::MAX))
            }
            _ => Self::Unrecognized(selector),
        }
    }
}

fn is_index(token: &str) -> bool {
    !token.is_empty() && token.bytes().all(|byte| byte.is_ascii_digit())
}
