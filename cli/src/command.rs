//! Text command parser for the feed browser

use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("unknown command: {0} (try 'help')")]
    UnknownCommand(String),

    #[error("missing argument for: {0}")]
    MissingArgument(String),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Commands the user can type at the prompt
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Page down through the feed, fetching more when near the end
    Down,

    /// Change the rating filter and reload the feed
    Filter { min: f32, max: f32 },

    /// Reload the feed under the current filter
    Refresh,

    /// Show a restaurant's details and recent reviews, by feed index
    Open { index: usize },

    /// Leave a review on a restaurant, by feed index
    Review {
        index: usize,
        rating: u8,
        comment: String,
    },

    /// Answer a review by its id (owner accounts)
    Answer { review_id: Uuid, text: String },

    /// Add a restaurant: `add name | city | address | img-url | description`
    /// (owner accounts)
    Add {
        name: String,
        city: String,
        address: String,
        img: String,
        description: String,
    },

    Login { email: String, password: String },

    Register {
        email: String,
        password: String,
        is_owner: bool,
    },

    Logout,
    Help,
    Quit,
}

pub fn parse_command(input: &str) -> Result<Command, ParseError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(ParseError::UnknownCommand("empty input".to_string()));
    }

    let parts: Vec<&str> = input.split_whitespace().collect();
    let command = parts[0].to_lowercase();

    match command.as_str() {
        "down" | "d" | "more" => Ok(Command::Down),

        "filter" | "f" => {
            if parts.len() < 3 {
                return Err(ParseError::MissingArgument(
                    "filter <min> <max>".to_string(),
                ));
            }
            let min = parse_rating(parts[1])?;
            let max = parse_rating(parts[2])?;
            Ok(Command::Filter { min, max })
        }

        "refresh" | "r" => Ok(Command::Refresh),

        "open" | "o" | "show" => {
            if parts.len() < 2 {
                return Err(ParseError::MissingArgument("open <index>".to_string()));
            }
            Ok(Command::Open {
                index: parse_index(parts[1])?,
            })
        }

        "review" => {
            if parts.len() < 4 {
                return Err(ParseError::MissingArgument(
                    "review <index> <rating> <comment>".to_string(),
                ));
            }
            let index = parse_index(parts[1])?;
            let rating: u8 = parts[2].parse().map_err(|_| {
                ParseError::InvalidArgument(format!("'{}' is not a valid rating", parts[2]))
            })?;
            Ok(Command::Review {
                index,
                rating,
                comment: parts[3..].join(" "),
            })
        }

        "answer" => {
            if parts.len() < 3 {
                return Err(ParseError::MissingArgument(
                    "answer <review-id> <text>".to_string(),
                ));
            }
            let review_id = parts[1].parse().map_err(|_| {
                ParseError::InvalidArgument(format!("'{}' is not a valid review id", parts[1]))
            })?;
            Ok(Command::Answer {
                review_id,
                text: parts[2..].join(" "),
            })
        }

        "add" => {
            let rest = input[parts[0].len()..].trim();
            let fields: Vec<&str> = rest.split('|').map(str::trim).collect();
            if fields.len() != 5 {
                return Err(ParseError::MissingArgument(
                    "add <name> | <city> | <address> | <img-url> | <description>".to_string(),
                ));
            }
            Ok(Command::Add {
                name: fields[0].to_string(),
                city: fields[1].to_string(),
                address: fields[2].to_string(),
                img: fields[3].to_string(),
                description: fields[4].to_string(),
            })
        }

        "login" => {
            if parts.len() < 3 {
                return Err(ParseError::MissingArgument(
                    "login <email> <password>".to_string(),
                ));
            }
            Ok(Command::Login {
                email: parts[1].to_string(),
                password: parts[2].to_string(),
            })
        }

        "register" => {
            if parts.len() < 3 {
                return Err(ParseError::MissingArgument(
                    "register <email> <password> [owner]".to_string(),
                ));
            }
            Ok(Command::Register {
                email: parts[1].to_string(),
                password: parts[2].to_string(),
                is_owner: parts.get(3).map(|s| *s == "owner").unwrap_or(false),
            })
        }

        "logout" => Ok(Command::Logout),
        "help" | "h" | "?" => Ok(Command::Help),
        "quit" | "q" | "exit" => Ok(Command::Quit),

        other => Err(ParseError::UnknownCommand(other.to_string())),
    }
}

fn parse_index(s: &str) -> Result<usize, ParseError> {
    let index: usize = s
        .parse()
        .map_err(|_| ParseError::InvalidArgument(format!("'{}' is not a valid number", s)))?;
    if index == 0 {
        return Err(ParseError::InvalidArgument(
            "index must be 1 or greater".to_string(),
        ));
    }
    // Indices are 1-based in the feed display.
    Ok(index - 1)
}

fn parse_rating(s: &str) -> Result<f32, ParseError> {
    s.parse()
        .map_err(|_| ParseError::InvalidArgument(format!("'{}' is not a valid rating", s)))
}

pub const HELP: &str = "\
Commands:
  down                                  page through the feed (fetches more near the end)
  filter <min> <max>                    only show restaurants rated within the range
  refresh                               reload the feed under the current filter
  open <n>                              show restaurant n with its recent reviews
  review <n> <rating> <comment...>      leave a review on restaurant n
  answer <review-id> <text...>          answer a review (owners)
  add <name> | <city> | <address> | <img-url> | <description>
                                        add a restaurant (owners)
  login <email> <password>              log in
  register <email> <password> [owner]   create an account
  logout                                drop the session
  help                                  this text
  quit                                  exit";
