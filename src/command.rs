//! Parsing of one line typed at the prompt into a [`Command`].

use crate::error::{HbaError, Result};

/// A command entered at the `HBA Database>` prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `student <github>`
    Student { github: String },
    /// `new_student <first> <last> <github>`
    NewStudent {
        first_name: String,
        last_name: String,
        github: String,
    },
    /// `title <title>`
    Title { title: String },
    /// `add <title> <description words...> <max_grade>`
    Add {
        title: String,
        description: String,
        max_grade: i64,
    },
    /// `grade <github> <title>`
    Grade { github: String, title: String },
    /// `assign <github> <title> <grade>`
    Assign {
        github: String,
        title: String,
        grade: i64,
    },
    /// `all <first> <last>`
    All { first_name: String, last_name: String },
    /// `help`
    Help,
    /// `quit`
    Quit,
    /// Anything whose first word is not a known command
    Unknown(String),
}

impl Command {
    /// Parse one input line.
    ///
    /// Returns `Ok(None)` for a blank line. Argument-count and number errors
    /// come back as input errors (see [`HbaError::is_input_error`]).
    pub fn parse(line: &str) -> Result<Option<Command>> {
        let mut tokens = line.split_whitespace();
        let Some(name) = tokens.next() else {
            return Ok(None);
        };
        let args: Vec<&str> = tokens.collect();

        let command = match name {
            "add" => {
                if args.len() < 3 {
                    return Err(HbaError::MissingProjectFields);
                }
                let last = args.len() - 1;
                Command::Add {
                    title: args[0].to_string(),
                    description: args[1..last].join(" "),
                    max_grade: parse_number(args[last])?,
                }
            }
            "student" => {
                let [github] = exact::<1>("student", &args)?;
                Command::Student {
                    github: github.to_string(),
                }
            }
            "new_student" => {
                let [first_name, last_name, github] = exact::<3>("new_student", &args)?;
                Command::NewStudent {
                    first_name: first_name.to_string(),
                    last_name: last_name.to_string(),
                    github: github.to_string(),
                }
            }
            "title" => {
                let [title] = exact::<1>("title", &args)?;
                Command::Title {
                    title: title.to_string(),
                }
            }
            "grade" => {
                let [github, title] = exact::<2>("grade", &args)?;
                Command::Grade {
                    github: github.to_string(),
                    title: title.to_string(),
                }
            }
            "assign" => {
                let [github, title, grade] = exact::<3>("assign", &args)?;
                Command::Assign {
                    github: github.to_string(),
                    title: title.to_string(),
                    grade: parse_number(grade)?,
                }
            }
            "all" => {
                let [first_name, last_name] = exact::<2>("all", &args)?;
                Command::All {
                    first_name: first_name.to_string(),
                    last_name: last_name.to_string(),
                }
            }
            "help" => Command::Help,
            "quit" => Command::Quit,
            other => Command::Unknown(other.to_string()),
        };

        Ok(Some(command))
    }
}

/// Unpack exactly `N` arguments or fail with the counts involved
fn exact<'a, const N: usize>(command: &'static str, args: &[&'a str]) -> Result<[&'a str; N]> {
    <[&str; N]>::try_from(args).map_err(|_| HbaError::WrongArgCount {
        command,
        expected: N,
        got: args.len(),
    })
}

fn parse_number(token: &str) -> Result<i64> {
    token
        .parse()
        .map_err(|_| HbaError::InvalidNumber(token.to_string()))
}
