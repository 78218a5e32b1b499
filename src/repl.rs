use crate::command::Command;
use crate::db::Database;
use crate::error::{HbaError, Result};
use crate::output::{self, INPUT_ERROR, INVALID_ENTRY, PROMPT};
use std::io::{BufRead, Write};
use tracing::{debug, warn};

/// Whether the loop keeps reading after a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Read-eval-print loop over any line source and sink
pub struct Repl<'db, R, W> {
    db: &'db Database,
    input: R,
    output: W,
    show_prompt: bool,
}

impl<'db, R: BufRead, W: Write> Repl<'db, R, W> {
    pub fn new(db: &'db Database, input: R, output: W) -> Self {
        Self {
            db,
            input,
            output,
            show_prompt: true,
        }
    }

    /// Turn the `HBA Database> ` prompt on or off
    pub fn show_prompt(mut self, show: bool) -> Self {
        self.show_prompt = show;
        self
    }

    /// Prompt and handle lines until `quit` or end of input.
    ///
    /// Bad input and store errors are reported on the output and the loop
    /// continues; only console I/O failures end it early.
    pub fn run(&mut self) -> Result<()> {
        loop {
            if self.show_prompt {
                write!(self.output, "{PROMPT}")?;
                self.output.flush()?;
            }

            let mut buf = Vec::new();
            if self.input.read_until(b'\n', &mut buf)? == 0 {
                debug!("end of input");
                break;
            }

            let Ok(line) = String::from_utf8(buf) else {
                debug!("input line is not valid UTF-8");
                writeln!(self.output, "{INPUT_ERROR}")?;
                continue;
            };

            if self.handle_line(&line)? == Flow::Quit {
                break;
            }
        }
        self.output.flush()?;
        Ok(())
    }

    /// Handle a single input line
    pub fn handle_line(&mut self, line: &str) -> Result<Flow> {
        let command = match Command::parse(line) {
            Ok(Some(command)) => command,
            Ok(None) => return Ok(Flow::Continue),
            Err(e) => {
                debug!(error = %e, "rejected input");
                writeln!(self.output, "{INPUT_ERROR}")?;
                return Ok(Flow::Continue);
            }
        };
        debug!(?command, "dispatching");

        match execute(self.db, &command) {
            Ok(Some(text)) => writeln!(self.output, "{text}")?,
            Ok(None) => return Ok(Flow::Quit),
            Err(HbaError::Db(e)) => {
                warn!(error = %e, "store rejected command");
                writeln!(self.output, "Database error: {e}")?;
            }
            Err(e) => return Err(e),
        }
        Ok(Flow::Continue)
    }
}

/// Run one command against the store and render its result.
///
/// Returns `None` for `quit`, which never touches the store.
pub fn execute(db: &Database, command: &Command) -> Result<Option<String>> {
    let text = match command {
        Command::Student { github } => match db.get_student_by_github(github)? {
            Some(student) => output::student(&student),
            None => output::student_not_found(github),
        },
        Command::NewStudent {
            first_name,
            last_name,
            github,
        } => output::student_added(&db.make_new_student(first_name, last_name, github)?),
        Command::Title { title } => match db.get_project_by_title(title)? {
            Some(project) => output::project(&project),
            None => output::project_not_found(title),
        },
        Command::Add {
            title,
            description,
            max_grade,
        } => output::project_added(&db.add_project(title, description, *max_grade)?),
        Command::Grade { github, title } => match db.get_grade_by_github_title(github, title)? {
            Some(grade) => output::grade(&grade),
            None => output::grade_not_found(github, title),
        },
        Command::Assign {
            github,
            title,
            grade,
        } => output::grade_assigned(&db.assign_grade(github, title, *grade)?),
        Command::All {
            first_name,
            last_name,
        } => {
            let grades = db.get_all_grades_from_student(first_name, last_name)?;
            output::report_card(first_name, last_name, &grades)
        }
        Command::Help => output::help(),
        Command::Unknown(_) => INVALID_ENTRY.to_string(),
        Command::Quit => return Ok(None),
    };
    Ok(Some(text))
}
