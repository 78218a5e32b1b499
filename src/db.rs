use crate::error::Result;
use crate::models::{Grade, Project, ProjectGrade, Student};
use rusqlite::{Connection, OptionalExtension, Row};
use std::path::Path;
use tracing::{debug, info};

/// Default database file, used when no `--db` path is given
pub const DEFAULT_DB_PATH: &str = "hackbright.db";

/// Database handle
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open database connection and make sure the schema exists
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let conn = Connection::open(path.as_ref())?;
        info!(path = %path.as_ref().display(), "opened database");
        Self::from_connection(conn)
    }

    /// Open an in-memory database for testing
    pub fn open_in_memory() -> Result<Self> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> Result<Self> {
        // Grades must point at existing students and projects
        conn.pragma_update(None, "foreign_keys", "ON")?;

        let db = Database { conn };
        db.init()?;
        Ok(db)
    }

    /// Create the three tables if they are not there yet
    pub fn init(&self) -> Result<()> {
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS students (
                github TEXT PRIMARY KEY,
                first_name TEXT NOT NULL,
                last_name TEXT NOT NULL
            )",
            [],
        )?;

        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS projects (
                title TEXT PRIMARY KEY,
                description TEXT,
                max_grade INTEGER NOT NULL
            )",
            [],
        )?;

        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS grades (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                student_github TEXT NOT NULL REFERENCES students(github),
                project_title TEXT NOT NULL REFERENCES projects(title),
                grade INTEGER NOT NULL
            )",
            [],
        )?;

        self.conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_grades_student_github ON grades(student_github)",
            [],
        )?;

        Ok(())
    }

    // ==================== Students ====================

    pub fn get_student_by_github(&self, github: &str) -> Result<Option<Student>> {
        debug!(github, "looking up student");
        self.conn
            .query_row(
                "SELECT first_name, last_name, github FROM students WHERE github = ?1",
                [github],
                student_from_row,
            )
            .optional()
            .map_err(|e| e.into())
    }

    pub fn make_new_student(
        &self,
        first_name: &str,
        last_name: &str,
        github: &str,
    ) -> Result<Student> {
        debug!(github, "inserting student");
        let tx = self.conn.unchecked_transaction()?;
        tx.execute(
            "INSERT INTO students (first_name, last_name, github) VALUES (?1, ?2, ?3)",
            (first_name, last_name, github),
        )?;
        tx.commit()?;

        Ok(Student {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            github: github.to_string(),
        })
    }

    // ==================== Projects ====================

    pub fn get_project_by_title(&self, title: &str) -> Result<Option<Project>> {
        debug!(title, "looking up project");
        self.conn
            .query_row(
                "SELECT title, description, max_grade FROM projects WHERE title = ?1",
                [title],
                project_from_row,
            )
            .optional()
            .map_err(|e| e.into())
    }

    pub fn add_project(&self, title: &str, description: &str, max_grade: i64) -> Result<Project> {
        debug!(title, "inserting project");
        let tx = self.conn.unchecked_transaction()?;
        tx.execute(
            "INSERT INTO projects (title, description, max_grade) VALUES (?1, ?2, ?3)",
            (title, description, max_grade),
        )?;
        tx.commit()?;

        Ok(Project {
            title: title.to_string(),
            description: Some(description.to_string()),
            max_grade,
        })
    }

    // ==================== Grades ====================

    pub fn get_grade_by_github_title(&self, github: &str, title: &str) -> Result<Option<Grade>> {
        debug!(github, title, "looking up grade");
        self.conn
            .query_row(
                "SELECT student_github, project_title, grade
                 FROM grades
                 WHERE student_github = ?1 AND project_title = ?2",
                [github, title],
                grade_from_row,
            )
            .optional()
            .map_err(|e| e.into())
    }

    pub fn assign_grade(&self, github: &str, title: &str, grade: i64) -> Result<Grade> {
        debug!(github, title, grade, "inserting grade");
        let tx = self.conn.unchecked_transaction()?;
        tx.execute(
            "INSERT INTO grades (student_github, project_title, grade) VALUES (?1, ?2, ?3)",
            (github, title, grade),
        )?;
        tx.commit()?;

        Ok(Grade {
            student_github: github.to_string(),
            project_title: title.to_string(),
            grade,
        })
    }

    /// All grades of every student with this first and last name
    pub fn get_all_grades_from_student(
        &self,
        first_name: &str,
        last_name: &str,
    ) -> Result<Vec<ProjectGrade>> {
        debug!(first_name, last_name, "listing grades");
        let mut stmt = self.conn.prepare(
            "SELECT project_title, grade
             FROM students
             JOIN grades ON (github = student_github)
             WHERE first_name = ?1 AND last_name = ?2
             ORDER BY grades.id",
        )?;

        let rows = stmt.query_map([first_name, last_name], |row| {
            Ok(ProjectGrade {
                project_title: row.get(0)?,
                grade: row.get(1)?,
            })
        })?;
        rows.collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| e.into())
    }
}

fn student_from_row(row: &Row) -> rusqlite::Result<Student> {
    Ok(Student {
        first_name: row.get(0)?,
        last_name: row.get(1)?,
        github: row.get(2)?,
    })
}

fn project_from_row(row: &Row) -> rusqlite::Result<Project> {
    Ok(Project {
        title: row.get(0)?,
        description: row.get(1)?,
        max_grade: row.get(2)?,
    })
}

fn grade_from_row(row: &Row) -> rusqlite::Result<Grade> {
    Ok(Grade {
        student_github: row.get(0)?,
        project_title: row.get(1)?,
        grade: row.get(2)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HbaError;
    use tempfile::TempDir;

    fn setup() -> Database {
        Database::open_in_memory().unwrap()
    }

    #[test]
    fn test_student_roundtrip() {
        let db = setup();
        db.make_new_student("Jane", "Hacker", "jhacks").unwrap();

        let student = db.get_student_by_github("jhacks").unwrap().unwrap();
        assert_eq!(student.first_name, "Jane");
        assert_eq!(student.last_name, "Hacker");
        assert_eq!(student.github, "jhacks");
    }

    #[test]
    fn test_missing_student_is_none() {
        let db = setup();
        assert!(db.get_student_by_github("nobody").unwrap().is_none());
    }

    #[test]
    fn test_duplicate_github_rejected() {
        let db = setup();
        db.make_new_student("Jane", "Hacker", "jhacks").unwrap();

        let result = db.make_new_student("Other", "Person", "jhacks");
        assert!(matches!(result, Err(HbaError::Db(_))));
    }

    #[test]
    fn test_project_lookup() {
        let db = setup();
        db.add_project("Markov", "Tweets generated from Markov chains", 50)
            .unwrap();

        let project = db.get_project_by_title("Markov").unwrap().unwrap();
        assert_eq!(project.max_grade, 50);
        assert_eq!(
            project.description.as_deref(),
            Some("Tweets generated from Markov chains")
        );
        assert!(db.get_project_by_title("Blockly").unwrap().is_none());
    }

    #[test]
    fn test_grade_requires_existing_student_and_project() {
        let db = setup();
        db.add_project("Markov", "chains", 50).unwrap();

        let result = db.assign_grade("ghost", "Markov", 10);
        assert!(matches!(result, Err(HbaError::Db(_))));

        db.make_new_student("Jane", "Hacker", "jhacks").unwrap();
        let result = db.assign_grade("jhacks", "Nope", 10);
        assert!(matches!(result, Err(HbaError::Db(_))));

        assert!(db.get_grade_by_github_title("ghost", "Markov").unwrap().is_none());
    }

    #[test]
    fn test_assign_and_get_grade() {
        let db = setup();
        db.make_new_student("Jane", "Hacker", "jhacks").unwrap();
        db.add_project("Markov", "chains", 50).unwrap();
        db.assign_grade("jhacks", "Markov", 45).unwrap();

        let grade = db.get_grade_by_github_title("jhacks", "Markov").unwrap().unwrap();
        assert_eq!(
            grade,
            Grade {
                student_github: "jhacks".into(),
                project_title: "Markov".into(),
                grade: 45,
            }
        );
    }

    #[test]
    fn test_all_grades_only_for_named_student() {
        let db = setup();
        db.make_new_student("Jane", "Hacker", "jhacks").unwrap();
        db.make_new_student("Sarah", "Developer", "sdevelops").unwrap();
        db.add_project("Markov", "chains", 50).unwrap();
        db.add_project("Blockly", "blocks", 100).unwrap();
        db.assign_grade("jhacks", "Markov", 45).unwrap();
        db.assign_grade("jhacks", "Blockly", 90).unwrap();
        db.assign_grade("sdevelops", "Markov", 50).unwrap();

        let grades = db.get_all_grades_from_student("Jane", "Hacker").unwrap();
        assert_eq!(grades.len(), 2);
        assert_eq!(grades[0].project_title, "Markov");
        assert_eq!(grades[0].grade, 45);
        assert_eq!(grades[1].project_title, "Blockly");
        assert_eq!(grades[1].grade, 90);

        assert!(db.get_all_grades_from_student("No", "One").unwrap().is_empty());
    }

    #[test]
    fn test_data_persists_across_opens() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("test.db");

        {
            let db = Database::open(&path).unwrap();
            db.make_new_student("Jane", "Hacker", "jhacks").unwrap();
        }

        let db = Database::open(&path).unwrap();
        assert!(db.get_student_by_github("jhacks").unwrap().is_some());
    }
}
