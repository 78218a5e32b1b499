//! Console rendering of query results.

use crate::models::{Grade, Project, ProjectGrade, Student};

pub const PROMPT: &str = "HBA Database> ";
pub const INVALID_ENTRY: &str = "Invalid Entry. Try again.";
pub const INPUT_ERROR: &str = "ERROR!";

pub fn student(student: &Student) -> String {
    format!(
        "Student: {} {}\nGitHub account: {}",
        student.first_name, student.last_name, student.github
    )
}

pub fn student_not_found(github: &str) -> String {
    format!("No student found with GitHub account {github}")
}

pub fn student_added(student: &Student) -> String {
    format!(
        "Successfully added student: {} {}",
        student.first_name, student.last_name
    )
}

pub fn project(project: &Project) -> String {
    format!(
        "Title: {}\nDescription: {}\nMax grade: {}",
        project.title,
        project.description.as_deref().unwrap_or("(none)"),
        project.max_grade
    )
}

pub fn project_not_found(title: &str) -> String {
    format!("No project found with title {title}")
}

pub fn project_added(project: &Project) -> String {
    format!(
        "Successfully added project {} with grade {}",
        project.title, project.max_grade
    )
}

pub fn grade(grade: &Grade) -> String {
    format!(
        "Student: {}\nProject: {}\nGrade: {}",
        grade.student_github, grade.project_title, grade.grade
    )
}

pub fn grade_not_found(github: &str, title: &str) -> String {
    format!("No grade found for {github} on {title}")
}

pub fn grade_assigned(grade: &Grade) -> String {
    format!(
        "Successfully added grade {} to {}'s {}",
        grade.grade, grade.student_github, grade.project_title
    )
}

/// Header line followed by one `<title> <grade>` line per project
pub fn report_card(first_name: &str, last_name: &str, grades: &[ProjectGrade]) -> String {
    let mut lines = vec![format!(
        "{first_name} {last_name} has the following projects and grades:"
    )];
    lines.extend(
        grades
            .iter()
            .map(|g| format!("{} {}", g.project_title, g.grade)),
    );
    lines.join("\n")
}

pub fn help() -> String {
    [
        "Commands:",
        "  student <github>                          Show a student",
        "  new_student <first> <last> <github>       Add a student",
        "  title <title>                             Show a project",
        "  add <title> <description...> <max_grade>  Add a project",
        "  grade <github> <title>                    Show a student's grade on a project",
        "  assign <github> <title> <grade>           Record a grade",
        "  all <first> <last>                        List a student's grades",
        "  help                                      Show this message",
        "  quit                                      Exit",
    ]
    .join("\n")
}
