/// A student, keyed by GitHub account name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    pub first_name: String,
    pub last_name: String,
    pub github: String,
}

/// A class project, keyed by title
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub title: String,
    pub description: Option<String>,
    pub max_grade: i64,
}

/// The grade one student received on one project
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grade {
    pub student_github: String,
    pub project_title: String,
    pub grade: i64,
}

/// One row of a student's report card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectGrade {
    pub project_title: String,
    pub grade: i64,
}
