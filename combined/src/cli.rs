//! CLI argument definitions.
//!
//! Uses clap derive macros for type-safe argument parsing.

use clap::{Args, Parser, Subcommand, ValueEnum};

use domain::{InstructorForm, StudentForm};

/// School registry - student and instructor records
#[derive(Parser, Debug)]
#[command(name = "registry")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage student records
    Student(StudentArgs),

    /// Manage instructor records
    Instructor(InstructorArgs),

    /// Run database migrations
    Migrate(MigrateArgs),

    /// Start the HTTP API
    Serve(ServeArgs),
}

/// How listings are printed
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

/// Arguments for listing records
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Only show records whose name contains this text
    #[arg(short, long)]
    pub name: Option<String>,

    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

/// Arguments for showing one record
#[derive(Args, Debug)]
pub struct ShowArgs {
    pub id: i32,

    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

/// Arguments for deleting one record
#[derive(Args, Debug)]
pub struct DeleteArgs {
    pub id: i32,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

// =============================================================================
// Students
// =============================================================================

#[derive(Args, Debug)]
pub struct StudentArgs {
    #[command(subcommand)]
    pub action: StudentAction,
}

/// Student actions
#[derive(Subcommand, Debug)]
pub enum StudentAction {
    /// Register a new student
    Add(StudentFields),
    /// List students
    List(ListArgs),
    /// Show one student
    Show(ShowArgs),
    /// Edit a student; omitted fields keep their current value
    Update(StudentPatch),
    /// Delete a student
    Delete(DeleteArgs),
}

/// The student form
#[derive(Args, Debug)]
pub struct StudentFields {
    #[arg(long)]
    pub name: String,
    #[arg(long, allow_negative_numbers = true)]
    pub age: i32,
    #[arg(long)]
    pub cpf: String,
    #[arg(long)]
    pub contact: String,
    #[arg(long)]
    pub course: String,
    #[arg(long, allow_negative_numbers = true)]
    pub phase: i32,
}

impl From<StudentFields> for StudentForm {
    fn from(fields: StudentFields) -> Self {
        Self {
            name: fields.name,
            age: fields.age,
            cpf: fields.cpf,
            contact: fields.contact,
            course: fields.course,
            phase: fields.phase,
        }
    }
}

/// Changes applied over a prefilled student form
#[derive(Args, Debug, Default)]
pub struct StudentPatch {
    pub id: i32,
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long, allow_negative_numbers = true)]
    pub age: Option<i32>,
    #[arg(long)]
    pub cpf: Option<String>,
    #[arg(long)]
    pub contact: Option<String>,
    #[arg(long)]
    pub course: Option<String>,
    #[arg(long, allow_negative_numbers = true)]
    pub phase: Option<i32>,
}

impl StudentPatch {
    pub fn apply(self, form: &mut StudentForm) {
        if let Some(name) = self.name {
            form.name = name;
        }
        if let Some(age) = self.age {
            form.age = age;
        }
        if let Some(cpf) = self.cpf {
            form.cpf = cpf;
        }
        if let Some(contact) = self.contact {
            form.contact = contact;
        }
        if let Some(course) = self.course {
            form.course = course;
        }
        if let Some(phase) = self.phase {
            form.phase = phase;
        }
    }
}

// =============================================================================
// Instructors
// =============================================================================

#[derive(Args, Debug)]
pub struct InstructorArgs {
    #[command(subcommand)]
    pub action: InstructorAction,
}

/// Instructor actions
#[derive(Subcommand, Debug)]
pub enum InstructorAction {
    /// Register a new instructor
    Add(InstructorFields),
    /// List instructors
    List(ListArgs),
    /// Show one instructor
    Show(ShowArgs),
    /// Edit an instructor; omitted fields keep their current value
    Update(InstructorPatch),
    /// Delete an instructor
    Delete(DeleteArgs),
}

/// The instructor form
#[derive(Args, Debug)]
pub struct InstructorFields {
    #[arg(long)]
    pub name: String,
    #[arg(long, allow_negative_numbers = true)]
    pub age: i32,
    #[arg(long)]
    pub cpf: String,
    #[arg(long)]
    pub contact: String,
    #[arg(long)]
    pub campus: String,
    /// Academic title, e.g. "Master"
    #[arg(long)]
    pub title: String,
    #[arg(long, allow_negative_numbers = true)]
    pub salary: f64,
}

impl From<InstructorFields> for InstructorForm {
    fn from(fields: InstructorFields) -> Self {
        Self {
            name: fields.name,
            age: fields.age,
            cpf: fields.cpf,
            contact: fields.contact,
            campus: fields.campus,
            title: fields.title,
            salary: fields.salary,
        }
    }
}

/// Changes applied over a prefilled instructor form
#[derive(Args, Debug, Default)]
pub struct InstructorPatch {
    pub id: i32,
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long, allow_negative_numbers = true)]
    pub age: Option<i32>,
    #[arg(long)]
    pub cpf: Option<String>,
    #[arg(long)]
    pub contact: Option<String>,
    #[arg(long)]
    pub campus: Option<String>,
    #[arg(long)]
    pub title: Option<String>,
    #[arg(long, allow_negative_numbers = true)]
    pub salary: Option<f64>,
}

impl InstructorPatch {
    pub fn apply(self, form: &mut InstructorForm) {
        if let Some(name) = self.name {
            form.name = name;
        }
        if let Some(age) = self.age {
            form.age = age;
        }
        if let Some(cpf) = self.cpf {
            form.cpf = cpf;
        }
        if let Some(contact) = self.contact {
            form.contact = contact;
        }
        if let Some(campus) = self.campus {
            form.campus = campus;
        }
        if let Some(title) = self.title {
            form.title = title;
        }
        if let Some(salary) = self.salary {
            form.salary = salary;
        }
    }
}

// =============================================================================
// Operations
// =============================================================================

/// Arguments for the serve command
#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Host to bind to
    #[arg(short = 'H', long, env = "REGISTRY_HOST")]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(short, long, env = "REGISTRY_PORT")]
    pub port: Option<u16>,
}

/// Arguments for the migrate command
#[derive(Args, Debug)]
pub struct MigrateArgs {
    #[command(subcommand)]
    pub action: MigrateAction,
}

/// Migration actions
#[derive(Subcommand, Debug, Clone, Copy)]
pub enum MigrateAction {
    /// Run pending migrations
    Up,
    /// Rollback last migration
    Down,
    /// Show migration status
    Status,
    /// Reset and re-run all migrations
    Fresh,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_student_update_keeps_omitted_fields() {
        let mut form = StudentForm {
            name: "Ana Souza".to_string(),
            age: 21,
            cpf: "52998224725".to_string(),
            contact: "48999991234".to_string(),
            course: "Physics".to_string(),
            phase: 2,
        };

        StudentPatch {
            id: 1,
            phase: Some(3),
            course: Some("Mathematics".to_string()),
            ..Default::default()
        }
        .apply(&mut form);

        assert_eq!(form.name, "Ana Souza");
        assert_eq!(form.cpf, "52998224725");
        assert_eq!(form.course, "Mathematics");
        assert_eq!(form.phase, 3);
    }

    #[test]
    fn test_parse_instructor_update() {
        let cli = Cli::parse_from([
            "registry",
            "instructor",
            "update",
            "7",
            "--salary",
            "9100.5",
            "--title",
            "Doctor",
        ]);

        let Commands::Instructor(InstructorArgs {
            action: InstructorAction::Update(patch),
        }) = cli.command
        else {
            panic!("expected instructor update");
        };

        assert_eq!(patch.id, 7);
        assert_eq!(patch.salary, Some(9100.5));
        assert_eq!(patch.title.as_deref(), Some("Doctor"));
        assert!(patch.name.is_none());
    }

    #[test]
    fn test_parse_list_format() {
        let cli = Cli::parse_from(["registry", "student", "list", "--format", "json"]);
        let Commands::Student(StudentArgs {
            action: StudentAction::List(args),
        }) = cli.command
        else {
            panic!("expected student list");
        };
        assert_eq!(args.format, OutputFormat::Json);
        assert!(args.name.is_none());
    }
}
