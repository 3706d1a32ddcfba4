//! Student command - the student form and its table view.

use std::io::{self, BufRead, Write};

use common::AppResult;
use domain::{StudentForm, StudentResponse};
use registry_service_lib::config::RegistryConfig;
use registry_service_lib::service::StudentService;
use registry_service_lib::Registry;

use super::{confirm, emit, io_error};
use crate::cli::{StudentAction, StudentArgs};
use crate::table;

/// Execute the student command
pub async fn execute(args: StudentArgs, config: RegistryConfig) -> AppResult<()> {
    let registry = Registry::open(&config.database).await?;
    let stdin = io::stdin();
    let stdout = io::stdout();
    run(
        args.action,
        registry.students.as_ref(),
        &mut stdin.lock(),
        &mut stdout.lock(),
    )
    .await
}

async fn run(
    action: StudentAction,
    service: &dyn StudentService,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> AppResult<()> {
    match action {
        StudentAction::Add(fields) => {
            let student = service.register_student(fields.into()).await?;
            writeln!(out, "Student {} registered.", student.id).map_err(io_error)?;
            refresh(service, out).await
        }
        StudentAction::List(args) => {
            let students = service.list_students(args.name).await?;
            let json: Vec<StudentResponse> = students.iter().map(StudentResponse::from).collect();
            emit(out, args.format, table::students(&students), &json)
        }
        StudentAction::Show(args) => {
            let student = service.get_student(args.id).await?;
            let json = StudentResponse::from(&student);
            emit(out, args.format, table::students(std::slice::from_ref(&student)), &json)
        }
        StudentAction::Update(patch) => {
            let current = service.get_student(patch.id).await?;
            let mut form = StudentForm::from(&current);
            patch.apply(&mut form);

            let student = service.update_student(current.id, form).await?;
            writeln!(out, "Student {} updated.", student.id).map_err(io_error)?;
            refresh(service, out).await
        }
        StudentAction::Delete(args) => {
            let student = service.get_student(args.id).await?;
            let question = format!("Delete student {} ({})?", student.id, student.name);
            if !args.yes && !confirm(&question, input, out)? {
                return writeln!(out, "Cancelled.").map_err(io_error);
            }

            service.delete_student(student.id).await?;
            writeln!(out, "Student {} deleted.", student.id).map_err(io_error)?;
            refresh(service, out).await
        }
    }
}

/// Reprint the full student table after a change.
async fn refresh(service: &dyn StudentService, out: &mut impl Write) -> AppResult<()> {
    let students = service.list_students(None).await?;
    write!(out, "{}", table::students(&students)).map_err(io_error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{DeleteArgs, StudentFields, StudentPatch};
    use crate::commands::test_support::open_registry;
    use common::AppError;

    fn fields(name: &str, cpf: &str) -> StudentFields {
        StudentFields {
            name: name.to_string(),
            age: 20,
            cpf: cpf.to_string(),
            contact: "48999991234".to_string(),
            course: "Physics".to_string(),
            phase: 1,
        }
    }

    async fn run_captured(
        action: StudentAction,
        service: &dyn StudentService,
        answer: &str,
    ) -> (AppResult<()>, String) {
        let mut out = Vec::new();
        let result = run(action, service, &mut answer.as_bytes(), &mut out).await;
        (result, String::from_utf8(out).unwrap())
    }

    #[tokio::test]
    async fn test_add_prints_refreshed_table() {
        let registry = open_registry().await;
        let service = registry.students.as_ref();

        let (result, printed) =
            run_captured(StudentAction::Add(fields("Ana Souza", "52998224725")), service, "").await;
        assert!(result.is_ok());

        let lines: Vec<&str> = printed.lines().collect();
        assert_eq!(lines[0], "Student 1 registered.");
        assert!(lines[1].starts_with("ID  Name"));
        assert!(lines[3].contains("Ana Souza"));
        assert!(lines[3].contains("529.982.247-25"));
    }

    #[tokio::test]
    async fn test_update_merges_patch_and_refreshes() {
        let registry = open_registry().await;
        let service = registry.students.as_ref();
        run_captured(StudentAction::Add(fields("Ana Souza", "52998224725")), service, "").await;

        let patch = StudentPatch {
            id: 1,
            phase: Some(4),
            ..Default::default()
        };
        let (result, printed) = run_captured(StudentAction::Update(patch), service, "").await;
        assert!(result.is_ok());
        assert!(printed.starts_with("Student 1 updated.\n"));

        let student = service.get_student(1).await.unwrap();
        assert_eq!(student.phase, 4);
        assert_eq!(student.course, "Physics");
    }

    #[tokio::test]
    async fn test_delete_confirms_and_refreshes_to_empty_table() {
        let registry = open_registry().await;
        let service = registry.students.as_ref();
        run_captured(StudentAction::Add(fields("Ana Souza", "52998224725")), service, "").await;

        let declined = DeleteArgs { id: 1, yes: false };
        let (result, printed) = run_captured(StudentAction::Delete(declined), service, "n\n").await;
        assert!(result.is_ok());
        assert!(printed.ends_with("Cancelled.\n"));
        assert_eq!(service.count_students().await.unwrap(), 1);

        let accepted = DeleteArgs { id: 1, yes: false };
        let (result, printed) = run_captured(StudentAction::Delete(accepted), service, "y\n").await;
        assert!(result.is_ok());
        assert!(printed.ends_with("Student 1 deleted.\nNo records found.\n"));
    }

    #[tokio::test]
    async fn test_rejected_form_prints_nothing() {
        let registry = open_registry().await;
        let service = registry.students.as_ref();

        let (result, printed) =
            run_captured(StudentAction::Add(fields("Ana Souza", "52998224724")), service, "").await;

        assert!(matches!(result, Err(AppError::Validation(ref m)) if m == "CPF is invalid"));
        assert!(printed.is_empty());
    }
}
