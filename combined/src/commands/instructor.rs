//! Instructor command - the instructor form and its table view.

use std::io::{self, BufRead, Write};

use common::AppResult;
use domain::{InstructorForm, InstructorResponse};
use registry_service_lib::config::RegistryConfig;
use registry_service_lib::service::InstructorService;
use registry_service_lib::Registry;

use super::{confirm, emit, io_error};
use crate::cli::{InstructorAction, InstructorArgs};
use crate::table;

/// Execute the instructor command
pub async fn execute(args: InstructorArgs, config: RegistryConfig) -> AppResult<()> {
    let registry = Registry::open(&config.database).await?;
    let stdin = io::stdin();
    let stdout = io::stdout();
    run(
        args.action,
        registry.instructors.as_ref(),
        &mut stdin.lock(),
        &mut stdout.lock(),
    )
    .await
}

async fn run(
    action: InstructorAction,
    service: &dyn InstructorService,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> AppResult<()> {
    match action {
        InstructorAction::Add(fields) => {
            let instructor = service.register_instructor(fields.into()).await?;
            writeln!(out, "Instructor {} registered.", instructor.id).map_err(io_error)?;
            refresh(service, out).await
        }
        InstructorAction::List(args) => {
            let instructors = service.list_instructors(args.name).await?;
            let json: Vec<InstructorResponse> =
                instructors.iter().map(InstructorResponse::from).collect();
            emit(out, args.format, table::instructors(&instructors), &json)
        }
        InstructorAction::Show(args) => {
            let instructor = service.get_instructor(args.id).await?;
            let json = InstructorResponse::from(&instructor);
            emit(
                out,
                args.format,
                table::instructors(std::slice::from_ref(&instructor)),
                &json,
            )
        }
        InstructorAction::Update(patch) => {
            let current = service.get_instructor(patch.id).await?;
            let mut form = InstructorForm::from(&current);
            patch.apply(&mut form);

            let instructor = service.update_instructor(current.id, form).await?;
            writeln!(out, "Instructor {} updated.", instructor.id).map_err(io_error)?;
            refresh(service, out).await
        }
        InstructorAction::Delete(args) => {
            let instructor = service.get_instructor(args.id).await?;
            let question = format!("Delete instructor {} ({})?", instructor.id, instructor.name);
            if !args.yes && !confirm(&question, input, out)? {
                return writeln!(out, "Cancelled.").map_err(io_error);
            }

            service.delete_instructor(instructor.id).await?;
            writeln!(out, "Instructor {} deleted.", instructor.id).map_err(io_error)?;
            refresh(service, out).await
        }
    }
}

/// Reprint the full instructor table after a change.
async fn refresh(service: &dyn InstructorService, out: &mut impl Write) -> AppResult<()> {
    let instructors = service.list_instructors(None).await?;
    write!(out, "{}", table::instructors(&instructors)).map_err(io_error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{DeleteArgs, InstructorFields, ListArgs, OutputFormat};
    use crate::commands::test_support::open_registry;

    fn fields() -> InstructorFields {
        InstructorFields {
            name: "Carlos Pereira".to_string(),
            age: 45,
            cpf: "111.444.777-35".to_string(),
            contact: "(48) 3333-1234".to_string(),
            campus: "Trindade".to_string(),
            title: "Doctor".to_string(),
            salary: 8500.0,
        }
    }

    async fn run_captured(action: InstructorAction, service: &dyn InstructorService) -> String {
        let mut out = Vec::new();
        run(action, service, &mut "".as_bytes(), &mut out)
            .await
            .unwrap();
        String::from_utf8(out).unwrap()
    }

    #[tokio::test]
    async fn test_add_then_delete_refreshes_table() {
        let registry = open_registry().await;
        let service = registry.instructors.as_ref();

        let printed = run_captured(InstructorAction::Add(fields()), service).await;
        let lines: Vec<&str> = printed.lines().collect();
        assert_eq!(lines[0], "Instructor 1 registered.");
        assert!(lines[3].ends_with("8500.00"));

        let printed = run_captured(
            InstructorAction::Delete(DeleteArgs { id: 1, yes: true }),
            service,
        )
        .await;
        assert_eq!(printed, "Instructor 1 deleted.\nNo records found.\n");
    }

    #[tokio::test]
    async fn test_list_as_json() {
        let registry = open_registry().await;
        let service = registry.instructors.as_ref();
        run_captured(InstructorAction::Add(fields()), service).await;

        let printed = run_captured(
            InstructorAction::List(ListArgs {
                name: Some("carlos".to_string()),
                format: OutputFormat::Json,
            }),
            service,
        )
        .await;

        let rows: serde_json::Value = serde_json::from_str(&printed).unwrap();
        assert_eq!(rows[0]["cpf"], "111.444.777-35");
        assert_eq!(rows[0]["salary"], 8500.0);
    }
}
