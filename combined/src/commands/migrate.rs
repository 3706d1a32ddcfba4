//! Migrate command - Database migration management.

use registry_service_lib::config::RegistryConfig;
use registry_service_lib::{run_migrations, MigrateAction as Action};

use common::AppResult;

use crate::cli::{MigrateAction, MigrateArgs};

/// Execute the migrate command
pub async fn execute(args: MigrateArgs, config: RegistryConfig) -> AppResult<()> {
    let action = match args.action {
        MigrateAction::Up => Action::Up,
        MigrateAction::Down => Action::Down,
        MigrateAction::Status => Action::Status,
        MigrateAction::Fresh => {
            tracing::warn!("Resetting database and running all migrations...");
            Action::Fresh
        }
    };

    let status = run_migrations(&config.database, action).await?;
    for (name, applied) in status {
        let status_str = if applied { "applied" } else { "pending" };
        println!("{}: {}", name, status_str);
    }

    Ok(())
}
