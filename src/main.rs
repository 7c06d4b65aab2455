//! tareas - tasks and subtasks ordered shortest-job-first

use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(e) = tareas_cli::cli::run() {
        eprintln!("Error: {:#}", e);
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
