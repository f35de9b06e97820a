use std::process::ExitCode;

fn main() -> ExitCode {
    match atuin_stats::cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
