use std::process::ExitCode;

fn main() -> ExitCode {
    match fx_trend::app::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if !err.message().is_empty() {
                eprintln!("{err}");
            }
            ExitCode::from(err.exit_code())
        }
    }
}
