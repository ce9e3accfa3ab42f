use std::process::ExitCode;

mod runtime;

fn main() -> ExitCode {
    env_logger::init();

    match runtime::run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("songbook: {e}");
            ExitCode::FAILURE
        }
    }
}
