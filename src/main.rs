use std::process::ExitCode;

mod config;
mod encoding;
mod error;
mod library;
mod pipeline;
mod rename;
mod runtime;
#[cfg(test)]
mod test_fixtures;
mod tools;

fn main() -> ExitCode {
    match runtime::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("cuesplit: {e}");
            ExitCode::FAILURE
        }
    }
}
