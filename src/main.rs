use std::process::ExitCode;

fn main() -> ExitCode {
    factrip_lib::run()
}
