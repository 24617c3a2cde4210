use std::process::ExitCode;

fn main() -> ExitCode {
    backlight::app::run()
}
