use std::process::ExitCode;

fn main() -> ExitCode {
    storefront_observability::init();
    storefront_cli::run()
}
