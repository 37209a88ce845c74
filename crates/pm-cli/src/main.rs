use anyhow::Result;
use pm_cli::init_env_logger;
use pm_cli::main as cli_main;

pub fn main() -> Result<()> {
    init_env_logger();
    cli_main(std::env::args_os(), &mut std::io::stdout().lock())
}
