use anyhow::Result;
use turtle_ps::cli;
use turtle_ps::config::Config;

fn main() -> Result<()> {
    let config = Config::from_args_and_env()?;
    cli::run(config)
}
