use clap::CommandFactory;
use clap_complete::Shell;

use crate::Cli;

pub fn run(shell: Shell) -> Result<(), Box<dyn std::error::Error>> {
    let mut command = Cli::command();
    clap_complete::generate(shell, &mut command, "flowdiag", &mut std::io::stdout());
    Ok(())
}
