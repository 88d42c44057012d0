//! Shell completion generation.

use clap::CommandFactory;
use clap_complete::Shell;

use crate::cli::Cli;

/// Write completions for `shell` to stdout.
pub fn generate(shell: Shell) {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    clap_complete::generate(shell, &mut command, name, &mut std::io::stdout());
}
