use clap::CommandFactory;
use clap_complete::generate;
use std::io::{self, Write};

use super::commands::{Cli, Shell};

pub fn generate_completions(shell: Shell) {
    write_completions(shell, &mut io::stdout());
}

fn write_completions(shell: Shell, out: &mut dyn Write) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    let shell: clap_complete::Shell = shell.into();
    generate(shell, &mut cmd, name, out);
}
