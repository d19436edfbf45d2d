//! `propseal completions` — generate shell completion scripts.
//!
//! Usage:
//!   propseal completions bash > ~/.bash_completion.d/propseal
//!   propseal completions zsh

use std::io;

use clap::CommandFactory;
use clap_complete::{generate, Shell};

use crate::cli::Cli;
use crate::errors::Result;

/// Execute the `completions` command.
pub fn execute(shell: Shell) -> Result<()> {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "propseal", &mut io::stdout());
    Ok(())
}
