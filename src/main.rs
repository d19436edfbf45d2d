use clap::Parser;
use propseal::cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Encrypt {
            ref plaintext,
            ref passphrase,
            ref cipher_version,
        } => propseal::cli::commands::encrypt::execute(
            plaintext,
            passphrase.as_deref(),
            cipher_version.as_deref(),
        ),
        Commands::Decrypt {
            ref token,
            ref passphrase,
            ref passphrase_file,
        } => propseal::cli::commands::decrypt::execute(
            token,
            passphrase.as_deref(),
            passphrase_file.as_deref(),
        ),
        Commands::Versions => propseal::cli::commands::versions::execute(),
        Commands::Completions { shell } => propseal::cli::commands::completions::execute(shell),
    };

    if let Err(e) = result {
        propseal::cli::output::error(&e.to_string());
        std::process::exit(1);
    }
}
