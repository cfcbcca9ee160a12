use anyhow::Result;
use clap::CommandFactory;
use clap_complete::{generate, shells};
use std::io;

use crate::cli::commands::Cli;

pub fn handle_completion(shell: &str) -> Result<()> {
    let mut cmd = Cli::command();

    match shell.to_lowercase().as_str() {
        "bash" => {
            generate(shells::Bash, &mut cmd, "cdt", &mut io::stdout());
            println!();
            println!("# To enable completion, add the following to ~/.bashrc:");
            println!("#   eval \"$(cdt completion bash)\"");
        }
        "zsh" => {
            generate(shells::Zsh, &mut cmd, "cdt", &mut io::stdout());
            println!();
            println!("# To enable completion, add the following to ~/.zshrc:");
            println!("#   eval \"$(cdt completion zsh)\"");
        }
        "fish" => {
            generate(shells::Fish, &mut cmd, "cdt", &mut io::stdout());
            println!();
            println!("# To enable completion, save to ~/.config/fish/completions/cdt.fish:");
            println!("#   cdt completion fish > ~/.config/fish/completions/cdt.fish");
        }
        _ => {
            return Err(anyhow::anyhow!(
                "Unsupported shell: {}. Supported shells: bash, zsh, fish",
                shell
            ));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_shell() {
        let err = handle_completion("powershell").unwrap_err();
        assert!(err.to_string().contains("Unsupported shell"));
    }
}
