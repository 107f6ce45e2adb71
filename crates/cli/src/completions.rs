// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `tk completions <shell>` - print a completion script
//!
//! ```bash
//! tk completions zsh > ~/.zfunc/_tk
//! ```

use clap::CommandFactory;
use clap_complete::{generate, Shell};
use std::io::Write;

#[derive(clap::Args, Debug)]
pub struct CompletionsArgs {
    /// Target shell
    #[arg(value_enum)]
    pub shell: Shell,
}

/// Write the completion script for `C` to `out`, named after the command
/// itself so renamed builds complete correctly.
pub fn write_completions<C: CommandFactory>(shell: Shell, out: &mut impl Write) {
    let mut cmd = C::command();
    let bin = cmd.get_name().to_string();
    generate(shell, &mut cmd, bin, out);
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    #[command(name = "tk")]
    #[allow(dead_code)]
    struct TestCli {
        #[arg(long)]
        duration: Option<String>,
    }

    #[test]
    fn script_names_the_binary_and_its_flags() {
        let mut out = Vec::new();
        write_completions::<TestCli>(Shell::Bash, &mut out);
        let script = String::from_utf8(out).unwrap();
        assert!(script.contains("_tk()"));
        assert!(script.contains("--duration"));
    }

    #[test]
    fn fish_script_targets_tk() {
        let mut out = Vec::new();
        write_completions::<TestCli>(Shell::Fish, &mut out);
        let script = String::from_utf8(out).unwrap();
        assert!(script.contains("complete -c tk"));
    }
}
