use clap::Command;
use clap_complete::{Shell, generate};
use std::io;

/// Generates shell completion scripts to stdout
///
/// # Examples
///
/// ```bash
/// # Zsh
/// backlight --completions zsh > ~/.zfunc/_backlight
///
/// # Bash
/// backlight --completions bash > ~/.local/share/bash-completion/completions/backlight
///
/// # Fish
/// backlight --completions fish > ~/.config/fish/completions/backlight.fish
/// ```
pub fn generate_completions(shell: Shell, cmd: &mut Command) {
    generate(shell, cmd, "backlight", &mut io::stdout());
}
