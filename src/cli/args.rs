use clap::{ArgAction, Parser};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::{brightness::Operation, cli::parse_operation};

#[derive(Parser, Debug)]
#[command(name = "backlight")]
#[command(version, about = "Control screen brightness", long_about = None)]
#[command(after_help = "Examples:\n  \
    backlight          print current brightness\n  \
    backlight =50      set brightness to 50%\n  \
    backlight +10      increase brightness by 10 percentage points\n  \
    backlight -10      decrease brightness by 10 percentage points")]
pub struct Args {
    /// =PERCENT sets, +PERCENT increases, -PERCENT decreases. Omit to print the current brightness
    #[arg(
        value_name = "[=|+|-]PERCENT",
        allow_hyphen_values = true,
        value_parser = parse_operation
    )]
    pub operation: Option<Operation>,

    /// Backlight device name (entry under the backlight class directory)
    #[arg(long, value_name = "NAME")]
    pub device: Option<String>,

    /// Specify a custom config path to use with this instance
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Print a completion script for the given shell and exit
    #[arg(long, value_enum, value_name = "SHELL")]
    pub completions: Option<Shell>,
}
