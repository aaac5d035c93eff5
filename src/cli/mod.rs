mod handlers;
pub mod parse;

use clap::Parser;
pub use parse::Cli;

use crate::core::error::Result;

pub fn run() -> Result<()> {
    let cli = parse::Cli::parse();
    match cli.cmd {
        parse::Command::Defaults(a) => handlers::defaults(&a),
        parse::Command::Limits(a) => handlers::limits(a),
        parse::Command::Titles(a) => handlers::titles(&a),
    }
}
