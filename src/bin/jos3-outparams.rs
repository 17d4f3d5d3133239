//! Command-line interface for jos3-outparams
//! Prints the reference for every JOS-3 output parameter to stdout.
//!
//! Usage:
//!   jos3-outparams        - Print the output parameter reference
//!
//! There are no options. Any arguments are accepted and ignored, so every
//! invocation prints the reference and exits 0.

use clap::Parser;
use jos3_outparams::show_outparam_docs;

#[derive(Parser)]
#[command(name = "jos3-outparams")]
#[command(disable_help_flag = true, disable_version_flag = true)]
struct Args {
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
    _ignored: Vec<String>,
}

fn main() {
    let _args = Args::parse();
    setup_tracing();

    println!("{}", show_outparam_docs());
}

/// Diagnostics go to stderr so stdout only carries the reference
fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(tracing::Level::WARN)
        .init();
}
