/**
 * Schema Generator CLI - schegen
 *
 * Usage: schegen <INPUT> <OUTPUT>
 */
use schegen_cli::main_entry::{command, main_fn, CliArgs};
use std::process;

fn main() {
    let matches = command().get_matches();
    let args = CliArgs::from_matches(&matches);

    process::exit(main_fn(&args).code());
}
