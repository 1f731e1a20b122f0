use clap::{Arg, ArgAction, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of the converter names from confmark-babel's registry.
// We need to duplicate this here since build scripts can't access src/ modules
const AVAILABLE_CONVERTERS: &[&str] = &["storage", "markdown"];

fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let mut cmd = Command::new("confmark")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for converting between Markdown and wiki storage format")
        .arg_required_else_help(true)
        .arg(
            Arg::new("input")
                .help("Input file path, or '-' for stdin")
                .required_unless_present("list-converters")
                .index(1)
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("to")
                .long("to")
                .help("Target converter")
                .value_parser(clap::builder::PossibleValuesParser::new(
                    AVAILABLE_CONVERTERS,
                ))
                .value_hint(ValueHint::Other),
        )
        .arg(
            Arg::new("list-converters")
                .long("list-converters")
                .help("List available converters")
                .action(ArgAction::SetTrue),
        );

    // Generate completions for bash
    generate_to(Bash, &mut cmd, "confmark", &outdir)?;

    // Generate completions for zsh
    generate_to(Zsh, &mut cmd, "confmark", &outdir)?;

    // Generate completions for fish
    generate_to(Fish, &mut cmd, "confmark", &outdir)?;

    println!("cargo:warning=Shell completions generated in {outdir:?}");

    Ok(())
}
