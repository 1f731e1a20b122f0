// Command-line interface for confmark
//
// This binary fronts the confmark-babel library, which converts Markdown
// into wiki storage format and reduces stored pages back into Markdown.
//
// Converting:
//
// The converter is auto-detected from the input file extension, while being
// overwrittable by an explicit --to flag. Reading from stdin ('-') always
// needs --to since there is no extension to inspect.
// Usage:
//  confmark <input> [--to <converter>] [--output <file>]  - Convert (default)
//  confmark convert <input> [--to <converter>]            - Same as above (explicit)
//  confmark render <input>                                - Markdown -> storage format
//  confmark reduce <input>                                - Storage format -> Markdown
//  confmark --list-converters                             - List available converters
//
// Extra Parameters:
//
// Converter-specific parameters can be passed using --extra-<parameter-name> <value>.
// The CLI layer strips the "extra-" prefix and passes the parameters to the converter.
// Example:
//  confmark render notes.md --extra-code-language-class true

use clap::{Arg, ArgAction, Command, ValueHint};
use confmark_babel::ConverterRegistry;
use confmark_config::{ConfmarkConfig, Loader};
use std::collections::HashMap;
use std::fs;
use std::io::Read;

/// Parse extra-* arguments from command line args
/// Returns (cleaned_args_without_extras, extra_params_map)
///
/// Supports both:
/// - `--extra-<key> <value>` (explicit value)
/// - `--extra-<key>` (boolean flag, defaults to "true")
/// - `--extras-<key>` (alias for `--extra-<key>`)
fn parse_extra_args(args: &[String]) -> (Vec<String>, HashMap<String, String>) {
    let mut cleaned_args = Vec::new();
    let mut extra_params = HashMap::new();
    let mut i = 0;

    while i < args.len() {
        let arg = &args[i];

        let key_opt = if let Some(key) = arg.strip_prefix("--extra-") {
            Some(key)
        } else {
            arg.strip_prefix("--extras-")
        };

        if let Some(key) = key_opt {
            // Found an extra-* argument
            // Check if the next arg is a value or another flag/end
            let has_value = if i + 1 < args.len() {
                let next = &args[i + 1];
                !next.starts_with('-') && !next.starts_with("--")
            } else {
                false
            };

            if has_value {
                // Explicit value provided
                extra_params.insert(key.to_string(), args[i + 1].clone());
                i += 2; // Skip both the key and value
            } else {
                // No value, treat as boolean flag (default to "true")
                extra_params.insert(key.to_string(), "true".to_string());
                i += 1;
            }
            continue;
        }

        cleaned_args.push(arg.clone());
        i += 1;
    }

    (cleaned_args, extra_params)
}

fn build_cli() -> Command {
    Command::new("confmark")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for converting between Markdown and wiki storage format")
        .long_about(
            "confmark is a command-line tool for moving document text between\n\
            Markdown and the XHTML-based storage format used by wiki pages.\n\n\
            Commands:\n  \
            - convert: Pick the converter from the input extension (or --to)\n  \
            - render:  Markdown -> storage format\n  \
            - reduce:  Storage format -> Markdown (lossy)\n\n\
            Extra Parameters:\n  \
            Use --extra-<name> [value] to pass converter-specific options.\n  \
            Boolean flags can omit the value (defaults to 'true').\n\n\
            Examples:\n  \
            confmark notes.md                        # Render to storage format (stdout)\n  \
            confmark page.html -o page.md            # Reduce a stored page to Markdown\n  \
            confmark render notes.md --extra-code-language-class\n  \
            confmark reduce page.html --extra-bullet-marker '*'\n  \
            cat notes.md | confmark - --to storage   # Read the document from stdin",
        )
        .arg_required_else_help(true)
        .subcommand_required(false)
        .arg(
            Arg::new("list-converters")
                .long("list-converters")
                .help("List available converters")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a confmark.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Wrap the output in a JSON envelope")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("convert")
                .about("Convert a document (default command)")
                .long_about(
                    "Convert a document using the converter picked from the input\n\
                    file extension, or from an explicit --to flag.\n\n\
                    Converters:\n  \
                    - storage:  Markdown (.md, .markdown) -> storage format\n  \
                    - markdown: Storage format (.html, .xhtml, .storage) -> Markdown\n\n\
                    Output goes to stdout by default, or use -o to specify a file.\n\n\
                    Examples:\n  \
                    confmark convert notes.md                    # Storage format to stdout\n  \
                    confmark convert page.html -o page.md        # Reduce to a file\n  \
                    confmark convert - --to markdown < page.html # Explicit converter, stdin\n  \
                    confmark notes.md                            # 'convert' is optional",
                )
                .arg(
                    Arg::new("input")
                        .help("Input file path, or '-' for stdin")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("to")
                        .long("to")
                        .help("Converter to use (auto-detected from the file extension if not specified)")
                        .long_help(
                            "Converter to use.\n\n\
                            If not specified, the converter is auto-detected from the input\n\
                            file extension. Reading from stdin requires this flag.",
                        )
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Output file path (defaults to stdout)")
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .subcommand(
            Command::new("render")
                .about("Render Markdown into storage format")
                .long_about(
                    "Render a Markdown document into the storage format.\n\n\
                    This is shorthand for 'convert --to storage'.\n\n\
                    Examples:\n  \
                    confmark render notes.md                 # Storage format to stdout\n  \
                    confmark render notes.md -o page.storage # Write to a file",
                )
                .arg(
                    Arg::new("input")
                        .help("Input file path, or '-' for stdin")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Output file path (defaults to stdout)")
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .subcommand(
            Command::new("reduce")
                .about("Reduce storage format into plain Markdown")
                .long_about(
                    "Reduce a stored page into plain Markdown.\n\n\
                    This is shorthand for 'convert --to markdown'. The reduction is\n\
                    lossy: tags without a Markdown counterpart are stripped, keeping\n\
                    only their text content.\n\n\
                    Examples:\n  \
                    confmark reduce page.html                # Markdown to stdout\n  \
                    confmark reduce page.html -o page.md     # Write to a file",
                )
                .arg(
                    Arg::new("input")
                        .help("Input file path, or '-' for stdin")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Output file path (defaults to stdout)")
                        .value_hint(ValueHint::FilePath),
                ),
        )
}

fn main() {
    // Try to parse args. If no subcommand is provided, inject "convert"
    let args: Vec<String> = std::env::args().collect();

    // Parse extra-* arguments before clap processing
    let (cleaned_args, mut extra_params) = parse_extra_args(&args);

    // First, try normal parsing with cleaned args
    let cli = build_cli();
    let matches = match cli.clone().try_get_matches_from(&cleaned_args) {
        Ok(m) => m,
        Err(e) => {
            // Check if this is a "missing subcommand" error by seeing if the
            // first arg looks like a file ('-' alone means stdin, not a flag)
            if cleaned_args.len() > 1
                && (cleaned_args[1] == "-" || !cleaned_args[1].starts_with('-'))
                && cleaned_args[1] != "convert"
                && cleaned_args[1] != "render"
                && cleaned_args[1] != "reduce"
                && cleaned_args[1] != "help"
            {
                // Inject "convert" as the subcommand
                let mut new_args = vec![cleaned_args[0].clone(), "convert".to_string()];
                new_args.extend_from_slice(&cleaned_args[1..]);

                // Try parsing again with "convert" injected
                match cli.try_get_matches_from(&new_args) {
                    Ok(m) => m,
                    Err(e2) => e2.exit(),
                }
            } else {
                // Not a case where we should inject convert, show original error
                e.exit();
            }
        }
    };

    if matches.get_flag("list-converters") {
        handle_list_converters_command();
        return;
    }

    let mut config = load_cli_config(matches.get_one::<String>("config").map(|s| s.as_str()));
    apply_config_overrides(&mut config, &mut extra_params);

    let json = matches.get_flag("json");

    match matches.subcommand() {
        Some(("convert", sub_matches)) => {
            let input = sub_matches
                .get_one::<String>("input")
                .expect("input is required");
            let to_arg = sub_matches.get_one::<String>("to");

            // Auto-detect --to if not provided
            let to = if let Some(t) = to_arg {
                t.to_string()
            } else if input == "-" {
                eprintln!("Error: Reading from stdin requires --to");
                std::process::exit(1);
            } else {
                let registry = ConverterRegistry::default();
                match registry.detect_converter_from_filename(input) {
                    Some(detected) => detected,
                    None => {
                        eprintln!("Error: Could not detect converter from filename '{input}'");
                        eprintln!("Please specify --to explicitly");
                        std::process::exit(1);
                    }
                }
            };

            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());
            handle_convert_command(input, &to, output, json, &extra_params, &config);
        }
        Some(("render", sub_matches)) => {
            let input = sub_matches
                .get_one::<String>("input")
                .expect("input is required");
            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());
            handle_convert_command(input, "storage", output, json, &extra_params, &config);
        }
        Some(("reduce", sub_matches)) => {
            let input = sub_matches
                .get_one::<String>("input")
                .expect("input is required");
            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());
            handle_convert_command(input, "markdown", output, json, &extra_params, &config);
        }
        _ => {
            eprintln!("Unknown subcommand. Use --help for usage information.");
            std::process::exit(1);
        }
    }
}

/// Handle the convert command (also backs render and reduce)
fn handle_convert_command(
    input: &str,
    to: &str,
    output: Option<&str>,
    json: bool,
    extra_params: &HashMap<String, String>,
    config: &ConfmarkConfig,
) {
    let registry = ConverterRegistry::default();

    // Validate the converter exists
    if let Err(e) = registry.get(to) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    // Read input file (or stdin)
    let source = if input == "-" {
        let mut buffer = String::new();
        if let Err(e) = std::io::stdin().read_to_string(&mut buffer) {
            eprintln!("Error reading stdin: {e}");
            std::process::exit(1);
        }
        buffer
    } else {
        fs::read_to_string(input).unwrap_or_else(|e| {
            eprintln!("Error reading file '{input}': {e}");
            std::process::exit(1);
        })
    };

    // Converter-specific parameters come from config, --extra-* wins on clash
    let mut converter_options = converter_options_from_config(to, config);
    for (key, value) in extra_params {
        converter_options.insert(key.clone(), value.clone());
    }

    let result = registry
        .convert_with_options(&source, to, &converter_options)
        .unwrap_or_else(|e| {
            eprintln!("Conversion error: {e}");
            std::process::exit(1);
        });

    let rendered = if json {
        let envelope = serde_json::json!({
            "converter": to,
            "output": result,
        });
        let mut text = envelope.to_string();
        text.push('\n');
        text
    } else {
        result
    };

    // Output
    match output {
        Some(path) => {
            fs::write(path, rendered).unwrap_or_else(|e| {
                eprintln!("Error writing file '{path}': {e}");
                std::process::exit(1);
            });
        }
        None => {
            print!("{rendered}");
        }
    }
}

/// Handle the list-converters command
fn handle_list_converters_command() {
    let registry = ConverterRegistry::default();

    println!("Available converters:\n");
    for name in registry.list_converters() {
        if let Ok(converter) = registry.get(&name) {
            println!(
                "  {:<10} {} (extensions: {})",
                name,
                converter.description(),
                converter.file_extensions().join(", ")
            );
        }
    }

    println!("\nConverter options (via --extra-<name> [value]):");
    println!("  code-language-class  storage:  emit class=\"language-...\" on fenced code");
    println!("  bullet-marker        markdown: bullet character for reduced list items");
}

fn load_cli_config(explicit_path: Option<&str>) -> ConfmarkConfig {
    let loader = Loader::new().with_optional_file("confmark.toml");
    let loader = if let Some(path) = explicit_path {
        loader.with_file(path)
    } else {
        loader
    };

    loader.build().unwrap_or_else(|err| {
        eprintln!("Failed to load configuration: {err}");
        std::process::exit(1);
    })
}

/// Lift overrides that belong to the configuration out of the extra
/// parameter map. Whatever remains is handed to the converter as-is.
fn apply_config_overrides(config: &mut ConfmarkConfig, extra_params: &mut HashMap<String, String>) {
    if let Some(raw) = extra_params.remove("code-language-class") {
        config.render.code_language_class = parse_bool_arg("code-language-class", &raw);
    }
    if let Some(raw) = extra_params.remove("bullet-marker") {
        config.reduce.bullet_marker = parse_char_arg("bullet-marker", &raw);
    }
}

/// Seed converter options from the loaded configuration
fn converter_options_from_config(to: &str, config: &ConfmarkConfig) -> HashMap<String, String> {
    let mut options = HashMap::new();
    match to {
        "storage" => {
            options.insert(
                "code-language-class".to_string(),
                config.render.code_language_class.to_string(),
            );
        }
        "markdown" => {
            options.insert(
                "bullet-marker".to_string(),
                config.reduce.bullet_marker.to_string(),
            );
        }
        _ => {}
    }
    options
}

fn parse_bool_arg(flag: &str, raw: &str) -> bool {
    match raw.to_lowercase().as_str() {
        "true" | "1" | "yes" | "y" => true,
        "false" | "0" | "no" | "n" => false,
        other => {
            eprintln!("Invalid boolean value '{other}' for --extra-{flag}");
            std::process::exit(1);
        }
    }
}

fn parse_char_arg(flag: &str, raw: &str) -> char {
    let mut chars = raw.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => c,
        _ => {
            eprintln!("Invalid value '{raw}' for --extra-{flag}: expected a single character");
            std::process::exit(1);
        }
    }
}
