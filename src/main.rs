//! linkdown CLI - Markdown subset to HTML converter

use std::io::{self, Read, Write};
use std::process;

const USAGE: &str = "usage: linkdown [--no-links] [FILE | -]

Reads Markdown from FILE (or stdin) and writes the HTML fragment to stdout.

options:
  --no-links   keep [label](url) as literal text
  -h, --help   show this message";

fn main() -> io::Result<()> {
    #[cfg(feature = "trace")]
    init_tracing();

    let mut options = linkdown::Options::default();
    let mut path: Option<String> = None;

    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "-h" | "--help" => {
                println!("{USAGE}");
                return Ok(());
            }
            "--no-links" => options.links = false,
            flag if flag.starts_with('-') && flag != "-" => {
                usage_error(&format!("unknown option: {flag}"))
            }
            _ if path.is_none() => path = Some(arg),
            _ => usage_error(&format!("unexpected argument: {arg}")),
        }
    }

    // Simple usage: read from stdin or file
    let input = match path.as_deref() {
        Some(path) if path != "-" => std::fs::read_to_string(path)?,
        _ => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let html = linkdown::convert_with_options(&input, &options);
    io::stdout().write_all(html.as_bytes())?;

    Ok(())
}

fn usage_error(message: &str) -> ! {
    eprintln!("{message}");
    eprintln!("{USAGE}");
    process::exit(2);
}

/// Log to stderr; stdout carries the HTML.
#[cfg(feature = "trace")]
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();
}
