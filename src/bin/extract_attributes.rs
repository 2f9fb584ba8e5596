//! CLI that loads one document and prints its attributes as JSON.
//!
//! Usage: `extract_attributes [--all-images] [--images] [--user-agent UA] [--url BASE] [URL | FILE | -]`
//!
//! With no input argument (or `-`) markup is read from stdin.
//! Set `RUST_LOG=rs_pismo=debug` to trace loading on stderr.

use std::fs::File;
use std::io;
use std::process;

use rs_pismo::{Document, Handle, Options};
use tracing_subscriber::EnvFilter;

const USAGE: &str = "usage: extract_attributes [--all-images] [--images] [--user-agent UA] [--url BASE] [URL | FILE | -]";

struct Args {
    options: Options,
    input: Option<String>,
}

fn parse_args() -> Result<Args, String> {
    let mut options = Options::default();
    let mut input = None;
    let mut args = std::env::args().skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--all-images" => options.all_images = true,
            "--images" => options.image_extractor = true,
            "--user-agent" => {
                options.user_agent = Some(args.next().ok_or("--user-agent needs a value")?);
            }
            "--url" => options.url = Some(args.next().ok_or("--url needs a value")?),
            "-h" | "--help" => return Err(USAGE.to_string()),
            flag if flag.starts_with("--") => return Err(format!("unknown flag {flag}\n{USAGE}")),
            _ if input.is_some() => return Err(format!("unexpected argument {arg}\n{USAGE}")),
            _ => input = Some(arg),
        }
    }

    Ok(Args { options, input })
}

fn open(input: Option<&str>) -> io::Result<Handle> {
    match input {
        None | Some("-") => Ok(Handle::reader(io::stdin())),
        Some(arg) => match Handle::classify(arg) {
            Handle::Markup(path) => File::open(path).map(Handle::from),
            url => Ok(url),
        },
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = match parse_args() {
        Ok(args) => args,
        Err(message) => {
            eprintln!("{message}");
            process::exit(2);
        }
    };

    let handle = match open(args.input.as_deref()) {
        Ok(handle) => handle,
        Err(e) => {
            eprintln!("Failed to open input: {e}");
            process::exit(1);
        }
    };

    let doc = match Document::new(handle, args.options) {
        Ok(doc) => doc,
        Err(e) => {
            eprintln!("Failed to load document: {e}");
            process::exit(1);
        }
    };

    match doc.attributes().to_json() {
        Ok(json) => println!("{json}"),
        Err(e) => {
            eprintln!("Failed to serialize attributes: {e}");
            process::exit(1);
        }
    }
}
