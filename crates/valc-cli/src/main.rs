//! Terminal front end for ValC. Everything here is hosting: the interpreter
//! is driven only through `valc_lang::run`.

mod demos;

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use clap::Parser;
use valc_lang::{InputSource, run};

/// ValC — the Val Kilmer esoteric language.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Config {
    /// Path to the .valc source file
    file: Option<String>,

    /// Run a built-in example program instead of a file
    #[arg(long, value_name = "NAME", conflicts_with = "file")]
    example: Option<String>,

    /// List the built-in example programs
    #[arg(long)]
    list_examples: bool,
}

const LOGO: &str = r"
 __     ___      _      ____
 \ \   / (_)    | |    |  _ \
  \ \_/ / _  ___| | __ | | | |
   \   / | |/ __| |/ / | | | |
    | |  | | (__|   <  | |_| |
    |_|  |_|\___|_|\_\ |____/
ValC - Val Kilmer esoteric language
";

/// Services `ASK ME ANYTHING` from stdin, one prompted line at a time.
struct Stdin;

impl InputSource for Stdin {
    fn read_line(&mut self, name: &str) -> Option<String> {
        print!("Input for {name}: ");
        io::stdout().flush().ok()?;
        let mut line = String::new();
        match io::stdin().lock().read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(line.trim_end_matches(['\r', '\n']).to_owned()),
        }
    }
}

fn main() -> ExitCode {
    let config = Config::parse();

    if config.list_examples {
        for (name, _) in demos::ALL {
            println!("{name}");
        }
        return ExitCode::SUCCESS;
    }

    let source = match load_source(&config) {
        Ok(source) => source,
        Err(message) => {
            eprintln!("error: {message}");
            return ExitCode::FAILURE;
        }
    };

    println!("{LOGO}");
    let report = run(&source, &mut Stdin);
    for line in &report.output {
        println!("{line}");
    }
    match report.error {
        None => ExitCode::SUCCESS,
        Some(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn load_source(config: &Config) -> Result<String, String> {
    if let Some(name) = &config.example {
        return demos::find(name)
            .map(str::to_owned)
            .ok_or_else(|| format!("no example named `{name}` (try --list-examples)"));
    }
    match &config.file {
        Some(path) => {
            std::fs::read_to_string(path).map_err(|e| format!("cannot read {path}: {e}"))
        }
        None => Err("nothing to run: pass a .valc file or --example NAME".to_owned()),
    }
}
