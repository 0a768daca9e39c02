use std::env;
use std::io;

use frechet_dp::shell::{Session, ShellError, ShellOptions};
use frechet_dp::{ParseMode, Strategy};
use tracing::{info, warn, Level};

fn main() {
    let options = match Options::parse(env::args().skip(1)) {
        Ok(opts) => opts,
        Err(err) => {
            eprintln!("dfd: {err}");
            Options::print_help();
            std::process::exit(2);
        }
    };

    let level = if options.verbose {
        Level::DEBUG
    } else {
        Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();

    info!(
        mode = ?options.shell.mode,
        strategy = ?options.shell.strategy,
        debug = options.shell.debug,
        "starting session"
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(stdin.lock(), stdout.lock(), options.shell);
    match session.run() {
        Ok(_) => {}
        Err(ShellError::Input(err)) => {
            warn!(%err, "input rejected");
            std::process::exit(1);
        }
        Err(ShellError::Io(err)) => {
            eprintln!("dfd: i/o error: {err}");
            std::process::exit(1);
        }
    }
}

struct Options {
    shell: ShellOptions,
    verbose: bool,
}

impl Options {
    fn parse<I, T>(mut args: I) -> Result<Self, String>
    where
        I: Iterator<Item = T>,
        T: Into<String>,
    {
        let mut shell = ShellOptions::default();
        let mut verbose = false;

        while let Some(arg) = args.next() {
            let arg: String = arg.into();
            if arg == "--help" || arg == "-h" {
                Options::print_help();
                std::process::exit(0);
            } else if arg == "--debug" {
                shell.debug = true;
            } else if arg == "--strict" {
                shell.mode = ParseMode::Strict;
            } else if arg == "--verbose" || arg == "-v" {
                verbose = true;
            } else if let Some(value) = arg.strip_prefix("--strategy=") {
                shell.strategy = Some(value.parse::<Strategy>()?);
            } else if arg == "--strategy" {
                let value: String = args
                    .next()
                    .ok_or_else(|| "missing value after --strategy".to_string())?
                    .into();
                shell.strategy = Some(value.parse::<Strategy>()?);
            } else {
                return Err(format!("unrecognized argument '{arg}'"));
            }
        }

        Ok(Self { shell, verbose })
    }

    fn print_help() {
        println!(
            "\
Usage: dfd [options]

Reads two time series from stdin, one per line, and prints their
discrete Fréchet distance.

Options:
  --strict                      Reject non-integer coordinates instead of reading them as 0
  --strategy <name>             top-down | bottom-up | anti-diagonal | linear-space
  --debug                       Print the memo table and an optimal coupling
  -v, --verbose                 Log engine spans to stderr
  -h, --help                    Print this help message

Examples:
  printf '64,25;42,55;37,21\\n61,32;48,50;35,25\\n' | dfd
  dfd --debug --strategy top-down
"
        );
    }
}
