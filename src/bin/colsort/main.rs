use colsort::prelude::*;
use std::env;
use std::io;
use tracing_subscriber::EnvFilter;

pub mod args;
use args::ArgSpec;

fn main() {
    init_logging();
    match inner_main(env::args().collect()) {
        Err(e) => {
            if e.suppress() {
                std::process::exit(0);
            }
            eprintln!("Error\t{}", e);
            eprint!("Command\t");
            for x in env::args() {
                eprint!("{} ", x);
            }
            eprintln!();
            std::process::exit(1);
        }
        Ok(()) => {
            std::process::exit(0);
        }
    }
}

/// log to stderr, quiet unless RUST_LOG says otherwise
fn init_logging() {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(env).with_writer(io::stderr).init();
}

pub fn inner_main(argv: Vec<String>) -> Result<()> {
    let prog = args::ProgSpec::new("Sort comma separated lines by one column.");
    const A: [ArgSpec; 6] = [
        arg! {"input", "i", "File", "Read from this file, rather than standard input."},
        arg! {"output", "o", "File", "Also write the sorted lines to this file."},
        arg! {"field", "f", "N", "Sort by column N, counting from zero."},
        arg! {"header", "h", "", "The first line is a header, left in place and not sorted."},
        arg! {"reverse", "r", "", "Sort in reverse order."},
        arg! {"quiet", "q", "", "Print only the sorted lines, no banner."},
    ];
    let args = args::parse(&prog, &A, &argv)?;

    let mut config = SortConfig::new();
    for x in args {
        if x.name == "input" {
            config.input = Some(x.value);
        } else if x.name == "output" {
            config.output = Some(x.value);
        } else if x.name == "field" {
            config.column = match x.value.parse::<usize>() {
                Ok(n) => n,
                Err(e) => return err!("Invalid column number '{}' : {}", x.value, e),
            };
        } else if x.name == "header" {
            config.header = true;
        } else if x.name == "reverse" {
            config.reverse = true;
        } else if x.name == "quiet" {
            config.quiet = true;
        } else {
            unreachable!();
        }
    }
    tracing::debug!(?config, "starting");
    let mut w = get_writer("-")?;
    config.run(&mut w)
}
