use std::env;

use primes_driver::Primes;

fn main() {
    human_panic::setup_panic!();

    let primes = match Primes::parse_from_args(env::args_os()) {
        Ok(primes) => primes,
        Err(err) => {
            err.print();
            std::process::exit(err.exit_code());
        }
    };

    // Initialize logger, `PRIMES_LOG` takes precedence over `--verbose`
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(primes.verbosity.into())
        .format_indent(Some(2))
        .format_timestamp(None)
        .parse_env("PRIMES_LOG");
    builder.init();

    let cwd = match env::current_dir() {
        Ok(cwd) => cwd,
        Err(err) => {
            eprintln!("error: unable to determine the current working directory: {err}");
            std::process::exit(1);
        }
    };

    match primes.execute(cwd) {
        Ok(summary) => {
            log::info!(target: "driver", "{} primes found", summary.count);
        }
        Err(err) => {
            err.print();
            std::process::exit(err.exit_code());
        }
    }
}
