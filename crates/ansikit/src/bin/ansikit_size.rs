use std::env;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use ansikit::QueryOptions;

fn print_usage() {
    eprintln!(
        "Usage: ansikit-size [--tty <path>] [--timeout-ms <n>] [--no-signal-restore]\n\
         \n\
         Prints the terminal size as `<rows> <columns>`, measured with cursor\n\
         position reports. ANSIKIT_TTY and ANSIKIT_DSR_TIMEOUT_MS set the defaults."
    );
}

fn parse_args(mut options: QueryOptions) -> Result<QueryOptions, String> {
    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--tty" => {
                let value = args
                    .next()
                    .ok_or_else(|| "--tty requires a value".to_string())?;
                options.tty_path = PathBuf::from(value);
            }
            "--timeout-ms" => {
                let value = args
                    .next()
                    .ok_or_else(|| "--timeout-ms requires a value".to_string())?;
                let ms = value
                    .parse::<u64>()
                    .map_err(|_| "invalid --timeout-ms value".to_string())?;
                options.read_timeout = (ms > 0).then(|| Duration::from_millis(ms));
            }
            "--no-signal-restore" => options.restore_on_signal = false,
            "-h" | "--help" => {
                print_usage();
                std::process::exit(0);
            }
            other => return Err(format!("unexpected argument: {other}")),
        }
    }
    Ok(options)
}

#[cfg(unix)]
fn main() -> ExitCode {
    #[cfg(feature = "tracing-json")]
    ansikit::init_json_subscriber();

    let options = match parse_args(QueryOptions::from_env()) {
        Ok(options) => options,
        Err(msg) => {
            eprintln!("error: {msg}");
            print_usage();
            return ExitCode::from(2);
        }
    };

    match ansikit::query_tty(&options) {
        Ok(size) => {
            println!("{} {}", size.row, size.column);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("ansikit-size: {err}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(not(unix))]
fn main() -> ExitCode {
    let _ = parse_args(QueryOptions::default());
    eprintln!("ansikit-size: terminal queries require a Unix terminal");
    ExitCode::FAILURE
}
