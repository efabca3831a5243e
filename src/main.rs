use std::io::{self, Read};

use verbanum::{available_locales, locale, CardinalOptions, CurrencyOptions, Gender, Magnitude};

const DEFAULT_LOCALE: &str = "en";

fn main() {
    let config = match parse_args() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    let loc = match locale(&config.locale) {
        Ok(loc) => loc,
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(2);
        }
    };

    let opts = CardinalOptions {
        gender: config.gender,
        optional_and: config.optional_and,
        long_scale: config.long_scale,
    };

    for line in config.input.lines().map(str::trim).filter(|l| !l.is_empty()) {
        let rendered = match config.mode {
            Mode::Cardinal => Magnitude::parse(line).map(|m| loc.cardinal(&m, &opts)),
            Mode::Ordinal => parse_ordinal(line).and_then(|n| loc.ordinal_with(n, &opts)),
            Mode::Currency => verbanum::CurrencyAmount::parse(line)
                .map(|a| loc.currency(&a, &CurrencyOptions { gender: config.gender })),
        };
        match rendered {
            Ok(words) => println!("{words}"),
            Err(err) => {
                eprintln!("error: {err}");
                std::process::exit(2);
            }
        }
    }
}

fn parse_ordinal(line: &str) -> Result<verbanum::BigUint, verbanum::Error> {
    // Ordinals take a plain non-negative integer; signs and fractions are
    // rejected by the BigUint parser itself.
    line.parse().map_err(|_| verbanum::Error::NotANumber(line.to_string()))
}

#[derive(Clone, Copy, PartialEq)]
enum Mode {
    Cardinal,
    Ordinal,
    Currency,
}

struct CliConfig {
    input: String,
    locale: String,
    mode: Mode,
    gender: Option<Gender>,
    optional_and: bool,
    long_scale: bool,
}

fn parse_args() -> Result<CliConfig, String> {
    let mut input: Option<String> = None;
    let mut locale = DEFAULT_LOCALE.to_string();
    let mut mode = Mode::Cardinal;
    let mut gender = None;
    let mut optional_and = false;
    let mut long_scale = false;
    let mut args = std::env::args().skip(1).peekable();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                println!("{}", help_text());
                std::process::exit(0);
            }
            "-V" | "--version" => {
                println!("verbanum {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "--list-locales" => {
                for code in available_locales() {
                    println!("{code}");
                }
                std::process::exit(0);
            }
            "--ordinal" => mode = Mode::Ordinal,
            "--currency" => mode = Mode::Currency,
            "--and" => optional_and = true,
            "--long-scale" => long_scale = true,
            "--gender" | "-g" => {
                let value = args.next().ok_or_else(|| "error: --gender expects a value".to_string())?;
                gender = Some(parse_gender(&value)?);
            }
            "--locale" | "-l" => {
                let value = args.next().ok_or_else(|| "error: --locale expects a value".to_string())?;
                locale = value;
            }
            "--" => {
                let rest = args.collect::<Vec<_>>().join(" ");
                if !rest.trim().is_empty() {
                    if input.is_some() {
                        return Err("error: input provided multiple times".to_string());
                    }
                    input = Some(rest);
                }
                break;
            }
            _ if arg.starts_with("--locale=") => {
                locale = arg.trim_start_matches("--locale=").to_string();
            }
            _ if arg.starts_with("--gender=") => {
                gender = Some(parse_gender(arg.trim_start_matches("--gender="))?);
            }
            _ if arg.starts_with('-') && arg.len() > 1 && !arg[1..].starts_with(|c: char| c.is_ascii_digit()) => {
                return Err(format!("error: unknown option '{arg}'"));
            }
            _ => {
                let rest = std::iter::once(arg).chain(args).collect::<Vec<_>>().join(" ");
                if input.is_some() {
                    return Err("error: input provided multiple times".to_string());
                }
                input = Some(rest);
                break;
            }
        }
    }

    let input = match input {
        Some(value) => value,
        None => read_stdin_input()?,
    };

    if input.trim().is_empty() {
        return Err(format!("error: no input provided\n\n{}", help_text()));
    }

    Ok(CliConfig { input, locale, mode, gender, optional_and, long_scale })
}

fn parse_gender(value: &str) -> Result<Gender, String> {
    match value {
        "m" | "masculine" => Ok(Gender::Masculine),
        "f" | "feminine" => Ok(Gender::Feminine),
        _ => Err(format!("error: invalid --gender '{value}' (expected m or f)")),
    }
}

fn read_stdin_input() -> Result<String, String> {
    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer).map_err(|err| format!("error: failed to read stdin: {err}"))?;
    Ok(buffer)
}

fn help_text() -> String {
    format!(
        "verbanum {version}

Number verbalization CLI: cardinal, ordinal and currency words.

Usage:
  verbanum [OPTIONS] [--] <number...>
  verbanum [OPTIONS]            (reads numbers from stdin, one per line)

Options:
  -l, --locale <code>     Locale code (see --list-locales). Default: {default_locale}
  --ordinal               Render an ordinal instead of a cardinal.
  --currency              Render a currency amount (major.minor).
  -g, --gender <m|f>      Numeral gender, for locales that inflect.
  --and                   Speak the locale's optional conjunction.
  --long-scale            Use the locale's long-scale ladder where one exists.
  --list-locales          Print the registered locale codes and exit.
  -h, --help              Show this help message.
  -V, --version           Print version information.

Exit codes:
  0  Success.
  1  Internal error.
  2  Invalid arguments or input.
",
        version = env!("CARGO_PKG_VERSION"),
        default_locale = DEFAULT_LOCALE
    )
}
