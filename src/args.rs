use std::path::PathBuf;

use crate::config::Config;
use crate::error::Error;
use crate::level::Level;

pub const USAGE: &str = "\
Usage: mtslog [OPTIONS] MESSAGE...

Options:
  --name <NAME>        logger name
  --mode <MODE>        threshold: error, warning, info, debug
  --output <OUTPUT>    out, error or file
  --log-file <PATH>    file used when output is file
  --no-stderr          keep error messages on stdout
  --level <LEVEL>      level to write at (default: the mode)
  --config <PATH>      dotenv file to read (default: ./.env)
  -h, --help           print this help";

/// Parsed command line; `None` fields fall back to the loaded config
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Args {
    pub name: Option<String>,
    pub mode: Option<String>,
    pub output: Option<String>,
    pub log_file: Option<PathBuf>,
    pub no_stderr: bool,
    pub level: Option<Level>,
    pub config_path: Option<PathBuf>,
    pub help: bool,
    pub message: String,
}

impl Args {
    /// Apply CLI values on top of a loaded config; CLI wins
    pub fn overlay(&self, mut cfg: Config) -> Config {
        if let Some(v) = &self.name {
            cfg.name = v.clone();
        }
        if let Some(v) = &self.mode {
            cfg.mode = v.clone();
        }
        if let Some(v) = &self.output {
            cfg.output = v.clone();
        }
        if let Some(v) = &self.log_file {
            cfg.log_file = Some(v.clone());
        }
        if self.no_stderr {
            cfg.use_error = false;
        }
        cfg
    }
}

/// Value of `--flag value` or `--flag=value`
fn take_value<I: Iterator<Item = String>>(
    flag: &str,
    arg: &str,
    iter: &mut I,
) -> Result<String, Error> {
    if arg == flag {
        iter.next()
            .ok_or_else(|| Error::InvalidArgument(format!("{} requires a value", flag)))
    } else {
        Ok(arg[flag.len() + 1..].to_string())
    }
}

fn matches_flag(arg: &str, flag: &str) -> bool {
    arg == flag || (arg.starts_with(flag) && arg[flag.len()..].starts_with('='))
}

/// Parse CLI args, program name first
pub fn parse_cli_args_from<I: IntoIterator<Item = String>>(args: I) -> Result<Args, Error> {
    let mut parsed = Args::default();
    let mut words: Vec<String> = Vec::new();
    let mut iter = args.into_iter().skip(1);
    while let Some(a) = iter.next() {
        match a.as_str() {
            "-h" | "--help" => parsed.help = true,
            "--no-stderr" => parsed.no_stderr = true,
            "--" => {
                words.extend(iter.by_ref());
            }
            s if matches_flag(s, "--name") => {
                parsed.name = Some(take_value("--name", s, &mut iter)?);
            }
            s if matches_flag(s, "--mode") => {
                parsed.mode = Some(take_value("--mode", s, &mut iter)?);
            }
            s if matches_flag(s, "--output") => {
                parsed.output = Some(take_value("--output", s, &mut iter)?);
            }
            s if matches_flag(s, "--log-file") => {
                parsed.log_file = Some(PathBuf::from(take_value("--log-file", s, &mut iter)?));
            }
            s if matches_flag(s, "--config") => {
                let p = take_value("--config", s, &mut iter)?;
                if !p.is_empty() {
                    parsed.config_path = Some(PathBuf::from(p));
                }
            }
            s if matches_flag(s, "--level") => {
                let v = take_value("--level", s, &mut iter)?;
                let level = v
                    .parse::<Level>()
                    .map_err(|e| Error::InvalidArgument(e.to_string()))?;
                parsed.level = Some(level);
            }
            s if s.starts_with("--") => {
                return Err(Error::InvalidArgument(format!("unknown option {}", s)));
            }
            other => words.push(other.to_string()),
        }
    }
    parsed.message = words.join(" ");
    if parsed.message.is_empty() && !parsed.help {
        return Err(Error::InvalidArgument("missing message".to_string()));
    }
    Ok(parsed)
}

pub fn parse_cli_args() -> Result<Args, Error> {
    parse_cli_args_from(std::env::args())
}
