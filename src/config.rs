//! Logger configuration from the environment and a dotenv file
//!
//! Reads environment variables and fills in whatever they leave unset from
//! KEY=VALUE pairs in a dotenv-style file (`./.env` by default). Values are
//! passed through as strings; the logger applies its own fallbacks for
//! unknown modes and outputs.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

pub const ENV_NAME: &str = "LOGGER_NAME";
pub const ENV_MODE: &str = "LOG_MODE";
pub const ENV_OUTPUT: &str = "LOG_OUTPUT";
pub const ENV_FILE: &str = "LOG_FILE";
pub const ENV_USE_ERROR: &str = "LOG_USE_ERROR";

const DEFAULT_DOTENV: &str = "./.env";

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub name: String,
    pub mode: String,
    pub output: String,
    pub log_file: Option<PathBuf>,
    pub use_error: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            name: "mtslog".to_string(),
            mode: "warning".to_string(),
            output: "out".to_string(),
            log_file: None,
            use_error: true,
        }
    }
}

fn parse_bool(s: &str) -> bool {
    matches!(s.to_ascii_lowercase().as_str(), "1" | "true" | "yes")
}

fn unquote(val: &str) -> &str {
    let bytes = val.as_bytes();
    if bytes.len() >= 2 {
        let (first, last) = (bytes[0], bytes[bytes.len() - 1]);
        if first == last && (first == b'"' || first == b'\'') {
            return &val[1..val.len() - 1];
        }
    }
    val
}

fn parse_value_map(content: &str) -> HashMap<String, String> {
    let mut map = HashMap::new();
    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let line = line.strip_prefix("export ").unwrap_or(line);
        if let Some(eq) = line.find('=') {
            let key = line[..eq].trim().to_string();
            let val = unquote(line[eq + 1..].trim()).to_string();
            map.insert(key, val);
        }
    }
    map
}

impl Config {
    /// Load config from env variables, falling back to a dotenv file for
    /// keys the environment does not set. If `path` is None, `./.env` is
    /// used when it exists.
    pub fn load(path: Option<PathBuf>) -> Self {
        Config::load_with(|key| std::env::var(key).ok(), path)
    }

    /// Same as [`Config::load`] with the environment replaced by `lookup`
    pub fn load_with<F>(lookup: F, path: Option<PathBuf>) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let cfg_path = path.unwrap_or_else(|| PathBuf::from(DEFAULT_DOTENV));
        let map = fs::read_to_string(&cfg_path)
            .map(|content| parse_value_map(&content))
            .unwrap_or_default();

        // the environment wins; the file only fills in keys that are unset
        let mut cfg = Config::default();
        cfg.apply(|key| lookup(key).or_else(|| map.get(key).cloned()));
        cfg
    }

    fn apply<F>(&mut self, get: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = get(ENV_NAME) {
            self.name = v;
        }
        if let Some(v) = get(ENV_MODE) {
            self.mode = v;
        }
        if let Some(v) = get(ENV_OUTPUT) {
            self.output = v;
        }
        if let Some(v) = get(ENV_FILE) {
            // empty means no file configured
            self.log_file = if v.is_empty() {
                None
            } else {
                Some(PathBuf::from(v))
            };
        }
        if let Some(v) = get(ENV_USE_ERROR) {
            self.use_error = parse_bool(&v);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::fs;

    fn temp_file(tag: &str, content: &str) -> PathBuf {
        let tmp = env::temp_dir().join(format!(
            "mts_logger_cfg_{}_{}",
            tag,
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap()
                .as_nanos()
        ));
        let _ = fs::create_dir_all(&tmp);
        let path = tmp.join("env");
        fs::write(&path, content).unwrap();
        path
    }

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_defaults() {
        let c = Config::default();
        assert_eq!(c.name, "mtslog");
        assert_eq!(c.mode, "warning");
        assert_eq!(c.output, "out");
        assert_eq!(c.log_file, None);
        assert!(c.use_error);
    }

    #[test]
    fn test_missing_file_keeps_defaults() {
        let missing = env::temp_dir().join("mts_logger_cfg_does_not_exist/.env");
        let c = Config::load_with(no_env, Some(missing));
        assert_eq!(c, Config::default());
    }

    #[test]
    fn test_env_overlay() {
        let mut vars = HashMap::new();
        vars.insert(ENV_MODE, "debug");
        vars.insert(ENV_OUTPUT, "file");
        vars.insert(ENV_FILE, "/tmp/app.log");
        vars.insert(ENV_USE_ERROR, "no");
        let missing = env::temp_dir().join("mts_logger_cfg_does_not_exist/.env");
        let c = Config::load_with(|k| vars.get(k).map(|v| v.to_string()), Some(missing));
        assert_eq!(c.mode, "debug");
        assert_eq!(c.output, "file");
        assert_eq!(c.log_file, Some(PathBuf::from("/tmp/app.log")));
        assert!(!c.use_error);
    }

    #[test]
    fn test_env_wins_over_file() {
        let path = temp_file(
            "precedence",
            "# comment\n\nLOG_MODE=info\nexport LOGGER_NAME=\"worker\"\nLOG_OUTPUT='error'\n",
        );
        let c = Config::load_with(
            |k| (k == ENV_MODE).then(|| "debug".to_string()),
            Some(path),
        );
        assert_eq!(c.mode, "debug");
        // keys missing from the environment come from the file
        assert_eq!(c.name, "worker");
        assert_eq!(c.output, "error");
    }

    #[test]
    fn test_empty_env_value_is_not_filled_from_file() {
        let path = temp_file("empty_env", "LOG_FILE=/tmp/from_file.log\n");
        let c = Config::load_with(|k| (k == ENV_FILE).then(String::new), Some(path));
        assert_eq!(c.log_file, None);
    }

    #[test]
    fn test_empty_log_file_means_none() {
        let path = temp_file("empty_file", "LOG_FILE=\n");
        let c = Config::load_with(no_env, Some(path));
        assert_eq!(c.log_file, None);
    }

    #[test]
    fn test_invalid_values_pass_through() {
        let path = temp_file("invalid", "LOG_MODE=bogus\nLOG_OUTPUT=nowhere\n");
        let c = Config::load_with(no_env, Some(path));
        assert_eq!(c.mode, "bogus");
        assert_eq!(c.output, "nowhere");
    }

    #[test]
    fn test_parse_bool() {
        assert!(parse_bool("1"));
        assert!(parse_bool("TRUE"));
        assert!(parse_bool("Yes"));
        assert!(!parse_bool("0"));
        assert!(!parse_bool("off"));
    }

    #[test]
    fn test_unquote() {
        assert_eq!(unquote("\"a b\""), "a b");
        assert_eq!(unquote("'x'"), "x");
        assert_eq!(unquote("\"mixed'"), "\"mixed'");
        assert_eq!(unquote("\""), "\"");
        assert_eq!(unquote(""), "");
    }
}
