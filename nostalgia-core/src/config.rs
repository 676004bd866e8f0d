use anyhow::{Context, Result, bail};
use chrono::format::{Item, StrftimeItems};
use directories::BaseDirs;
use serde::Deserialize;
use std::{fmt, fs, path::PathBuf};
use tracing::debug;

#[derive(Clone)]
pub struct Config {
    /// File holding every journal record.
    pub data_file: PathBuf,
    /// Password checked before any command. `None` leaves the journal unlocked.
    pub password: Option<String>,
    /// Preferred editor name/binary (e.g. hx for Helix).
    /// Optional; the CLI will fall back to $VISUAL/$EDITOR.
    pub editor: Option<String>,
    /// chrono format used when displaying dates (e.g. `%d %b %Y` -> `01 Mar 2024`).
    pub date_format: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    data_file: Option<PathBuf>,
    password: Option<String>,
    editor: Option<String>,
    date_format: Option<String>,
}

impl Config {
    /// Load config from disk (first XDG path, then native) and apply defaults.
    /// A missing config file is not an error.
    pub fn load() -> Result<Self> {
        let file_config = Self::read_file_config()?;
        Ok(Self::from_file_config(file_config))
    }

    fn from_file_config(file_config: FileConfig) -> Self {
        Self {
            data_file: file_config
                .data_file
                .unwrap_or_else(Self::default_data_file),
            password: file_config.password,
            editor: file_config.editor,
            date_format: file_config
                .date_format
                .unwrap_or_else(Self::default_date_format),
        }
    }

    fn default_date_format() -> String {
        "%d %b %Y".to_string()
    }

    /// Default data file: `{data_dir}/nostalgia/diary.dat`
    /// - macOS:   `~/Library/Application Support/nostalgia/diary.dat`
    /// - Linux:   `$XDG_DATA_HOME/nostalgia/diary.dat` or `~/.local/share/nostalgia/diary.dat`
    /// - Windows: `%APPDATA%\nostalgia\diary.dat`
    fn default_data_file() -> PathBuf {
        let dir = match BaseDirs::new() {
            Some(base) => base.data_dir().join("nostalgia"),
            None => PathBuf::from("./Data"),
        };
        dir.join("diary.dat")
    }

    fn config_file_paths() -> Vec<PathBuf> {
        let mut v = Vec::new();
        if let Some(b) = BaseDirs::new() {
            let xdg = b
                .home_dir()
                .join(".config")
                .join("nostalgia")
                .join("config.toml");
            v.push(xdg);
            let native = b.config_dir().join("nostalgia").join("config.toml");
            if !v.contains(&native) {
                v.push(native);
            }
        }
        v
    }

    /// Read the first existing config file and parse it.
    fn read_file_config() -> Result<FileConfig> {
        for path in Self::config_file_paths() {
            if !path.exists() {
                continue;
            }
            debug!(path = %path.display(), "loading config");
            let s =
                fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))?;
            return Self::parse_file(&s).with_context(|| format!("parsing {}", path.display()));
        }
        Ok(FileConfig::default())
    }

    /// Parse a TOML string into `FileConfig`.
    fn parse_file(s: &str) -> Result<FileConfig> {
        let file_config = toml::from_str::<FileConfig>(s)?;
        if let Some(fmt) = &file_config.date_format {
            Self::check_date_format(fmt)?;
        }
        Ok(file_config)
    }

    /// Rejects strftime strings chrono cannot render.
    fn check_date_format(fmt: &str) -> Result<()> {
        if StrftimeItems::new(fmt).any(|item| matches!(item, Item::Error)) {
            bail!("invalid date_format {fmt:?}");
        }
        Ok(())
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("data_file", &self.data_file)
            .field("password", &self.password.as_ref().map(|_| "***"))
            .field("editor", &self.editor)
            .field("date_format", &self.date_format)
            .finish()
    }
}
