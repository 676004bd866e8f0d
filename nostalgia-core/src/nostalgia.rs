use crate::{
    Config,
    auth::{AuthError, Gate},
    dates::{Clock, resolve_date},
    store::Store,
};
use anyhow::{Context, Result};
use chrono::NaiveDate;
use std::fs;

pub struct Nostalgia {
    pub config: Config,
    pub store: Store,
    gate: Gate,
}

impl Nostalgia {
    /// Creates a new `Nostalgia` instance, loading configuration from standard paths.
    pub fn new() -> Result<Self> {
        let config = Config::load()?;
        Self::with_config(config)
    }

    /// Creates a new `Nostalgia` instance with a specific `Config`, dating entries
    /// with the system clock.
    pub fn with_config(config: Config) -> Result<Self> {
        Self::with_clock(config, Clock::System)
    }

    /// Creates a new `Nostalgia` instance with a specific `Config` and `Clock`.
    ///
    /// This also ensures that the directory holding the data file exists.
    pub fn with_clock(config: Config, clock: Clock) -> Result<Self> {
        if let Some(dir) = config
            .data_file
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
        {
            fs::create_dir_all(dir)
                .with_context(|| format!("creating data dir {}", dir.display()))?;
        }
        let store = Store::with_clock(config.data_file.clone(), clock);
        let gate = Gate::new(config.password.clone());
        Ok(Self {
            config,
            store,
            gate,
        })
    }

    /// Checks `password` against the configured credential.
    pub fn unlock(&self, password: Option<&str>) -> Result<(), AuthError> {
        self.gate.check(password)
    }

    /// Resolves a date argument (`YYYY-MM-DD`, `today`, `yesterday`) against the store's clock.
    pub fn resolve_date(&self, input: &str) -> Option<NaiveDate> {
        resolve_date(input, self.today())
    }

    pub fn today(&self) -> NaiveDate {
        self.store.clock().today()
    }
}
