//! Application context for CLI command execution.
//!
//! # Example
//!
//! ```no_run
//! use neodb::app::App;
//! use neodb::config::NeodbConfig;
//! use std::path::Path;
//!
//! let config = NeodbConfig::discover(Path::new("."))?;
//! let app = App::from_config(&config)?;
//! println!("{} objects", app.database().neo_count());
//! # Ok::<(), neodb::error::Error>(())
//! ```

use crate::config::NeodbConfig;
use crate::database::Database;
use crate::error::Result;

/// Shared state for command execution: the loaded database.
#[derive(Debug)]
pub struct App {
    database: Database,
}

impl App {
    /// Load the data files named by `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if either data file cannot be read.
    pub fn from_config(config: &NeodbConfig) -> Result<Self> {
        // Load warnings are logged by `Database::load`.
        let (database, _warnings) =
            Database::load(&config.data.neo_file, &config.data.cad_file)?;
        Ok(Self { database })
    }

    /// The loaded database.
    #[must_use]
    pub fn database(&self) -> &Database {
        &self.database
    }
}
