//! JSON configuration and CSV wall loaders.
//!
//! # Wall CSV format
//!
//! ```csv
//! kind,x,y
//! pole,1,0
//! beam,0,2
//! ```

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use tracing::info;

use crate::{ConfigResult, MazeConfig, WallSpec};

/// Load and validate a [`MazeConfig`] from a JSON file.
pub fn load_config_json(path: &Path) -> ConfigResult<MazeConfig> {
    let file = File::open(path)?;
    let config = load_config_reader(BufReader::new(file))?;
    info!(path = %path.display(), agents = config.agents.len(), "configuration loaded");
    Ok(config)
}

/// Like [`load_config_json`] but accepts any `Read` source.
pub fn load_config_reader<R: Read>(reader: R) -> ConfigResult<MazeConfig> {
    let config: MazeConfig = serde_json::from_reader(reader)?;
    config.validate()?;
    Ok(config)
}

/// Load wall segments from a `kind,x,y` CSV file.
pub fn load_walls_csv(path: &Path) -> ConfigResult<Vec<WallSpec>> {
    let file = File::open(path)?;
    load_walls_reader(file)
}

/// Like [`load_walls_csv`] but accepts any `Read` source.
pub fn load_walls_reader<R: Read>(reader: R) -> ConfigResult<Vec<WallSpec>> {
    let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let walls = csv_reader.deserialize::<WallSpec>().collect::<Result<Vec<_>, _>>()?;
    Ok(walls)
}
