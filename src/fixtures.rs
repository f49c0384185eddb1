//! Loading card data and images from local files.
//!
//! A [`FixtureStore`] reads named resources from one directory. JSON may be
//! stored plain (`{name}.json`) or gzip-compressed (`{name}.json.gz`); images
//! as `{name}.png` or `{name}.jpg`. The crate ships a small set under
//! `fixtures/`, reachable through [`FixtureStore::bundled`].

use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use flate2::read::GzDecoder;
use image::DynamicImage;
use log::debug;
use serde::de::DeserializeOwned;

use crate::config;
use crate::error::{DatatankError, Result};
use crate::models::Card;

/// Named JSON and image resources in a directory.
#[derive(Debug, Clone)]
pub struct FixtureStore {
    dir: PathBuf,
}

impl FixtureStore {
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    /// The fixtures shipped with the crate (`DebugCards`, `cardBack`).
    pub fn bundled() -> Self {
        Self::new(config::FIXTURE_DIR)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    // -- JSON --------------------------------------------------------------

    /// Decode `{name}.json`, falling back to `{name}.json.gz`.
    pub fn load<T: DeserializeOwned>(&self, name: &str) -> Result<T> {
        let path = self.find(name, &["json", "json.gz"])?;
        debug!("Loading fixture {}", path.display());

        let contents = if path.extension().and_then(|e| e.to_str()) == Some("gz") {
            let file = fs::File::open(&path)?;
            let mut decoder = BufReader::new(GzDecoder::new(BufReader::new(file)));
            let mut contents = String::new();
            decoder.read_to_string(&mut contents)?;
            contents
        } else {
            fs::read_to_string(&path)?
        };

        serde_json::from_str(&contents).map_err(|e| DatatankError::json(&path.to_string_lossy(), e))
    }

    /// Decode a JSON array of cards.
    pub fn cards(&self, name: &str) -> Result<Vec<Card>> {
        self.load(name)
    }

    // -- Images ------------------------------------------------------------

    /// Decode `{name}.png`, falling back to `{name}.jpg`.
    pub fn image(&self, name: &str) -> Result<DynamicImage> {
        let path = self.find(name, &["png", "jpg"])?;
        debug!("Loading fixture {}", path.display());
        let bytes = fs::read(&path)?;
        image::load_from_memory(&bytes).map_err(|e| DatatankError::image(&path.to_string_lossy(), e))
    }

    fn find(&self, name: &str, extensions: &[&str]) -> Result<PathBuf> {
        extensions
            .iter()
            .map(|ext| self.dir.join(format!("{}.{}", name, ext)))
            .find(|path| path.is_file())
            .ok_or_else(|| {
                DatatankError::NotFound(format!(
                    "Fixture '{}' not found in {}",
                    name,
                    self.dir.display()
                ))
            })
    }
}
