//! Datenquelle der Orte: lokale JSON-Datei oder HTTP-Ressource.
//!
//! Jeder Fehler beim Abruf ist fatal für die Initialisierung; es gibt
//! weder Teil-Rendering noch automatische Wiederholung.

mod loader;

use crate::core::Place;
use std::fmt;
use std::path::PathBuf;

pub use loader::PendingLoad;

/// Herkunft der Orts-Datei.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    /// Lokale Datei
    File(PathBuf),
    /// http(s)-Ressource
    Url(String),
}

impl DataSource {
    /// Interpretiert eine Konfigurationsangabe als URL oder Dateipfad.
    pub fn parse(spec: &str) -> Self {
        let spec = spec.trim();
        if spec.starts_with("http://") || spec.starts_with("https://") {
            Self::Url(spec.to_string())
        } else {
            Self::File(PathBuf::from(spec))
        }
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Url(url) => f.write_str(url),
        }
    }
}

/// Fehler beim Laden der Orts-Datei.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("Datei {path} konnte nicht gelesen werden: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("HTTP-Anfrage an {url} fehlgeschlagen: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{url} antwortete mit Status {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },
    #[error("Ortsdaten sind kein gültiges JSON: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("Lade-Thread wurde unerwartet beendet")]
    WorkerLost,
}

/// Lädt alle Orte blockierend aus der Quelle.
pub fn fetch_places(source: &DataSource) -> Result<Vec<Place>, LoadError> {
    let body = match source {
        DataSource::File(path) => std::fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.clone(),
            source,
        })?,
        DataSource::Url(url) => fetch_text(url)?,
    };
    let places: Vec<Place> = serde_json::from_str(&body)?;
    log::info!("{} Orte aus {} gelesen", places.len(), source);
    Ok(places)
}

fn fetch_text(url: &str) -> Result<String, LoadError> {
    let http_error = |source: reqwest::Error| LoadError::Http {
        url: url.to_string(),
        source,
    };
    let response = reqwest::blocking::get(url).map_err(http_error)?;
    let status = response.status();
    if !status.is_success() {
        return Err(LoadError::Status {
            url: url.to_string(),
            status,
        });
    }
    response.text().map_err(http_error)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_distinguishes_urls_and_paths() {
        assert_eq!(
            DataSource::parse("https://example.org/places.json"),
            DataSource::Url("https://example.org/places.json".to_string())
        );
        assert_eq!(
            DataSource::parse(" ./places.json "),
            DataSource::File(PathBuf::from("./places.json"))
        );
    }

    #[test]
    fn missing_file_is_io_error() {
        let source = DataSource::File(std::env::temp_dir().join("places_map_missing.json"));
        assert!(matches!(fetch_places(&source), Err(LoadError::Io { .. })));
    }
}
