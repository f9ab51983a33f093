//! Asynchroner Ladevorgang auf einem Hintergrund-Thread.

use super::{fetch_places, DataSource, LoadError};
use crate::core::Place;
use crossbeam_channel::{bounded, Receiver, TryRecvError};
use std::thread;

/// Laufender Ladevorgang. Der UI-Thread fragt das Ergebnis pro Frame ab.
#[derive(Debug)]
pub struct PendingLoad {
    source: DataSource,
    result_rx: Receiver<Result<Vec<Place>, LoadError>>,
}

impl PendingLoad {
    /// Startet das Laden von `source` auf einem eigenen Thread.
    pub fn spawn(source: DataSource) -> Self {
        let (result_tx, result_rx) = bounded(1);
        let worker_source = source.clone();

        thread::spawn(move || {
            let result = fetch_places(&worker_source);
            if result_tx.send(result).is_err() {
                log::debug!("Ladeergebnis verworfen, Empfänger existiert nicht mehr");
            }
        });

        log::info!("Lade Orte aus {}", source);
        Self { source, result_rx }
    }

    /// Quelle dieses Ladevorgangs.
    pub fn source(&self) -> &DataSource {
        &self.source
    }

    /// Nicht-blockierende Abfrage. `None`, solange der Thread noch arbeitet.
    pub fn poll(&self) -> Option<Result<Vec<Place>, LoadError>> {
        match self.result_rx.try_recv() {
            Ok(result) => Some(result),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => Some(Err(LoadError::WorkerLost)),
        }
    }
}
