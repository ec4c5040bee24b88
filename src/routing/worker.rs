//! Führt Routen-Anfragen nebenläufig aus (ein Thread pro Anfrage).

use super::{DirectionsError, DirectionsProvider, RouteRequest, RouteResponse};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Fire-and-forget-Ausführung von `RouteRequest`s.
///
/// Ergebnisse landen in einem Kanal und werden vom UI-Thread per
/// [`RouteWorker::drain`] abgeholt. Kein Abbruch, keine Begrenzung.
pub struct RouteWorker {
    provider: Arc<dyn DirectionsProvider>,
    sender: Sender<RouteResponse>,
    receiver: Receiver<RouteResponse>,
    in_flight: usize,
}

impl RouteWorker {
    /// Erstellt einen Worker für den gegebenen Anbieter.
    pub fn new(provider: Arc<dyn DirectionsProvider>) -> Self {
        let (sender, receiver) = mpsc::channel();
        Self {
            provider,
            sender,
            receiver,
            in_flight: 0,
        }
    }

    /// Anzahl abgeschickter, noch nicht abgeholter Anfragen.
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    /// Startet die Anfrage in einem eigenen Thread.
    pub fn submit(&mut self, request: RouteRequest) {
        let provider = Arc::clone(&self.provider);
        let sender = self.sender.clone();
        let thread_request = request.clone();

        let spawned = std::thread::Builder::new()
            .name(format!("route-{}", request.request_id))
            .spawn(move || {
                let result = provider.calculate(&thread_request);
                // Empfänger weg = Anwendung beendet, Ergebnis verwerfen
                let _ = sender.send(RouteResponse {
                    request: thread_request,
                    result,
                });
            });

        self.in_flight += 1;
        if let Err(e) = spawned {
            log::warn!("Routen-Thread #{} nicht startbar: {}", request.request_id, e);
            let _ = self.sender.send(RouteResponse {
                request,
                result: Err(DirectionsError::Worker(e.to_string())),
            });
        }
    }

    /// Holt alle bereits fertigen Antworten ab, ohne zu blockieren.
    pub fn drain(&mut self) -> Vec<RouteResponse> {
        let responses: Vec<RouteResponse> = self.receiver.try_iter().collect();
        self.in_flight = self.in_flight.saturating_sub(responses.len());
        responses
    }

    /// Wartet höchstens `timeout` auf `count` Antworten.
    pub fn wait_for(&mut self, count: usize, timeout: Duration) -> Vec<RouteResponse> {
        let deadline = Instant::now() + timeout;
        let mut responses = Vec::with_capacity(count);
        while responses.len() < count {
            let remaining = deadline.saturating_duration_since(Instant::now());
            match self.receiver.recv_timeout(remaining) {
                Ok(response) => responses.push(response),
                Err(_) => break,
            }
        }
        self.in_flight = self.in_flight.saturating_sub(responses.len());
        responses
    }
}
