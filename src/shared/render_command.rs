//! Ausgehender Render-Befehlsstrom zwischen Controller und Renderer.
//!
//! Der Controller beschreibt jede sichtbare Änderung als `RenderCommand`;
//! der Renderer spiegelt nur, was dieser Strom ihm mitteilt.

use crate::core::{GeoCoord, VertexId};

/// Handle einer Linien- oder Polygon-Overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OverlayId(pub u64);

/// Handle einer Punkt-Annotation.
///
/// Eckpunkt-Marker teilen sich den Handle ihres Eckpunkts, Kanten-Labels
/// bekommen eigene fortlaufende IDs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AnnotationId {
    /// Marker eines Eckpunkts
    Vertex(VertexId),
    /// Längen-Label einer Kante
    Label(u64),
}

impl From<VertexId> for AnnotationId {
    fn from(id: VertexId) -> Self {
        Self::Vertex(id)
    }
}

/// Art einer Overlay (bestimmt den festen Zeichenstil).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OverlayKind {
    /// Dreieckskante (Linie, Breite 3)
    EdgeLine,
    /// Gefülltes Dreieck (halbtransparent, Rand Breite 1)
    Triangle,
    /// Fahrstrecke zwischen zwei Eckpunkten
    RoutePath,
}

/// Geometrie einer Overlay.
#[derive(Debug, Clone, PartialEq)]
pub struct Overlay {
    pub kind: OverlayKind,
    /// Linienzug bzw. Polygon-Ring (implizit geschlossen bei `Triangle`)
    pub points: Vec<GeoCoord>,
}

impl Overlay {
    /// Linie zwischen zwei Punkten.
    pub fn edge(from: GeoCoord, to: GeoCoord) -> Self {
        Self {
            kind: OverlayKind::EdgeLine,
            points: vec![from, to],
        }
    }

    /// Gefülltes Polygon über alle Eckpunkte.
    pub fn triangle(vertices: &[GeoCoord; 3]) -> Self {
        Self {
            kind: OverlayKind::Triangle,
            points: vertices.to_vec(),
        }
    }

    /// Routen-Linienzug.
    pub fn route(path: Vec<GeoCoord>) -> Self {
        Self {
            kind: OverlayKind::RoutePath,
            points: path,
        }
    }
}

/// Punkt-Annotation mit optionalem Text.
#[derive(Debug, Clone, PartialEq)]
pub struct Annotation {
    pub coord: GeoCoord,
    /// Beschriftung (Kanten-Label), `None` bei Eckpunkt-Markern
    pub title: Option<String>,
}

/// Ein Befehl an den Renderer.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCommand {
    /// Punkt-Annotation hinzufügen
    AddAnnotation {
        id: AnnotationId,
        annotation: Annotation,
    },
    /// Punkt-Annotation entfernen
    RemoveAnnotation { id: AnnotationId },
    /// Linien-/Polygon-Overlay hinzufügen
    AddOverlay { id: OverlayId, overlay: Overlay },
    /// Linien-/Polygon-Overlay entfernen
    RemoveOverlay { id: OverlayId },
}

/// Puffer ausgehender Render-Befehle, vom Host pro Frame geleert.
#[derive(Debug, Default)]
pub struct RenderOutbox {
    commands: Vec<RenderCommand>,
}

impl RenderOutbox {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, command: RenderCommand) {
        self.commands.push(command);
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Entnimmt alle Befehle in Erzeugungsreihenfolge.
    pub fn drain(&mut self) -> Vec<RenderCommand> {
        std::mem::take(&mut self.commands)
    }
}
