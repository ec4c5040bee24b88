//! Gespiegelter Renderer-Zustand: Annotationen und Overlays nach Handle.

use indexmap::IndexMap;

use crate::shared::{Annotation, AnnotationId, Overlay, OverlayId, OverlayKind, RenderCommand};

/// Alles, was aktuell auf der Karte sichtbar ist.
///
/// Einfügereihenfolge bestimmt die Zeichenreihenfolge.
#[derive(Debug, Default)]
pub struct MapScene {
    annotations: IndexMap<AnnotationId, Annotation>,
    overlays: IndexMap<OverlayId, Overlay>,
}

impl MapScene {
    /// Erstellt eine leere Szene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wendet einen Render-Befehl an.
    ///
    /// Entfernen unbekannter Handles ist ein No-op.
    pub fn apply(&mut self, command: RenderCommand) {
        match command {
            RenderCommand::AddAnnotation { id, annotation } => {
                self.annotations.insert(id, annotation);
            }
            RenderCommand::RemoveAnnotation { id } => {
                if self.annotations.shift_remove(&id).is_none() {
                    log::debug!("Annotation {:?} nicht vorhanden", id);
                }
            }
            RenderCommand::AddOverlay { id, overlay } => {
                self.overlays.insert(id, overlay);
            }
            RenderCommand::RemoveOverlay { id } => {
                if self.overlays.shift_remove(&id).is_none() {
                    log::debug!("Overlay {:?} nicht vorhanden", id);
                }
            }
        }
    }

    /// Wendet alle Befehle in Reihenfolge an.
    pub fn apply_all(&mut self, commands: impl IntoIterator<Item = RenderCommand>) {
        for command in commands {
            self.apply(command);
        }
    }

    pub fn annotations(&self) -> impl Iterator<Item = (&AnnotationId, &Annotation)> {
        self.annotations.iter()
    }

    pub fn overlays(&self) -> impl Iterator<Item = (&OverlayId, &Overlay)> {
        self.overlays.iter()
    }

    pub fn annotation(&self, id: &AnnotationId) -> Option<&Annotation> {
        self.annotations.get(id)
    }

    fn count_overlays(&self, kind: OverlayKind) -> usize {
        self.overlays.values().filter(|o| o.kind == kind).count()
    }

    /// Anzahl gezeichneter Dreieckskanten.
    pub fn edge_line_count(&self) -> usize {
        self.count_overlays(OverlayKind::EdgeLine)
    }

    /// Anzahl gezeichneter Dreiecksflächen (0 oder 1).
    pub fn triangle_count(&self) -> usize {
        self.count_overlays(OverlayKind::Triangle)
    }

    /// Anzahl gezeichneter Routen.
    pub fn route_count(&self) -> usize {
        self.count_overlays(OverlayKind::RoutePath)
    }

    /// Anzahl der Kanten-Labels.
    pub fn label_count(&self) -> usize {
        self.annotations
            .keys()
            .filter(|id| matches!(id, AnnotationId::Label(_)))
            .count()
    }

    /// Anzahl der Eckpunkt-Marker.
    pub fn vertex_marker_count(&self) -> usize {
        self.annotations
            .keys()
            .filter(|id| matches!(id, AnnotationId::Vertex(_)))
            .count()
    }

    /// Texte aller Kanten-Labels in Zeichenreihenfolge.
    pub fn label_titles(&self) -> Vec<&str> {
        self.annotations
            .values()
            .filter_map(|a| a.title.as_deref())
            .collect()
    }

    /// Gibt `true` zurück, wenn nichts gezeichnet ist.
    pub fn is_empty(&self) -> bool {
        self.annotations.is_empty() && self.overlays.is_empty()
    }
}
