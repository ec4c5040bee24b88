//! Geordnete Menge der ausgewählten Dreiecks-Eckpunkte (0–3 Elemente).

use super::geo::GeoCoord;

/// Maximale Anzahl Eckpunkte einer Skizze.
pub const MAX_VERTICES: usize = 3;

/// Stabiler Handle eines Eckpunkts, unabhängig von seiner Position in der Menge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId(pub u64);

/// Ein vom Nutzer gesetzter Eckpunkt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    /// Stabiler Handle (auch Handle der Punkt-Annotation)
    pub id: VertexId,
    /// Position des Eckpunkts
    pub coord: GeoCoord,
}

/// Geordnete Eckpunkt-Menge mit Generationszähler.
///
/// Die Einfügereihenfolge bleibt erhalten; jede Mutation erhöht `generation`.
#[derive(Debug, Clone)]
pub struct VertexSet {
    vertices: Vec<Vertex>,
    next_id: u64,
    generation: u64,
}

impl Default for VertexSet {
    fn default() -> Self {
        Self::new()
    }
}

impl VertexSet {
    /// Erstellt eine leere Menge.
    pub fn new() -> Self {
        Self {
            vertices: Vec::with_capacity(MAX_VERTICES),
            next_id: 1,
            generation: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Gibt `true` zurück, wenn die Menge voll ist.
    pub fn is_full(&self) -> bool {
        self.vertices.len() >= MAX_VERTICES
    }

    /// Aktuelle Generation (Anzahl bisheriger Mutationen).
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Read-only Sicht auf alle Eckpunkte in Einfügereihenfolge.
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn get(&self, index: usize) -> Option<&Vertex> {
        self.vertices.get(index)
    }

    /// Koordinaten in Einfügereihenfolge.
    pub fn coords(&self) -> Vec<GeoCoord> {
        self.vertices.iter().map(|v| v.coord).collect()
    }

    /// Liefert die drei Koordinaten, wenn die Menge genau drei Eckpunkte enthält.
    pub fn triangle(&self) -> Option<[GeoCoord; 3]> {
        match self.vertices.as_slice() {
            [a, b, c] => Some([a.coord, b.coord, c.coord]),
            _ => None,
        }
    }

    /// Index des ersten Eckpunkts (Einfügereihenfolge), der näher als
    /// `threshold_m` an `point` liegt.
    pub fn find_within(&self, point: GeoCoord, threshold_m: f64) -> Option<usize> {
        self.vertices
            .iter()
            .position(|v| v.coord.distance_to(&point) < threshold_m)
    }

    /// Hängt einen Eckpunkt an. Gibt `None` zurück, wenn die Menge voll ist.
    pub fn push(&mut self, coord: GeoCoord) -> Option<VertexId> {
        if self.is_full() {
            return None;
        }
        let id = VertexId(self.next_id);
        self.next_id += 1;
        self.vertices.push(Vertex { id, coord });
        self.generation += 1;
        Some(id)
    }

    /// Entfernt den Eckpunkt am Index. `None` bei ungültigem Index.
    pub fn remove_at(&mut self, index: usize) -> Option<Vertex> {
        if index >= self.vertices.len() {
            return None;
        }
        let removed = self.vertices.remove(index);
        self.generation += 1;
        Some(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_is_capped_at_three() {
        let mut set = VertexSet::new();
        for i in 0..5 {
            let _ = set.push(GeoCoord::new(i as f64 * 10.0, 0.0));
        }
        assert_eq!(set.len(), MAX_VERTICES);
        assert!(set.is_full());
        assert_eq!(set.generation(), 3);
    }

    #[test]
    fn ids_stay_stable_across_removal() {
        let mut set = VertexSet::new();
        let a = set.push(GeoCoord::new(0.0, 0.0)).unwrap();
        let b = set.push(GeoCoord::new(1.0, 0.0)).unwrap();
        let removed = set.remove_at(0).unwrap();
        assert_eq!(removed.id, a);
        assert_eq!(set.get(0).unwrap().id, b);

        let c = set.push(GeoCoord::new(2.0, 0.0)).unwrap();
        assert_ne!(c, a, "Handles werden nicht wiederverwendet");
    }

    #[test]
    fn find_within_returns_first_match_in_insertion_order() {
        let mut set = VertexSet::new();
        set.push(GeoCoord::new(10.0, 10.0));
        set.push(GeoCoord::new(10.0, 10.0005));

        // Beide liegen unter 100 m vom Tap, der erste gewinnt
        let hit = set.find_within(GeoCoord::new(10.0, 10.0003), 100.0);
        assert_eq!(hit, Some(0));
    }

    #[test]
    fn find_within_respects_strict_threshold() {
        let mut set = VertexSet::new();
        set.push(GeoCoord::new(0.0, 0.0));
        assert_eq!(set.find_within(GeoCoord::new(0.0, 0.01), 100.0), None);
        assert_eq!(set.find_within(GeoCoord::new(0.0, 0.0005), 100.0), Some(0));
    }

    #[test]
    fn remove_at_out_of_range_is_noop() {
        let mut set = VertexSet::new();
        set.push(GeoCoord::new(0.0, 0.0));
        assert!(set.remove_at(3).is_none());
        assert_eq!(set.len(), 1);
        assert_eq!(set.generation(), 1);
    }

    #[test]
    fn triangle_only_with_three_vertices() {
        let mut set = VertexSet::new();
        set.push(GeoCoord::new(10.0, 10.0));
        set.push(GeoCoord::new(20.0, 20.0));
        assert!(set.triangle().is_none());
        set.push(GeoCoord::new(30.0, 10.0));
        let tri = set.triangle().unwrap();
        assert_eq!(tri[2], GeoCoord::new(30.0, 10.0));
    }
}
