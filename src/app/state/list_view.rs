use crate::core::Place;

/// Ein Listeneintrag (Karte) für einen sichtbaren Ort.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    /// Orts-ID
    pub id: String,
    /// Name
    pub title: String,
    /// Ort/Stadt
    pub meta: String,
    /// Adresse (falls vorhanden)
    pub address: Option<String>,
}

impl Card {
    /// Baut die Karte für einen Ort.
    pub fn from_place(place: &Place) -> Self {
        Self {
            id: place.id.clone(),
            title: place.name.clone(),
            meta: place.city.clone(),
            address: place.address().map(str::to_string),
        }
    }
}

/// Listen-Ansicht: gerenderte Karten und die höchstens eine aktive Karte.
#[derive(Debug, Clone, Default)]
pub struct ListView {
    cards: Vec<Card>,
    /// Index der aktiven Karte (bei doppelten IDs die letzte)
    active_index: Option<usize>,
    /// Signalisiert der UI, die aktive Karte in den sichtbaren Bereich zu scrollen
    pub scroll_to_active: bool,
}

impl ListView {
    /// Erstellt eine leere Liste.
    pub fn new() -> Self {
        Self::default()
    }

    /// Verwirft alle Karten und erzeugt eine pro Ort, in Reihenfolge.
    /// Neu erzeugte Karten sind inaktiv.
    pub fn render(&mut self, filtered: &[Place]) {
        self.cards = filtered.iter().map(Card::from_place).collect();
        self.active_index = None;
        self.scroll_to_active = false;
    }

    /// Markiert genau die Karte mit `id` als aktiv, alle anderen als inaktiv.
    /// Bei doppelten IDs gewinnt die letzte Karte (wie bei den Markern).
    /// Unbekannte IDs setzen alle Karten auf inaktiv.
    pub fn set_active(&mut self, id: &str) {
        self.active_index = self.cards.iter().rposition(|c| c.id == id);
        if self.active_index.is_some() {
            self.scroll_to_active = true;
        }
    }

    /// Alle Karten in Reihenfolge.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// ID der aktiven Karte.
    pub fn active_id(&self) -> Option<&str> {
        self.active_card().map(|c| c.id.as_str())
    }

    /// Die aktive Karte.
    pub fn active_card(&self) -> Option<&Card> {
        self.active_index.and_then(|i| self.cards.get(i))
    }

    /// Gibt zurück, ob die Karte an Position `index` aktiv ist.
    pub fn is_active_at(&self, index: usize) -> bool {
        self.active_index == Some(index)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.cards.iter().any(|c| c.id == id)
    }

    /// IDs aller Karten in Reihenfolge.
    pub fn card_ids(&self) -> Vec<&str> {
        self.cards.iter().map(|c| c.id.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn places() -> Vec<Place> {
        vec![
            Place::new("1", "Museo Egizio", "Torino", 45.0684, 7.6843).with_address("Via Accademia"),
            Place::new("2", "Mole Antonelliana", "Torino", 45.0690, 7.6932),
        ]
    }

    #[test]
    fn render_builds_one_card_per_place() {
        let mut list = ListView::new();
        list.render(&places());

        assert_eq!(list.card_ids(), vec!["1", "2"]);
        assert_eq!(list.cards()[0].address.as_deref(), Some("Via Accademia"));
        assert_eq!(list.cards()[1].address, None);
    }

    #[test]
    fn set_active_marks_exactly_one() {
        let mut list = ListView::new();
        list.render(&places());

        list.set_active("1");
        list.set_active("2");

        assert!(list.is_active_at(1));
        assert!(!list.is_active_at(0));
        assert_eq!(list.active_id(), Some("2"));
    }

    #[test]
    fn set_active_with_duplicate_ids_marks_only_last_card() {
        let mut list = ListView::new();
        list.render(&[
            Place::new("x", "Primo", "Torino", 45.0, 7.6),
            Place::new("y", "Altro", "Torino", 45.05, 7.65),
            Place::new("x", "Secondo", "Torino", 45.1, 7.7),
        ]);

        list.set_active("x");

        let active: Vec<usize> = (0..list.cards().len())
            .filter(|&i| list.is_active_at(i))
            .collect();
        assert_eq!(active, vec![2]);
        assert_eq!(list.active_card().map(|c| c.title.as_str()), Some("Secondo"));
    }

    #[test]
    fn set_active_unknown_clears_all() {
        let mut list = ListView::new();
        list.render(&places());
        list.set_active("1");

        list.set_active("missing");

        assert_eq!(list.active_id(), None);
    }

    #[test]
    fn rerender_resets_active_card() {
        let mut list = ListView::new();
        list.render(&places());
        list.set_active("1");

        list.render(&places());

        assert_eq!(list.active_id(), None);
    }
}
