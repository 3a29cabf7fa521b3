use tracing::debug;

use crate::page::{Card, Grid, Placeholder};
use crate::types::Record;

/// Replace the grid with one card per image record, or the "no images"
/// placeholder when there is nothing to show.
pub fn render(grid: &mut Grid, records: &[Record]) {
    let cards: Vec<Card> = records.iter().filter(|r| r.is_image()).map(card_for).collect();
    debug!(cards = cards.len(), skipped = records.len() - cards.len(), "render grid");
    *grid = if cards.is_empty() {
        Grid::Placeholder(Placeholder::NoImages)
    } else {
        Grid::Cards(cards)
    };
}

pub fn show_placeholder(grid: &mut Grid, placeholder: Placeholder) {
    *grid = Grid::Placeholder(placeholder);
}

fn card_for(record: &Record) -> Card {
    Card {
        image_src: record.url.clone(),
        alt: record.title.clone(),
        caption: record.caption(),
        record: record.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::record;

    fn scenario() -> Vec<Record> {
        vec![
            record("A", "2024-01-01", "image", "a.jpg"),
            record("B", "2024-01-05", "video", "b.mp4"),
        ]
    }

    #[test]
    fn skips_non_image_records() {
        let mut grid = Grid::default();
        render(&mut grid, &scenario());
        let cards = grid.cards();
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].caption, "A — 2024-01-01");
        assert_eq!(cards[0].image_src, "a.jpg");
        assert_eq!(cards[0].alt, "A");
    }

    #[test]
    fn empty_input_shows_no_images() {
        let mut grid = Grid::default();
        render(&mut grid, &[]);
        assert_eq!(grid.placeholder(), Some(&Placeholder::NoImages));
        render(&mut grid, &[record("V", "2024-01-05", "video", "v.mp4")]);
        assert_eq!(grid.placeholder(), Some(&Placeholder::NoImages));
    }

    #[test]
    fn rendering_twice_replaces_instead_of_appending() {
        let records = vec![
            record("A", "2024-01-01", "image", "a.jpg"),
            record("C", "2024-01-03", "image", "c.jpg"),
        ];
        let mut grid = Grid::default();
        render(&mut grid, &records);
        let first = grid.clone();
        render(&mut grid, &records);
        assert_eq!(grid, first);
        let captions: Vec<&str> = grid.cards().iter().map(|c| c.caption.as_str()).collect();
        assert_eq!(captions, vec!["A — 2024-01-01", "C — 2024-01-03"]);
    }

    #[test]
    fn cards_replace_a_placeholder() {
        let mut grid = Grid::default();
        show_placeholder(&mut grid, Placeholder::Loading);
        render(&mut grid, &scenario());
        assert!(grid.placeholder().is_none());
        assert_eq!(grid.cards().len(), 1);
    }
}
