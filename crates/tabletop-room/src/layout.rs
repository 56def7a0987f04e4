//! Initial marker placement.
//!
//! Dots sit in two vertical columns hugging the left and right edges,
//! hexagons stack upward from just above each dot column, and squares run
//! in two horizontal rows along the top and bottom edges. Coordinates are
//! top-left corners in board pixels and must agree with the client's CSS.

use serde::{Deserialize, Serialize};
use tabletop_protocol::{Dot, ValuedMarker};

/// Board and marker dimensions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardLayout {
    pub width: f64,
    pub height: f64,
    /// Dots per column.
    pub dot_count: usize,
    /// Edge length of every marker.
    pub marker_size: f64,
    /// Gap between markers in a column.
    pub dot_margin: f64,
    /// Distance of the left column from the left edge. The right column
    /// mirrors it.
    pub dot_left_offset: f64,
    /// Hexagons per column.
    pub hex_count: usize,
    /// Squares per row.
    pub square_count: usize,
    /// Gap between squares in a row.
    pub square_margin: f64,
    pub hex_value: i64,
    pub square_value: i64,
}

impl Default for BoardLayout {
    fn default() -> Self {
        Self {
            width: 500.0,
            height: 500.0,
            dot_count: 3,
            marker_size: 20.0,
            dot_margin: 10.0,
            dot_left_offset: 10.0,
            hex_count: 3,
            square_count: 10,
            square_margin: 10.0,
            hex_value: 20,
            square_value: 6,
        }
    }
}

impl BoardLayout {
    fn dot_right_offset(&self) -> f64 {
        self.width - self.marker_size - self.dot_left_offset
    }

    /// Top of the dot columns, which are centered vertically.
    fn dot_column_top(&self) -> f64 {
        let n = self.dot_count as f64;
        let total = n * self.marker_size + (n - 1.0).max(0.0) * self.dot_margin;
        (self.height - total) / 2.0
    }

    fn column_step(&self) -> f64 {
        self.marker_size + self.dot_margin
    }

    /// Left column top to bottom, then right column top to bottom.
    pub fn dots(&self) -> Vec<Dot> {
        let top = self.dot_column_top();
        [self.dot_left_offset, self.dot_right_offset()]
            .into_iter()
            .flat_map(|x| {
                (0..self.dot_count).map(move |i| Dot {
                    x,
                    y: top + i as f64 * self.column_step(),
                })
            })
            .collect()
    }

    /// Left stack then right stack, each starting one step above the dot
    /// column and growing upward.
    pub fn hexes(&self) -> Vec<ValuedMarker> {
        let base = self.dot_column_top() - self.dot_margin - self.marker_size;
        [self.dot_left_offset, self.dot_right_offset()]
            .into_iter()
            .flat_map(|x| {
                (0..self.hex_count).map(move |i| ValuedMarker {
                    x,
                    y: base - i as f64 * self.column_step(),
                    value: self.hex_value,
                })
            })
            .collect()
    }

    /// Top row left to right, then bottom row left to right. Rows are
    /// centered horizontally.
    pub fn squares(&self) -> Vec<ValuedMarker> {
        let n = self.square_count as f64;
        let total = n * self.marker_size + (n - 1.0).max(0.0) * self.square_margin;
        let left = (self.width - total) / 2.0;
        let step = self.marker_size + self.square_margin;
        let top = self.dot_margin;
        let bottom = self.height - self.dot_margin - self.marker_size;

        [top, bottom]
            .into_iter()
            .flat_map(|y| {
                (0..self.square_count).map(move |i| ValuedMarker {
                    x: left + i as f64 * step,
                    y,
                    value: self.square_value,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout_marker_counts() {
        let layout = BoardLayout::default();
        assert_eq!(layout.dots().len(), 6);
        assert_eq!(layout.hexes().len(), 6);
        assert_eq!(layout.squares().len(), 20);
    }

    #[test]
    fn test_dots_form_two_centered_columns() {
        let dots = BoardLayout::default().dots();
        let left: Vec<(f64, f64)> = dots[..3].iter().map(|d| (d.x, d.y)).collect();
        let right: Vec<(f64, f64)> = dots[3..].iter().map(|d| (d.x, d.y)).collect();
        assert_eq!(left, vec![(10.0, 210.0), (10.0, 240.0), (10.0, 270.0)]);
        assert_eq!(right, vec![(470.0, 210.0), (470.0, 240.0), (470.0, 270.0)]);
    }

    #[test]
    fn test_hexes_stack_upward_above_dots() {
        let hexes = BoardLayout::default().hexes();
        let ys: Vec<f64> = hexes.iter().map(|h| h.y).collect();
        assert_eq!(ys, vec![180.0, 150.0, 120.0, 180.0, 150.0, 120.0]);
        assert!(hexes[..3].iter().all(|h| h.x == 10.0));
        assert!(hexes[3..].iter().all(|h| h.x == 470.0));
        assert!(hexes.iter().all(|h| h.value == 20));
    }

    #[test]
    fn test_squares_form_top_and_bottom_rows() {
        let squares = BoardLayout::default().squares();
        assert_eq!((squares[0].x, squares[0].y), (105.0, 10.0));
        assert_eq!((squares[9].x, squares[9].y), (375.0, 10.0));
        assert_eq!((squares[10].x, squares[10].y), (105.0, 470.0));
        assert_eq!((squares[19].x, squares[19].y), (375.0, 470.0));
        assert!(squares.iter().all(|s| s.value == 6));
    }

    #[test]
    fn test_layout_is_deterministic() {
        let layout = BoardLayout::default();
        assert_eq!(layout.dots(), layout.dots());
        assert_eq!(layout.squares(), BoardLayout::default().squares());
    }
}
