use std::collections::BTreeMap;

pub const MIN_COLUMN_WIDTH: f64 = 1.0;

#[derive(Debug, Clone, PartialEq)]
pub enum ResizePhase {
    Idle,
    Dragging {
        column: String,
        start_x: f64,
        start_width: f64,
    },
}

/// Column width drag tracking. Independent of the data pipeline: it only
/// knows column names and pixel widths.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnResize {
    phase: ResizePhase,
    widths: BTreeMap<String, f64>,
}

impl Default for ColumnResize {
    fn default() -> Self {
        Self {
            phase: ResizePhase::Idle,
            widths: BTreeMap::new(),
        }
    }
}

impl ColumnResize {
    pub fn phase(&self) -> &ResizePhase {
        &self.phase
    }

    pub fn width(&self, column: &str) -> Option<f64> {
        self.widths.get(column).copied()
    }

    /// Starts a drag on `column`, whose rendered width is `current_width`.
    pub fn pointer_down(&mut self, column: &str, pointer_x: f64, current_width: f64) {
        self.phase = ResizePhase::Dragging {
            column: column.to_string(),
            start_x: pointer_x,
            start_width: current_width,
        };
    }

    /// New width of the dragged column, or `None` when idle.
    pub fn pointer_move(&mut self, pointer_x: f64) -> Option<f64> {
        let ResizePhase::Dragging {
            column,
            start_x,
            start_width,
        } = &self.phase
        else {
            return None;
        };
        let width = (start_width + (pointer_x - start_x)).max(MIN_COLUMN_WIDTH);
        self.widths.insert(column.clone(), width);
        Some(width)
    }

    pub fn pointer_up(&mut self) {
        self.phase = ResizePhase::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drag_updates_width_relative_to_start() {
        let mut resize = ColumnResize::default();
        resize.pointer_down("Name", 100.0, 80.0);

        assert_eq!(resize.pointer_move(130.0), Some(110.0));
        assert_eq!(resize.pointer_move(90.0), Some(70.0));

        resize.pointer_up();
        assert_eq!(resize.phase(), &ResizePhase::Idle);
        assert_eq!(resize.width("Name"), Some(70.0));
    }

    #[test]
    fn move_without_drag_is_ignored() {
        let mut resize = ColumnResize::default();
        assert_eq!(resize.pointer_move(50.0), None);
        assert_eq!(resize.width("Name"), None);
    }

    #[test]
    fn width_never_collapses_below_minimum() {
        let mut resize = ColumnResize::default();
        resize.pointer_down("Age", 200.0, 40.0);
        assert_eq!(resize.pointer_move(0.0), Some(MIN_COLUMN_WIDTH));
    }
}
