use common::games::tictactoe::{Board, CELL_COUNT, Mark, WinningLine, index_to_row_col};

use super::colors;
use crate::config::BoardConfig;

/// Paints the 3x3 grid and turns clicks into cell indices.
pub struct BoardUi {
    last_hover: Option<usize>,
}

impl BoardUi {
    const MARK_STROKE_RATIO: f32 = 0.09;
    const WIN_LINE_WIDTH: f32 = 6.0;

    pub fn new() -> Self {
        Self { last_hover: None }
    }

    /// Returns the cell clicked this frame, if any. Clicks are only reported
    /// when `accepts_clicks` is set and the cell is empty.
    pub fn render(
        &mut self,
        ui: &mut egui::Ui,
        board: &Board,
        winning_line: Option<WinningLine>,
        accepts_clicks: bool,
        config: &BoardConfig,
    ) -> Option<usize> {
        let side = config.board_side();
        let (rect, response) = ui.allocate_exact_size(egui::vec2(side, side), egui::Sense::click());

        self.last_hover = if accepts_clicks {
            response
                .hover_pos()
                .and_then(|pos| cell_at(rect, config, pos))
                .filter(|&index| board.is_empty_at(index))
        } else {
            None
        };

        let painter = ui.painter();
        painter.rect_filled(rect, 0.0, colors::GRID);

        for (index, &mark) in board.cells().iter().enumerate() {
            let cell = cell_rect(rect, config, index);
            let fill = if self.last_hover == Some(index) {
                colors::CELL_HOVER
            } else {
                colors::CELL
            };
            painter.rect_filled(cell, 0.0, fill);

            match mark {
                Mark::X => self.draw_x(painter, cell),
                Mark::O => self.draw_o(painter, cell),
                Mark::Empty => {}
            }
        }

        if let Some(line) = winning_line {
            let start = cell_rect(rect, config, line.start()).center();
            let end = cell_rect(rect, config, line.end()).center();
            painter.line_segment(
                [start, end],
                egui::Stroke::new(Self::WIN_LINE_WIDTH, colors::WIN_LINE),
            );
        }

        if response.clicked() {
            return self.last_hover;
        }
        None
    }

    fn draw_x(&self, painter: &egui::Painter, rect: egui::Rect) {
        let padding = rect.width() * 0.25;
        let stroke = egui::Stroke::new(rect.width() * Self::MARK_STROKE_RATIO, colors::MARK);

        painter.line_segment(
            [
                egui::pos2(rect.left() + padding, rect.top() + padding),
                egui::pos2(rect.right() - padding, rect.bottom() - padding),
            ],
            stroke,
        );
        painter.line_segment(
            [
                egui::pos2(rect.right() - padding, rect.top() + padding),
                egui::pos2(rect.left() + padding, rect.bottom() - padding),
            ],
            stroke,
        );
    }

    fn draw_o(&self, painter: &egui::Painter, rect: egui::Rect) {
        // r=8 of a 24 unit box drawn at 3/4 of the cell
        let radius = rect.width() * 0.75 * (8.0 / 24.0);
        let stroke = egui::Stroke::new(rect.width() * Self::MARK_STROKE_RATIO, colors::MARK);
        painter.circle_stroke(rect.center(), radius, stroke);
    }
}

pub fn cell_rect(board_rect: egui::Rect, config: &BoardConfig, index: usize) -> egui::Rect {
    let (row, col) = index_to_row_col(index);
    let step = config.cell_size + config.gap;
    egui::Rect::from_min_size(
        egui::pos2(
            board_rect.left() + config.gap + col as f32 * step,
            board_rect.top() + config.gap + row as f32 * step,
        ),
        egui::vec2(config.cell_size, config.cell_size),
    )
}

/// Cell under `pos`. Points on the grid lines between cells hit nothing.
pub fn cell_at(board_rect: egui::Rect, config: &BoardConfig, pos: egui::Pos2) -> Option<usize> {
    (0..CELL_COUNT).find(|&index| cell_rect(board_rect, config, index).contains(pos))
}
