use common::games::tictactoe::{GameStatus, TicTacToeSession};

use super::board::BoardUi;
use super::colors;
use super::shortcut::UndoShortcut;
use crate::config::{BoardConfig, Config};

pub struct TicTacToeApp {
    session: TicTacToeSession,
    board_ui: BoardUi,
    board_config: BoardConfig,
    undo_shortcut: UndoShortcut,
}

impl TicTacToeApp {
    const STATUS_TEXT_SIZE: f32 = 20.0;

    pub fn new(config: &Config) -> Self {
        Self {
            session: TicTacToeSession::new(),
            board_ui: BoardUi::new(),
            board_config: config.board,
            undo_shortcut: UndoShortcut::register(),
        }
    }

    fn handle_input(&mut self, ctx: &egui::Context) {
        if self.undo_shortcut.pressed(ctx) {
            let _ = self.session.undo();
        }
    }

    fn render_status(&self, ui: &mut egui::Ui) {
        let text = egui::RichText::new(self.session.status_text())
            .size(Self::STATUS_TEXT_SIZE)
            .strong()
            .color(colors::TEXT);
        ui.label(text);
    }

    fn render_controls(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            if ui.button("New game").clicked() {
                self.session.restart();
            }
            if ui
                .add_enabled(self.session.can_undo(), egui::Button::new("Undo (Ctrl+Z)"))
                .clicked()
            {
                let _ = self.session.undo();
            }
            ui.label(
                egui::RichText::new(format!("Moves: {}", self.session.move_count()))
                    .color(colors::TEXT),
            );
        });
    }

    /// One frame of the game screen.
    pub fn show(&mut self, ctx: &egui::Context) {
        self.handle_input(ctx);

        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(colors::BACKGROUND).inner_margin(egui::Margin::same(20)))
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    self.render_status(ui);
                    ui.add_space(16.0);

                    let in_progress = self.session.status() == GameStatus::InProgress;
                    let clicked = self.board_ui.render(
                        ui,
                        self.session.board(),
                        self.session.winning_line(),
                        in_progress,
                        &self.board_config,
                    );
                    if let Some(index) = clicked {
                        let _ = self.session.place_mark(index);
                    }

                    ui.add_space(16.0);
                    self.render_controls(ui);
                });
            });
    }
}

impl eframe::App for TicTacToeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.show(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::shortcut::tests::key_press;
    use common::games::tictactoe::Mark;

    fn run_frame(app: &mut TicTacToeApp, ctx: &egui::Context, input: egui::RawInput) {
        let _ = ctx.run(input, |ctx| app.show(ctx));
    }

    fn app_with_moves(moves: &[usize]) -> TicTacToeApp {
        let mut app = TicTacToeApp::new(&Config::default());
        for &index in moves {
            app.session.place_mark(index).unwrap();
        }
        app
    }

    #[test]
    fn test_ctrl_z_undoes_last_move() {
        let ctx = egui::Context::default();
        let mut app = app_with_moves(&[0, 4, 8]);

        run_frame(&mut app, &ctx, key_press(egui::Key::Z, egui::Modifiers::CTRL));

        assert_eq!(app.session.move_count(), 2);
        assert_eq!(app.session.current_turn(), Mark::X);
    }

    #[test]
    fn test_ctrl_z_on_fresh_game_changes_nothing() {
        let ctx = egui::Context::default();
        let mut app = app_with_moves(&[]);

        run_frame(&mut app, &ctx, key_press(egui::Key::Z, egui::Modifiers::CTRL));

        assert_eq!(app.session.move_count(), 0);
        assert_eq!(app.session.current_turn(), Mark::X);
    }

    #[test]
    fn test_frame_without_input_keeps_state() {
        let ctx = egui::Context::default();
        let mut app = app_with_moves(&[0, 1, 3, 4, 6]);

        run_frame(&mut app, &ctx, egui::RawInput::default());

        assert_eq!(app.session.winner(), Some(Mark::X));
        assert_eq!(app.session.move_count(), 5);
    }
}
