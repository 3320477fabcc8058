//! Main application for the Gomoku GUI

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel};

use crate::api::{MAX_DEPTH, MAX_SIDE, MIN_SIDE};
use crate::config::{FirstMove, GameConfig};

use super::board_view::{BoardOverlay, BoardView};
use super::game_state::{GameResult, GameState, HUMAN};
use super::theme::*;

/// Main Gomoku application
pub struct GomokuApp {
    state: GameState,
    board_view: BoardView,
    /// Settings being edited; applied on "New Game"
    draft: GameConfig,
    show_settings: bool,
}

impl GomokuApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: GameConfig) -> Self {
        Self {
            state: GameState::new(config.clone()),
            board_view: BoardView::default(),
            draft: config,
            show_settings: true,
        }
    }

    fn new_game(&mut self) {
        self.state = GameState::new(self.draft.clone());
    }

    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Game (N)").clicked() {
                        self.new_game();
                        ui.close_menu();
                    }
                    if ui.button("Undo (U)").clicked() {
                        self.state.undo();
                        ui.close_menu();
                    }
                });

                ui.menu_button("View", |ui| {
                    ui.checkbox(&mut self.show_settings, "Settings Panel");
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let config = &self.state.config;
                    ui.label(format!(
                        "{}x{} | {} in a row | depth {}",
                        config.rows, config.cols, config.win_streak, config.depth
                    ));
                });
            });
        });
    }

    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(240.0)
            .max_width(280.0)
            .frame(Frame::new().fill(SIDE_PANEL_BG))
            .show(ctx, |ui| {
                ui.add_space(12.0);
                self.render_title(ui);
                ui.add_space(12.0);

                self.render_status_card(ui);
                ui.add_space(10.0);

                self.render_timer_card(ui);
                ui.add_space(10.0);

                self.render_ai_card(ui);
                ui.add_space(10.0);

                self.render_actions_card(ui);

                if self.show_settings {
                    ui.add_space(10.0);
                    self.render_settings_card(ui);
                }

                if let Some(msg) = &self.state.message {
                    ui.add_space(10.0);
                    Self::render_message_card(ui, msg);
                }
            });
    }

    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    fn section_label(ui: &mut egui::Ui, text: &str) {
        ui.label(RichText::new(text).size(10.0).color(TEXT_MUTED));
        ui.add_space(6.0);
    }

    fn render_title(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("GOMOKU").size(22.0).strong().color(TEXT_PRIMARY));
        });
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            let text = format!("Connect {} - you are black", self.state.config.win_streak);
            ui.label(RichText::new(text).size(11.0).color(TEXT_MUTED));
        });
    }

    /// Whose turn, AI thinking, or the result
    fn render_status_card(&mut self, ui: &mut egui::Ui) {
        let mut start_new = false;

        Self::card_frame().show(ui, |ui| {
            Self::section_label(ui, "STATUS");

            let (headline, detail, color) = match &self.state.game_over {
                Some(GameResult::Win { winner, .. }) if *winner == HUMAN => {
                    ("You win!", "Run completed", WIN_HIGHLIGHT)
                }
                Some(GameResult::Win { .. }) => ("AI wins", "Better luck next time", TIMER_CRITICAL),
                Some(GameResult::Draw) => ("Draw", "No winner this time", TIMER_WARNING),
                None if self.state.is_ai_thinking() => ("AI thinking...", "White to move", TIMER_WARNING),
                None => ("Your turn", "Black to move", TIMER_NORMAL),
            };

            ui.label(RichText::new(headline).size(18.0).strong().color(color));
            ui.label(RichText::new(detail).size(11.0).color(TEXT_SECONDARY));

            if self.state.game_over.is_some() {
                ui.add_space(8.0);
                if Self::button(ui, "New Game") {
                    start_new = true;
                }
            }
        });

        if start_new {
            self.new_game();
        }
    }

    fn render_timer_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            Self::section_label(ui, "TIMER");

            if let Some(elapsed) = self.state.ai_thinking_elapsed() {
                let secs = elapsed.as_secs_f32();
                let color = if secs < 1.0 {
                    TIMER_NORMAL
                } else if secs < 3.0 {
                    TIMER_WARNING
                } else {
                    TIMER_CRITICAL
                };
                ui.label(RichText::new(format!("{:.2}s", secs)).size(28.0).strong().color(color));
            } else {
                let elapsed = self.state.move_timer.elapsed();
                ui.label(RichText::new(format!("{:.1}s", elapsed.as_secs_f32())).size(24.0).color(TEXT_PRIMARY));
            }

            if let Some(ai_time) = self.state.move_timer.ai_thinking_time {
                ui.add_space(4.0);
                ui.label(
                    RichText::new(format!("Last AI: {:.3}s", ai_time.as_secs_f32()))
                        .size(10.0)
                        .color(TEXT_SECONDARY),
                );
            }
        });
    }

    /// Last engine decision and its search statistics
    fn render_ai_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            Self::section_label(ui, "LAST AI MOVE");

            let Some(result) = &self.state.last_ai_result else {
                ui.label(RichText::new("Waiting for AI...").size(10.0).color(TEXT_MUTED));
                return;
            };

            let label = match result.best_move {
                Some(pos) => format!("{}{}", (b'A' + pos.col) as char, pos.row + 1),
                None => "no move".to_string(),
            };
            ui.label(RichText::new(label).size(14.0).strong().color(WIN_HIGHLIGHT));
            ui.label(RichText::new(format!("Score: {}", result.score)).size(10.0).color(TEXT_SECONDARY));
            ui.label(
                RichText::new(format!(
                    "{} nodes, {} cutoffs, {}ms",
                    result.nodes, result.cutoffs, result.time_ms
                ))
                .size(10.0)
                .color(TEXT_MUTED),
            );
        });
    }

    fn render_actions_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            Self::section_label(ui, "ACTIONS");

            ui.horizontal(|ui| {
                if Self::button(ui, "Undo") {
                    self.state.undo();
                }
                ui.add_space(4.0);
                if Self::button(ui, "New Game") {
                    self.new_game();
                }
            });

            ui.add_space(8.0);
            ui.label(
                RichText::new(format!("Move #{}", self.state.move_history.len()))
                    .size(11.0)
                    .color(TEXT_SECONDARY),
            );
        });
    }

    /// Board size, run length, depth and first player for the next game
    fn render_settings_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            Self::section_label(ui, "SETTINGS (next game)");

            let draft = &mut self.draft;
            ui.add(egui::Slider::new(&mut draft.rows, MIN_SIDE..=MAX_SIDE).text("Rows"));
            ui.add(egui::Slider::new(&mut draft.cols, MIN_SIDE..=MAX_SIDE).text("Cols"));

            let longest = draft.rows.max(draft.cols);
            draft.win_streak = draft.win_streak.clamp(3, longest);
            ui.add(egui::Slider::new(&mut draft.win_streak, 3..=longest).text("In a row"));
            ui.add(egui::Slider::new(&mut draft.depth, 1..=MAX_DEPTH).text("Depth"));

            ui.horizontal(|ui| {
                ui.label(RichText::new("First:").size(11.0).color(TEXT_SECONDARY));
                ui.radio_value(&mut draft.first_move, FirstMove::Human, "You");
                ui.radio_value(&mut draft.first_move, FirstMove::Ai, "AI");
            });
        });
    }

    fn render_message_card(ui: &mut egui::Ui, msg: &str) {
        Frame::new()
            .fill(egui::Color32::from_rgb(80, 60, 30))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.label(RichText::new(msg).size(11.0).color(TEXT_PRIMARY));
            });
    }

    /// Flat clickable label in a rounded frame
    fn button(ui: &mut egui::Ui, text: &str) -> bool {
        Frame::new()
            .fill(BUTTON_BG)
            .corner_radius(CornerRadius::same(6))
            .inner_margin(8.0)
            .show(ui, |ui| {
                ui.add(
                    egui::Label::new(RichText::new(text).size(12.0).color(TEXT_PRIMARY))
                        .sense(egui::Sense::click()),
                )
                .clicked()
            })
            .inner
    }

    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default()
            .frame(Frame::new().fill(egui::Color32::from_rgb(40, 42, 46)).inner_margin(10.0))
            .show(ctx, |ui| {
                let accepting_input = self.state.game_over.is_none()
                    && self.state.is_human_turn()
                    && !self.state.is_ai_thinking();

                let overlay = BoardOverlay {
                    last_move: self.state.last_move,
                    winning_line: self.state.game_over.as_ref().and_then(GameResult::winning_line),
                    accepting_input,
                };

                let clicked = self.board_view.show(ui, &self.state.grid, overlay);

                if let Some(pos) = clicked {
                    if let Err(msg) = self.state.try_place_stone(pos) {
                        self.state.message = Some(msg);
                    }
                }
            });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        let (undo, new_game) = ctx.input(|i| (i.key_pressed(egui::Key::U), i.key_pressed(egui::Key::N)));

        if undo {
            self.state.undo();
        }
        if new_game {
            self.new_game();
        }
    }
}

impl eframe::App for GomokuApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        self.state.check_ai_result();

        if self.state.is_ai_turn() && !self.state.is_ai_thinking() && self.state.game_over.is_none() {
            self.state.start_ai_thinking();
        }

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);

        // Keep the timer ticking while a game is in progress
        if self.state.game_over.is_none() {
            ctx.request_repaint();
        }
    }
}
