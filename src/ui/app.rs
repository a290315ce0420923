//! Main application for the Omok GUI

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel, Vec2};

use super::board_view::BoardView;
use super::session::{GameMode, NoticeKind, Session};
use super::theme::*;
use crate::{Outcome, Stone};

/// Top-level application. Shows the menu until a mode is chosen, then
/// runs the game screen for that session; leaving the game drops the
/// session, scores included.
pub struct OmokApp {
    session: Option<Session>,
    board_view: BoardView,
}

impl Default for OmokApp {
    fn default() -> Self {
        Self {
            session: None,
            board_view: BoardView::default(),
        }
    }
}

impl OmokApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self::default()
    }

    /// Mode selection screen. Returns the chosen mode, if any.
    fn menu_screen(ctx: &Context) -> Option<GameMode> {
        let mut chosen = None;

        CentralPanel::default()
            .frame(Frame::new().fill(PANEL_BG))
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.add_space(ui.available_height() * 0.22);

                    ui.label(RichText::new("OMOK").size(44.0).strong().color(TEXT_PRIMARY));
                    ui.label(
                        RichText::new("Five in a row on a 19x19 board")
                            .size(14.0)
                            .color(TEXT_SECONDARY),
                    );
                    ui.add_space(32.0);

                    let menu_button = |text: &str| {
                        egui::Button::new(RichText::new(text).size(16.0).color(TEXT_PRIMARY))
                            .min_size(Vec2::new(220.0, 44.0))
                            .corner_radius(CornerRadius::same(8))
                            .fill(CARD_BG)
                    };

                    if ui.add(menu_button("Two Players")).clicked() {
                        chosen = Some(GameMode::PvP);
                    }
                    ui.add_space(10.0);
                    if ui.add(menu_button("vs Computer")).clicked() {
                        chosen = Some(GameMode::PvE);
                    }

                    ui.add_space(24.0);
                    ui.label(
                        RichText::new("Black moves first. First five in a row wins.")
                            .size(11.0)
                            .color(TEXT_MUTED),
                    );
                });
            });

        chosen
    }

    /// Game screen for a running session. Returns true when the player
    /// wants to go back to the menu.
    fn game_screen(ctx: &Context, session: &mut Session, board_view: &mut BoardView) -> bool {
        let mut back_to_menu = Self::handle_input(ctx, session);

        // Play the computer reply once its delay has elapsed
        session.poll_ai();

        TopBottomPanel::top("top_bar")
            .frame(Frame::new().fill(PANEL_BG).inner_margin(8.0))
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(RichText::new("OMOK").size(16.0).strong().color(TEXT_PRIMARY));
                    ui.add_space(6.0);
                    ui.label(RichText::new("Five in a Row").size(11.0).color(TEXT_MUTED));

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(
                            RichText::new(session.mode.label())
                                .size(12.0)
                                .color(TEXT_SECONDARY),
                        );
                    });
                });
            });

        SidePanel::right("info_panel")
            .min_width(240.0)
            .max_width(280.0)
            .frame(Frame::new().fill(PANEL_BG).inner_margin(10.0))
            .show(ctx, |ui| {
                ui.add_space(8.0);
                Self::turn_card(ui, session);
                ui.add_space(10.0);
                Self::score_card(ui, session);
                ui.add_space(10.0);
                if Self::actions_card(ui, session) {
                    back_to_menu = true;
                }
                Self::notice_card(ui, session);
            });

        CentralPanel::default()
            .frame(Frame::new().fill(egui::Color32::from_rgb(40, 42, 46)).inner_margin(10.0))
            .show(ctx, |ui| {
                let interactive = session.is_human_turn() && !session.ai_pending();
                if let Some(pos) = board_view.show(ui, &session.game, interactive) {
                    session.try_place(pos);
                }
            });

        // Keep frames coming while the reply timer runs
        if let Some(wait) = session.ai_wait_remaining() {
            ctx.request_repaint_after(wait);
        }

        back_to_menu
    }

    /// Keyboard shortcuts. Returns true on Escape (back to menu).
    fn handle_input(ctx: &Context, session: &mut Session) -> bool {
        let mut back = false;
        ctx.input(|i| {
            // U - Undo
            if i.key_pressed(egui::Key::U) {
                session.undo();
            }

            // N - New game
            if i.key_pressed(egui::Key::N) {
                session.reset();
            }

            // Escape - Back to menu
            if i.key_pressed(egui::Key::Escape) {
                back = true;
            }
        });
        back
    }

    /// Helper to create a card frame
    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    /// Render turn indicator card
    fn turn_card(ui: &mut egui::Ui, session: &Session) {
        Self::card_frame().show(ui, |ui| {
            let is_black = session.game.turn() == Stone::Black;
            let (glyph, name, accent) = if is_black {
                ("●", "BLACK", egui::Color32::from_rgb(70, 70, 75))
            } else {
                ("○", "WHITE", egui::Color32::from_rgb(220, 220, 225))
            };

            ui.horizontal(|ui| {
                let glyph_color = if is_black {
                    TEXT_PRIMARY
                } else {
                    egui::Color32::from_rgb(30, 30, 35)
                };

                let (rect, _) = ui.allocate_exact_size(Vec2::new(48.0, 48.0), egui::Sense::hover());
                ui.painter().circle_filled(rect.center(), 22.0, accent);
                ui.painter().text(
                    rect.center(),
                    egui::Align2::CENTER_CENTER,
                    glyph,
                    egui::FontId::proportional(28.0),
                    glyph_color,
                );

                ui.add_space(12.0);

                ui.vertical(|ui| {
                    ui.add_space(4.0);
                    ui.label(RichText::new(name).size(18.0).strong().color(TEXT_PRIMARY));

                    let status = match session.game.outcome() {
                        Outcome::Win(_) | Outcome::Draw => ("Game over", WIN_HIGHLIGHT),
                        Outcome::InProgress if session.ai_pending() => {
                            ("Computer is thinking...", TEXT_SECONDARY)
                        }
                        Outcome::InProgress => match session.mode {
                            GameMode::PvE => ("Your turn", STATUS_READY),
                            GameMode::PvP => ("To move", STATUS_READY),
                        },
                    };
                    ui.label(RichText::new(status.0).size(12.0).color(status.1));
                });
            });
        });
    }

    /// Render session score card
    fn score_card(ui: &mut egui::Ui, session: &Session) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("SCORE").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            Self::score_row(
                ui,
                "●",
                "Black",
                session.black_wins,
                egui::Color32::from_rgb(60, 60, 65),
            );
            ui.add_space(6.0);
            Self::score_row(
                ui,
                "○",
                "White",
                session.white_wins,
                egui::Color32::from_rgb(200, 200, 205),
            );
        });
    }

    /// Render a single score row
    fn score_row(ui: &mut egui::Ui, glyph: &str, name: &str, wins: u32, glyph_color: egui::Color32) {
        ui.horizontal(|ui| {
            ui.label(RichText::new(glyph).size(18.0).color(glyph_color));
            ui.add_space(4.0);
            ui.label(RichText::new(name).size(13.0).color(TEXT_PRIMARY));

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(
                    RichText::new(format!("{wins}"))
                        .size(16.0)
                        .strong()
                        .color(TEXT_PRIMARY),
                );
            });
        });
    }

    /// Render actions card. Returns true when "Back to menu" was clicked.
    fn actions_card(ui: &mut egui::Ui, session: &mut Session) -> bool {
        let mut to_menu = false;

        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("ACTIONS").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                if ui.button("Undo (U)").clicked() {
                    session.undo();
                }
                if ui.button("New game (N)").clicked() {
                    session.reset();
                }
            });

            ui.add_space(6.0);
            if ui.button("Back to menu (Esc)").clicked() {
                to_menu = true;
            }

            ui.add_space(8.0);
            ui.label(
                RichText::new(format!("Move #{}", session.game.moves().len()))
                    .size(11.0)
                    .color(TEXT_SECONDARY),
            );
        });

        to_menu
    }

    /// Render the banner notice, with a "New Game" button once the game
    /// is decided.
    fn notice_card(ui: &mut egui::Ui, session: &mut Session) {
        let Some(notice) = session.notice.clone() else {
            return;
        };
        let fill = match notice.kind {
            NoticeKind::Info => NOTICE_INFO_BG,
            NoticeKind::Victory => NOTICE_VICTORY_BG,
            NoticeKind::Draw => NOTICE_DRAW_BG,
        };

        ui.add_space(10.0);
        Frame::new()
            .fill(fill)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(
                        RichText::new(&notice.text)
                            .size(14.0)
                            .strong()
                            .color(TEXT_PRIMARY),
                    );

                    if session.game.outcome().is_terminal() {
                        ui.add_space(8.0);
                        if ui
                            .button(RichText::new("New Game").size(13.0).strong())
                            .clicked()
                        {
                            session.reset();
                        }
                    }
                });
            });
    }
}

impl eframe::App for OmokApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        match &mut self.session {
            None => {
                if let Some(mode) = Self::menu_screen(ctx) {
                    self.session = Some(Session::new(mode));
                }
            }
            Some(session) => {
                if Self::game_screen(ctx, session, &mut self.board_view) {
                    self.session = None;
                }
            }
        }
    }
}
