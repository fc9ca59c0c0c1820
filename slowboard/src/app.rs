//! slowBoard application

use egui::{Align2, Context, FontId, Key, Pos2, Rect, Sense, Stroke, Vec2};
use slowboard::{BoardConfig, Command, Game, Piece, PointerInput, Side};
use slowcore::theme::SlowColors;
use slowcore::SlowTheme;

const KEY_COMMANDS: &[(Key, Command)] = &[
    (Key::R, Command::Reset),
    (Key::C, Command::ClearCurrentSide),
    (Key::D, Command::DumpGrid),
];

pub struct SlowBoardApp {
    game: Game,
    theme: SlowTheme,
}

impl SlowBoardApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: &BoardConfig) -> Self {
        Self {
            game: Game::new(config),
            theme: SlowTheme::default(),
        }
    }

    fn handle_keys(&mut self, ctx: &Context) {
        for &(key, command) in KEY_COMMANDS {
            if ctx.input(|i| i.key_pressed(key)) {
                if let Some(text) = self.game.apply(command) {
                    log::info!("occupancy grid\n{}", text);
                }
            }
        }
    }

    /// This frame's pointer sample in board coordinates.
    fn pointer_input(ctx: &Context, board_origin: Pos2) -> Option<PointerInput> {
        ctx.input(|i| {
            let pos = i.pointer.latest_pos()?;
            Some(PointerInput {
                pos: (pos - board_origin).to_pos2(),
                pressed: i.pointer.primary_pressed(),
                released: i.pointer.primary_released(),
            })
        })
    }

    fn render_board(&mut self, ui: &mut egui::Ui) {
        let geometry = *self.game.geometry();
        let origin = ui.max_rect().min;
        let offset = origin.to_vec2();
        let board_rect = geometry.rect().translate(offset);
        ui.allocate_rect(board_rect, Sense::hover());

        if let Some(input) = Self::pointer_input(ui.ctx(), origin) {
            self.game.frame(input);
        }

        let painter = ui.painter();
        for cell in slowboard::Cell::all() {
            let rect = geometry.cell_rect(cell).translate(offset);
            let fill = if cell.is_dark() { SlowColors::SHADE } else { SlowColors::WHITE };
            painter.rect_filled(rect, 0.0, fill);
        }
        painter.rect_stroke(board_rect, 0.0, Stroke::new(2.0, SlowColors::BLACK));

        // Held piece goes on top of everything else.
        let held = self.game.dragging().map(|d| d.piece);
        let font = FontId::proportional(geometry.cell_size() * 0.7);
        let draw = |piece: &Piece| {
            painter.text(
                piece.pos + offset,
                Align2::CENTER_CENTER,
                piece.kind.symbol(piece.side),
                font.clone(),
                SlowColors::BLACK,
            );
        };
        let all = || self.game.pieces(Side::White).iter().chain(self.game.pieces(Side::Black));
        all().filter(|p| Some(p.id) != held).for_each(&draw);
        all().filter(|p| Some(p.id) == held).for_each(&draw);

        for side in [Side::White, Side::Black] {
            if self.game.pieces(side).is_empty() {
                self.draw_banner(painter, ui.max_rect(), side.opposite());
            }
        }
    }

    fn draw_banner(&self, painter: &egui::Painter, area: Rect, winner: Side) {
        let rect = Rect::from_center_size(area.center(), Vec2::new(275.0, 50.0));
        painter.rect_filled(rect, 0.0, SlowColors::WHITE);
        painter.rect_stroke(rect, 0.0, Stroke::new(2.0, SlowColors::BLACK));
        painter.text(
            rect.center(),
            Align2::CENTER_CENTER,
            winner.victory_banner(),
            self.theme.banner_font(),
            SlowColors::BLACK,
        );
    }
}

impl eframe::App for SlowBoardApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_keys(ctx);

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(SlowColors::WHITE))
            .show(ctx, |ui| {
                self.render_board(ui);
            });

        // Keep frames coming while a piece is held so it tracks the pointer.
        if self.game.dragging().is_some() {
            ctx.request_repaint();
        }
    }
}
