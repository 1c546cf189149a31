use eframe::egui;

use crate::app::state::AppState;
use crate::app::theme::colors;
use crate::app::types::AppView;

pub mod account_view;
pub mod auth_view;
pub mod directory_view;

pub fn render_top_bar(ctx: &egui::Context, state: &mut AppState) {
    let frame_style = egui::Frame::default()
        .fill(colors::TOP_BAR_BG)
        .inner_margin(egui::Margin::symmetric(12, 8));

    egui::TopBottomPanel::top("top_panel")
        .frame(frame_style)
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.colored_label(
                    colors::TEXT_LIGHT,
                    egui::RichText::new("🏢 BizDir").size(18.0).strong(),
                );

                if state.session.is_authenticated() {
                    ui.add_space(24.0);
                    if ui.button("Directory").clicked() {
                        state.set_view(AppView::Directory);
                    }
                    if ui.button("My Account").clicked() {
                        state.set_view(AppView::Account);
                    }
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.add_space(16.0);
                    if state.session.is_authenticated() {
                        if ui.button("Logout").clicked() {
                            state.logout();
                        }
                        if let Some(session) = state.session.current() {
                            ui.colored_label(colors::TEXT_SECONDARY, &session.full_name);
                        }
                    }
                });
            });
        });
}

pub fn render_main_panel(ctx: &egui::Context, state: &mut AppState) {
    let frame = egui::Frame::default()
        .fill(colors::BG_DARK)
        .inner_margin(egui::Margin::same(0));

    egui::CentralPanel::default()
        .frame(frame)
        .show(ctx, |ui| match state.view {
            AppView::Auth => auth_view::render(ui, state),
            AppView::Directory => directory_view::render(ui, state),
            AppView::Account => account_view::render(ctx, ui, state),
        });
}
