use eframe::egui;

use crate::app::state::AppState;
use crate::app::theme::colors;
use crate::app::types::Business;

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    state.ensure_directory_loaded();

    egui::ScrollArea::vertical().show(ui, |ui| {
        ui.vertical_centered(|ui| {
            ui.set_max_width(640.0);
            ui.add_space(24.0);
            ui.label(
                egui::RichText::new("Business Directory")
                    .size(24.0)
                    .strong()
                    .color(colors::TEXT_LIGHT),
            );
            ui.add_space(12.0);

            filter_bar(ui, state);
            ui.add_space(12.0);

            if let Some(error) = &state.directory.error {
                ui.colored_label(colors::ERROR, error);
                ui.add_space(8.0);
            }

            if state.directory.loading {
                ui.horizontal(|ui| {
                    ui.colored_label(colors::TEXT_SECONDARY, "Loading businesses...");
                    ui.spinner();
                });
                return;
            }

            if let Some(selected) = state.directory.selected.clone() {
                business_details(ui, state, &selected);
                return;
            }

            ui.colored_label(
                colors::TEXT_SECONDARY,
                format!("{} businesses found", state.directory.total),
            );
            ui.add_space(8.0);

            let businesses = state.directory.businesses.clone();
            for business in &businesses {
                business_card(ui, state, business);
                ui.add_space(6.0);
            }
        });
    });
}

fn filter_bar(ui: &mut egui::Ui, state: &mut AppState) {
    ui.horizontal(|ui| {
        ui.add_sized(
            [220.0, 28.0],
            egui::TextEdit::singleline(&mut state.directory.filters.search)
                .hint_text("Search businesses")
                .text_color(colors::TEXT_LIGHT),
        );
        ui.add_sized(
            [130.0, 28.0],
            egui::TextEdit::singleline(&mut state.directory.filters.industry)
                .hint_text("Industry")
                .text_color(colors::TEXT_LIGHT),
        );
        ui.add_sized(
            [130.0, 28.0],
            egui::TextEdit::singleline(&mut state.directory.filters.location)
                .hint_text("Location")
                .text_color(colors::TEXT_LIGHT),
        );
        let search = egui::Button::new(egui::RichText::new("Search").color(colors::TEXT_LIGHT))
            .fill(colors::ACCENT);
        if ui.add(search).clicked() {
            state.close_business();
            state.reload_directory();
        }
    });
}

fn business_card(ui: &mut egui::Ui, state: &mut AppState, business: &Business) {
    egui::Frame::default()
        .fill(colors::CARD_BG)
        .corner_radius(egui::CornerRadius::same(6))
        .inner_margin(egui::Margin::same(10))
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.vertical(|ui| {
                    ui.colored_label(
                        colors::TEXT_LIGHT,
                        egui::RichText::new(&business.name).strong(),
                    );
                    let line = match (&business.industry, &business.location) {
                        (Some(industry), Some(location)) => format!("{industry} · {location}"),
                        (Some(industry), None) => industry.clone(),
                        (None, Some(location)) => location.clone(),
                        (None, None) => String::new(),
                    };
                    if !line.is_empty() {
                        ui.colored_label(colors::TEXT_SECONDARY, line);
                    }
                });
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("Details").clicked() {
                        state.open_business(business.id);
                    }
                });
            });
        });
}

fn business_details(ui: &mut egui::Ui, state: &mut AppState, business: &Business) {
    egui::Frame::default()
        .fill(colors::CARD_BG)
        .corner_radius(egui::CornerRadius::same(6))
        .inner_margin(egui::Margin::same(14))
        .show(ui, |ui| {
            ui.colored_label(
                colors::TEXT_LIGHT,
                egui::RichText::new(&business.name).size(20.0).strong(),
            );
            ui.add_space(6.0);
            for (label, value) in [
                ("Industry", &business.industry),
                ("Location", &business.location),
                ("Phone", &business.phone),
                ("Email", &business.email),
                ("Website", &business.website),
            ] {
                if let Some(value) = value {
                    ui.horizontal(|ui| {
                        ui.colored_label(colors::TEXT_SECONDARY, format!("{label}:"));
                        ui.colored_label(colors::TEXT_LIGHT, value);
                    });
                }
            }
            if let Some(description) = &business.description {
                ui.add_space(8.0);
                ui.colored_label(colors::TEXT_LIGHT, description);
            }
            ui.add_space(10.0);
            if ui.button("Back to results").clicked() {
                state.close_business();
            }
        });
}
