use eframe::egui;

use crate::app::forms::{AuthMode, MessageKind};
use crate::app::state::AppState;
use crate::app::theme::colors;
use crate::app::validation::strength_label;

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    let available_rect = ui.available_rect_before_wrap();
    ui.painter().rect_filled(available_rect, 0.0, colors::BG_DARK);

    let is_signup = state.auth_form.mode == AuthMode::Signup;

    ui.scope_builder(egui::UiBuilder::new().max_rect(available_rect), |ui| {
        ui.vertical_centered(|ui| {
            let total_height = if is_signup { 460.0 } else { 300.0 };
            let top_space = (available_rect.height() - total_height).max(0.0) / 2.0;
            ui.add_space(top_space);

            ui.label(
                egui::RichText::new("🏢 BizDir")
                    .size(32.0)
                    .strong()
                    .color(colors::TEXT_LIGHT),
            );
            ui.add_space(16.0);

            // Login / Sign Up tabs
            ui.horizontal(|ui| {
                let tab_width = 120.0;
                ui.add_space((available_rect.width() - tab_width * 2.0 - 8.0) / 2.0);
                tab_button(ui, state, AuthMode::Login, "Login", tab_width);
                ui.add_space(8.0);
                tab_button(ui, state, AuthMode::Signup, "Sign Up", tab_width);
            });
            ui.add_space(16.0);

            let input_width = 280.0;
            let label_width = 90.0;
            let row_indent =
                (available_rect.width() - input_width - label_width - 20.0).max(0.0) / 2.0;

            if is_signup {
                labeled_row(ui, row_indent, label_width, "Full Name:", |ui| {
                    let mut full_name = state.auth_form.full_name.clone();
                    let response = ui.add_sized(
                        [input_width, 28.0],
                        egui::TextEdit::singleline(&mut full_name)
                            .hint_text("Enter your name")
                            .text_color(colors::TEXT_LIGHT),
                    );
                    if response.changed() {
                        state.auth_form.set_full_name(&full_name);
                    }
                });
                field_error(ui, row_indent, state.auth_form.name_error.as_deref());
                ui.add_space(8.0);
            }

            labeled_row(ui, row_indent, label_width, "Email:", |ui| {
                let mut email = state.auth_form.email.clone();
                let response = ui.add_sized(
                    [input_width, 28.0],
                    egui::TextEdit::singleline(&mut email)
                        .hint_text("Enter your email")
                        .text_color(colors::TEXT_LIGHT),
                );
                if response.changed() {
                    state.auth_form.set_email(&email);
                }
            });
            field_error(ui, row_indent, state.auth_form.email_error.as_deref());
            ui.add_space(8.0);

            labeled_row(ui, row_indent, label_width, "Password:", |ui| {
                let mut password = state.auth_form.password.clone();
                let response = ui.add_sized(
                    [input_width - 32.0, 28.0],
                    egui::TextEdit::singleline(&mut password)
                        .password(!state.auth_form.show_password)
                        .hint_text("Enter password")
                        .text_color(colors::TEXT_LIGHT),
                );
                if response.changed() {
                    state.auth_form.set_password(&password);
                }
                let eye = if state.auth_form.show_password { "🙈" } else { "👁" };
                if ui.button(eye).clicked() {
                    state.auth_form.show_password = !state.auth_form.show_password;
                }
            });

            if is_signup && !state.auth_form.password.is_empty() {
                ui.add_space(8.0);
                strength_meter(ui, state, input_width + label_width);
                criteria_checklist(ui, state);
                field_error(ui, row_indent, state.auth_form.password_check.error.as_deref());
            }

            if let Some(message) = &state.auth_form.message {
                ui.add_space(10.0);
                let color = match message.kind {
                    MessageKind::Info => colors::SUCCESS,
                    MessageKind::Error => colors::ERROR,
                };
                ui.colored_label(color, &message.text);
            }

            ui.add_space(16.0);
            let submit_label = if is_signup { "Sign Up" } else { "Login" };
            let submit = egui::Button::new(
                egui::RichText::new(submit_label).color(colors::TEXT_LIGHT),
            )
            .fill(colors::ACCENT);
            if ui
                .add_enabled(!state.auth_form.submitting, submit)
                .clicked()
            {
                state.handle_auth_submit();
            }

            if state.auth_form.submitting {
                ui.add_space(10.0);
                ui.horizontal(|ui| {
                    ui.add_space((available_rect.width() - 100.0) / 2.0);
                    ui.colored_label(colors::TEXT_SECONDARY, "Submitting...");
                    ui.spinner();
                });
            }
        });
    });
}

fn tab_button(ui: &mut egui::Ui, state: &mut AppState, mode: AuthMode, label: &str, width: f32) {
    let active = state.auth_form.mode == mode;
    let fill = if active { colors::ACCENT } else { colors::CARD_BG };
    let button = egui::Button::new(egui::RichText::new(label).color(colors::TEXT_LIGHT)).fill(fill);
    if ui.add_sized([width, 30.0], button).clicked() {
        state.auth_form.switch_mode(mode);
    }
}

fn labeled_row(
    ui: &mut egui::Ui,
    indent: f32,
    label_width: f32,
    label: &str,
    add_input: impl FnOnce(&mut egui::Ui),
) {
    ui.horizontal(|ui| {
        ui.add_space(indent);
        ui.add_sized(
            [label_width, 24.0],
            egui::Label::new(egui::RichText::new(label).color(colors::TEXT_SECONDARY)),
        );
        add_input(ui);
    });
}

fn field_error(ui: &mut egui::Ui, indent: f32, error: Option<&str>) {
    if let Some(error) = error {
        ui.horizontal(|ui| {
            ui.add_space(indent);
            ui.colored_label(colors::ERROR, error);
        });
    }
}

fn strength_meter(ui: &mut egui::Ui, state: &AppState, width: f32) {
    let strength = state.auth_form.password_check.strength;
    let color = if strength <= 2.0 {
        colors::STRENGTH_WEAK
    } else if strength < 4.0 {
        colors::STRENGTH_MEDIUM
    } else {
        colors::STRENGTH_STRONG
    };

    ui.horizontal(|ui| {
        ui.add_space((ui.available_width() - width) / 2.0);
        let (rect, _) = ui.allocate_exact_size(egui::vec2(width - 60.0, 6.0), egui::Sense::hover());
        ui.painter().rect_filled(rect, 3.0, colors::CARD_BG);
        let mut fill = rect;
        fill.set_width(rect.width() * (strength / 5.0));
        ui.painter().rect_filled(fill, 3.0, color);
        ui.colored_label(color, strength_label(strength));
    });
}

fn criteria_checklist(ui: &mut egui::Ui, state: &AppState) {
    let criteria = state.auth_form.password_check.criteria;
    let rows = [
        (criteria.length, "At least 8 characters"),
        (criteria.uppercase, "Uppercase letter"),
        (criteria.lowercase, "Lowercase letter"),
        (criteria.number, "Number"),
        (criteria.special, "Special character"),
    ];
    ui.add_space(4.0);
    for (met, label) in rows {
        let color = if met { colors::CRITERION_MET } else { colors::CRITERION_UNMET };
        ui.colored_label(color, format!("✓ {label}"));
    }
}
