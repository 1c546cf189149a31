use eframe::egui;

use crate::app::forms::{AssetRef, MessageKind};
use crate::app::state::{AppState, PhotoSlot};
use crate::app::theme::colors;

pub fn render(ctx: &egui::Context, ui: &mut egui::Ui, state: &mut AppState) {
    absorb_dropped_files(ctx, state);

    egui::ScrollArea::vertical().show(ui, |ui| {
        ui.vertical_centered(|ui| {
            ui.set_max_width(520.0);
            ui.add_space(24.0);
            ui.label(
                egui::RichText::new("My Account")
                    .size(24.0)
                    .strong()
                    .color(colors::TEXT_LIGHT),
            );
            ui.add_space(16.0);

            photo_section(ui, state);
            ui.add_space(16.0);

            profile_section(ui, state);
            ui.add_space(16.0);

            password_section(ui, state);
            ui.add_space(16.0);

            if let Some(message) = &state.profile_form.message {
                let color = match message.kind {
                    MessageKind::Info => colors::SUCCESS,
                    MessageKind::Error => colors::ERROR,
                };
                ui.colored_label(color, &message.text);
                ui.add_space(8.0);
            }

            let submit = egui::Button::new(
                egui::RichText::new("Save Changes").color(colors::TEXT_LIGHT),
            )
            .fill(colors::ACCENT);
            if ui
                .add_enabled(state.profile_form.can_submit(), submit)
                .clicked()
            {
                state.handle_profile_submit();
            }

            if state.profile_form.submitting {
                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    ui.colored_label(colors::TEXT_SECONDARY, "Saving...");
                    ui.spinner();
                });
            }
            ui.add_space(24.0);
        });
    });
}

/// Route a dropped file into whichever photo slot is armed.
fn absorb_dropped_files(ctx: &egui::Context, state: &mut AppState) {
    let Some(slot) = state.pending_photo_slot else {
        return;
    };
    let dropped = ctx.input(|i| i.raw.dropped_files.clone());
    if let Some(path) = dropped.into_iter().filter_map(|f| f.path).next() {
        match slot {
            PhotoSlot::Profile => state.profile_form.choose_profile_pic(path),
            PhotoSlot::Cover => state.profile_form.choose_cover_photo(path),
        }
        state.pending_photo_slot = None;
    }
}

fn photo_section(ui: &mut egui::Ui, state: &mut AppState) {
    section_frame(ui, "Photos", |ui, state| {
        photo_row(ui, state, PhotoSlot::Profile, "Profile picture");
        ui.add_space(6.0);
        photo_row(ui, state, PhotoSlot::Cover, "Cover photo");
        if state.pending_photo_slot.is_some() {
            ui.add_space(6.0);
            ui.colored_label(colors::TEXT_SECONDARY, "Drop an image file onto the window...");
        }
    }, state);
}

fn photo_row(ui: &mut egui::Ui, state: &mut AppState, slot: PhotoSlot, label: &str) {
    let asset = match slot {
        PhotoSlot::Profile => &state.profile_form.profile_pic,
        PhotoSlot::Cover => &state.profile_form.cover_photo,
    };
    let description = match asset {
        Some(AssetRef::Server(name)) => state.config.uploads_url(name),
        Some(AssetRef::Local(path)) => format!("{} (not uploaded yet)", path.display()),
        None => "none".to_string(),
    };
    ui.horizontal(|ui| {
        ui.colored_label(colors::TEXT_SECONDARY, format!("{label}:"));
        ui.colored_label(colors::TEXT_LIGHT, description);
        if ui.button("Change").clicked() {
            state.pending_photo_slot = Some(slot);
        }
    });
}

fn profile_section(ui: &mut egui::Ui, state: &mut AppState) {
    section_frame(ui, "① Profile", |ui, state| {
        // First name and email come from the account record and are not
        // editable here.
        read_only_row(ui, "First Name", &state.profile_form.first_name);

        let mut last_name = state.profile_form.last_name.clone();
        if text_row(ui, "Last Name", &mut last_name, false) {
            state.profile_form.set_last_name(&last_name);
        }

        read_only_row(ui, "Email", &state.profile_form.email);

        let mut phone = state.profile_form.phone.clone();
        if text_row(ui, "Phone No", &mut phone, false) {
            state.profile_form.set_phone(&phone);
        }
    }, state);
}

fn password_section(ui: &mut egui::Ui, state: &mut AppState) {
    section_frame(ui, "② Password", |ui, state| {
        let mut old_password = state.profile_form.old_password.clone();
        if text_row(ui, "Old Password", &mut old_password, true) {
            state.profile_form.set_old_password(&old_password);
        }
        row_error(ui, state.profile_form.old_password_error.as_deref());

        let mut new_password = state.profile_form.new_password.clone();
        if text_row(ui, "New Password", &mut new_password, true) {
            state.profile_form.set_new_password(&new_password);
        }
        row_error(ui, state.profile_form.new_password_error.as_deref());

        let mut confirm = state.profile_form.confirm_password.clone();
        if text_row(ui, "Confirm", &mut confirm, true) {
            state.profile_form.set_confirm_password(&confirm);
        }
        row_error(ui, state.profile_form.confirm_password_error.as_deref());

        ui.add_space(4.0);
        ui.colored_label(
            colors::TEXT_SECONDARY,
            "Leave empty to keep your current password.",
        );
    }, state);
}

fn section_frame(
    ui: &mut egui::Ui,
    title: &str,
    add_contents: impl FnOnce(&mut egui::Ui, &mut AppState),
    state: &mut AppState,
) {
    egui::Frame::default()
        .fill(colors::CARD_BG)
        .corner_radius(egui::CornerRadius::same(6))
        .inner_margin(egui::Margin::same(12))
        .show(ui, |ui| {
            ui.label(
                egui::RichText::new(title)
                    .size(16.0)
                    .strong()
                    .color(colors::TEXT_LIGHT),
            );
            ui.add_space(8.0);
            add_contents(ui, state);
        });
}

fn text_row(ui: &mut egui::Ui, label: &str, value: &mut String, password: bool) -> bool {
    let mut changed = false;
    ui.horizontal(|ui| {
        ui.add_sized(
            [110.0, 24.0],
            egui::Label::new(egui::RichText::new(label).color(colors::TEXT_SECONDARY)),
        );
        let response = ui.add_sized(
            [280.0, 28.0],
            egui::TextEdit::singleline(value)
                .password(password)
                .text_color(colors::TEXT_LIGHT),
        );
        changed = response.changed();
    });
    changed
}

fn read_only_row(ui: &mut egui::Ui, label: &str, value: &str) {
    ui.horizontal(|ui| {
        ui.add_sized(
            [110.0, 24.0],
            egui::Label::new(egui::RichText::new(label).color(colors::TEXT_SECONDARY)),
        );
        ui.colored_label(colors::TEXT_LIGHT, value);
    });
}

fn row_error(ui: &mut egui::Ui, error: Option<&str>) {
    if let Some(error) = error {
        ui.horizontal(|ui| {
            ui.add_space(110.0);
            ui.colored_label(colors::ERROR, error);
        });
    }
}
