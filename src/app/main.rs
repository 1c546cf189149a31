//! BizDir - Main entry point for the native desktop client.

use eframe::egui;

use bizdir::app::{views, AppState};

fn main() -> Result<(), eframe::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 760.0])
            .with_min_inner_size([800.0, 600.0]),
        ..Default::default()
    };
    eframe::run_native(
        "BizDir",
        options,
        Box::new(|_cc| Ok(Box::new(BizDirApp::default()))),
    )
}

/// Main application wrapper around [`AppState`].
struct BizDirApp {
    state: AppState,
}

impl Default for BizDirApp {
    fn default() -> Self {
        Self { state: AppState::new() }
    }
}

impl eframe::App for BizDirApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.state.poll_results();
        self.state.tick(std::time::Instant::now());

        views::render_top_bar(ctx, &mut self.state);
        views::render_main_panel(ctx, &mut self.state);

        // Background work and the redirect timer need frames even without
        // input events.
        ctx.request_repaint_after(std::time::Duration::from_millis(100));
    }
}
