use tracing::info;

use crate::ui::viewdata::ProfileView;

pub struct App {
    view: ProfileView,
}

impl App {
    pub fn new(cc: &eframe::CreationContext<'_>, view: ProfileView) -> Self {
        cc.egui_ctx.set_pixels_per_point(1.25);
        Self { view }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        crate::ui::windows::main_window(ctx, &self.view);
    }
}

/// Open the plot window; returns once the user closes it.
pub fn run_window(view: ProfileView, size: [f32; 2]) -> eframe::Result<()> {
    info!("Opening plot window ({} steps)", view.profile.len());
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size(size),
        ..Default::default()
    };
    let title = view.title.clone();
    eframe::run_native(
        &title,
        native_options,
        Box::new(move |cc| Ok(Box::new(App::new(cc, view)))),
    )
}
