use egui::{CentralPanel, TopBottomPanel};

use crate::ui::plots::profile_plot;
use crate::ui::viewdata::ProfileView;

/// Header with input summary above the full-size profile plot.
pub fn main_window(ctx: &egui::Context, view: &ProfileView) {
    TopBottomPanel::top("top").show(ctx, |ui| {
        ui.heading(&view.title);
        ui.label(format!(
            "{}: {} records, {} of {} steps populated",
            view.source,
            view.records,
            view.populated_steps(),
            view.profile.len()
        ));
    });

    CentralPanel::default().show(ctx, |ui| {
        profile_plot(ui, &view.title, &view.profile, view.marker_radius);
    });
}
