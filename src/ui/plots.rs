use egui::Color32;
use egui_plot::{Legend, Line, MarkerShape, Plot, PlotPoints, Points};

use crate::core::profile::StepProfile;

/// Per-step mean as a connected line with a marker on every step.
pub fn profile_plot(ui: &mut egui::Ui, title: &str, profile: &StepProfile, marker_radius: f32) {
    let line_pts: PlotPoints = profile.points().map(|(x, y)| [x, y]).collect();
    let marker_pts: PlotPoints = profile.points().map(|(x, y)| [x, y]).collect();

    let line = Line::new("mean", line_pts).color(Color32::LIGHT_BLUE);
    let markers = Points::new("steps", marker_pts)
        .shape(MarkerShape::Circle)
        .radius(marker_radius)
        .filled(true)
        .color(Color32::from_rgb(255, 140, 0));

    Plot::new(title)
        .legend(Legend::default())
        .x_axis_label("step")
        .y_axis_label("mean available moves")
        .include_x(0.0)
        .include_x(profile.len().saturating_sub(1) as f64)
        .include_y(0.0)
        .x_axis_formatter(|mark, _| format!("{:.0}", mark.value))
        .y_axis_formatter(|mark, _| format!("{:.4}", mark.value))
        .show(ui, |plot_ui| {
            plot_ui.line(line);
            plot_ui.points(markers);
        });
}
