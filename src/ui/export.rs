//! Headless rendering of the step profile to a PNG.

use std::error::Error;
use std::fs::create_dir_all;
use std::path::Path;

use plotters::prelude::*;

use crate::config::PlotConfig;
use crate::core::profile::StepProfile;
use crate::error::{ProfileError, Result};

pub fn render_png(out_path: &Path, profile: &StepProfile, cfg: &PlotConfig) -> Result<()> {
    if let Some(parent) = out_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        create_dir_all(parent).map_err(|source| ProfileError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    draw_profile(out_path, profile, cfg).map_err(|e| ProfileError::Render(e.to_string()))
}

fn draw_profile(
    out_path: &Path,
    profile: &StepProfile,
    cfg: &PlotConfig,
) -> std::result::Result<(), Box<dyn Error>> {
    let x_max = profile.len().saturating_sub(1).max(1) as f64;
    let y_max = y_upper(profile.max_mean());

    let root = BitMapBackend::new(out_path, (cfg.width, cfg.height)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(&cfg.title, ("sans-serif", 20))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(80)
        .build_cartesian_2d(0.0f64..x_max, 0.0f64..y_max)?;

    chart
        .configure_mesh()
        .x_desc("step")
        .y_desc("mean available moves")
        .draw()?;

    chart.draw_series(LineSeries::new(profile.points(), &BLUE))?;
    let radius = cfg.marker_radius.round().max(1.0) as i32;
    chart.draw_series(
        profile
            .points()
            .map(|(x, y)| Circle::new((x, y), radius, RED.filled())),
    )?;

    root.present()?;
    Ok(())
}

/// Headroom above the largest mean; all-zero profiles get a unit axis.
fn y_upper(max_mean: f64) -> f64 {
    if max_mean > 0.0 { max_mean * 1.05 } else { 1.0 }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::grid::{GridShape, StepGrid};
    use std::fs;
    use std::path::PathBuf;

    fn unique_path(name: &str) -> PathBuf {
        let mut p = std::env::temp_dir();
        p.push(format!(
            "moveprofile_export_test_{}_{}",
            name,
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap()
                .as_nanos()
        ));
        p
    }

    fn small_profile() -> StepProfile {
        let shape = GridShape::new(5, 10).unwrap();
        let grid = StepGrid::fill(shape, &[vec![12, 30, 28, 9], vec![15, 31]]).unwrap();
        StepProfile::from_grid(&grid)
    }

    #[test]
    fn render_png_writes_nonempty_file() {
        let path = unique_path("profile.png");
        let _ = fs::remove_file(&path);

        render_png(&path, &small_profile(), &PlotConfig::default()).expect("render png");
        let meta = fs::metadata(&path).expect("png written");
        assert!(meta.len() > 0, "png should not be empty");

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn render_png_creates_parent_dirs() {
        let dir = unique_path("nested");
        let path = dir.join("a").join("b").join("profile.png");

        let cfg = PlotConfig {
            width: 400,
            height: 300,
            ..PlotConfig::default()
        };
        render_png(&path, &small_profile(), &cfg).expect("render png");
        assert!(path.exists(), "png should land in the nested directory");
        assert!(fs::metadata(&path).unwrap().len() > 0);

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn diluted_means_keep_their_own_scale() {
        let y = y_upper(4.0 / 100_000.0);
        assert!(y > 4.0 / 100_000.0);
        assert!(y < 1e-4);
    }

    #[test]
    fn zero_profile_gets_unit_axis() {
        assert_eq!(y_upper(0.0), 1.0);
    }
}
