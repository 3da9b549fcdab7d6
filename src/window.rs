//! Native window render target built on eframe/egui_plot.

use egui_plot::{Legend, Line, Plot};

use crate::chart::Chart;
use crate::config::WindowConfig;
use crate::error::RenderError;
use crate::render::RenderTarget;

/// Distinct color for the series at `index`, cycling through a 10-color palette.
pub fn series_color(index: usize) -> egui::Color32 {
    const PALETTE: [egui::Color32; 10] = [
        egui::Color32::from_rgb(31, 119, 180),
        egui::Color32::from_rgb(255, 127, 14),
        egui::Color32::from_rgb(44, 160, 44),
        egui::Color32::from_rgb(214, 39, 40),
        egui::Color32::from_rgb(148, 103, 189),
        egui::Color32::from_rgb(140, 86, 75),
        egui::Color32::from_rgb(227, 119, 194),
        egui::Color32::from_rgb(127, 127, 127),
        egui::Color32::from_rgb(188, 189, 34),
        egui::Color32::from_rgb(23, 190, 207),
    ];
    PALETTE[index % PALETTE.len()]
}

/// Legend listing series in the order they were added rather than by name.
pub fn chart_legend() -> Legend {
    Legend::default().follow_insertion_order(true)
}

/// eframe application showing one static chart.
pub struct ChartApp {
    chart: Chart,
    reset_view: bool,
}

impl ChartApp {
    pub fn new(chart: Chart) -> Self {
        Self { chart, reset_view: true }
    }

    fn plot_ui(&mut self, ui: &mut egui::Ui) {
        let mut plot = Plot::new("suite_plot")
            .allow_scroll(false)
            .allow_zoom(true)
            .allow_boxed_zoom(true);
        if let Some(x) = &self.chart.x_label {
            plot = plot.x_axis_label(x.as_str());
        }
        if let Some(y) = &self.chart.y_label {
            plot = plot.y_axis_label(y.as_str());
        }
        if self.chart.legend {
            plot = plot.legend(chart_legend());
        }
        if self.reset_view {
            if let Some((min, max)) = self.chart.bounds() {
                plot = plot.include_x(min[0]).include_x(max[0]).include_y(min[1]).include_y(max[1]);
            }
            plot = plot.reset();
            self.reset_view = false;
        }

        let series = self.chart.series();
        plot.show(ui, |plot_ui| {
            for (i, s) in series.iter().enumerate() {
                let line = Line::new(s.name.as_str(), s.points.clone())
                    .color(series_color(i))
                    .width(1.5);
                plot_ui.line(line);
            }
        });
    }
}

impl eframe::App for ChartApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if let Some(title) = &self.chart.title {
            egui::TopBottomPanel::top("suite_title").show(ctx, |ui| {
                ui.vertical_centered(|ui| ui.heading(title.as_str()));
            });
        }
        egui::TopBottomPanel::bottom("suite_controls").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(format!("{} series", self.chart.len()));
                if ui.button("Reset View").clicked() {
                    self.reset_view = true;
                }
            });
        });
        egui::CentralPanel::default().show(ctx, |ui| self.plot_ui(ui));
    }
}

/// Opens a native window per rendered chart and blocks until it is closed.
///
/// Most platforms allow only one event loop per process, so render at most
/// once with a given process.
#[derive(Debug, Clone, Default)]
pub struct NativeWindow {
    pub window: WindowConfig,
}

impl NativeWindow {
    pub fn new(window: WindowConfig) -> Self {
        Self { window }
    }
}

impl RenderTarget for NativeWindow {
    fn render(&mut self, chart: &Chart) -> Result<(), RenderError> {
        let mut opts = eframe::NativeOptions::default();
        opts.viewport = egui::ViewportBuilder::default()
            .with_inner_size(egui::vec2(self.window.width, self.window.height));
        let app = ChartApp::new(chart.clone());
        log::debug!("opening window \"{}\"", self.window.title);
        eframe::run_native(&self.window.title, opts, Box::new(|_cc| Ok(Box::new(app))))?;
        Ok(())
    }
}
