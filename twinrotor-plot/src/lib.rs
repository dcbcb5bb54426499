use eframe::egui;
use egui_plot::{Legend, Line, Plot, PlotPoint};

/// A runnable egui application for viewing traces as stacked panels.
///
/// Each panel holds its own set of named series and its own legend, so
/// related traces (say, the two command signals) share an axis without
/// drowning out unrelated ones.
#[derive(Default)]
pub struct PlotApp {
    panels: Vec<Panel>,
}

struct Panel {
    label: String,
    series: Vec<Series>,
}

struct Series {
    name: String,
    points: Vec<PlotPoint>,
}

impl PlotApp {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens a new stacked panel; subsequent [`add_series`] calls fill it.
    ///
    /// [`add_series`]: PlotApp::add_series
    #[must_use]
    pub fn panel(mut self, label: &str) -> Self {
        self.panels.push(Panel {
            label: label.to_string(),
            series: Vec::new(),
        });
        self
    }

    /// Adds a named series of `[x, y]` points to the current panel, opening
    /// an unlabeled panel if none exists yet.
    #[must_use]
    pub fn add_series(mut self, name: &str, points: &[[f64; 2]]) -> Self {
        if self.panels.is_empty() {
            self = self.panel("");
        }

        if let Some(panel) = self.panels.last_mut() {
            panel.series.push(Series {
                name: name.to_string(),
                points: points.iter().copied().map(Into::into).collect(),
            });
        }

        self
    }

    #[allow(clippy::missing_errors_doc)]
    pub fn run(self, name: &str) -> Result<(), eframe::Error> {
        eframe::run_native(
            name,
            eframe::NativeOptions::default(),
            Box::new(|_cc| Ok(Box::new(self))),
        )
    }
}

impl eframe::App for PlotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            #[allow(clippy::cast_precision_loss)]
            let panel_height = ui.available_height() / self.panels.len().max(1) as f32 - 24.0;

            for (index, panel) in self.panels.iter().enumerate() {
                if !panel.label.is_empty() {
                    ui.strong(&panel.label);
                }

                Plot::new(index)
                    .legend(Legend::default())
                    .height(panel_height)
                    .show(ui, |plot_ui| {
                        for series in &panel.series {
                            let points = series.points.as_slice();
                            let name = &series.name;

                            plot_ui.line(Line::new(points).name(name));
                        }
                    });
            }
        });
    }
}
