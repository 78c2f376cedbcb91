use eframe::egui::{self, Color32, RichText, Stroke};

use crate::charts;
use crate::state::ExplorerState;
use crate::types::{Scenario, VizMode};

pub struct ExplorerApp {
    state: ExplorerState,
    rot: [f32; 2],
    auto_rotate: bool,
}

impl ExplorerApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self {
            state: ExplorerState::new(),
            rot: [0.45, 0.0],
            auto_rotate: true,
        }
    }

    fn draw_controls(&mut self, ui: &mut egui::Ui, now: f64) {
        ui.heading("CGI Consciousness Visualization");
        ui.add_space(4.0);

        ui.horizontal(|ui| {
            let label = if self.state.is_animating() {
                "Pause"
            } else {
                "Animate"
            };
            if ui.button(label).clicked() {
                self.state.toggle_animation(now);
            }
            if ui.button("Regenerate").clicked() {
                self.state.regenerate_current();
            }
        });

        ui.separator();
        ui.label(RichText::new("Consciousness Scenario:").strong());

        for scenario in Scenario::ALL {
            let preset = scenario.preset();
            let accent = Color32::from_rgb(preset.color[0], preset.color[1], preset.color[2]);
            let selected = self.state.scenario == scenario;

            let frame = egui::Frame::group(ui.style()).stroke(Stroke::new(
                if selected { 2.0 } else { 1.0 },
                if selected { Color32::WHITE } else { Color32::from_gray(70) },
            ));
            let response = frame
                .show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.horizontal(|ui| {
                        let (rect, _) =
                            ui.allocate_exact_size(egui::vec2(10.0, 10.0), egui::Sense::hover());
                        ui.painter_at(rect).circle_filled(rect.center(), 5.0, accent);
                        ui.label(RichText::new(preset.name).strong());
                    });
                    ui.label(
                        RichText::new(preset.description)
                            .small()
                            .color(Color32::GRAY),
                    );
                })
                .response;
            if response.interact(egui::Sense::click()).clicked() {
                self.state.select_scenario(scenario);
            }
        }

        ui.separator();
        self.draw_stats(ui);

        ui.separator();
        ui.label(RichText::new("Wiest-Bruna Integration").strong());
        ui.label(
            RichText::new("Phi (Integration): complexity metrics with exponential saturation")
                .small(),
        );
        ui.label(
            RichText::new("Rho (Adaptivity): quantum strength, entanglement, microtubule sync")
                .small(),
        );
        ui.label(
            RichText::new("Sigma (Self-Reference): phase synchronization and binding effects")
                .small(),
        );
        ui.label(
            RichText::new("CGI = sqrt(phi x rho) x sigma x 24 (empirically calibrated)")
                .small()
                .color(Color32::GRAY),
        );
    }

    fn draw_stats(&self, ui: &mut egui::Ui) {
        let stats = self.state.stats;
        egui::Grid::new("summary_stats")
            .num_columns(2)
            .spacing(egui::vec2(16.0, 4.0))
            .show(ui, |ui| {
                ui.label(RichText::new(format!("{:.2}", stats.mean_cgi)).strong().size(18.0));
                ui.label(RichText::new("Mean CGI").color(Color32::GRAY));
                ui.end_row();

                ui.colored_label(
                    Color32::from_rgb(0x4c, 0xaf, 0x50),
                    RichText::new(format!("{:.1}%", stats.high_pct)).strong(),
                );
                ui.label(RichText::new("High (>7.0)").color(Color32::GRAY));
                ui.end_row();

                ui.colored_label(
                    Color32::from_rgb(0xff, 0xd5, 0x4f),
                    RichText::new(format!("{:.1}%", stats.moderate_pct)).strong(),
                );
                ui.label(RichText::new("Moderate (4-7)").color(Color32::GRAY));
                ui.end_row();

                ui.colored_label(
                    Color32::from_rgb(0xe5, 0x73, 0x73),
                    RichText::new(format!("{:.1}%", stats.low_pct)).strong(),
                );
                ui.label(RichText::new("Low (<4.0)").color(Color32::GRAY));
                ui.end_row();
            });
    }

    fn draw_selected_card(&self, ui: &mut egui::Ui) {
        let Some(point) = self.state.selected.and_then(|i| self.state.points.get(i)) else {
            return;
        };

        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.label(RichText::new("Selected Consciousness State").strong());
            ui.horizontal(|ui| {
                ui.label(RichText::new(format!("{:.2}", point.cgi)).strong().size(16.0));
                ui.label(RichText::new("CGI Score").color(Color32::GRAY));
                ui.separator();
                ui.colored_label(
                    Color32::from_rgb(0x64, 0xb5, 0xf6),
                    format!("{:.3}", point.phi),
                );
                ui.label(RichText::new("Phi").color(Color32::GRAY));
                ui.separator();
                ui.colored_label(
                    Color32::from_rgb(0xba, 0x68, 0xc8),
                    format!("{:.3}", point.rho),
                );
                ui.label(RichText::new("Rho").color(Color32::GRAY));
                ui.separator();
                ui.colored_label(
                    Color32::from_rgb(0x81, 0xc7, 0x84),
                    format!("{:.3}", point.sigma),
                );
                ui.label(RichText::new("Sigma").color(Color32::GRAY));
            });
        });
    }

    fn draw_visualization(&mut self, ui: &mut egui::Ui, time: f64) {
        ui.horizontal(|ui| {
            ui.label(RichText::new("Consciousness Visualization").strong().size(16.0));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui
                    .selectable_label(self.state.viz_mode == VizMode::Landscape2D, "2D Landscape")
                    .clicked()
                {
                    self.state.set_mode(VizMode::Landscape2D);
                }
                if ui
                    .selectable_label(self.state.viz_mode == VizMode::Space3D, "3D Space")
                    .clicked()
                {
                    self.state.set_mode(VizMode::Space3D);
                }
            });
        });

        match self.state.viz_mode {
            VizMode::Space3D => {
                charts::gradient_space_3d(
                    ui,
                    &self.state.points,
                    self.state.scenario,
                    &mut self.rot,
                    &mut self.auto_rotate,
                    time,
                );
            }
            VizMode::Landscape2D => {
                if let Some(index) =
                    charts::landscape_2d(ui, &self.state.points, self.state.selected)
                {
                    self.state.select_sample(Some(index));
                }
                self.draw_selected_card(ui);
            }
        }
    }
}

impl eframe::App for ExplorerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = ctx.input(|i| i.time);
        self.state.tick(now);

        egui::SidePanel::left("controls")
            .resizable(true)
            .default_width(310.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        self.draw_controls(ui, now);
                    });
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    self.draw_visualization(ui, now);

                    ui.separator();
                    charts::comparison_table(ui, self.state.scenario);

                    ui.separator();
                    ui.label(RichText::new("Analysis Dashboard").strong().size(16.0));
                    ui.columns(2, |columns| {
                        charts::distribution_chart(&mut columns[0], &self.state.points);
                        charts::correlation_chart(&mut columns[1], &self.state.points);
                    });

                    ui.add_space(8.0);
                    ui.vertical_centered(|ui| {
                        ui.label(
                            RichText::new("Consciousness Gradient Index (CGI) - Advanced Prototype")
                                .small()
                                .color(Color32::GRAY),
                        );
                        ui.label(
                            RichText::new(
                                "Integrating quantum coherence theory with attractor complexity metrics",
                            )
                            .small()
                            .color(Color32::GRAY),
                        );
                    });
                });
        });

        ctx.request_repaint();
    }
}
