use eframe::egui::{self, Color32, RichText, Stroke};
use egui_plot::{Bar, BarChart, Legend, Line, MarkerShape, Plot, PlotPoints, Points};

use crate::types::{SamplePoint, Scenario, ScenarioBenchmark, SCENARIO_BENCHMARKS};

const BAND_HIGH_COLOR: Color32 = Color32::from_rgb(0x4c, 0xaf, 0x50);
const BAND_MODERATE_COLOR: Color32 = Color32::from_rgb(0xff, 0xd5, 0x4f);
const BAND_LOW_COLOR: Color32 = Color32::from_rgb(0xe5, 0x73, 0x73);
const FLOW_COLOR: Color32 = Color32::from_rgb(0xbb, 0x86, 0xfc);

/// Red -> orange -> yellow -> green, the CGI score ramp shared by both
/// scatter views.
fn cgi_color(t: f32) -> Color32 {
    let t = t.clamp(0.0, 1.0);
    let anchors = [
        (0.0, [1.0, 0.0, 0.0]),
        (0.3, [1.0, 0.53, 0.0]),
        (0.6, [1.0, 1.0, 0.0]),
        (1.0, [0.0, 1.0, 0.0]),
    ];

    for pair in anchors.windows(2) {
        let (t0, c0) = pair[0];
        let (t1, c1) = pair[1];
        if t >= t0 && t <= t1 {
            let alpha = (t - t0) / (t1 - t0);
            return Color32::from_rgb(
                ((c0[0] + (c1[0] - c0[0]) * alpha) * 255.0) as u8,
                ((c0[1] + (c1[1] - c0[1]) * alpha) * 255.0) as u8,
                ((c0[2] + (c1[2] - c0[2]) * alpha) * 255.0) as u8,
            );
        }
    }

    Color32::from_rgb(0, 255, 0)
}

/// Plasma-ish ramp for the microtubule sync dimension of the correlation
/// chart.
fn sync_color(t: f32) -> Color32 {
    let t = t.clamp(0.0, 1.0);
    Color32::from_rgb(
        (40.0 + 210.0 * t) as u8,
        (15.0 + 120.0 * (t * std::f32::consts::PI).sin()) as u8,
        (135.0 * (1.0 - t) + 35.0) as u8,
    )
}

fn cgi_extent(points: &[SamplePoint]) -> (f32, f32) {
    let mut min = f32::INFINITY;
    let mut max = f32::NEG_INFINITY;
    for p in points {
        min = min.min(p.cgi);
        max = max.max(p.cgi);
    }
    if max - min < 1.0e-6 {
        max = min + 1.0e-6;
    }
    (min, max)
}

fn hover_text(p: &SamplePoint) -> String {
    format!(
        "CGI Score: {:.2}\nPhi Integration: {:.3}\nRho Adaptivity: {:.3}\nSigma Self-ref: {:.3}\nQuantum Coherence: {:.3}\nMicrotubule Sync: {:.3}\nDwell Time: {:.1}ms",
        p.cgi, p.phi, p.rho, p.sigma, p.quantum_coherence, p.microtubule_sync, p.tau
    )
}

fn project(pos: [f32; 3], rot: [f32; 2], rect: egui::Rect) -> (egui::Pos2, f32) {
    let (sx, cx) = rot[0].sin_cos();
    let (sy, cy) = rot[1].sin_cos();
    let x = pos[0] * cy + pos[2] * sy;
    let y = pos[0] * sx * sy + pos[1] * cx - pos[2] * sx * cy;
    let z = -pos[0] * cx * sy + pos[1] * sx + pos[2] * cx * cy;
    let size = rect.width().min(rect.height()) * 0.36;
    let c = rect.center();
    (egui::pos2(c.x + x * size, c.y - y * size), z)
}

fn depth_alpha(z: f32) -> u8 {
    let t = ((z + 1.5) / 3.0).clamp(0.0, 1.0);
    (70.0 + 185.0 * t) as u8
}

/// 3D gradient-space scatter: phi x rho x sigma, marker size from quantum
/// coherence, color from CGI. Drag rotates; idle auto-rotation keeps the
/// depth structure readable.
pub fn gradient_space_3d(
    ui: &mut egui::Ui,
    points: &[SamplePoint],
    scenario: Scenario,
    rot: &mut [f32; 2],
    auto_rotate: &mut bool,
    time: f64,
) {
    if points.is_empty() {
        return;
    }

    let preset = scenario.preset();
    ui.label(
        RichText::new(format!("Consciousness Gradient Space - {}", preset.name))
            .strong()
            .color(Color32::from_rgb(preset.color[0], preset.color[1], preset.color[2])),
    );

    let size = egui::vec2(ui.available_width(), 440.0);
    let (response, painter) = ui.allocate_painter(size, egui::Sense::click_and_drag());
    let rect = response.rect;

    painter.rect_filled(rect, 6.0, Color32::from_rgb(10, 10, 14));

    if response.dragged() {
        *auto_rotate = false;
        let delta = response.drag_delta();
        rot[1] += delta.x * 0.01;
        rot[0] += delta.y * 0.01;
    }
    if response.double_clicked() {
        *auto_rotate = true;
    }
    if *auto_rotate {
        rot[1] = time as f32 * 0.25;
    }

    // Normalize each axis over the data extent so the cloud fills the cube.
    let mut max_phi = 1.0e-6f32;
    let mut max_rho = 1.0e-6f32;
    for p in points {
        max_phi = max_phi.max(p.phi);
        max_rho = max_rho.max(p.rho);
    }
    let (cgi_min, cgi_max) = cgi_extent(points);

    // Bounding cube edges, drawn behind the points.
    let axis_color = Color32::from_rgba_unmultiplied(255, 255, 255, 40);
    let corners = [
        [-1.0, -1.0, -1.0],
        [1.0, -1.0, -1.0],
        [1.0, 1.0, -1.0],
        [-1.0, 1.0, -1.0],
        [-1.0, -1.0, 1.0],
        [1.0, -1.0, 1.0],
        [1.0, 1.0, 1.0],
        [-1.0, 1.0, 1.0],
    ];
    let edges = [
        (0, 1), (1, 2), (2, 3), (3, 0),
        (4, 5), (5, 6), (6, 7), (7, 4),
        (0, 4), (1, 5), (2, 6), (3, 7),
    ];
    for (a, b) in edges {
        let (pa, _) = project(corners[a].map(|v| v * 0.5), *rot, rect);
        let (pb, _) = project(corners[b].map(|v| v * 0.5), *rot, rect);
        painter.line_segment([pa, pb], Stroke::new(1.0, axis_color));
    }

    // Project every sample, then paint back-to-front.
    let mut projected: Vec<(usize, egui::Pos2, f32)> = points
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let pos = [
                p.phi / max_phi - 0.5,
                p.rho / max_rho - 0.5,
                p.sigma - 0.5,
            ];
            let (screen, z) = project(pos, *rot, rect);
            (i, screen, z)
        })
        .collect();
    projected.sort_by(|a, b| a.2.partial_cmp(&b.2).unwrap_or(std::cmp::Ordering::Equal));

    for &(i, screen, z) in &projected {
        let p = &points[i];
        let t = (p.cgi - cgi_min) / (cgi_max - cgi_min);
        let base = cgi_color(t);
        let color = Color32::from_rgba_unmultiplied(base.r(), base.g(), base.b(), depth_alpha(z));
        let radius = 2.0 + p.quantum_coherence * 5.0;
        painter.circle_filled(screen, radius, color);
    }

    // Hover hit-test against the projected positions; nearest wins.
    if let Some(hover) = response.hover_pos() {
        let nearest = projected
            .iter()
            .map(|&(i, screen, _)| (i, screen, screen.distance(hover)))
            .min_by(|a, b| a.2.partial_cmp(&b.2).unwrap_or(std::cmp::Ordering::Equal));
        if let Some((i, screen, dist)) = nearest {
            if dist < 10.0 {
                painter.circle_stroke(screen, 8.0, Stroke::new(1.5, Color32::WHITE));
                response.clone().on_hover_text(hover_text(&points[i]));
            }
        }
    }

    ui.label(
        RichText::new("x: Phi Integration | y: Rho Adaptivity | depth: Sigma Self-Reference | drag to rotate, double-click to resume spin")
            .small()
            .color(Color32::GRAY),
    );
}

/// 2D landscape scatter (phi vs rho). Returns a newly clicked sample index,
/// if any. Point radius tracks sigma, color tracks CGI, and the first twenty
/// high scorers are joined in array order as an attractor-flow cue.
pub fn landscape_2d(
    ui: &mut egui::Ui,
    points: &[SamplePoint],
    selected: Option<usize>,
) -> Option<usize> {
    if points.is_empty() {
        return None;
    }

    let (cgi_min, cgi_max) = cgi_extent(points);
    let mut clicked_index = None;

    let flow: Vec<[f64; 2]> = points
        .iter()
        .filter(|p| p.cgi > 5.0)
        .take(20)
        .map(|p| [p.phi as f64, p.rho as f64])
        .collect();

    let plot = Plot::new("landscape_2d")
        .height(440.0)
        .x_axis_label("Phi Integration")
        .y_axis_label("Rho Adaptivity")
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false);

    let response = plot.show(ui, |plot_ui| {
        if flow.len() >= 2 {
            plot_ui.line(
                Line::new(PlotPoints::from(flow.clone()))
                    .color(Color32::from_rgba_unmultiplied(
                        FLOW_COLOR.r(),
                        FLOW_COLOR.g(),
                        FLOW_COLOR.b(),
                        110,
                    ))
                    .width(1.0),
            );
        }

        for (i, p) in points.iter().enumerate() {
            let t = (p.cgi - cgi_min) / (cgi_max - cgi_min);
            plot_ui.points(
                Points::new(PlotPoints::from(vec![[p.phi as f64, p.rho as f64]]))
                    .color(cgi_color(t))
                    .radius(2.0 + p.sigma * 5.0)
                    .shape(MarkerShape::Circle),
            );
            if selected == Some(i) {
                plot_ui.points(
                    Points::new(PlotPoints::from(vec![[p.phi as f64, p.rho as f64]]))
                        .color(Color32::WHITE)
                        .radius(4.0 + p.sigma * 5.0)
                        .filled(false)
                        .shape(MarkerShape::Circle),
                );
            }
        }

        plot_ui.pointer_coordinate()
    });

    if response.response.clicked() {
        if let Some(pointer) = response.inner {
            // Nearest point in normalized plot space.
            let mut max_phi = 1.0e-6f64;
            let mut max_rho = 1.0e-6f64;
            for p in points {
                max_phi = max_phi.max(p.phi as f64);
                max_rho = max_rho.max(p.rho as f64);
            }
            let nearest = points
                .iter()
                .enumerate()
                .map(|(i, p)| {
                    let dx = (p.phi as f64 - pointer.x) / max_phi;
                    let dy = (p.rho as f64 - pointer.y) / max_rho;
                    (i, dx * dx + dy * dy)
                })
                .min_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));
            if let Some((i, d2)) = nearest {
                if d2.sqrt() < 0.06 {
                    clicked_index = Some(i);
                }
            }
        }
    }

    ui.label(
        RichText::new("Point size = Sigma (Self-Reference) - Color = CGI Score - Purple lines = Attractor flows")
            .small()
            .color(Color32::GRAY),
    );

    clicked_index
}

/// CGI score histogram, 20 bins across the observed range.
pub fn distribution_chart(ui: &mut egui::Ui, points: &[SamplePoint]) {
    if points.is_empty() {
        return;
    }

    const BINS: usize = 20;
    let (min, max) = cgi_extent(points);
    let width = (max - min) / BINS as f32;
    let mut counts = [0usize; BINS];
    for p in points {
        let bin = (((p.cgi - min) / width) as usize).min(BINS - 1);
        counts[bin] += 1;
    }

    let bars: Vec<Bar> = counts
        .iter()
        .enumerate()
        .map(|(i, &count)| {
            let center = min + (i as f32 + 0.5) * width;
            Bar::new(center as f64, count as f64)
                .width(width as f64 * 0.9)
                .fill(BAND_HIGH_COLOR)
        })
        .collect();

    ui.label(RichText::new("CGI Score Distribution").strong());
    Plot::new("cgi_distribution")
        .height(240.0)
        .x_axis_label("CGI Score")
        .y_axis_label("Frequency")
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars).name("CGI Distribution"));
        });
}

/// Quantum/classical coherence ratio against CGI, sized and colored by
/// microtubule sync.
pub fn correlation_chart(ui: &mut egui::Ui, points: &[SamplePoint]) {
    if points.is_empty() {
        return;
    }

    ui.label(RichText::new("Quantum-Classical Integration").strong());
    Plot::new("quantum_classical")
        .height(240.0)
        .x_axis_label("Quantum/Classical Coherence Ratio")
        .y_axis_label("CGI Score")
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .legend(Legend::default())
        .show(ui, |plot_ui| {
            for p in points {
                let ratio = p.quantum_coherence / (p.spatial_coherence + 1.0e-6);
                plot_ui.points(
                    Points::new(PlotPoints::from(vec![[ratio as f64, p.cgi as f64]]))
                        .color(sync_color(p.microtubule_sync))
                        .radius(2.0 + p.microtubule_sync * 4.0)
                        .shape(MarkerShape::Circle),
                );
            }
        });
}

fn band_bar(ui: &mut egui::Ui, row: &ScenarioBenchmark) {
    let size = egui::vec2(220.0, 14.0);
    let (rect, _) = ui.allocate_exact_size(size, egui::Sense::hover());
    let painter = ui.painter_at(rect);
    painter.rect_filled(rect, 4.0, Color32::from_rgb(45, 45, 52));

    let total = rect.width();
    let high_w = total * row.high_pct / 100.0;
    let moderate_w = total * row.moderate_pct / 100.0;
    let low_w = total * row.low_pct / 100.0;

    let mut x = rect.left();
    for (w, color) in [
        (high_w, BAND_HIGH_COLOR),
        (moderate_w, BAND_MODERATE_COLOR),
        (low_w, BAND_LOW_COLOR),
    ] {
        if w > 0.5 {
            painter.rect_filled(
                egui::Rect::from_min_size(egui::pos2(x, rect.top()), egui::vec2(w, rect.height())),
                0.0,
                color,
            );
        }
        x += w;
    }
}

/// Static five-row benchmark table. The values are illustrative constants and
/// intentionally not derived from the live generator; only the highlight
/// follows the current scenario.
pub fn comparison_table(ui: &mut egui::Ui, current: Scenario) {
    ui.heading("Validated Scenario Analysis");
    ui.add_space(4.0);

    if let Some(row) = SCENARIO_BENCHMARKS.iter().find(|r| r.scenario == current) {
        let preset = current.preset();
        let accent = Color32::from_rgb(preset.color[0], preset.color[1], preset.color[2]);
        egui::Frame::group(ui.style())
            .stroke(Stroke::new(2.0, accent))
            .show(ui, |ui| {
                ui.label(RichText::new(format!("Current: {}", preset.name)).strong());
                ui.horizontal(|ui| {
                    ui.label(RichText::new(format!("{:.2}", row.mean_cgi)).strong().size(18.0));
                    ui.label(RichText::new("Mean CGI").color(Color32::GRAY));
                    ui.separator();
                    ui.colored_label(BAND_HIGH_COLOR, format!("{:.1}%", row.high_pct));
                    ui.label(RichText::new("High (>7.0)").color(Color32::GRAY));
                    ui.separator();
                    ui.colored_label(BAND_MODERATE_COLOR, format!("{:.1}%", row.moderate_pct));
                    ui.label(RichText::new("Moderate (4-7)").color(Color32::GRAY));
                    ui.separator();
                    ui.colored_label(BAND_LOW_COLOR, format!("{:.1}%", row.low_pct));
                    ui.label(RichText::new("Low (<4.0)").color(Color32::GRAY));
                });
            });
    }

    ui.add_space(6.0);
    egui::Grid::new("benchmark_rows")
        .num_columns(3)
        .spacing(egui::vec2(12.0, 6.0))
        .min_col_width(80.0)
        .show(ui, |ui| {
            for row in &SCENARIO_BENCHMARKS {
                let preset = row.scenario.preset();
                let label = RichText::new(preset.name);
                let label = if row.scenario == current {
                    label.strong().color(Color32::WHITE)
                } else {
                    label.color(Color32::from_rgb(0xb0, 0xb0, 0xb8))
                };
                ui.label(label);
                band_bar(ui, row);
                ui.label(format!("{:.2}", row.mean_cgi));
                ui.end_row();
            }
        });
}
