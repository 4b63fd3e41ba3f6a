//! Spiral Studio RS - Main Application
//! Interactive spiral visualizer with egui control panel

mod config;
mod geometry;
mod presets;
mod spawner;
mod spirals;

use config::AppConfig;
use eframe::egui;
use geometry::SurfaceGeometry;
use presets::PresetType;
use spawner::Spawner;
use spirals::SpiralEngine;
use std::time::Instant;

/// Main application state
struct SpiralStudioApp {
    config: AppConfig,
    engine: SpiralEngine,
    spawner: Spawner,
    geometry: SurfaceGeometry,
    last_update: Instant,
    last_dt: f32,
    selected_preset: PresetType,
}

impl SpiralStudioApp {
    fn new(cc: &eframe::CreationContext<'_>) -> Self {
        // Setup dark theme
        let mut visuals = egui::Visuals::dark();
        visuals.window_fill = egui::Color32::from_rgba_unmultiplied(15, 15, 25, 245);
        visuals.panel_fill = egui::Color32::from_rgba_unmultiplied(20, 20, 35, 240);
        cc.egui_ctx.set_visuals(visuals);

        let config = AppConfig::default();
        let spawner = Spawner::new(config.spirals.interval_ms);

        Self {
            config,
            engine: SpiralEngine::new(),
            spawner,
            geometry: SurfaceGeometry::new(1280.0, 720.0),
            last_update: Instant::now(),
            last_dt: 0.016,
            selected_preset: PresetType::Classic,
        }
    }

    /// Clear spirals and surface, re-arm the spawn timer with the current
    /// interval. A pending repaint is not cancelled; the next frame simply
    /// observes an empty collection.
    fn reset(&mut self) {
        self.engine.reset();
        self.spawner.rearm(self.config.spirals.interval_ms);
        log::info!(
            "reset: spirals cleared, spawn timer re-armed at {}ms",
            self.config.spirals.interval_ms
        );
    }
}

impl eframe::App for SpiralStudioApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        let dt = now.duration_since(self.last_update);
        self.last_update = now;
        self.last_dt = dt.as_secs_f32();

        // The spawn timer keeps its cadence while paused; elapsed periods
        // produce no batch inside tick.
        let mut rng = rand::thread_rng();
        self.spawner.tick(
            dt,
            &self.config.spirals,
            &self.geometry,
            &mut self.engine.spirals,
            &mut rng,
        );

        self.render_top_bar(ctx);
        self.render_settings_panel(ctx);
        self.render_canvas(ctx);

        // Re-arm the next frame; pause stops the self-rescheduling and the
        // toggle interaction itself re-arms on resume.
        if !self.config.spirals.paused {
            ctx.request_repaint();
        }
    }
}

impl SpiralStudioApp {
    fn render_top_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("🌀 Spiral Studio RS");
                ui.separator();

                let pause_label = if self.config.spirals.paused {
                    "▶ Start"
                } else {
                    "⏸ Pause"
                };
                if ui.button(pause_label).clicked() {
                    self.config.spirals.paused = !self.config.spirals.paused;
                }

                if ui.button("↺ Reset").clicked() {
                    self.reset();
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let fps = 1.0 / self.last_dt.max(0.001);
                    ui.label(format!("FPS: {:.0}", fps));
                    ui.separator();
                    ui.label(format!("Spirals: {}", self.engine.spirals.len()));
                });
            });
        });
    }

    fn render_settings_panel(&mut self, ctx: &egui::Context) {
        egui::SidePanel::right("settings_panel")
            .min_width(240.0)
            .show(ctx, |ui| {
                ui.heading("Settings");
                ui.separator();

                // Preset selector
                ui.horizontal(|ui| {
                    ui.label("Preset:");
                    egui::ComboBox::from_id_source("preset_combo")
                        .selected_text(self.selected_preset.name())
                        .show_ui(ui, |ui| {
                            for preset in PresetType::all() {
                                if ui
                                    .selectable_value(
                                        &mut self.selected_preset,
                                        preset,
                                        preset.name(),
                                    )
                                    .on_hover_text(preset.description())
                                    .changed()
                                {
                                    preset.apply(&mut self.config.spirals);
                                }
                            }
                        });
                });

                ui.separator();

                ui.horizontal(|ui| {
                    ui.label("Color");
                    if ui
                        .color_edit_button_srgb(&mut self.config.spirals.color)
                        .changed()
                    {
                        self.selected_preset = PresetType::Custom;
                    }
                });

                let mut edited = false;

                ui.label("Circles per batch");
                edited |= ui
                    .add(egui::Slider::new(
                        &mut self.config.spirals.circles_per_batch,
                        1..=50,
                    ))
                    .changed();

                ui.label("Radius");
                edited |= ui
                    .add(egui::Slider::new(&mut self.config.spirals.radius, 1.0..=50.0))
                    .changed();

                ui.label("Angular speed");
                edited |= ui
                    .add(
                        egui::Slider::new(&mut self.config.spirals.angular_speed, 0.0..=0.2)
                            .fixed_decimals(3),
                    )
                    .changed();

                ui.label("Linear speed");
                edited |= ui
                    .add(egui::Slider::new(
                        &mut self.config.spirals.linear_speed,
                        0.0..=10.0,
                    ))
                    .changed();

                ui.label("Spawn interval (ms)");
                edited |= ui
                    .add(egui::Slider::new(
                        &mut self.config.spirals.interval_ms,
                        50..=5000,
                    ))
                    .changed();
                ui.small("Applies on reset");

                ui.label("Spiral arms");
                edited |= ui
                    .add(egui::Slider::new(&mut self.config.spirals.arm_count, 1..=12))
                    .changed();
                ui.small("Reflection symmetry covers up to 8 arms");

                if edited {
                    self.selected_preset = PresetType::Custom;
                }

                ui.add_space(8.0);
                ui.separator();

                if ui
                    .checkbox(&mut self.config.spirals.collide_kill, "Collide kill")
                    .changed()
                {
                    self.selected_preset = PresetType::Custom;
                }
                if ui
                    .checkbox(&mut self.config.spirals.mandala, "Mandala trails")
                    .changed()
                {
                    self.selected_preset = PresetType::Custom;
                }

                ui.add_space(16.0);
                ui.separator();
                ui.heading("💾 Configuration");

                if ui.button("💾 Save Config").clicked() {
                    if let Some(path) = rfd::FileDialog::new()
                        .add_filter("JSON", &["json"])
                        .save_file()
                    {
                        if let Err(e) = self.config.save(&path.to_string_lossy()) {
                            log::error!("error saving config: {}", e);
                        }
                    }
                }

                if ui.button("📂 Load Config").clicked() {
                    if let Some(path) = rfd::FileDialog::new()
                        .add_filter("JSON", &["json"])
                        .pick_file()
                    {
                        match AppConfig::load(&path.to_string_lossy()) {
                            Ok(config) => {
                                self.config = config;
                                self.selected_preset = PresetType::Custom;
                                self.spawner.rearm(self.config.spirals.interval_ms);
                            }
                            Err(e) => log::error!("error loading config: {}", e),
                        }
                    }
                }
            });
    }

    fn render_canvas(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let (rect, _) = ui.allocate_exact_size(ui.available_size(), egui::Sense::hover());
            self.geometry.resize(rect.width(), rect.height());

            if !self.config.spirals.paused {
                self.engine.update(&self.config.spirals, &self.geometry);
            }

            let painter = ui.painter_at(rect);
            painter.rect_filled(rect, 0.0, self.config.background32());
            self.engine.render(&painter, rect, &self.config.spirals);

            if !self.config.spirals.paused {
                self.engine.prune_out_of_bounds(&self.geometry);
            }
        });
    }
}

fn main() -> eframe::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_title("Spiral Studio RS")
            .with_min_inner_size([800.0, 600.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Spiral Studio RS",
        options,
        Box::new(|cc| Box::new(SpiralStudioApp::new(cc))),
    )
}
