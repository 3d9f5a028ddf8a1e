use eframe::egui;
use foldericon_core::config::AppConfig;
use foldericon_core::icon::{IMAGE_EXTENSIONS, IconImage};
use foldericon_core::preview;
use foldericon_core::session::{self, Session, Status};
use foldericon_core::target;
use foldericon_core::workspace;
use std::path::Path;

/// Main application struct
pub struct FolderIconApp {
    session: Session,
    config: AppConfig,
    /// Names shown in the folder preview list
    folder_contents: Vec<String>,
    /// Uploaded GPU texture for the icon preview
    icon_preview: Option<egui::TextureHandle>,
    /// Demo mode flag
    demo_mode: bool,
}

impl FolderIconApp {
    pub fn new(demo_mode: bool) -> Self {
        let config = AppConfig::load_default();
        FolderIconApp {
            session: Session::new(config.reset_after_apply),
            config,
            folder_contents: Vec::new(),
            icon_preview: None,
            demo_mode,
        }
    }

    fn select_folder(&mut self) {
        let mut dialog = rfd::FileDialog::new();
        // Folder picks start at the Desktop
        if let Some(desktop) = dirs::desktop_dir() {
            dialog = dialog.set_directory(desktop);
        }

        let Some(path) = dialog.pick_folder() else {
            // Cancelled: leave the current selection untouched
            return;
        };

        if let Err(violation) = target::check_target(&path) {
            self.session.set_status(Status::FolderRejected {
                reason: violation.to_string(),
            });
            return;
        }

        self.session.set_folder(path);
        self.refresh_preview();
    }

    fn refresh_preview(&mut self) {
        let Some(folder) = self.session.folder() else {
            self.folder_contents.clear();
            return;
        };

        match preview::folder_preview(folder) {
            Ok(names) => self.folder_contents = names,
            Err(_) => {
                self.folder_contents.clear();
                self.session.set_status(Status::PreviewFailed);
            }
        }
    }

    fn select_image(&mut self, ctx: &egui::Context) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("Image", IMAGE_EXTENSIONS)
            .pick_file()
        else {
            return;
        };

        match IconImage::load(&path) {
            Ok(icon) => {
                self.upload_preview(ctx, &icon);
                self.session.set_icon(icon);
            }
            Err(e) => {
                self.icon_preview = None;
                self.session.icon_load_failed(e);
            }
        }
    }

    fn upload_preview(&mut self, ctx: &egui::Context, icon: &IconImage) {
        let size = [icon.width() as usize, icon.height() as usize];
        let pixels = egui::ColorImage::from_rgba_unmultiplied(size, icon.rgba().as_raw());
        self.icon_preview =
            Some(ctx.load_texture("icon-preview", pixels, egui::TextureOptions::LINEAR));
    }

    fn apply(&mut self) {
        let result = if self.demo_mode {
            self.session.apply_with(|_, _| Ok(()))
        } else {
            self.session.apply_with(workspace::set_folder_icon)
        };

        // reset_after_apply may have cleared the selection
        if result.is_ok() && self.session.folder().is_none() {
            self.folder_contents.clear();
            self.icon_preview = None;
        }
    }

    fn remove_icon(&mut self) {
        let Some(folder) = self.session.folder().map(Path::to_path_buf) else {
            return;
        };

        let result = if self.demo_mode {
            Ok(())
        } else {
            workspace::clear_folder_icon(&folder)
        };

        match result {
            Ok(()) => self.session.set_status(Status::IconRemoved {
                folder: session::display_name(&folder),
            }),
            Err(e) => self.session.set_status(Status::ApplyFailed {
                reason: e.to_string(),
            }),
        }
    }

    fn save_config(&mut self) {
        let Some(path) = AppConfig::default_path() else {
            return;
        };
        if let Err(e) = self.config.save(&path) {
            eprintln!("Failed to save config: {}", e);
        }
    }

    /// Render the fixed-height folder contents list
    fn render_preview_list(ui: &mut egui::Ui, names: &[String]) {
        let height = 150.0;
        egui::Frame::none()
            .fill(egui::Color32::from_gray(245))
            .rounding(4.0)
            .inner_margin(4.0)
            .show(ui, |ui| {
                egui::ScrollArea::vertical()
                    .max_height(height)
                    .min_scrolled_height(height)
                    .show(ui, |ui| {
                        ui.set_min_height(height);
                        ui.set_min_width(ui.available_width());
                        for name in names {
                            ui.label(egui::RichText::new(name.as_str()).monospace().small());
                        }
                    });
            });
    }

    fn render_folder_section(&mut self, ui: &mut egui::Ui) {
        if ui.button("Select Folder...").clicked() {
            self.select_folder();
        }

        if let Some(folder) = self.session.folder() {
            ui.add_space(4.0);
            ui.label(
                egui::RichText::new(format!("Selected: {}", session::display_name(folder)))
                    .color(egui::Color32::from_rgb(59, 130, 246))
                    .small(),
            );
            ui.add_space(4.0);
            Self::render_preview_list(ui, &self.folder_contents);
        }
    }

    fn render_image_section(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        if ui.button("Select Icon Image...").clicked() {
            self.select_image(ctx);
        }

        if let Some(texture) = &self.icon_preview {
            ui.add_space(4.0);
            ui.image((texture.id(), egui::vec2(64.0, 64.0)));
        }
    }

    fn render_apply_section(&mut self, ui: &mut egui::Ui) {
        let can_apply = self.session.can_apply();
        if ui
            .add_enabled(can_apply, egui::Button::new("Apply New Icon"))
            .clicked()
        {
            self.apply();
        }

        let has_folder = self.session.folder().is_some();
        if ui
            .add_enabled(has_folder, egui::Button::new("Remove Custom Icon"))
            .clicked()
        {
            self.remove_icon();
        }

        ui.add_space(8.0);
        let mut reset = self.config.reset_after_apply;
        if ui
            .checkbox(&mut reset, "Reset selection after applying")
            .changed()
        {
            self.config.reset_after_apply = reset;
            self.session.set_reset_after_apply(reset);
            self.save_config();
        }
    }

    fn render_status(&self, ui: &mut egui::Ui) {
        ui.separator();
        ui.label(
            egui::RichText::new(self.session.status().to_string())
                .small()
                .color(egui::Color32::DARK_GRAY),
        );
        if self.demo_mode {
            ui.label(
                egui::RichText::new("(Demo Mode)")
                    .color(egui::Color32::GRAY)
                    .italics(),
            );
        }
    }
}

impl eframe::App for FolderIconApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(8.0);
            ui.vertical_centered(|ui| {
                ui.heading("Folder Icon Customizer");
            });
            ui.add_space(12.0);

            self.render_folder_section(ui);
            ui.add_space(8.0);
            ui.separator();
            ui.add_space(8.0);
            self.render_image_section(ui, ctx);
            ui.add_space(12.0);
            self.render_apply_section(ui);

            self.render_status(ui);
        });
    }
}

/// Run the GUI application
pub fn run(demo_mode: bool) -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([400.0, 550.0])
            .with_min_inner_size([360.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Folder Customizer",
        options,
        Box::new(move |cc| {
            // Use light theme
            cc.egui_ctx.set_visuals(egui::Visuals::light());
            Ok(Box::new(FolderIconApp::new(demo_mode)))
        }),
    )
}
