// SPDX-License-Identifier: MIT

use eframe::egui;
use rfd::FileDialog;
use std::path::PathBuf;
use std::time::Instant;

use crate::export;
use crate::geom::{flip_front, DevPoint};
use crate::layout::{LayoutData, ObjectKind, PointObject, Property, RectangleObject};
use crate::render::scene::{self, object_device_rect, Scene, POINT_RADIUS};
use crate::render::{
    palette, CanvasMap, DeviceMap, DrawCmd, Rgba, TextAlign, DEFAULT_ZOOM, ZOOM_STEP,
};

/// Minimum interval between full scene rebuilds while a drag is in progress.
const DRAG_REDRAW_MS: u128 = 33;
const ROTATE_MARKER_OFFSET: f32 = 15.0;
const ROTATE_HIT_RADIUS: f32 = 12.0;

struct DragState {
    kind: ObjectKind,
    /// Pointer offset from the object's device anchor at grab time.
    grab_offset: egui::Vec2,
    start_pos: (f64, f64),
}

/// Form state for the new-layout / edit-dimensions dialog. All fields are
/// kept as raw strings so the user can type freely; parsing happens on
/// submit.
struct LayoutForm {
    editing: bool,
    front: String,
    back: String,
    left: String,
    right: String,
    include: [bool; 4],
    // Per object: width/height for rectangles, x/y for everything. Entries
    // for fields a kind does not have stay empty.
    width: [String; 4],
    height: [String; 4],
    x: [String; 4],
    y: [String; 4],
    error: Option<String>,
}

impl LayoutForm {
    fn empty() -> Self {
        Self {
            editing: false,
            front: String::new(),
            back: String::new(),
            left: String::new(),
            right: String::new(),
            include: [false; 4],
            width: Default::default(),
            height: Default::default(),
            x: Default::default(),
            y: Default::default(),
            error: None,
        }
    }

    fn from_layout(layout: &LayoutData) -> Self {
        let mut form = Self::empty();
        form.editing = true;
        form.front = fmt_ft(layout.boundary.front);
        form.back = fmt_ft(layout.boundary.back);
        form.left = fmt_ft(layout.boundary.left);
        form.right = fmt_ft(layout.boundary.right);
        for (i, kind) in ObjectKind::ALL.iter().enumerate() {
            match kind {
                ObjectKind::House | ObjectKind::Shed => {
                    if let Some(obj) = layout.rect_object(*kind) {
                        form.include[i] = true;
                        form.width[i] = fmt_ft(obj.width);
                        form.height[i] = fmt_ft(obj.height);
                        form.x[i] = obj.x.map(fmt_ft).unwrap_or_default();
                        form.y[i] = obj.y.map(fmt_ft).unwrap_or_default();
                    }
                }
                ObjectKind::Well | ObjectKind::Septic => {
                    if let Some(obj) = layout.point_object(*kind) {
                        form.include[i] = true;
                        form.x[i] = obj.x.map(fmt_ft).unwrap_or_default();
                        form.y[i] = obj.y.map(fmt_ft).unwrap_or_default();
                    }
                }
            }
        }
        form
    }

    fn build(&self) -> Result<LayoutData, String> {
        let boundary = Property {
            front: parse_ft("Front boundary", &self.front)?,
            back: parse_ft("Back boundary", &self.back)?,
            left: parse_ft("Left boundary", &self.left)?,
            right: parse_ft("Right boundary", &self.right)?,
        };
        let mut layout = LayoutData::new(boundary);
        for (i, kind) in ObjectKind::ALL.iter().enumerate() {
            if !self.include[i] {
                continue;
            }
            let name = kind.display_name();
            let x = parse_ft(&format!("{} distance from left", name), &self.x[i])?;
            let y = parse_ft(&format!("{} distance from front", name), &self.y[i])?;
            match kind {
                ObjectKind::House | ObjectKind::Shed => {
                    let width = parse_ft(&format!("{} width", name), &self.width[i])?;
                    let height = parse_ft(&format!("{} depth", name), &self.height[i])?;
                    if width <= 0.0 || height <= 0.0 {
                        return Err(format!("{} dimensions must be positive", name));
                    }
                    layout.set_rect_object(
                        *kind,
                        Some(RectangleObject::new(*kind, width, height, x, y)),
                    );
                }
                ObjectKind::Well | ObjectKind::Septic => {
                    layout.set_point_object(*kind, Some(PointObject::new(*kind, x, y)));
                }
            }
        }
        layout.validate().map_err(|e| e.to_string())?;
        Ok(layout)
    }
}

fn fmt_ft(v: f64) -> String {
    // f64's Display already prints whole values without a trailing ".0".
    v.to_string()
}

fn parse_ft(label: &str, text: &str) -> Result<f64, String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(format!("{} is required", label));
    }
    trimmed
        .parse::<f64>()
        .map_err(|_| format!("{} must be a number", label))
}

pub struct YardPlanApp {
    layout: Option<LayoutData>,
    file_path: Option<PathBuf>,
    zoom: f32,
    show_guides: bool,
    live_guides: bool,
    drag: Option<DragState>,
    scene_cache: Option<Scene>,
    last_drag_build: Option<Instant>,
    last_violation_count: usize,
    error_message: Option<String>,
    success_message: Option<String>,
    form: Option<LayoutForm>,
}

impl Default for YardPlanApp {
    fn default() -> Self {
        Self::new()
    }
}

impl YardPlanApp {
    pub fn new() -> Self {
        Self {
            layout: None,
            file_path: None,
            zoom: DEFAULT_ZOOM,
            show_guides: true,
            live_guides: false,
            drag: None,
            scene_cache: None,
            last_drag_build: None,
            last_violation_count: 0,
            error_message: None,
            success_message: None,
            form: None,
        }
    }

    fn open_layout(&mut self, path: PathBuf) {
        match crate::layout::reader::load(&path) {
            Ok(layout) => {
                self.layout = Some(layout);
                self.file_path = Some(path);
                self.zoom = DEFAULT_ZOOM;
                self.scene_cache = None;
                self.error_message = None;
            }
            Err(e) => {
                self.error_message = Some(format!("Failed to open layout: {}", e));
            }
        }
    }

    /// Writes the current layout back to its file. Every committed change
    /// goes through here so the file on disk always matches the screen.
    fn save_layout(&mut self) {
        let Some(layout) = self.layout.clone() else {
            return;
        };
        let path = match &self.file_path {
            Some(p) => p.clone(),
            None => {
                let Some(p) = FileDialog::new()
                    .add_filter("Layout files", &["json"])
                    .save_file()
                else {
                    return;
                };
                self.file_path = Some(p.clone());
                p
            }
        };
        if let Err(e) = crate::layout::reader::save(&layout, &path) {
            self.error_message = Some(format!("Failed to save layout: {}", e));
        }
    }

    fn export_pdf(&mut self, path: PathBuf) {
        let Some(layout) = self.layout.clone() else {
            return;
        };
        match export::export_to_pdf(&layout, &path) {
            Ok(()) => {
                self.success_message = Some(format!("Exported PDF to {}", path.display()));
            }
            Err(e) => {
                self.error_message = Some(format!("Failed to export PDF: {}", e));
            }
        }
    }

    /// Exports a PDF next to the layout file after a create/edit save. A
    /// failure here is reported but does not roll back the layout change.
    fn export_pdf_sibling(&mut self) {
        if let Some(path) = self.file_path.clone() {
            self.export_pdf(path.with_extension("pdf"));
        }
    }

    fn handle_form_submit(&mut self) {
        let Some(form) = &self.form else {
            return;
        };
        match form.build() {
            Ok(layout) => {
                let editing = form.editing;
                self.layout = Some(layout);
                self.form = None;
                self.scene_cache = None;
                if !editing {
                    self.file_path = FileDialog::new()
                        .add_filter("Layout files", &["json"])
                        .set_file_name("layout.json")
                        .save_file();
                }
                self.save_layout();
                self.export_pdf_sibling();
            }
            Err(msg) => {
                if let Some(form) = &mut self.form {
                    form.error = Some(msg);
                }
            }
        }
    }

    fn rotate_shed(&mut self) {
        let rotated = match &mut self.layout {
            Some(layout) => layout.rotate_shed(),
            None => false,
        };
        if rotated {
            self.scene_cache = None;
            self.save_layout();
        }
    }

    /// Returns the scene for this frame, rebuilding at most once per
    /// redraw interval while a drag is in progress.
    fn scene_for_frame(&mut self, layout: &LayoutData, map: &CanvasMap) -> Scene {
        let dragging = self.drag.is_some();
        if dragging {
            let due = self
                .last_drag_build
                .map(|t| t.elapsed().as_millis() >= DRAG_REDRAW_MS)
                .unwrap_or(true);
            if !due {
                if let Some(cached) = &self.scene_cache {
                    return cached.clone();
                }
            }
            self.last_drag_build = Some(Instant::now());
        }
        let opts = scene::SceneOptions {
            show_guides: self.show_guides && (!dragging || self.live_guides),
            ..Default::default()
        };
        let built = scene::build(layout, map, &opts);
        if built.violations.len() != self.last_violation_count {
            for v in &built.violations {
                log::warn!(
                    "{} extends {:.1} ft past the {} boundary",
                    v.kind.display_name(),
                    v.overshoot_ft,
                    v.edge.label()
                );
            }
            self.last_violation_count = built.violations.len();
        }
        self.scene_cache = Some(built.clone());
        built
    }

    fn render_menu_bar(&mut self, ui: &mut egui::Ui) {
        egui::menu::bar(ui, |ui| {
            ui.menu_button("File", |ui| {
                if ui.button("New Layout...").clicked() {
                    self.form = Some(LayoutForm::empty());
                    ui.close_menu();
                }
                if ui.button("Open Layout...").clicked() {
                    if let Some(path) = FileDialog::new()
                        .add_filter("Layout files", &["json"])
                        .pick_file()
                    {
                        self.open_layout(path);
                    }
                    ui.close_menu();
                }
                ui.separator();
                if ui
                    .add_enabled(self.layout.is_some(), egui::Button::new("Save"))
                    .clicked()
                {
                    self.save_layout();
                    ui.close_menu();
                }
                if ui
                    .add_enabled(self.layout.is_some(), egui::Button::new("Export PDF..."))
                    .clicked()
                {
                    let default_name = self
                        .file_path
                        .as_ref()
                        .and_then(|p| p.file_stem())
                        .map(|s| format!("{}.pdf", s.to_string_lossy()))
                        .unwrap_or_else(|| "layout.pdf".to_string());
                    if let Some(path) = FileDialog::new()
                        .add_filter("PDF files", &["pdf"])
                        .set_file_name(default_name)
                        .save_file()
                    {
                        self.export_pdf(path);
                    }
                    ui.close_menu();
                }
                ui.separator();
                if ui.button("Exit").clicked() {
                    ui.ctx().send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });
            ui.menu_button("Edit", |ui| {
                if ui
                    .add_enabled(
                        self.layout.is_some(),
                        egui::Button::new("Edit Dimensions..."),
                    )
                    .clicked()
                {
                    if let Some(layout) = &self.layout {
                        self.form = Some(LayoutForm::from_layout(layout));
                    }
                    ui.close_menu();
                }
                if ui
                    .add_enabled(
                        self.layout
                            .as_ref()
                            .and_then(|l| l.shed.as_ref())
                            .map(|s| s.is_placed())
                            .unwrap_or(false),
                        egui::Button::new("Rotate Shed"),
                    )
                    .clicked()
                {
                    self.rotate_shed();
                    ui.close_menu();
                }
            });
            ui.menu_button("View", |ui| {
                if ui
                    .checkbox(&mut self.show_guides, "Show Distance Guides")
                    .clicked()
                {
                    self.scene_cache = None;
                }
                ui.checkbox(&mut self.live_guides, "Update Guides While Dragging");
                ui.separator();
                if ui.button("Zoom In").clicked() {
                    self.zoom *= ZOOM_STEP;
                    ui.close_menu();
                }
                if ui.button("Zoom Out").clicked() {
                    self.zoom /= ZOOM_STEP;
                    ui.close_menu();
                }
                if ui.button("Reset Zoom").clicked() {
                    self.zoom = DEFAULT_ZOOM;
                    ui.close_menu();
                }
            });
        });
    }

    fn render_side_panel(&mut self, ui: &mut egui::Ui) {
        ui.heading("Legend");
        for kind in ObjectKind::ALL {
            ui.horizontal(|ui| {
                let (rect, _) =
                    ui.allocate_exact_size(egui::Vec2::new(14.0, 14.0), egui::Sense::hover());
                ui.painter()
                    .rect_filled(rect, 2.0, to_color32(kind_color(kind)));
                ui.label(kind.display_name());
            });
        }
        ui.separator();
        ui.heading("Distances");
        let report = self.scene_cache.as_ref().and_then(|s| s.report.clone());
        match report {
            Some(report) => {
                for edge in &report.edges {
                    ui.label(format!(
                        "Shed to {} boundary: {:.1} ft",
                        edge.edge.label(),
                        edge.measure.feet
                    ));
                }
                for obj in &report.objects {
                    ui.label(format!("Shed: {}", obj.label));
                }
                if !report.violations.is_empty() {
                    ui.separator();
                    for v in &report.violations {
                        ui.colored_label(
                            to_color32(palette::WARNING),
                            format!(
                                "{} extends {:.1} ft past the {} boundary",
                                v.kind.display_name(),
                                v.overshoot_ft,
                                v.edge.label()
                            ),
                        );
                    }
                }
            }
            None => {
                ui.label("Place the shed to see distances.");
            }
        }
    }

    fn render_canvas(&mut self, ui: &mut egui::Ui) {
        let Some(layout) = self.layout.clone() else {
            ui.label("No layout loaded. Use File > New Layout to get started.");
            return;
        };
        let avail = ui.available_size();
        let map = CanvasMap::fit(&layout.boundary, avail.x, avail.y, self.zoom);
        let canvas_size = map.canvas_size();

        egui::ScrollArea::both().show(ui, |ui| {
            let (response, painter) = ui.allocate_painter(
                egui::Vec2::new(canvas_size.0, canvas_size.1),
                egui::Sense::click_and_drag(),
            );
            let origin = response.rect.min;

            self.handle_pointer(&response, origin, &map, &layout);
            // A drag may have moved an object this frame; render the
            // updated layout, not the pre-event snapshot.
            let layout = match &self.layout {
                Some(l) => l.clone(),
                None => return,
            };
            let scene = self.scene_for_frame(&layout, &map);
            for cmd in &scene.cmds {
                paint_cmd(&painter, origin, cmd);
            }
            self.paint_rotate_marker(&painter, origin, &map, &layout);
        });

        if ui.input(|i| i.key_pressed(egui::Key::R)) {
            self.rotate_shed();
        }
        if ui.input(|i| i.key_pressed(egui::Key::Plus) || i.key_pressed(egui::Key::Equals)) {
            self.zoom *= ZOOM_STEP;
        }
        if ui.input(|i| i.key_pressed(egui::Key::Minus)) {
            self.zoom /= ZOOM_STEP;
        }
    }

    fn paint_rotate_marker(
        &self,
        painter: &egui::Painter,
        origin: egui::Pos2,
        map: &CanvasMap,
        layout: &LayoutData,
    ) {
        if let Some(pos) = rotate_marker_pos(map, layout) {
            painter.text(
                origin + egui::Vec2::new(pos.0, pos.1),
                egui::Align2::CENTER_CENTER,
                "\u{21bb}",
                egui::FontId::proportional(14.0),
                to_color32(palette::SHED),
            );
        }
    }

    fn handle_pointer(
        &mut self,
        response: &egui::Response,
        origin: egui::Pos2,
        map: &CanvasMap,
        layout: &LayoutData,
    ) {
        if response.clicked() {
            if let (Some(pos), Some(marker)) = (
                response.interact_pointer_pos(),
                rotate_marker_pos(map, layout),
            ) {
                let local = pos - origin;
                let d = (local.x - marker.0).hypot(local.y - marker.1);
                if d <= ROTATE_HIT_RADIUS {
                    self.rotate_shed();
                    return;
                }
            }
        }

        if response.drag_started() {
            if let Some(pos) = response.interact_pointer_pos() {
                let local = pos - origin;
                self.drag = hit_test(map, layout, local.x, local.y);
                self.last_drag_build = None;
            }
        }

        if response.dragged() {
            if let (Some(drag), Some(pos)) = (&self.drag, response.interact_pointer_pos()) {
                let local = pos - origin;
                let anchor_x = local.x - drag.grab_offset.x;
                let anchor_y = local.y - drag.grab_offset.y;
                let kind = drag.kind;
                if let Some(layout) = &mut self.layout {
                    move_object(layout, map, kind, anchor_x, anchor_y);
                }
            }
        }

        if response.drag_stopped() {
            if let Some(drag) = self.drag.take() {
                let mut changed = false;
                if let Some(layout) = &mut self.layout {
                    changed = commit_drag(layout, drag.kind, drag.start_pos);
                }
                self.scene_cache = None;
                self.last_drag_build = None;
                if changed {
                    self.save_layout();
                }
            }
        }
    }

    fn render_form(&mut self, ctx: &egui::Context) {
        let Some(form) = &mut self.form else {
            return;
        };
        let title = if form.editing {
            "Edit Dimensions"
        } else {
            "New Layout"
        };
        let mut submit = false;
        let mut cancel = false;
        egui::Window::new(title)
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                ui.label("Property boundaries (feet):");
                egui::Grid::new("boundary_grid")
                    .num_columns(4)
                    .show(ui, |ui| {
                        ui.label("Front");
                        ui.text_edit_singleline(&mut form.front);
                        ui.label("Back");
                        ui.text_edit_singleline(&mut form.back);
                        ui.end_row();
                        ui.label("Left");
                        ui.text_edit_singleline(&mut form.left);
                        ui.label("Right");
                        ui.text_edit_singleline(&mut form.right);
                        ui.end_row();
                    });
                ui.separator();
                ui.label("Objects:");
                for (i, kind) in ObjectKind::ALL.iter().enumerate() {
                    ui.checkbox(&mut form.include[i], kind.display_name());
                    if !form.include[i] {
                        continue;
                    }
                    ui.horizontal(|ui| {
                        if matches!(kind, ObjectKind::House | ObjectKind::Shed) {
                            ui.label("Width");
                            ui.add(
                                egui::TextEdit::singleline(&mut form.width[i]).desired_width(50.0),
                            );
                            ui.label("Depth");
                            ui.add(
                                egui::TextEdit::singleline(&mut form.height[i]).desired_width(50.0),
                            );
                        }
                        ui.label("From left");
                        ui.add(egui::TextEdit::singleline(&mut form.x[i]).desired_width(50.0));
                        ui.label("From front");
                        ui.add(egui::TextEdit::singleline(&mut form.y[i]).desired_width(50.0));
                    });
                }
                if let Some(error) = &form.error {
                    ui.separator();
                    ui.colored_label(to_color32(palette::WARNING), error);
                }
                ui.separator();
                ui.horizontal(|ui| {
                    if ui
                        .button(if form.editing { "Apply" } else { "Create" })
                        .clicked()
                    {
                        submit = true;
                    }
                    if ui.button("Cancel").clicked() {
                        cancel = true;
                    }
                });
            });
        if submit {
            self.handle_form_submit();
        } else if cancel {
            self.form = None;
        }
    }
}

impl eframe::App for YardPlanApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if let Some(error) = &self.error_message.clone() {
            egui::Window::new("Error")
                .collapsible(false)
                .resizable(false)
                .show(ctx, |ui| {
                    ui.colored_label(egui::Color32::from_rgb(244, 67, 54), error);
                    ui.separator();
                    ui.horizontal(|ui| {
                        ui.allocate_space(egui::Vec2::new(ui.available_width() / 2.0 - 25.0, 0.0));
                        if ui.button("OK").clicked() {
                            self.error_message = None;
                        }
                    });
                });
        }

        if let Some(success) = &self.success_message.clone() {
            egui::Window::new("Success")
                .collapsible(false)
                .resizable(false)
                .show(ctx, |ui| {
                    ui.colored_label(egui::Color32::from_rgb(76, 175, 80), success);
                    ui.separator();
                    ui.horizontal(|ui| {
                        ui.allocate_space(egui::Vec2::new(ui.available_width() / 2.0 - 25.0, 0.0));
                        if ui.button("OK").clicked() {
                            self.success_message = None;
                        }
                    });
                });
        }

        self.render_form(ctx);

        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            self.render_menu_bar(ui);
        });

        egui::SidePanel::left("legend_panel")
            .resizable(true)
            .default_width(240.0)
            .show(ctx, |ui| {
                self.render_side_panel(ui);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.render_canvas(ui);
        });

        if self.drag.is_some() {
            ctx.request_repaint();
        }
    }
}

/// Device position of the rotate marker drawn above the shed.
fn rotate_marker_pos(map: &CanvasMap, layout: &LayoutData) -> Option<(f32, f32)> {
    let rect = object_device_rect(layout, map, ObjectKind::Shed, layout.boundary.height())?;
    Some((rect.center().x, rect.min_y - ROTATE_MARKER_OFFSET))
}

/// Finds the topmost object under the pointer. Objects are drawn in
/// `ObjectKind::ALL` order, so hit testing walks that order in reverse.
fn hit_test(map: &CanvasMap, layout: &LayoutData, px: f32, py: f32) -> Option<DragState> {
    let height = layout.boundary.height();
    for kind in ObjectKind::ALL.iter().rev() {
        match kind {
            ObjectKind::House | ObjectKind::Shed => {
                let Some(dev) = object_device_rect(layout, map, *kind, height) else {
                    continue;
                };
                if dev.contains_point(DevPoint::new(px, py)) {
                    let obj = layout.rect_object(*kind)?;
                    return Some(DragState {
                        kind: *kind,
                        grab_offset: egui::Vec2::new(px - dev.min_x, py - dev.min_y),
                        start_pos: (obj.x?, obj.y?),
                    });
                }
            }
            ObjectKind::Well | ObjectKind::Septic => {
                let Some(point) = layout.point_object(*kind).and_then(|o| o.point(height)) else {
                    continue;
                };
                let dev = map.to_device(point);
                if (px - dev.x).hypot(py - dev.y) <= POINT_RADIUS + 2.0 {
                    let obj = layout.point_object(*kind)?;
                    return Some(DragState {
                        kind: *kind,
                        grab_offset: egui::Vec2::new(px - dev.x, py - dev.y),
                        start_pos: (obj.x?, obj.y?),
                    });
                }
            }
        }
    }
    None
}

/// Moves an object so its device anchor lands at `(anchor_x, anchor_y)`.
/// Positions stay unrounded during the drag; rounding happens on commit.
fn move_object(
    layout: &mut LayoutData,
    map: &CanvasMap,
    kind: ObjectKind,
    anchor_x: f32,
    anchor_y: f32,
) {
    let height = layout.boundary.height();
    let ft = map.to_feet(DevPoint::new(anchor_x, anchor_y));
    match kind {
        ObjectKind::House | ObjectKind::Shed => {
            if let Some(obj) = layout.rect_object_mut(kind) {
                let extent = obj.height;
                obj.x = Some(ft.x);
                obj.y = Some(flip_front(height, ft.y, extent));
            }
        }
        ObjectKind::Well | ObjectKind::Septic => {
            if let Some(obj) = layout.point_object_mut(kind) {
                obj.x = Some(ft.x);
                obj.y = Some(flip_front(height, ft.y, 0.0));
            }
        }
    }
}

/// Rounds the dragged object's position to two decimals and reports
/// whether it actually moved from where the drag started.
fn commit_drag(layout: &mut LayoutData, kind: ObjectKind, start: (f64, f64)) -> bool {
    let round2 = |v: f64| (v * 100.0).round() / 100.0;
    let committed = match kind {
        ObjectKind::House | ObjectKind::Shed => layout.rect_object_mut(kind).and_then(|obj| {
            obj.x = obj.x.map(round2);
            obj.y = obj.y.map(round2);
            Some((obj.x?, obj.y?))
        }),
        ObjectKind::Well | ObjectKind::Septic => layout.point_object_mut(kind).and_then(|obj| {
            obj.x = obj.x.map(round2);
            obj.y = obj.y.map(round2);
            Some((obj.x?, obj.y?))
        }),
    };
    match committed {
        Some(pos) => pos != (round2(start.0), round2(start.1)),
        None => false,
    }
}

fn kind_color(kind: ObjectKind) -> Rgba {
    match kind {
        ObjectKind::House => palette::HOUSE,
        ObjectKind::Shed => palette::SHED,
        ObjectKind::Well => palette::WELL,
        ObjectKind::Septic => palette::SEPTIC,
    }
}

fn to_color32(c: Rgba) -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(c.r, c.g, c.b, c.a)
}

fn to_pos2(origin: egui::Pos2, p: DevPoint) -> egui::Pos2 {
    origin + egui::Vec2::new(p.x, p.y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fmt_ft_whole_and_fractional() {
        assert_eq!(fmt_ft(12.0), "12");
        assert_eq!(fmt_ft(12.5), "12.5");
        assert_eq!(fmt_ft(0.0), "0");
    }

    #[test]
    fn test_fmt_ft_beyond_i64_range() {
        // Values past i64::MAX must not collapse to the saturated cast value.
        assert_eq!(fmt_ft(1e19), "10000000000000000000");
        assert_ne!(fmt_ft(1e19), i64::MAX.to_string());
    }
}

fn paint_cmd(painter: &egui::Painter, origin: egui::Pos2, cmd: &DrawCmd) {
    match cmd {
        DrawCmd::Line {
            a,
            b,
            width,
            color,
            dashed,
        } => {
            let stroke = egui::Stroke::new(*width, to_color32(*color));
            let pa = to_pos2(origin, *a);
            let pb = to_pos2(origin, *b);
            if *dashed {
                painter.extend(egui::Shape::dashed_line(&[pa, pb], stroke, 4.0, 3.0));
            } else {
                painter.line_segment([pa, pb], stroke);
            }
        }
        DrawCmd::Rect { rect, fill, stroke } => {
            let egui_rect = egui::Rect::from_min_max(
                origin + egui::Vec2::new(rect.min_x, rect.min_y),
                origin + egui::Vec2::new(rect.max_x, rect.max_y),
            );
            if let Some(fill) = fill {
                painter.rect_filled(egui_rect, 0.0, to_color32(*fill));
            }
            if let Some((width, color)) = stroke {
                painter.rect_stroke(
                    egui_rect,
                    0.0,
                    egui::Stroke::new(*width, to_color32(*color)),
                    egui::StrokeKind::Middle,
                );
            }
        }
        DrawCmd::Circle {
            center,
            radius,
            fill,
        } => {
            painter.circle_filled(to_pos2(origin, *center), *radius, to_color32(*fill));
        }
        DrawCmd::Text {
            pos,
            text,
            size,
            color,
            align,
        } => {
            let anchor = match align {
                TextAlign::Center => egui::Align2::CENTER_CENTER,
                TextAlign::Left => egui::Align2::LEFT_CENTER,
            };
            painter.text(
                to_pos2(origin, *pos),
                anchor,
                text,
                egui::FontId::proportional(*size),
                to_color32(*color),
            );
        }
    }
}
