// SPDX-License-Identifier: MIT

use eframe::egui;

use yardplan::gui::YardPlanApp;

fn main() -> Result<(), eframe::Error> {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1200.0, 800.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Property Layout Planner",
        options,
        Box::new(|_cc| Ok(Box::new(YardPlanApp::new()))),
    )
}
