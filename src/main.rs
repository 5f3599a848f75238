// Hide console window on Windows in release builds
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! SwiftFolder - Main Entry Point
//!
//! Keep a list of folders, open them all in the file browser on demand.
//! Built with Rust and egui.

use log::info;
use swiftfolder::app::SwiftFolderApp;

/// Application name constant.
const APP_NAME: &str = "SwiftFolder";

fn main() -> eframe::Result<()> {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    info!("Starting {}", APP_NAME);

    let viewport = eframe::egui::ViewportBuilder::default()
        .with_title(APP_NAME)
        .with_inner_size([560.0, 420.0])
        .with_min_inner_size([420.0, 300.0]);

    let native_options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        APP_NAME,
        native_options,
        Box::new(|cc| Ok(Box::new(SwiftFolderApp::new(cc)))),
    )
}
