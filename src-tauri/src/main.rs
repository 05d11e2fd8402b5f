// Prevents additional console window on Windows in release, DO NOT REMOVE!!
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use std::sync::Arc;

use log::info;
use tauri::menu::{MenuBuilder, SubmenuBuilder};
use tokio::sync::Mutex;

mod commands;
mod config;
mod errors;
mod events;
mod models;
mod services;
mod utils;

use commands::SharedStudio;
use config::StudioConfig;
use services::studio::DubbingStudio;

fn main() {
    utils::logger::init_logger();

    let studio: SharedStudio = Arc::new(Mutex::new(DubbingStudio::new(StudioConfig::default())));

    tauri::Builder::default()
        .manage(studio)
        .setup(|app| {
            // Create app submenu
            let app_menu = SubmenuBuilder::new(app, "App")
                .text("about", "About DubMaster")
                .separator()
                .quit()
                .build()?;

            let edit_menu = SubmenuBuilder::new(app, "Edit")
                .cut()
                .copy()
                .paste()
                .select_all()
                .build()?;
            // Create main menu
            let menu = MenuBuilder::new(app).items(&[&app_menu, &edit_menu]).build()?;

            app.set_menu(menu)?;

            info!("DubMaster studio ready");
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            commands::get_language_options,
            commands::get_studio_state,
            commands::set_source_url,
            commands::set_source_language,
            commands::set_target_language,
            commands::use_demo_video,
            commands::start_dubbing,
            commands::reset_studio,
            commands::download_dubbed_video,
            commands::preview_dubbed_video,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
