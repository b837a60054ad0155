mod api;
mod app;
mod config;
mod screens;
mod workbook;

use iced::Task;
use log::{error, info};
use api::HttpAdminApi;
use app::App;

fn main() -> iced::Result {
    env_logger::init();

    let config = config::load_config();
    let api = match HttpAdminApi::new(&config.server_url) {
        Ok(api) => api,
        Err(err) => {
            error!("could not create HTTP client: {}", err);
            std::process::exit(1);
        }
    };
    info!("homework admin console, server {}", api.base_url());

    iced::application("作业管理系统 - 管理后台", App::update, App::view)
        .theme(|app: &App| app.theme.clone())
        .window_size(iced::Size::new(1400.0, 800.0))
        .run_with(move || (App::new(config, api), Task::none()))
}
