mod app;
mod config;

mod domain {
    pub mod costing;
    pub mod entities {
        pub mod edit;
        pub mod quote;
    }
}

mod infra {
    pub mod telemetry;
    pub mod baseline {
        pub mod file;
    }
    pub mod sqlite {
        pub mod repo;
        pub mod schema;
        pub mod slots;
    }
}

mod platform {
    pub mod desktop {
        pub mod blocking;
    }
}

mod ui {
    pub mod format;
    pub mod state {
        pub mod app_state;
        pub mod view;
    }
}

mod usecase {
    pub mod ports {
        pub mod baseline;
        pub mod storage;
    }
    pub mod services {
        pub mod bootstrap;
        pub mod persistence;
        pub mod quote_store;
    }
}


use crate::app::App;
use crate::config::{default_webview_data_dir, AppConfig, LOG_FILTER};
use crate::infra::telemetry::init_tracing;

fn main() {
    let log_filter = AppConfig::load()
        .map(|config| config.log_filter)
        .unwrap_or_else(|_| LOG_FILTER.to_string());
    init_tracing(&log_filter);

    let mut desktop_config = dioxus::desktop::Config::new()
        .with_window(dioxus::desktop::WindowBuilder::new().with_title("Quote Manager"));
    match default_webview_data_dir() {
        Ok(dir) => desktop_config = desktop_config.with_data_directory(dir),
        Err(err) => tracing::warn!(error = %err, "using default webview data directory"),
    }

    dioxus::LaunchBuilder::desktop()
        .with_cfg(desktop_config)
        .launch(App);
}
