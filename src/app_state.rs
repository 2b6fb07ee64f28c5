use crate::config_source::StaticFileSource;
use crate::settings::Settings;

pub struct AppState {
    pub settings: Settings,
    pub source: StaticFileSource,
}

impl AppState {
    pub fn new(settings: Settings) -> Self {
        let source = StaticFileSource::new(settings.config_path());
        Self { settings, source }
    }
}
