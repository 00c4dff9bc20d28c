use bestfit::engine::config::DEFAULT_WORST_VALUE;

pub struct DefaultsConfig {
    pub worst_value: f64,
    pub pretty: bool,
    pub strict: bool,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            worst_value: DEFAULT_WORST_VALUE,
            pretty: false,
            strict: false,
        }
    }
}
