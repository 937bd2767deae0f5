use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose reveal tracing when running `trunk serve`
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Tuning knobs for the scroll-driven effects on the page.
#[derive(Clone, Debug, PartialEq)]
pub struct SiteConfig {
    /// Delay between two typed characters of the hero heading.
    pub type_interval_ms: u32,
    /// Lead-in before a project card's center reaches the scroll offset.
    pub project_margin_px: f64,
    /// Lead-in for section headings.
    pub heading_margin_px: f64,
    /// Where in the viewport project cards are compared, in viewport heights.
    pub reading_line_vh: f64,
    /// Where the services thread starts, in viewport heights.
    pub services_start_vh: f64,
    /// How long the thread keeps growing, in viewport heights.
    pub services_span_vh: f64,
    pub services_epsilon: f64,
    pub services_stagger_ms: u32,
    /// Upward movement tolerated before a latched reveal re-arms.
    pub rearm_slack_px: u32,
    /// The hero counts as left once scrolled past this many viewport heights.
    pub hero_exit_vh: f64,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            type_interval_ms: 50,
            project_margin_px: 200.0,
            heading_margin_px: 300.0,
            reading_line_vh: 0.5,
            services_start_vh: 0.8,
            services_span_vh: 1.5,
            services_epsilon: 0.05,
            services_stagger_ms: 150,
            rearm_slack_px: 48,
            hero_exit_vh: 0.9,
        }
    }
}

pub fn site_config() -> SiteConfig {
    SiteConfig::default()
}
