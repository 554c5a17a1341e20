pub mod current_panel;
pub mod daily_grid;
pub mod dashboard;
pub mod help_bar;
pub mod hourly_strip;
pub mod search_overlay;

// Re-export core Component trait
pub use skycast_core::Component;

pub use current_panel::{CurrentPanel, CurrentPanelProps};
pub use daily_grid::{DailyGrid, DailyGridProps};
pub use dashboard::{Dashboard, DashboardProps, SPINNERS};
pub use help_bar::{HelpBar, HelpBarProps};
pub use hourly_strip::{HourlyStrip, HourlyStripProps};
pub use search_overlay::{SearchOverlay, SearchOverlayProps};

use chrono::TimeZone;

/// "HH:MM" in local time, for sunrise/sunset.
pub(crate) fn clock(ts: i64) -> String {
    chrono::Local
        .timestamp_opt(ts, 0)
        .single()
        .map(|dt| dt.format("%H:%M").to_string())
        .unwrap_or_else(|| "--:--".into())
}

/// "HH:00" in local time, for hourly cells.
pub(crate) fn hour(ts: i64) -> String {
    chrono::Local
        .timestamp_opt(ts, 0)
        .single()
        .map(|dt| dt.format("%H:00").to_string())
        .unwrap_or_else(|| "--:00".into())
}

/// Short weekday name in local time, for daily cells.
pub(crate) fn weekday(ts: i64) -> String {
    chrono::Local
        .timestamp_opt(ts, 0)
        .single()
        .map(|dt| dt.format("%a").to_string())
        .unwrap_or_else(|| "---".into())
}
