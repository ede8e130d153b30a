pub mod competitions;
pub mod palette;
pub mod settings;

pub use competitions::{find_competition, get_competitions, get_fpl_managers, CompetitionConfig, FplManager, TrackedMetrics};
pub use palette::PaletteKind;
pub use settings::AppConfig;
