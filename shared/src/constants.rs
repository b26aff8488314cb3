pub const SPIN_ENDPOINT: &str = "/api/wheel/spin";
pub const STATS_ENDPOINT: &str = "/api/wheel/stats";
pub const REVEALED_ENDPOINT: &str = "/api/wheel/revealed";
pub const COMPLETE_ENDPOINT: &str = "/api/wheel/complete";

pub const IN_PROGRESS_TEXT: &str = "Вращаем колесо...";
pub const ERROR_TEXT: &str = "Ошибка! Попробуйте снова.";
pub const RESULT_HEADING: &str = "🎌 Результат:";
pub const CHARACTER_LABEL: &str = "Персонаж:";
pub const GENRE_LABEL: &str = "Жанр:";

pub const RESULT_CARD_CLASS: &str = "result-card";
pub const ERROR_CLASS: &str = "error";

pub const SPIN_DEGREES: u32 = 720;
pub const SPIN_DURATION_MS: u32 = 2000;
pub const SPIN_EASING: &str = "cubic-bezier(0.2, 0.8, 0.3, 1)";
pub const REVEAL_DELAY_MS: u32 = 2000;
