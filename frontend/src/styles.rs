pub const CONTAINER: &str = "container mx-auto px-6 py-10 max-w-6xl";

pub const CARD: &str = "bg-gray-800 border border-gray-700 rounded-xl shadow-lg p-6";
pub const CARD_SECTION: &str = "bg-gray-800 border border-gray-700 rounded-lg p-5 shadow-sm";
pub const ALERT_CARD: &str = "p-3 rounded-lg shadow-md text-sm font-medium";

pub const BUTTON_BASE: &str = "flex items-center gap-2 px-5 py-2 rounded-lg font-medium text-white transition-all duration-150 disabled:opacity-50 disabled:cursor-not-allowed";
pub const BUTTON_PRIMARY: &str = "bg-blue-600 hover:bg-blue-700 focus:ring-2 focus:ring-blue-400 focus:outline-none";
pub const BUTTON_SUCCESS: &str = "bg-green-600 hover:bg-green-700 focus:ring-2 focus:ring-green-400 focus:outline-none";
pub const BUTTON_DANGER: &str = "bg-red-600 hover:bg-red-700 focus:ring-2 focus:ring-red-400 focus:outline-none";
pub const BUTTON_MUTED: &str = "bg-gray-600 hover:bg-gray-700 focus:ring-2 focus:ring-gray-400 focus:outline-none";
pub const BUTTON_UPLOAD: &str = "bg-purple-600 hover:bg-purple-700 cursor-pointer";

pub const DEPT_GRID: &str = "grid grid-cols-2 md:grid-cols-3 lg:grid-cols-5 gap-4";
pub const DEPT_BUTTON: &str = "bg-gray-800 hover:bg-gray-700 text-gray-100 font-semibold py-8 px-4 rounded-xl shadow-lg border-2 border-blue-900 hover:border-blue-500 transform hover:scale-105 transition-all duration-200 disabled:opacity-50 disabled:cursor-not-allowed";
pub const DEPT_BADGE: &str = "inline-flex items-center gap-1.5 px-3 py-1 bg-blue-900 text-blue-200 rounded-full text-sm font-semibold";

pub const MODAL_OVERLAY: &str = "fixed inset-0 bg-black bg-opacity-60 flex items-center justify-center z-50 p-4";
pub const MODAL: &str = "bg-gray-800 rounded-2xl shadow-2xl p-8 max-w-md w-full relative";
pub const VOTE_BUTTON: &str = "flex flex-col items-center gap-3 px-8 py-6 text-white rounded-xl shadow-lg transform hover:scale-105 transition-all duration-200 disabled:opacity-50 disabled:cursor-not-allowed";

pub const HEADING_LG: &str = "text-4xl font-extrabold text-center text-gray-100";
pub const HEADING_MD: &str = "text-2xl font-bold mb-5 text-gray-100";
pub const HEADING_SM: &str = "text-xl font-semibold mb-3 text-gray-100";
pub const TEXT_MUTED: &str = "text-sm text-gray-400";

pub const FLEX_BETWEEN: &str = "flex justify-between items-center";
pub const ACTIONS_ROW: &str = "flex flex-wrap justify-center gap-3 my-8";
pub const STATS_GRID: &str = "grid grid-cols-1 md:grid-cols-3 gap-4 text-center";
pub const RESULTS_GRID: &str = "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-4";

pub const PROGRESS_TRACK: &str = "w-full bg-gray-700 rounded-full h-2";
pub const PROGRESS_LIKE: &str = "bg-green-500 h-2 rounded-full transition-all";
pub const PROGRESS_DISLIKE: &str = "bg-red-500 h-2 rounded-full transition-all";

pub const BADGE_LIVE: &str = "flex items-center gap-1 px-3 py-1 bg-green-900 text-green-200 rounded-full text-sm";
pub const BADGE_OFFLINE: &str = "flex items-center gap-1 px-3 py-1 bg-red-900 text-red-200 rounded-full text-sm";

pub fn combine_classes(base: &str, additional: &str) -> String {
    format!("{} {}", base, additional)
}

pub fn button(variant: &str) -> String {
    combine_classes(BUTTON_BASE, variant)
}

pub fn alert_style(style: &str) -> String {
    match style {
        "error" => combine_classes(ALERT_CARD, "bg-red-500 text-white"),
        "success" => combine_classes(ALERT_CARD, "bg-green-500 text-white"),
        "warning" => combine_classes(ALERT_CARD, "bg-yellow-500 text-white"),
        _ => combine_classes(ALERT_CARD, "bg-blue-500 text-white"),
    }
}

pub fn bar_width(percent: f64) -> String {
    format!("width: {:.1}%", percent)
}
