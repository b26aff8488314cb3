pub const CONTAINER: &str = "min-h-screen bg-gray-50 dark:bg-gray-900 w-full px-4 sm:px-6 lg:px-8 py-8";
pub const CARD: &str = "bg-white dark:bg-gray-800 rounded-2xl shadow-xl dark:shadow-[0_8px_30px_-12px_rgba(255,255,255,0.1)] max-w-xl mx-auto p-6 sm:p-8 border border-gray-100 dark:border-gray-700";
pub const TEXT_H1: &str = "text-3xl font-bold mb-6 text-center text-gray-900 dark:text-white";
pub const TEXT_H3: &str = "text-lg font-semibold mb-3 text-gray-900 dark:text-white";
pub const TEXT_SMALL: &str = "text-sm text-gray-500 dark:text-gray-400";
pub const BUTTON_SPIN: &str = "w-full px-8 py-4 rounded-full font-bold text-lg text-white bg-gradient-to-r from-yellow-400 to-orange-500 hover:from-yellow-500 hover:to-orange-600 shadow-lg transition-all duration-300 disabled:opacity-60 disabled:cursor-not-allowed";
pub const RESULT_REGION: &str = "mt-6 min-h-[4rem] text-center text-gray-700 dark:text-gray-200";
pub const STATS_PANEL: &str = "mt-6 space-y-2 bg-gray-50 dark:bg-gray-700/30 p-4 rounded-xl";
pub const STATS_VALUE: &str = "text-sm font-bold text-blue-600 dark:text-blue-400";
pub const GALLERY: &str = "mt-6 bg-gray-50 dark:bg-gray-700/30 p-4 rounded-xl";
pub const GALLERY_ITEM: &str = "flex items-center justify-between gap-3 pl-3 py-2 border-l-4 text-gray-700 dark:text-gray-200";
pub const BUTTON_COMPLETE: &str = "px-3 py-1 rounded-full text-xs font-semibold text-white bg-green-500 hover:bg-green-600 transition-colors";

// Plain selectors used by the spin handler's markup, which Tailwind never sees.
pub const WHEEL_CSS: &str = r#"
.wheel {
    width: 280px;
    height: 280px;
    margin: 0 auto;
    border-radius: 50%;
    border: 6px solid #1f2937;
    background: conic-gradient(
        #ff6b6b 0deg 45deg,
        #feca57 45deg 90deg,
        #48dbfb 90deg 135deg,
        #1dd1a1 135deg 180deg,
        #5f27cd 180deg 225deg,
        #ff9ff3 225deg 270deg,
        #54a0ff 270deg 315deg,
        #00d2d3 315deg 360deg
    );
}

.wheel-pointer {
    width: 0;
    height: 0;
    margin: 0 auto -12px;
    border-left: 14px solid transparent;
    border-right: 14px solid transparent;
    border-top: 24px solid #1f2937;
    position: relative;
    z-index: 1;
}

.result-card {
    border: 3px solid;
    border-radius: 12px;
    padding: 1rem 1.5rem;
    text-align: left;
}

.error {
    color: #dc2626;
    font-weight: 600;
}
"#;
