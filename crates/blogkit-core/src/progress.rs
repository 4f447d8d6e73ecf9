//! Reading progress arithmetic.

/// Fraction of the article read, in `0.0..=1.0`.
///
/// Progress starts when the article top enters the bottom of the viewport
/// and completes when the article bottom reaches it.
pub fn reading_progress(
    article_top: f64,
    article_height: f64,
    window_height: f64,
    scroll_y: f64,
) -> f64 {
    let start = article_top - window_height;
    let end = article_top + article_height - window_height;
    let span = end - start;

    if span <= 0.0 {
        return if scroll_y >= start { 1.0 } else { 0.0 };
    }

    ((scroll_y - start) / span).clamp(0.0, 1.0)
}

/// CSS width for a progress fraction.
pub fn bar_width(progress: f64) -> String {
    format!("{}%", progress * 100.0)
}
