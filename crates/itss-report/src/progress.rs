use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

const FILLED: char = '█';
const EMPTY: char = '░';

/// Widest bar drawn; larger configured widths are clamped to it.
pub const MAX_BAR_WIDTH: usize = 200;

/// Render a score in [0, 1] as a fixed-width bar followed by its percentage.
///
/// Scores outside the unit interval are clamped, as are widths above
/// [`MAX_BAR_WIDTH`]. The number of filled cells is `round(score * width)`.
pub fn progress_bar(score: Decimal, width: usize) -> String {
    let width = width.min(MAX_BAR_WIDTH);
    let score = score.max(Decimal::ZERO).min(Decimal::ONE);
    let filled = (score * Decimal::from(width))
        .round()
        .to_usize()
        .unwrap_or(0)
        .min(width);
    let percent = (score * Decimal::ONE_HUNDRED).round();

    let mut bar = String::with_capacity(width * FILLED.len_utf8() + 8);
    bar.push('[');
    bar.extend(std::iter::repeat(FILLED).take(filled));
    bar.extend(std::iter::repeat(EMPTY).take(width - filled));
    bar.push(']');
    bar.push_str(&format!(" {percent}%"));
    bar
}
