use super::pixel::Pixel;
use indexmap::IndexMap;

/// Frequency table of colors, ordered by when each color was first recorded.
///
/// Ranking ties are broken by that order: among equally frequent colors the
/// one recorded first wins. Feeding pixels in row-major scan order therefore
/// gives a deterministic result for any image.
#[derive(Debug, Clone, Default)]
pub struct ColorTally {
    counts: IndexMap<Pixel, usize>,
    total: usize,
}

impl ColorTally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, pixel: Pixel) {
        *self.counts.entry(pixel).or_insert(0) += 1;
        self.total += 1;
    }

    pub fn count_of(&self, pixel: &Pixel) -> usize {
        self.counts.get(pixel).copied().unwrap_or(0)
    }

    /// Number of pixels recorded.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Number of distinct colors recorded.
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Most frequent color and its count.
    pub fn dominant(&self) -> Option<(Pixel, usize)> {
        let mut best: Option<(Pixel, usize)> = None;
        for (&pixel, &count) in &self.counts {
            // Strictly greater keeps the earlier color on a tie
            if best.map_or(true, |(_, best_count)| count > best_count) {
                best = Some((pixel, count));
            }
        }
        best
    }

    /// Up to `n` colors, most frequent first, ties in first-seen order.
    pub fn most_common(&self, n: usize) -> Vec<(Pixel, usize)> {
        let mut ranked: Vec<(Pixel, usize)> =
            self.counts.iter().map(|(&pixel, &count)| (pixel, count)).collect();
        // sort_by is stable, so first-seen order survives among equal counts
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.truncate(n);
        ranked
    }
}

impl FromIterator<Pixel> for ColorTally {
    fn from_iter<I: IntoIterator<Item = Pixel>>(iter: I) -> Self {
        let mut tally = ColorTally::new();
        for pixel in iter {
            tally.record(pixel);
        }
        tally
    }
}
