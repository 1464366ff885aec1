use fractalscope_compute::Palette;
use fractalscope_core::ColorScheme;

/// Single-slot palette cache keyed by `(scheme, max_iterations)`.
///
/// A lookup with a different key replaces the table; recoloring at the same
/// cap never rebuilds.
#[derive(Debug, Default)]
pub struct PaletteCache {
    palette: Option<Palette>,
    rebuilds: u64,
}

impl PaletteCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Palette for `(scheme, max_iterations)`, building it on a key change.
    pub fn get(&mut self, scheme: ColorScheme, max_iterations: u32) -> &Palette {
        let key = (scheme, max_iterations.max(1));
        let stale = self.palette.as_ref().map_or(true, |p| p.key() != key);
        if stale {
            log::debug!(
                "Building {} palette for {} iterations",
                scheme.display_name(),
                key.1
            );
            self.rebuilds += 1;
            self.palette = None;
        }
        self.palette
            .get_or_insert_with(|| Palette::build(key.0, key.1))
    }

    /// Number of tables built so far.
    pub fn rebuild_count(&self) -> u64 {
        self.rebuilds
    }
}
