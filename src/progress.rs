use atomic_counter::{AtomicCounter, RelaxedCounter};
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

/// Progress of a centroid reduction, counted in x-planes summed.
///
/// Workers only bump the relaxed counter, a refresher thread copies it into
/// the indicatif bar every `refresh_rate` milliseconds until the bar is
/// dropped.
pub struct Bar {
    planes: Arc<RelaxedCounter>,
    display: Arc<ProgressBar>,
}

impl Bar {
    /// A hidden bar expecting `len` planes, labelled with `prefix`.
    pub fn new(len: u64, refresh_rate: u64, prefix: String) -> Self {
        let display = Arc::new(ProgressBar::hidden());
        display.set_length(len);
        display.set_prefix(prefix);
        display.set_style(ProgressStyle::default_bar()
                              .template("{prefix}[{bar:40}] [{elapsed_precise}] {percent:>3}%")
                              .progress_chars("=>-"));
        let planes = Arc::new(RelaxedCounter::new(0));
        let (refresh_planes, refresh_display) = (planes.clone(), display.clone());
        // stops once the Bar has dropped its handle on the counter
        thread::spawn(move || {
            while Arc::strong_count(&refresh_planes) > 1
                  && !refresh_display.is_finished()
            {
                refresh_display.set_position(refresh_planes.get() as u64);
                thread::sleep(Duration::from_millis(refresh_rate));
            }
        });
        Self { planes, display }
    }

    /// Draws the bar on stderr, returning the bar.
    pub fn visible(len: u64, refresh_rate: u64, prefix: String) -> Self {
        let bar = Self::new(len, refresh_rate, prefix);
        bar.display.set_draw_target(ProgressDrawTarget::stderr());
        bar
    }

    /// A bar drawn on stderr if `visible` is set, hidden otherwise.
    pub fn maybe_visible(visible: bool,
                         len: u64,
                         refresh_rate: u64,
                         prefix: String)
                         -> Self {
        if visible {
            Self::visible(len, refresh_rate, prefix)
        } else {
            Self::new(len, refresh_rate, prefix)
        }
    }

    /// Marks one more plane as summed.
    pub fn tick(&self) {
        self.planes.inc();
    }

    /// The number of planes summed so far.
    pub fn position(&self) -> usize {
        self.planes.get()
    }
}

impl Drop for Bar {
    fn drop(&mut self) {
        if !self.display.is_finished() {
            self.display.set_position(self.planes.get() as u64);
            self.display.finish_and_clear();
        }
    }
}
