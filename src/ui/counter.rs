use std::time::{Duration, Instant};

use eframe::egui::{self, RichText, Ui};

use crate::data::aggregate::Metrics;

/// Pause between animation steps.
pub const REVEAL_TICK: Duration = Duration::from_millis(10);

// ---------------------------------------------------------------------------
// Reveal – animated count-up state
// ---------------------------------------------------------------------------

/// Count-up animation toward a target value.
///
/// The shown value starts at 0 and grows by `max(1, target / 30)` per tick,
/// clamped to the target, so any magnitude settles within ~31 steps and a
/// target of 0 shows immediately.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reveal {
    shown: u64,
    target: u64,
    step: u64,
}

impl Reveal {
    pub fn new(target: u64) -> Self {
        Self {
            shown: 0,
            target,
            step: (target / 30).max(1),
        }
    }

    /// Advance one tick.
    pub fn advance(&mut self) {
        self.shown = (self.shown + self.step).min(self.target);
    }

    /// Currently displayed value.
    pub fn shown(&self) -> u64 {
        self.shown
    }

    pub fn done(&self) -> bool {
        self.shown == self.target
    }
}

// ---------------------------------------------------------------------------
// KPI row state
// ---------------------------------------------------------------------------

/// The four KPI animations plus the shared tick clock.
#[derive(Debug)]
pub struct KpiReveals {
    pub total: Reveal,
    pub movies: Reveal,
    pub tv_shows: Reveal,
    pub countries: Reveal,
    last_tick: Option<Instant>,
}

impl KpiReveals {
    pub fn new(metrics: &Metrics) -> Self {
        Self {
            total: Reveal::new(metrics.total),
            movies: Reveal::new(metrics.movies),
            tv_shows: Reveal::new(metrics.tv_shows),
            countries: Reveal::new(metrics.countries),
            last_tick: None,
        }
    }

    /// Restart all four animations at new targets.
    pub fn restart(&mut self, metrics: &Metrics) {
        *self = Self::new(metrics);
    }

    pub fn done(&self) -> bool {
        self.total.done() && self.movies.done() && self.tv_shows.done() && self.countries.done()
    }

    /// Advance every unfinished counter once a tick has elapsed.
    pub fn tick(&mut self, now: Instant) {
        if self.done() {
            return;
        }
        if let Some(prev) = self.last_tick {
            if now.duration_since(prev) < REVEAL_TICK {
                return;
            }
        }
        self.last_tick = Some(now);
        for reveal in [
            &mut self.total,
            &mut self.movies,
            &mut self.tv_shows,
            &mut self.countries,
        ] {
            if !reveal.done() {
                reveal.advance();
            }
        }
    }
}

// ---------------------------------------------------------------------------
// KPI card widget
// ---------------------------------------------------------------------------

/// A framed card with a small caption and a large animated value.
pub fn kpi_card(ui: &mut Ui, title: &str, reveal: &Reveal) {
    egui::Frame::group(ui.style()).show(ui, |ui: &mut Ui| {
        ui.vertical_centered(|ui: &mut Ui| {
            ui.label(RichText::new(title).small().weak());
            ui.label(RichText::new(reveal.shown().to_string()).size(32.0).strong());
        });
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Every value the animation displays, from first frame to settling.
    fn displayed_states(target: u64) -> Vec<u64> {
        let mut reveal = Reveal::new(target);
        let mut states = vec![reveal.shown()];
        while !reveal.done() {
            reveal.advance();
            states.push(reveal.shown());
        }
        states
    }

    #[test]
    fn zero_target_shows_immediately() {
        let states = displayed_states(0);
        assert_eq!(states, vec![0]);
    }

    #[test]
    fn small_target_steps_by_one() {
        let states = displayed_states(47);
        assert_eq!(states.len(), 48);
        assert_eq!(states.first(), Some(&0));
        assert_eq!(states.last(), Some(&47));
    }

    #[test]
    fn large_targets_settle_within_thirty_one_steps() {
        for target in [100, 8_807, 1_000_000] {
            let states = displayed_states(target);
            assert!(states.len() <= 32, "{target} took {} states", states.len());
            assert_eq!(states.last(), Some(&target));
        }
    }

    #[test]
    fn final_value_is_exact_despite_step_overshoot() {
        // step = 100 / 30 = 3, which does not divide 100 evenly
        let states = displayed_states(100);
        assert_eq!(states.len(), 35);
        assert_eq!(states[states.len() - 2], 99);
        assert_eq!(states[states.len() - 1], 100);
    }

    #[test]
    fn tick_respects_the_pause_and_restart_resets() {
        let metrics = Metrics {
            total: 10,
            movies: 6,
            tv_shows: 4,
            countries: 2,
        };
        let mut reveals = KpiReveals::new(&metrics);
        let start = Instant::now();

        reveals.tick(start);
        assert_eq!(reveals.total.shown(), 1);

        // Within the same tick window nothing moves.
        reveals.tick(start + Duration::from_millis(1));
        assert_eq!(reveals.total.shown(), 1);

        reveals.tick(start + REVEAL_TICK);
        assert_eq!(reveals.total.shown(), 2);

        reveals.restart(&metrics);
        assert_eq!(reveals.total.shown(), 0);
        assert!(!reveals.done());
    }
}
