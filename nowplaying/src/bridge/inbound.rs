use crate::model::{MediaEvent, StateUpdate};
use crate::state::SeekRequest;

/// Store writes implied by a media element event
///
/// Position reports map to a plain `CurrentTime` write here; the bridge runs
/// them through a [`PositionFilter`] before applying.
pub fn translate(event: &MediaEvent) -> Vec<StateUpdate> {
    match event {
        MediaEvent::Play => vec![StateUpdate::Loading(false), StateUpdate::Paused(false)],
        MediaEvent::Pause => vec![StateUpdate::Paused(true)],
        MediaEvent::Waiting => vec![StateUpdate::Loading(true)],
        MediaEvent::Playing => vec![StateUpdate::Loading(false)],
        MediaEvent::TimeUpdate { current_time } => vec![StateUpdate::CurrentTime(*current_time)],
        MediaEvent::DurationChange { duration } => vec![StateUpdate::Duration(Some(*duration))],
        MediaEvent::Ended => vec![StateUpdate::Loading(false), StateUpdate::Paused(true)],
        MediaEvent::Error { .. } => vec![StateUpdate::Loading(false), StateUpdate::Paused(true)],
    }
}

/// Outcome of checking a position report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportVerdict {
    Accept,
    /// Carries no new information
    Duplicate,
    /// Older than the current position or a pending seek
    Stale,
}

/// Keeps the reported position from moving backwards between seeks
///
/// After a seek to T the filter waits for a report inside
/// `[T - tolerance, T + tolerance]`; reports outside that window were
/// emitted before the element finished seeking. If `max_stale` of them
/// arrive in a row the element's position is adopted as is.
#[derive(Debug, Clone)]
pub struct PositionFilter {
    tolerance: f64,
    max_stale: u32,
    epoch: u64,
    settling: Option<f64>,
    floor: f64,
    stale_run: u32,
}

impl PositionFilter {
    pub fn new(tolerance: f64, max_stale: u32) -> Self {
        Self {
            tolerance,
            max_stale: max_stale.max(1),
            epoch: 0,
            settling: None,
            floor: 0.0,
            stale_run: 0,
        }
    }

    /// Check `reported` against the store's current position epoch and seek request
    pub fn check(&mut self, reported: f64, epoch: u64, seek: Option<SeekRequest>) -> ReportVerdict {
        if !(reported.is_finite() && reported >= 0.0) {
            return ReportVerdict::Stale;
        }

        if epoch != self.epoch {
            self.rebase(epoch, seek);
        }

        if let Some(target) = self.settling {
            if (reported - target).abs() > self.tolerance {
                self.stale_run += 1;
                if self.stale_run < self.max_stale {
                    return ReportVerdict::Stale;
                }
                log::debug!(
                    "Seek to {:.2}s never landed, adopting element position {:.2}s",
                    target,
                    reported
                );
                self.settling = None;
                self.stale_run = 0;
                self.floor = reported;
                return ReportVerdict::Accept;
            }
            self.settling = None;
            self.stale_run = 0;
            // Landing just short of the target counts as arriving there
            if reported <= self.floor {
                return ReportVerdict::Duplicate;
            }
        }

        if reported == self.floor {
            ReportVerdict::Duplicate
        } else if reported < self.floor {
            ReportVerdict::Stale
        } else {
            self.floor = reported;
            ReportVerdict::Accept
        }
    }

    fn rebase(&mut self, epoch: u64, seek: Option<SeekRequest>) {
        self.epoch = epoch;
        self.stale_run = 0;
        match seek {
            Some(request) if request.generation == epoch => {
                self.settling = Some(request.target);
                self.floor = request.target;
            }
            // A new source starts from zero
            _ => {
                self.settling = None;
                self.floor = 0.0;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seek_at(target: f64, generation: u64) -> Option<SeekRequest> {
        Some(SeekRequest { target, generation })
    }

    #[test]
    fn test_translate_lifecycle_events() {
        assert_eq!(
            translate(&MediaEvent::Play),
            vec![StateUpdate::Loading(false), StateUpdate::Paused(false)]
        );
        assert_eq!(translate(&MediaEvent::Pause), vec![StateUpdate::Paused(true)]);
        assert_eq!(translate(&MediaEvent::Waiting), vec![StateUpdate::Loading(true)]);
        assert_eq!(translate(&MediaEvent::Playing), vec![StateUpdate::Loading(false)]);
        assert_eq!(
            translate(&MediaEvent::Error {
                message: "404".to_string()
            }),
            vec![StateUpdate::Loading(false), StateUpdate::Paused(true)]
        );
        assert_eq!(
            translate(&MediaEvent::DurationChange { duration: 90.0 }),
            vec![StateUpdate::Duration(Some(90.0))]
        );
    }

    #[test]
    fn test_reports_are_monotonic() {
        let mut filter = PositionFilter::new(2.0, 4);
        assert_eq!(filter.check(10.0, 0, None), ReportVerdict::Accept);
        assert_eq!(filter.check(8.0, 0, None), ReportVerdict::Stale);
        assert_eq!(filter.check(12.0, 0, None), ReportVerdict::Accept);
        assert_eq!(filter.check(12.0, 0, None), ReportVerdict::Duplicate);
    }

    #[test]
    fn test_backward_seek_discards_late_reports() {
        let mut filter = PositionFilter::new(2.0, 4);
        assert_eq!(filter.check(100.0, 0, None), ReportVerdict::Accept);

        // Seek back to 5s; the element still delivers a report from before the seek
        assert_eq!(filter.check(100.25, 1, seek_at(5.0, 1)), ReportVerdict::Stale);
        assert_eq!(filter.check(5.25, 1, seek_at(5.0, 1)), ReportVerdict::Accept);
        assert_eq!(filter.check(5.5, 1, seek_at(5.0, 1)), ReportVerdict::Accept);
    }

    #[test]
    fn test_forward_seek_discards_reports_before_target() {
        let mut filter = PositionFilter::new(2.0, 4);
        assert_eq!(filter.check(10.0, 0, None), ReportVerdict::Accept);

        assert_eq!(filter.check(10.25, 1, seek_at(300.0, 1)), ReportVerdict::Stale);
        // Landing slightly short of the target does not move the position back
        assert_eq!(filter.check(299.9, 1, seek_at(300.0, 1)), ReportVerdict::Duplicate);
        assert_eq!(filter.check(299.95, 1, seek_at(300.0, 1)), ReportVerdict::Stale);
        assert_eq!(filter.check(300.2, 1, seek_at(300.0, 1)), ReportVerdict::Accept);
    }

    #[test]
    fn test_adopts_element_position_after_repeated_misses() {
        let mut filter = PositionFilter::new(0.5, 3);
        let seek = seek_at(500.0, 1);

        assert_eq!(filter.check(120.0, 1, seek), ReportVerdict::Stale);
        assert_eq!(filter.check(120.2, 1, seek), ReportVerdict::Stale);
        assert_eq!(filter.check(120.4, 1, seek), ReportVerdict::Accept);
        assert_eq!(filter.check(120.6, 1, seek), ReportVerdict::Accept);
    }

    #[test]
    fn test_new_source_restarts_from_zero() {
        let mut filter = PositionFilter::new(2.0, 4);
        assert_eq!(filter.check(250.0, 0, None), ReportVerdict::Accept);

        assert_eq!(filter.check(0.0, 1, None), ReportVerdict::Duplicate);
        assert_eq!(filter.check(0.3, 1, None), ReportVerdict::Accept);
    }

    #[test]
    fn test_invalid_reports_are_stale() {
        let mut filter = PositionFilter::new(2.0, 4);
        assert_eq!(filter.check(f64::NAN, 0, None), ReportVerdict::Stale);
        assert_eq!(filter.check(-1.0, 0, None), ReportVerdict::Stale);
    }
}
