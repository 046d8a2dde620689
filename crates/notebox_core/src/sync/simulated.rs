//! Timer-only sync stand-in.

use super::{SyncCallback, SyncError, SyncReport, SyncService};
use chrono::Utc;
use log::info;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;
use uuid::Uuid;

/// Completes every run after a fixed delay on a background thread.
#[derive(Debug, Clone)]
pub struct SimulatedSyncService {
    delay: Duration,
    in_flight: Arc<AtomicBool>,
}

impl SimulatedSyncService {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            in_flight: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl SyncService for SimulatedSyncService {
    fn request_sync(&self, notes_seen: usize, on_complete: SyncCallback) -> Result<Uuid, SyncError> {
        if self
            .in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Err(SyncError::AlreadyRunning);
        }

        let run_id = Uuid::new_v4();
        let delay = self.delay;
        let in_flight = Arc::clone(&self.in_flight);
        info!(
            "event=sync_start module=sync status=start run_id={} notes={} delay_ms={}",
            run_id,
            notes_seen,
            delay.as_millis()
        );

        let spawned = thread::Builder::new()
            .name("notebox-sync".to_string())
            .spawn(move || {
                thread::sleep(delay);
                in_flight.store(false, Ordering::Release);
                info!("event=sync_finish module=sync status=ok run_id={}", run_id);
                on_complete(SyncReport {
                    run_id,
                    notes_seen,
                    finished_at: Utc::now(),
                });
            });

        if let Err(err) = spawned {
            self.in_flight.store(false, Ordering::Release);
            return Err(SyncError::Spawn(err.to_string()));
        }
        Ok(run_id)
    }

    fn is_syncing(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }
}

#[cfg(test)]
mod tests {
    use super::SimulatedSyncService;
    use crate::sync::{SyncError, SyncService};
    use std::sync::mpsc;
    use std::time::Duration;

    #[test]
    fn completes_with_report_for_the_same_run() {
        let service = SimulatedSyncService::new(Duration::from_millis(5));
        let (tx, rx) = mpsc::channel();
        let run_id = service
            .request_sync(3, Box::new(move |report| tx.send(report).unwrap()))
            .unwrap();

        let report = rx.recv_timeout(Duration::from_secs(5)).unwrap();
        assert_eq!(report.run_id, run_id);
        assert_eq!(report.notes_seen, 3);
        assert!(!service.is_syncing());
    }

    #[test]
    fn rejects_overlapping_runs() {
        let service = SimulatedSyncService::new(Duration::from_millis(200));
        let (tx, rx) = mpsc::channel();
        service
            .request_sync(0, Box::new(move |report| tx.send(report).unwrap()))
            .unwrap();
        assert!(service.is_syncing());

        let err = service.request_sync(0, Box::new(|_| {})).unwrap_err();
        assert_eq!(err, SyncError::AlreadyRunning);
        rx.recv_timeout(Duration::from_secs(5)).unwrap();
    }
}
