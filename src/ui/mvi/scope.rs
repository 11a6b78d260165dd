//! Owned cancellation scope for a container's async work.
//!
//! A container holds one `JobScope` for its whole life. Starting a job
//! through the scope cancels the previous one, and each job carries a
//! [`JobTicket`] so a completion that races the cancellation can still be
//! recognised as stale and dropped.

use tokio::task::JoinHandle;

/// Identifies one job started through a [`JobScope`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct JobTicket(u64);

/// Latest-wins slot for a single in-flight job.
///
/// At most one job is live at a time. `close` tears the scope down exactly
/// once; after that no new ticket is issued.
#[derive(Debug, Default)]
pub struct JobScope {
    generation: u64,
    in_flight: Option<(JobTicket, JoinHandle<()>)>,
    closed: bool,
}

impl JobScope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cancel the in-flight job and issue the ticket for the next one.
    ///
    /// Returns `None` once the scope is closed.
    pub fn next_ticket(&mut self) -> Option<JobTicket> {
        if self.closed {
            return None;
        }
        self.cancel();
        self.generation += 1;
        Some(JobTicket(self.generation))
    }

    /// Track the task running the job for `ticket`.
    ///
    /// A task for a ticket that is no longer current is aborted immediately.
    pub fn attach(&mut self, ticket: JobTicket, handle: JoinHandle<()>) {
        if self.closed || !self.is_current(ticket) {
            handle.abort();
            return;
        }
        self.in_flight = Some((ticket, handle));
    }

    /// Ticket of the tracked job, if one is attached.
    pub fn in_flight_ticket(&self) -> Option<JobTicket> {
        self.in_flight.as_ref().map(|(ticket, _)| *ticket)
    }

    /// Whether `ticket` belongs to the most recently started job.
    pub fn is_current(&self, ticket: JobTicket) -> bool {
        !self.closed && ticket.0 == self.generation
    }

    /// Mark the job for `ticket` finished.
    ///
    /// Returns `false` for a stale ticket, whose result must be discarded.
    pub fn complete(&mut self, ticket: JobTicket) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        if matches!(self.in_flight, Some((current, _)) if current == ticket) {
            self.in_flight = None;
        }
        true
    }

    /// Abort the in-flight job, if any. Returns whether one was running.
    pub fn cancel(&mut self) -> bool {
        match self.in_flight.take() {
            Some((_, handle)) => {
                let was_running = !handle.is_finished();
                handle.abort();
                was_running
            }
            None => false,
        }
    }

    /// Whether a job is tracked and not yet finished.
    pub fn is_active(&self) -> bool {
        self.in_flight
            .as_ref()
            .is_some_and(|(_, handle)| !handle.is_finished())
    }

    /// Cancel outstanding work and refuse new jobs. Idempotent.
    pub fn close(&mut self) {
        if self.closed {
            return;
        }
        self.cancel();
        self.closed = true;
    }
}

impl Drop for JobScope {
    fn drop(&mut self) {
        self.close();
    }
}
