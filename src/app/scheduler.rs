use std::{collections::VecDeque, time::Duration};

use tokio::{sync::mpsc, task::AbortHandle, time::sleep};

use crate::app::events::AppEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FrameRequest(u64);

impl FrameRequest {
    pub fn id(self) -> u64 {
        self.0
    }
}

/// "Call me once on the next display refresh", cancellable.
pub trait FrameScheduler {
    fn request_frame(&mut self) -> FrameRequest;
    fn cancel_frame(&mut self, request: FrameRequest);
}

/// Delivers `AppEvent::FrameDue` one frame interval after each request.
#[derive(Debug)]
pub struct TokioFrameScheduler {
    tx: mpsc::Sender<AppEvent>,
    interval: Duration,
    next_id: u64,
    pending: Option<(FrameRequest, AbortHandle)>,
}

impl TokioFrameScheduler {
    pub fn new(tx: mpsc::Sender<AppEvent>, fps: u8) -> Self {
        Self {
            tx,
            interval: frame_interval(fps),
            next_id: 0,
            pending: None,
        }
    }

    pub fn pending(&self) -> Option<FrameRequest> {
        self.pending.as_ref().map(|(request, _)| *request)
    }
}

pub fn frame_interval(fps: u8) -> Duration {
    Duration::from_millis(1000_u64 / u64::from(fps.max(1)))
}

impl FrameScheduler for TokioFrameScheduler {
    fn request_frame(&mut self) -> FrameRequest {
        self.next_id += 1;
        let request = FrameRequest(self.next_id);
        let tx = self.tx.clone();
        let interval = self.interval;
        let task = tokio::spawn(async move {
            sleep(interval).await;
            let _ = tx.send(AppEvent::FrameDue(request)).await;
        });
        if let Some((_, previous)) = self.pending.replace((request, task.abort_handle())) {
            previous.abort();
        }
        request
    }

    fn cancel_frame(&mut self, request: FrameRequest) {
        if self.pending() == Some(request)
            && let Some((_, handle)) = self.pending.take()
        {
            handle.abort();
        }
    }
}

/// Scheduler driven by hand: requests queue up until `take_due` fires them.
#[derive(Debug, Default)]
pub struct ManualScheduler {
    next_id: u64,
    pending: VecDeque<FrameRequest>,
    cancelled: Vec<FrameRequest>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn take_due(&mut self) -> Option<FrameRequest> {
        self.pending.pop_front()
    }

    pub fn pending(&self) -> impl Iterator<Item = FrameRequest> + '_ {
        self.pending.iter().copied()
    }

    pub fn cancelled(&self) -> &[FrameRequest] {
        &self.cancelled
    }

    pub fn requested(&self) -> u64 {
        self.next_id
    }
}

impl FrameScheduler for ManualScheduler {
    fn request_frame(&mut self) -> FrameRequest {
        self.next_id += 1;
        let request = FrameRequest(self.next_id);
        self.pending.push_back(request);
        request
    }

    fn cancel_frame(&mut self, request: FrameRequest) {
        let before = self.pending.len();
        self.pending.retain(|pending| *pending != request);
        if self.pending.len() != before {
            self.cancelled.push(request);
        }
    }
}
