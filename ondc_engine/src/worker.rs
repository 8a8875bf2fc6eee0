//! Bounded background processing of ONDC requests
//!
//! Request handlers push a [`BppJob`] onto the [`JobQueue`] and acknowledge the request straight away. A single
//! [`BppWorker`] drains the queue and runs each job on its own task, with at most `max_concurrent_jobs` running at
//! any one time. Every job runs under a timeout, so a stalled backend cannot hold a slot forever.
//!
//! When every `JobQueue` handle has been dropped, the worker waits for the jobs in flight and then exits.
use std::{sync::Arc, time::Duration};

use log::*;
use tokio::{
    sync::{mpsc, Semaphore},
    task::JoinHandle,
};

use crate::{
    bpp_api::BppApi,
    errors::JobQueueError,
    ondc_types::{Context, InitRequest, OndcAction, SearchRequest, SelectRequest},
    traits::{CallbackSender, ProductCatalog},
};

pub const DEFAULT_JOB_QUEUE_SIZE: usize = 256;
pub const DEFAULT_MAX_CONCURRENT_JOBS: usize = 32;
pub const DEFAULT_JOB_TIMEOUT: Duration = Duration::from_secs(60);

#[derive(Debug, Clone)]
pub enum BppJob {
    Search(SearchRequest),
    Select(SelectRequest),
    Init(InitRequest),
}

impl BppJob {
    pub fn action(&self) -> OndcAction {
        match self {
            Self::Search(_) => OndcAction::Search,
            Self::Select(_) => OndcAction::Select,
            Self::Init(_) => OndcAction::Init,
        }
    }

    pub fn context(&self) -> &Context {
        match self {
            Self::Search(r) => &r.context,
            Self::Select(r) => &r.context,
            Self::Init(r) => &r.context,
        }
    }
}

impl From<SearchRequest> for BppJob {
    fn from(r: SearchRequest) -> Self {
        Self::Search(r)
    }
}

impl From<SelectRequest> for BppJob {
    fn from(r: SelectRequest) -> Self {
        Self::Select(r)
    }
}

impl From<InitRequest> for BppJob {
    fn from(r: InitRequest) -> Self {
        Self::Init(r)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkerConfig {
    pub queue_size: usize,
    pub max_concurrent_jobs: usize,
    pub job_timeout: Duration,
}

impl Default for WorkerConfig {
    fn default() -> Self {
        Self {
            queue_size: DEFAULT_JOB_QUEUE_SIZE,
            max_concurrent_jobs: DEFAULT_MAX_CONCURRENT_JOBS,
            job_timeout: DEFAULT_JOB_TIMEOUT,
        }
    }
}

/// The producer side of the job queue. Cloning it is cheap.
#[derive(Debug, Clone)]
pub struct JobQueue {
    sender: mpsc::Sender<BppJob>,
}

impl JobQueue {
    /// Creates a queue that holds up to `size` pending jobs.
    pub fn new(size: usize) -> (Self, mpsc::Receiver<BppJob>) {
        let (sender, receiver) = mpsc::channel(size.max(1));
        (Self { sender }, receiver)
    }

    /// Adds a job to the queue, waiting for space if the queue is full.
    pub async fn submit(&self, job: BppJob) -> Result<(), JobQueueError> {
        self.sender.send(job).await.map_err(|_| JobQueueError::Closed)
    }
}

pub struct BppWorker {
    config: WorkerConfig,
    receiver: mpsc::Receiver<BppJob>,
}

impl BppWorker {
    pub fn new(config: WorkerConfig, receiver: mpsc::Receiver<BppJob>) -> Self {
        Self { config, receiver }
    }

    /// Spawns [`Self::run`] onto the runtime.
    pub fn start<C, S>(self, api: Arc<BppApi<C, S>>) -> JoinHandle<()>
    where
        C: ProductCatalog + 'static,
        S: CallbackSender + 'static,
    {
        tokio::spawn(self.run(api))
    }

    pub async fn run<C, S>(mut self, api: Arc<BppApi<C, S>>)
    where
        C: ProductCatalog + 'static,
        S: CallbackSender + 'static,
    {
        let max_jobs = self.config.max_concurrent_jobs.max(1);
        let timeout = self.config.job_timeout;
        let permits = Arc::new(Semaphore::new(max_jobs));
        info!("📬️ Starting BPP worker. Up to {max_jobs} concurrent jobs, {}s timeout", timeout.as_secs());
        while let Some(job) = self.receiver.recv().await {
            let permit = match Arc::clone(&permits).acquire_owned().await {
                Ok(p) => p,
                Err(e) => {
                    error!("📬️ The job semaphore has closed. {e}. Stopping the worker.");
                    return;
                },
            };
            let api = Arc::clone(&api);
            tokio::spawn(async move {
                let action = job.action();
                let message_id = job.context().message_id.clone();
                trace!("📬️ Handling {action} job [{message_id}]");
                match tokio::time::timeout(timeout, api.process(job)).await {
                    Ok(Ok(())) => debug!("📬️ {action} job [{message_id}] complete"),
                    Ok(Err(e)) => error!("📬️ Failed to send on_{action} for message ID {message_id}: {e}"),
                    Err(_) => {
                        let secs = timeout.as_secs();
                        error!("📬️ {action} job [{message_id}] timed out after {secs}s and was abandoned")
                    },
                }
                drop(permit);
            });
        }
        debug!("📬️ Job queue closed. Waiting for jobs in flight to complete");
        #[allow(clippy::cast_possible_truncation)]
        match permits.acquire_many(max_jobs as u32).await {
            Ok(_) => debug!("📬️ BPP worker shutting down gracefully"),
            Err(e) => warn!("📬️ BPP worker shutdown did not complete cleanly. {e}"),
        }
        debug!("📬️ BPP worker has shut down");
    }
}
