//! A fixed-size pool of worker threads over a FIFO task queue.
//!
//! Tasks are enqueued as closures and answered with a [`TaskHandle`] that
//! blocks until the task's result arrives. A panic inside a task is
//! captured into the handle and does not take a worker down. Dropping the
//! pool stops the workers and joins them before the pool's storage is
//! released; handles for tasks that never ran report
//! [`PoolError::Cancelled`], so callers must await their handles before
//! letting the pool go.

use std::any::Any;
use std::collections::VecDeque;
use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{mpsc, Arc, Condvar, Mutex};
use std::thread::{self, JoinHandle};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PoolError {
    #[error("task panicked: {0}")]
    TaskPanicked(String),

    #[error("pool shut down before the task completed")]
    Cancelled,
}

/// Blocks on the result of one enqueued task.
pub struct TaskHandle<T> {
    rx: mpsc::Receiver<thread::Result<T>>,
}

impl<T> TaskHandle<T> {
    /// Waits for the task to finish and returns its value. A panic inside
    /// the task surfaces as [`PoolError::TaskPanicked`]; a task discarded
    /// by pool shutdown surfaces as [`PoolError::Cancelled`].
    pub fn wait(self) -> Result<T, PoolError> {
        match self.rx.recv() {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(payload)) => Err(PoolError::TaskPanicked(panic_message(payload.as_ref()))),
            Err(_) => Err(PoolError::Cancelled),
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_owned()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "opaque panic payload".to_owned()
    }
}

type Job = Box<dyn FnOnce() + Send + 'static>;

struct PoolShared {
    queue: Mutex<VecDeque<Job>>,
    available: Condvar,
    stop: AtomicBool,
}

/// Fixed set of worker threads consuming the task queue in FIFO order.
pub struct ThreadPool {
    shared: Arc<PoolShared>,
    workers: Vec<JoinHandle<()>>,
}

impl ThreadPool {
    /// Starts `threads` workers (at least one).
    pub fn new(threads: usize) -> Self {
        let shared = Arc::new(PoolShared {
            queue: Mutex::new(VecDeque::new()),
            available: Condvar::new(),
            stop: AtomicBool::new(false),
        });
        let workers = (0..threads.max(1))
            .map(|_| {
                let shared = Arc::clone(&shared);
                thread::spawn(move || worker_loop(&shared))
            })
            .collect();
        ThreadPool { shared, workers }
    }

    pub fn threads(&self) -> usize {
        self.workers.len()
    }

    /// Queues `task` and returns the handle for its result. This is the
    /// pool's sole entry point.
    pub fn enqueue<F, T>(&self, task: F) -> TaskHandle<T>
    where
        F: FnOnce() -> T + Send + 'static,
        T: Send + 'static,
    {
        let (tx, rx) = mpsc::channel();
        let job: Job = Box::new(move || {
            let result = panic::catch_unwind(AssertUnwindSafe(task));
            // The receiver may have been dropped; nothing to do then.
            let _ = tx.send(result);
        });
        self.shared
            .queue
            .lock()
            .unwrap()
            .push_back(job);
        self.shared.available.notify_one();
        TaskHandle { rx }
    }
}

impl Drop for ThreadPool {
    fn drop(&mut self) {
        self.shared.stop.store(true, Ordering::SeqCst);
        self.shared.available.notify_all();
        for worker in self.workers.drain(..) {
            let _ = worker.join();
        }
    }
}

fn worker_loop(shared: &PoolShared) {
    loop {
        let job = {
            let mut queue = shared.queue.lock().unwrap();
            loop {
                if let Some(job) = queue.pop_front() {
                    break job;
                }
                if shared.stop.load(Ordering::SeqCst) {
                    return;
                }
                queue = shared.available.wait(queue).unwrap();
            }
        };
        job();
    }
}
