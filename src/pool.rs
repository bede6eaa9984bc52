//! A fixed-size pool of scoped worker threads draining a queue of independent jobs.
//!
//! The job queue and the result list sit behind their own locks,
//! each held only to pop or push.
//! The coordinator blocks on a [CompletionLatch] until every job is accounted for.

use parking_lot::{Condvar, Mutex};
use std::any::Any;
use std::collections::VecDeque;
use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;

/// Counts finished jobs and wakes whoever waits for all of them.
pub(crate) struct CompletionLatch {
    expected: usize,
    finished: AtomicUsize,
    lock: Mutex<()>,
    condvar: Condvar,
}

impl CompletionLatch {
    pub fn new(expected: usize) -> Self {
        Self {
            expected,
            finished: AtomicUsize::new(0),
            lock: Mutex::new(()),
            condvar: Condvar::new(),
        }
    }

    pub fn count_down(&self) {
        self.count_down_by(1);
    }

    pub fn count_down_by(&self, n: usize) {
        if n == 0 {
            return;
        }
        let finished = self.finished.fetch_add(n, Ordering::AcqRel) + n;
        if finished >= self.expected {
            let _guard = self.lock.lock();
            self.condvar.notify_all();
        }
    }

    /// Blocks until `expected` jobs have counted down.
    pub fn wait(&self) {
        let mut guard = self.lock.lock();
        while self.finished.load(Ordering::Acquire) < self.expected {
            self.condvar.wait(&mut guard);
        }
    }

    pub fn finished(&self) -> usize {
        self.finished.load(Ordering::Acquire)
    }
}

/// A job's output, or the message of the panic it died with.
pub(crate) type JobResult<T> = Result<T, String>;

pub(crate) struct WorkerPool {
    workers: usize,
}

impl WorkerPool {
    /// A pool of at most `workers` threads; zero is taken as one.
    pub fn new(workers: usize) -> Self {
        Self {
            workers: workers.max(1),
        }
    }

    /// The number of workers available on this machine.
    pub fn hardware_workers() -> usize {
        thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1)
    }

    /// Runs `work` on every job and returns each job with its result, in completion order.
    ///
    /// Spawns `min(workers, jobs.len())` threads.
    /// A panic inside `work` is caught and reported as that job's result.
    pub fn run<J, T, F>(&self, jobs: Vec<J>, work: F) -> Vec<(J, JobResult<T>)>
    where
        J: Send,
        T: Send,
        F: Fn(&J) -> T + Sync,
    {
        let total = jobs.len();
        if total == 0 {
            return vec![];
        }
        let threads = self.workers.min(total);
        tracing::debug!(jobs = total, threads, "starting worker pool");

        let queue = Mutex::new(VecDeque::from(jobs));
        let results = Mutex::new(Vec::with_capacity(total));
        let latch = CompletionLatch::new(total);
        thread::scope(|scope| {
            for _ in 0..threads {
                scope.spawn(|| {
                    while let Some(job) = next_job(&queue) {
                        let _settle = JobGuard::new(&latch, &queue);
                        let result =
                            panic::catch_unwind(AssertUnwindSafe(|| work(&job))).map_err(panic_message);
                        results.lock().push((job, result));
                    }
                });
            }
            latch.wait();
        });
        tracing::debug!(finished = latch.finished(), "worker pool drained");
        results.into_inner()
    }
}

/// Counts its job down when dropped.
///
/// If the worker is unwinding, the jobs still queued are abandoned and counted down too,
/// so the coordinator wakes up and the scope re-raises the panic.
struct JobGuard<'a, J> {
    latch: &'a CompletionLatch,
    queue: &'a Mutex<VecDeque<J>>,
}

impl<'a, J> JobGuard<'a, J> {
    fn new(latch: &'a CompletionLatch, queue: &'a Mutex<VecDeque<J>>) -> Self {
        Self { latch, queue }
    }
}

impl<'a, J> Drop for JobGuard<'a, J> {
    fn drop(&mut self) {
        if thread::panicking() {
            let abandoned = self.queue.lock().drain(..).count();
            tracing::debug!(abandoned, "worker died, dropping queued jobs");
            self.latch.count_down_by(abandoned);
        }
        self.latch.count_down();
    }
}

// The guard must not outlive the pop, or the job would run under the queue lock.
fn next_job<J>(queue: &Mutex<VecDeque<J>>) -> Option<J> {
    queue.lock().pop_front()
}

fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_owned()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn every_job_runs_once() {
        for workers in [1, 2, 8] {
            let pool = WorkerPool::new(workers);
            let results = pool.run((0..100).collect(), |x: &usize| x * x);
            assert_eq!(results.len(), 100);
            let trial: BTreeSet<_> = results
                .into_iter()
                .map(|(job, res)| (job, res.unwrap()))
                .collect();
            let oracle: BTreeSet<_> = (0..100).map(|x| (x, x * x)).collect();
            assert_eq!(trial, oracle);
        }
    }

    #[test]
    fn no_jobs() {
        let pool = WorkerPool::new(4);
        let results = pool.run(Vec::<usize>::new(), |x| *x);
        assert!(results.is_empty());
    }

    #[test]
    fn panics_stay_inside_their_jobs() {
        let pool = WorkerPool::new(3);
        let mut results = pool.run((0..10).collect(), |x: &usize| {
            if *x == 4 {
                panic!("job {} exploded", x);
            }
            *x
        });
        results.sort_by_key(|(job, _)| *job);
        for (job, res) in results {
            if job == 4 {
                assert_eq!(res, Err("job 4 exploded".to_owned()));
            } else {
                assert_eq!(res, Ok(job));
            }
        }
    }

    #[test]
    fn latch_releases_after_all_count_downs() {
        let latch = CompletionLatch::new(3);
        thread::scope(|scope| {
            for _ in 0..3 {
                scope.spawn(|| latch.count_down());
            }
            latch.wait();
        });
        assert_eq!(latch.finished(), 3);
    }

    #[test]
    fn dying_worker_still_releases_the_latch() {
        let latch = CompletionLatch::new(3);
        let queue = Mutex::new(VecDeque::from(vec![1, 2]));
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
            thread::scope(|scope| {
                scope.spawn(|| {
                    let _settle = JobGuard::new(&latch, &queue);
                    panic!("worker died outside its job");
                });
                latch.wait();
            })
        }));
        assert!(outcome.is_err());
        assert_eq!(latch.finished(), 3);
        assert!(queue.lock().is_empty());
    }

    #[test]
    fn finished_job_counts_once() {
        let latch = CompletionLatch::new(2);
        let queue = Mutex::new(VecDeque::from(vec![7]));
        drop(JobGuard::new(&latch, &queue));
        assert_eq!(latch.finished(), 1);
        assert_eq!(queue.lock().len(), 1);
    }

    #[test]
    fn zero_workers_means_one() {
        let pool = WorkerPool::new(0);
        let results = pool.run(vec![1, 2, 3], |x: &i32| x + 1);
        assert_eq!(results.len(), 3);
    }
}
