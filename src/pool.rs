use std::sync::{mpsc, Arc};
use std::thread;

use parking_lot::Mutex;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PoolError {
    #[error("thread pool requires at least one worker thread")]
    ZeroThreads,
    #[error("thread pool is closed")]
    Closed,
}

type Job<T> = Box<dyn FnOnce() -> T + Send + 'static>;

/// A fixed-size worker pool that collects job results on a channel.
///
/// Jobs run on whichever worker picks them up first. Results arrive in
/// completion order, not submission order.
#[derive(Debug)]
pub struct ThreadPool<T>
where
    T: Send + 'static,
{
    workers: Vec<thread::JoinHandle<()>>,
    job_sender: Option<mpsc::Sender<Job<T>>>,
    result_receiver: mpsc::Receiver<T>,
}

impl<T> ThreadPool<T>
where
    T: Send + 'static,
{
    /// Spawn a pool with `num_threads` workers.
    ///
    /// Fails with `PoolError::ZeroThreads` when `num_threads` is 0.
    pub fn new(num_threads: usize) -> Result<ThreadPool<T>, PoolError> {
        if num_threads == 0 {
            return Err(PoolError::ZeroThreads);
        }

        let (job_sender, job_receiver) = mpsc::channel::<Job<T>>();
        let (result_sender, result_receiver) = mpsc::channel::<T>();
        let job_receiver = Arc::new(Mutex::new(job_receiver));
        let mut workers = Vec::with_capacity(num_threads);

        for _ in 0..num_threads {
            let job_receiver = Arc::clone(&job_receiver);
            let result_sender = result_sender.clone();

            workers.push(thread::spawn(move || loop {
                // Hold the receiver lock only while waiting for a job, not
                // while running one.
                let message = { job_receiver.lock().recv() };
                match message {
                    Ok(job) => {
                        let result = job();
                        if result_sender.send(result).is_err() {
                            break;
                        }
                    }
                    Err(_) => break,
                }
            }));
        }

        Ok(ThreadPool {
            workers,
            job_sender: Some(job_sender),
            result_receiver,
        })
    }

    /// Submit a job to the pool.
    pub fn execute<F>(&self, f: F) -> Result<(), PoolError>
    where
        F: FnOnce() -> T + Send + 'static,
    {
        let sender = self.job_sender.as_ref().ok_or(PoolError::Closed)?;
        sender.send(Box::new(f)).map_err(|_| PoolError::Closed)
    }

    /// Stop accepting jobs and wait for the workers to drain the queue and
    /// exit. Closing an already closed pool is a no-op.
    pub fn close(&mut self) {
        self.job_sender.take();

        for worker in self.workers.drain(..) {
            worker.join().expect("worker thread panicked");
        }
    }

    /// Drain every result produced so far.
    ///
    /// After `close` this returns the results of all submitted jobs; before
    /// `close` it may return a partial set.
    pub fn results(&self) -> Vec<T> {
        let mut results = Vec::new();
        while let Ok(result) = self.result_receiver.try_recv() {
            results.push(result);
        }
        results
    }
}

impl<T> Drop for ThreadPool<T>
where
    T: Send + 'static,
{
    fn drop(&mut self) {
        self.close();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};
    use std::thread;
    use std::time::Duration;

    #[test]
    fn test_execute_simple_task() {
        let mut pool = ThreadPool::<i32>::new(2).unwrap();

        pool.execute(|| 5 + 3).unwrap();
        pool.close();

        let results = pool.results();
        assert_eq!(results, vec![8]);
    }

    #[test]
    fn test_multiple_tasks() {
        let mut pool = ThreadPool::<i32>::new(4).unwrap();

        for i in 0..5 {
            pool.execute(move || i * 2).unwrap();
        }

        pool.close();
        let mut results = pool.results();
        results.sort();
        assert_eq!(results, vec![0, 2, 4, 6, 8]);
    }

    #[test]
    fn test_zero_threads() {
        let pool = ThreadPool::<i32>::new(0);
        assert_eq!(pool.unwrap_err(), PoolError::ZeroThreads);
    }

    #[test]
    fn test_result_order_not_guaranteed() {
        let mut pool = ThreadPool::<i32>::new(3).unwrap();

        pool.execute(|| 1).unwrap();
        pool.execute(|| 2).unwrap();
        pool.execute(|| 3).unwrap();

        pool.close();
        let results = pool.results();

        // Threads race, so only check the values are all present.
        assert_eq!(results.len(), 3);
        assert!(results.contains(&1));
        assert!(results.contains(&2));
        assert!(results.contains(&3));
    }

    #[test]
    fn test_parallel_execution() {
        let mut pool = ThreadPool::<usize>::new(4).unwrap();
        let counter = Arc::new(Mutex::new(0));

        for _ in 0..10 {
            let counter = Arc::clone(&counter);
            pool.execute(move || {
                let mut count = counter.lock().unwrap();
                *count += 1;
                *count
            })
            .unwrap();
        }

        pool.close();
        let results = pool.results();
        assert_eq!(results.len(), 10);

        let final_count = *counter.lock().unwrap();
        assert_eq!(final_count, 10);
    }

    #[test]
    fn test_task_failure_is_delivered() {
        let mut pool = ThreadPool::<Result<(), &str>>::new(2).unwrap();

        pool.execute(|| Err("task failed")).unwrap();
        pool.execute(|| Ok(())).unwrap();

        pool.close();
        let results = pool.results();

        assert_eq!(results.len(), 2);
        assert!(results.contains(&Err("task failed")));
        assert!(results.contains(&Ok(())));
    }

    #[test]
    fn test_delayed_tasks() {
        let mut pool = ThreadPool::<usize>::new(2).unwrap();

        pool.execute(|| {
            thread::sleep(Duration::from_millis(50));
            1
        })
        .unwrap();

        pool.execute(|| {
            thread::sleep(Duration::from_millis(100));
            2
        })
        .unwrap();

        pool.close();
        let results = pool.results();

        assert!(results.contains(&1));
        assert!(results.contains(&2));
    }

    #[test]
    fn test_results_before_close_may_be_partial() {
        let mut pool = ThreadPool::<i32>::new(4).unwrap();

        pool.execute(|| 10).unwrap();
        pool.execute(|| 20).unwrap();

        let results = pool.results();
        assert!(
            results.len() <= 2,
            "expected no or partial results before close"
        );

        pool.close();
    }

    #[test]
    fn test_results_without_jobs() {
        let mut pool = ThreadPool::<i32>::new(2).unwrap();
        pool.close();
        assert!(pool.results().is_empty());
    }

    #[test]
    fn test_execute_after_close() {
        let mut pool = ThreadPool::<i32>::new(2).unwrap();
        pool.close();
        assert_eq!(pool.execute(|| 1).unwrap_err(), PoolError::Closed);
    }

    #[test]
    fn test_double_close() {
        let mut pool = ThreadPool::<i32>::new(4).unwrap();
        pool.close();

        // Second close should have no effect.
        pool.close();
    }
}
