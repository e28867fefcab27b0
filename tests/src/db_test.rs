use crate::{
    logging_driver::{DriverOp, LoggingDriver},
    ExecLog, Setup,
};
use spindle::{db::Builder, Db};
use std::{
    future::Future,
    pin::Pin,
    sync::{Arc, Mutex},
};

/// Runs one test against a backend, logging every driver operation.
pub struct DbTest {
    setup: Box<dyn Setup>,
    ops_log: Arc<Mutex<Vec<DriverOp>>>,
}

impl DbTest {
    pub fn new(setup: Box<dyn Setup>) -> Self {
        let _ = env_logger::builder().is_test(true).try_init();

        Self {
            setup,
            ops_log: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// A builder with the test session identity filled in.
    pub fn builder(&self) -> Builder {
        let mut builder = Db::builder();
        self.setup.configure_builder(&mut builder);
        builder
    }

    /// Opens a session from `builder`, always through the logging driver.
    pub async fn try_setup_db(&mut self, mut builder: Builder) -> spindle::Result<Db> {
        let driver = LoggingDriver::new(self.setup.driver());
        self.ops_log = driver.ops_log_handle();

        builder.build(driver).await
    }

    pub async fn setup_db(&mut self) -> Db {
        let builder = self.builder();
        self.try_setup_db(builder).await.unwrap()
    }

    /// The operations executed so far by the session opened last.
    pub fn log(&mut self) -> ExecLog {
        ExecLog::new(self.ops_log.clone())
    }

    /// Runs `test_fn` to completion on a current-thread runtime.
    pub fn run_test<F>(&mut self, test_fn: F)
    where
        F: for<'a> FnOnce(&'a mut DbTest) -> Pin<Box<dyn Future<Output = ()> + 'a>>,
    {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .expect("Failed to create Tokio runtime");

        runtime.block_on(test_fn(self));
    }
}
