use crate::core::Pipeline;
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::monitor::SystemMonitor;

pub struct PlanEngine<P: Pipeline> {
    pipeline: P,
    #[cfg(feature = "cli")]
    monitor: Option<SystemMonitor>,
}

impl<P: Pipeline> PlanEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self {
            pipeline,
            #[cfg(feature = "cli")]
            monitor: None,
        }
    }

    #[cfg(feature = "cli")]
    pub fn new_with_monitoring(pipeline: P, enabled: bool) -> Self {
        Self {
            pipeline,
            monitor: if enabled {
                Some(SystemMonitor::new(true))
            } else {
                None
            },
        }
    }

    fn log_monitor(&self, stage: &str) {
        #[cfg(feature = "cli")]
        if let Some(monitor) = &self.monitor {
            monitor.log_stats(stage);
        }
        #[cfg(not(feature = "cli"))]
        let _ = stage;
    }

    pub fn run(&self) -> Result<String> {
        println!("Starting plan run...");

        // Extract
        println!("Reading policies...");
        let policies = self.pipeline.extract()?;
        println!("Read {} policies", policies.len());
        self.log_monitor("extract");

        // Transform
        println!("Evaluating policies...");
        let result = self.pipeline.transform(policies)?;
        println!("Evaluated {} policies", result.evaluations.len());
        for eval in &result.evaluations {
            println!("  {}", eval.summary());
        }
        self.log_monitor("transform");

        // Load
        println!("Writing artifacts...");
        let output_path = self.pipeline.load(result)?;
        println!("Output saved to: {}", output_path);
        self.log_monitor("load");

        #[cfg(feature = "cli")]
        if let Some(monitor) = &self.monitor {
            monitor.log_final_summary();
        }

        Ok(output_path)
    }
}
