use crate::domain::model::{OrderPolicy, PlanResult};
use crate::utils::error::Result;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
}

pub trait ConfigProvider: Send + Sync {
    fn output_path(&self) -> &str;
    fn policies_file(&self) -> Option<&str>;
    fn inline_policies(&self) -> Vec<OrderPolicy>;
    fn curve_points(&self) -> usize;
    fn archive_output(&self) -> bool;
}

pub trait Pipeline: Send + Sync {
    fn extract(&self) -> Result<Vec<OrderPolicy>>;
    fn transform(&self, policies: Vec<OrderPolicy>) -> Result<PlanResult>;
    fn load(&self, result: PlanResult) -> Result<String>;
}
