pub mod jobs;
pub mod listings;
pub mod messages;
pub mod tasks;
pub mod wallet;
pub mod work_contracts;
pub mod workers;
