mod dispatch;
pub mod run;
pub mod show;

pub use dispatch::dispatch;
