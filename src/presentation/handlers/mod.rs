mod events;
mod health;
mod job_status;
mod stop;
mod submit;

pub use events::job_events_handler;
pub use health::health_handler;
pub use job_status::job_status_handler;
pub use stop::stop_handler;
pub use submit::submit_handler;
