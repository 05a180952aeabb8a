mod progress_bus_test;
mod transcript_merger_test;
