pub mod loader_event;
