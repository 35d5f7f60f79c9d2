pub mod availability;
pub mod chat;
pub mod intent;
pub mod llm;
pub mod recommendations;
pub mod service_names;
pub mod title_search;
