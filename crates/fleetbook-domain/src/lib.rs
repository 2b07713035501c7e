//! Domain layer: fleet models, the bulk text parser, and the traits
//! persistence and notification collaborators implement.

pub mod model;
pub mod notifier;
pub mod repository;
pub mod service;

pub use notifier::ChangeNotifier;
pub use repository::TableRepository;
