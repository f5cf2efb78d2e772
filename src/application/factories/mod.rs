mod collector_factory;
mod formatter_factory;
mod presenter_factory;

pub use collector_factory::CollectorFactory;
pub use formatter_factory::FormatterFactory;
pub use presenter_factory::{PresenterFactory, PresenterType};
