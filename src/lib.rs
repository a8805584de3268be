pub mod demo;
pub mod error;
pub mod guard;
pub mod logging;
pub mod record;
pub mod reflect;
pub mod types;
pub mod value;

pub use error::{DemoError, GuardError, RecordError};
pub use guard::GuardedView;
pub use record::{Record, SharedRecord};
pub use types::{Attributes, Property, PropertyKey, Symbol};
pub use value::{Number, Value};
