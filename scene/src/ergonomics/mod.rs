pub use self::entity_channel_ext::*;
#[cfg(feature = "properties")]
pub use self::follow_all_properties::*;
pub use self::futures::*;
#[cfg(feature = "properties")]
pub use self::property_bindings::*;
pub use self::recipe::*;

mod entity_channel_ext;
mod futures;
mod recipe;

#[cfg(feature = "test-scene")]
pub mod test;
#[cfg(feature = "properties")]
mod property_bindings;
#[cfg(feature = "properties")]
mod follow_all_properties;

