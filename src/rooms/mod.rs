//! Room selection and the unified `channels.json` manifest

pub mod normalize;
pub mod selection;

pub use normalize::{build_manifest, from_private, from_public};
pub use selection::RoomSelection;
