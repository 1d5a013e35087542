pub use crate::index::{CollectionIndexType, IndexType};
