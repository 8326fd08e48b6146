pub mod select;

pub use select::{parse_resolutions, select_variant, variant_url, Action, Selection};
