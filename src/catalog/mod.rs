mod filter;
mod load;
mod record;
mod state;

pub use filter::parse_leading_int;
pub use load::{load_catalog, resolve_solution_path};
pub use record::ProblemRecord;
pub use state::CatalogState;
