/// External (serializable) representations of problems and solutions
pub mod ext_repr;

mod export;
mod import;

#[doc(inline)]
pub use export::{export_rack, export_solution};
#[doc(inline)]
pub use import::{import_layout, import_problem, import_rack_counts};
