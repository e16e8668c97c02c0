// Core engine exports
pub mod eligibility;
pub mod engine;
pub mod rating;
pub mod selection;
pub mod slots;

pub use eligibility::{classify, rank_categories, EligibilityError};
pub use engine::Engine;
pub use rating::estimate_rating;
pub use selection::SelectionSet;
pub use slots::{generate_date_range, generate_day_slots, SlotError, SlotGenerator};
