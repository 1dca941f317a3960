//! SeaORM entities for scientists, planets and the missions linking them.

pub mod mission;
pub mod planet;
pub mod prelude;
pub mod scientist;
pub mod validation;
