//! SeaORM entities (one module per table).

pub mod instructor;
pub mod student;
