// Domain layer: entity types and identifiers. No dependencies beyond std/serde.

pub mod model;
