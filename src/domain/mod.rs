// Domain layer: the person record and its behaviour.

pub mod model;
