pub mod domain;

pub use domain::{DomainError, FaultKind, NotFoundKind, ValidationKind};
