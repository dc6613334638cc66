pub mod controller;
#[cfg(any(test, feature = "test-utils"))]
pub mod memory;
pub mod repository;
pub mod router;
pub mod service;
