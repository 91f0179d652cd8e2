pub mod backend;
pub mod controller;
pub mod model;
pub mod router;
