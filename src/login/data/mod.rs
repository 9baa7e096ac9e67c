//! Data layer: wire shapes, mapper, data source, repository implementation.

mod datasource;
mod dto;
mod mapper;
mod model;
mod repository;

pub use datasource::{HttpLoginDatasource, LoginDatasource};
pub use dto::LoginRequest;
pub use mapper::to_login_request;
pub use model::LoginResponse;
pub use repository::HttpLoginRepository;
