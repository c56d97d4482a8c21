pub mod error;
pub mod tags;

pub mod admin {
    pub mod routes;
}
pub mod diagnostics {
    pub mod routes;
}
pub mod health {
    pub mod routes;
}
pub mod product {
    pub mod dto;
    pub mod error_mapper;
    pub mod routes;
}
