pub mod client;

pub use client::{
    format_cnpj, normalize_cnpj, serialize_cnpj, Client, ClientStatus, ClientType,
    CreateClientRequest, UpdateClientRequest,
};
