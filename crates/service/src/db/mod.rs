pub mod saude_service;
pub mod suino_service;
