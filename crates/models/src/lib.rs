pub mod db;
pub mod errors;
pub mod saude;
pub mod suino;

#[cfg(test)]
mod tests;
