pub mod api;
pub mod app;
pub mod log;
pub mod models;

#[cfg(test)]
mod test;
