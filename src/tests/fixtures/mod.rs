pub mod commands {
    pub mod create_cat;
}
pub mod http;
pub mod identity;
pub mod state;
