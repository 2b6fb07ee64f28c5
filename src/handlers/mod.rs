pub mod index_handler;
pub mod repositories_handler;

#[derive(Debug, Default, serde::Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
}
