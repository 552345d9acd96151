use storage::Db;

#[derive(Clone)]
pub struct AppState {
    pub db: Db,
}
