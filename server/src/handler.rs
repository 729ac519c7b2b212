use std::ops::Deref;
use std::sync::Arc;

use driver::database::MemoryDatabase;

#[derive(Clone)]
pub struct AppModule(Arc<Handler>);

impl AppModule {
    pub fn new() -> Self {
        Self(Arc::new(Handler::init()))
    }
}

impl Default for AppModule {
    fn default() -> Self {
        Self::new()
    }
}

impl Deref for AppModule {
    type Target = Handler;
    fn deref(&self) -> &Self::Target {
        Deref::deref(&self.0)
    }
}

pub struct Handler {
    database: MemoryDatabase,
}

impl Handler {
    fn init() -> Self {
        let database = MemoryDatabase::new();

        Self { database }
    }

    pub fn database(&self) -> &MemoryDatabase {
        &self.database
    }
}
