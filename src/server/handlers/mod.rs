pub mod locations;
pub mod orders;
pub mod transport;

#[cfg(test)]
pub(crate) fn test_api(seconds: i64) -> crate::server::DynAPI {
    use crate::db::MemoryStore;
    use crate::engine::mock::{MockDirections, MockPublisher};
    use crate::engine::Engine;
    use std::sync::Arc;

    Arc::new(Engine::new(
        Arc::new(MemoryStore::new()),
        Arc::new(MockDirections::seconds(seconds)),
        Arc::new(MockPublisher::default()),
    ))
}
