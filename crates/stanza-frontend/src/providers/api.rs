use stanza::config::ClientConfig;

#[cfg(not(feature = "offline"))]
pub type Service = stanza::services::HttpPoemService;

#[cfg(feature = "offline")]
pub type Service = stanza::services::MemoryPoemService;

/// Create the backend service with the build-time configuration.
#[cfg(not(feature = "offline"))]
pub fn create(config: &ClientConfig) -> Service {
    Service::new(config.clone())
}

/// Create an in-memory backend seeded with a few poets, one of them
/// `demo` / `password`. Tokens do not survive a reload.
#[cfg(feature = "offline")]
pub fn create(_config: &ClientConfig) -> Service {
    use stanza::log;

    let service = Service::new();
    let seeded = (|| {
        let (demo, _) = service.add_user("demo", "password")?;
        let (basho, _) = service.add_user("basho", "frog")?;
        let (issa, _) = service.add_user("issa", "snail")?;

        let pond = service.add_poem(
            basho.id,
            "Old Pond",
            "An old silent pond\nA frog jumps into the pond\nSplash! Silence again.",
        );
        service.add_poem(issa.id, "Snail", "O snail\nClimb Mount Fuji\nBut slowly, slowly!");
        service.add_relationship(demo.id, basho.id);
        service.add_relationship(issa.id, demo.id);
        service.add_favorite(demo.id, pond.id);
        Ok::<_, stanza::api::ApiError>(())
    })();

    if let Err(err) = seeded {
        log::error!("Failed to seed offline backend: {err}");
    }
    log::info!("Using the offline backend, sign in as demo / password");
    service
}
