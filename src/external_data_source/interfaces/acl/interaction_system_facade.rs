pub trait InteractionSystemFacade: Send + Sync {
    /// Base URL of the platform backend the connector talks to.
    fn base_url(&self) -> String;
}
