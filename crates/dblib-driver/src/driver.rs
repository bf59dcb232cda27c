//! Driver facade.

use dblib_dialect::DblibDialect;

use crate::config::{ConnectionConfig, DsnFlavor};

/// The SQL Server platform adapter.
///
/// Ties a connection configuration to the dialect that generates SQL for
/// it. The facade is cheap to clone and carries no live connection.
#[derive(Debug, Clone, Default)]
pub struct DblibDriver {
    config: ConnectionConfig,
    flavor: DsnFlavor,
}

impl DblibDriver {
    /// Create a driver for the given connection configuration.
    #[must_use]
    pub fn new(config: ConnectionConfig) -> Self {
        Self {
            config,
            flavor: DsnFlavor::default(),
        }
    }

    /// Select the connection-string flavor to render.
    #[must_use]
    pub fn with_flavor(mut self, flavor: DsnFlavor) -> Self {
        self.flavor = flavor;
        self
    }

    /// Stable driver identifier.
    #[must_use]
    pub fn name(&self) -> &'static str {
        "pdo_dblib"
    }

    /// The dialect this driver speaks.
    #[must_use]
    pub fn platform(&self) -> DblibDialect {
        DblibDialect::new()
    }

    /// Database this driver connects to, when configured.
    #[must_use]
    pub fn database(&self) -> Option<&str> {
        self.config.database.as_deref()
    }

    /// Connection configuration.
    #[must_use]
    pub fn config(&self) -> &ConnectionConfig {
        &self.config
    }

    /// Render the connection string for the configured flavor.
    #[must_use]
    pub fn dsn(&self) -> String {
        self.config.to_dsn(self.flavor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn facade_reports_identity_and_database() {
        let driver = DblibDriver::new(ConnectionConfig::new().host("localhost").database("app"));
        assert_eq!(driver.name(), "pdo_dblib");
        assert_eq!(driver.database(), Some("app"));
        assert_eq!(driver.platform().name(), "mssql");
        assert_eq!(driver.dsn(), "dblib:host=localhost;dbname=app;");
    }

    #[test]
    fn flavor_selects_the_dsn_form() {
        let driver = DblibDriver::new(ConnectionConfig::new().host("localhost").database("app"))
            .with_flavor(DsnFlavor::NativeClient);
        assert_eq!(driver.dsn(), "sqlsrv:server=localhost;Database=app");
    }
}
