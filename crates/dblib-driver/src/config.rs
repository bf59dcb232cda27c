//! Connection configuration and DSN rendering.

/// Which PDO-style connection string to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DsnFlavor {
    /// FreeTDS dblib transport (`dblib:` prefix).
    #[default]
    Dblib,
    /// Microsoft native client (`sqlsrv:` prefix), the Windows-only
    /// transport some deployments still run against.
    NativeClient,
}

/// Connection parameters for a SQL Server host.
///
/// Credentials are carried alongside the DSN because the dblib transport
/// takes them as separate arguments rather than DSN segments.
#[derive(Debug, Clone, Default)]
pub struct ConnectionConfig {
    /// Server hostname or address.
    pub host: Option<String>,
    /// Server TCP port.
    pub port: Option<u16>,
    /// Database to select after connecting.
    pub database: Option<String>,
    /// Client character set (dblib transport only).
    pub charset: Option<String>,
    /// Login username.
    pub username: Option<String>,
    /// Login password.
    pub password: Option<String>,
}

impl ConnectionConfig {
    /// Create an empty configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the server hostname.
    #[must_use]
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    /// Set the server port.
    #[must_use]
    pub fn port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    /// Set the database name.
    #[must_use]
    pub fn database(mut self, database: impl Into<String>) -> Self {
        self.database = Some(database.into());
        self
    }

    /// Set the client character set.
    #[must_use]
    pub fn charset(mut self, charset: impl Into<String>) -> Self {
        self.charset = Some(charset.into());
        self
    }

    /// Set the login username.
    #[must_use]
    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    /// Set the login password.
    #[must_use]
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    /// Render the connection string for the chosen transport.
    ///
    /// Segments are only emitted for parameters that are set, so a
    /// host-only configuration stays a host-only DSN.
    #[must_use]
    pub fn to_dsn(&self, flavor: DsnFlavor) -> String {
        match flavor {
            DsnFlavor::Dblib => {
                let mut dsn = String::from("dblib:");
                if let Some(host) = &self.host {
                    dsn.push_str(&format!("host={host};"));
                }
                if let Some(port) = self.port {
                    dsn.push_str(&format!("port={port};"));
                }
                if let Some(database) = &self.database {
                    dsn.push_str(&format!("dbname={database};"));
                }
                if let Some(charset) = &self.charset {
                    dsn.push_str(&format!("charset={charset};"));
                }
                dsn
            }
            DsnFlavor::NativeClient => {
                let mut dsn = String::from("sqlsrv:server=");
                if let Some(host) = &self.host {
                    dsn.push_str(host);
                }
                if let Some(port) = self.port {
                    dsn.push_str(&format!(",{port}"));
                }
                if let Some(database) = &self.database {
                    dsn.push_str(&format!(";Database={database}"));
                }
                dsn
            }
        }
    }
}
