//! Logger construction from configuration files.

use super::{Logger, LoggerBuilder};
use crate::config::Config;
use crate::internal;
use crate::level::Level;
use crate::rotate::RotatingFileTransport;
use crate::transport::{ConsoleTransport, FileTransport, JsonTransport};

impl Logger {
    /// Builds a logger with every transport the config declares.
    ///
    /// Configuration-shape errors (bad level, unknown transport type or
    /// rotation method, unparsable size, conflicting filters, missing path)
    /// are fatal here so misconfiguration surfaces at startup instead of
    /// being silently defaulted away.
    ///
    /// # Errors
    /// Any translation error from the transport tables, or `InvalidPath` from
    /// rotating-transport construction.
    pub fn from_config(config: &Config) -> Result<Self, crate::Error> {
        let level: Level = config.general.level.parse()?;
        let mut builder = LoggerBuilder::new().level(level);
        if let Some(app) = &config.general.app_name {
            builder = builder.app_name(app.clone());
        }

        for (name, transport) in &config.transports {
            let filter = transport.level_filter(name)?;

            match transport.kind.as_str() {
                "console" => {
                    builder = builder.transport(
                        ConsoleTransport::new()
                            .colors(transport.colors.unwrap_or(true))
                            .with_name(name.clone())
                            .with_filter(filter),
                    );
                }
                "file" => {
                    let path = require_path(name, transport.path.as_deref())?;
                    builder = builder.transport(
                        FileTransport::new(path)
                            .with_name(name.clone())
                            .with_filter(filter),
                    );
                }
                "json" => {
                    let path = require_path(name, transport.path.as_deref())?;
                    builder = builder.transport(
                        JsonTransport::new(path)
                            .with_name(name.clone())
                            .with_filter(filter),
                    );
                }
                "log" => {
                    let path = require_path(name, transport.path.as_deref())?;
                    let rotation = transport.rotation_config()?;
                    builder = builder.transport(
                        RotatingFileTransport::new(path, rotation)?
                            .with_name(name.clone())
                            .with_filter(filter),
                    );
                }
                other => {
                    return Err(crate::Error::UnknownTransportType(format!(
                        "{other} (transport '{name}')"
                    )));
                }
            }
            internal::debug("CONFIG", &format!("Transport '{name}' configured"));
        }

        Ok(builder.build())
    }
}

fn require_path<'a>(name: &str, path: Option<&'a str>) -> Result<&'a str, crate::Error> {
    path.ok_or_else(|| crate::Error::InvalidPath(format!("transport '{name}' has no path")))
}
