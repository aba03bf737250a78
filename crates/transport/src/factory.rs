use crate::dsn::Dsn;
use crate::error::TransportError;
use crate::transport::DynTransport;

/// Builds transports from connection strings.
pub trait TransportFactory: Send + Sync {
    /// Whether this factory handles the DSN's scheme.
    fn supports(&self, dsn: &Dsn) -> bool;

    /// Build a transport from the DSN.
    fn create(&self, dsn: &Dsn) -> Result<Box<dyn DynTransport>, TransportError>;
}

/// Parse `dsn` and build a transport with the first factory that supports
/// its scheme.
pub fn create_transport(
    dsn: &str,
    factories: &[&dyn TransportFactory],
) -> Result<Box<dyn DynTransport>, TransportError> {
    let dsn: Dsn = dsn.parse()?;
    let factory = factories
        .iter()
        .find(|factory| factory.supports(&dsn))
        .ok_or_else(|| {
            TransportError::InvalidDsn(format!(
                "no transport factory supports the \"{}\" scheme",
                dsn.scheme()
            ))
        })?;
    factory.create(&dsn)
}
