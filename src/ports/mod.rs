/// Ports module defining interfaces for hexagonal architecture
///
/// Outbound ports (driven ports) describe what the application core needs
/// from infrastructure: a package database, a report formatter, an output
/// destination and a progress/diagnostics channel.
pub mod outbound;
