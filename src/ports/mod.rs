/// Ports - the seams between the inventory core and the outside world
///
/// `inbound` holds the query interface the CLI drives; `outbound` holds the
/// interfaces the core calls to read the source and emit the result.
pub mod inbound;
pub mod outbound;
