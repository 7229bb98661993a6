/// One outcome of a [`crate::Terminal::update`] call.
///
/// Modeled as a closed tagged union rather than a loosely-typed list: a host
/// matches exhaustively instead of probing an "anything" container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A viewport line that changed since the previous update, carrying its
    /// stable `id` and the rendered (HTML) representation.
    LineChanged { id: u64, rendered: String },
    /// Bytes the host should write back to the underlying connection, e.g. a
    /// Primary Device Attributes reply.
    Response(Vec<u8>),
    /// A syntactically valid but semantically unrecognized escape, CSI kind
    /// or private mode. Carries a human-readable description the host may
    /// log; the engine already absorbed the anomaly and took no grid action.
    Unsupported(String),
}
