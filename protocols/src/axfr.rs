//! Full zone transfer (AXFR) over TCP.
//!
//! The request is a single query message; the answer is a stream of
//! length-prefixed messages whose records start and end with the zone's SOA.

use std::collections::HashSet;
use std::net::SocketAddr;
use std::time::Duration;

use hickory_proto::op::{Message, MessageType, OpCode, Query, ResponseCode};
use hickory_proto::rr::domain::Label;
use hickory_proto::rr::{Name, Record, RecordType};
use hickory_proto::serialize::binary::BinEncodable;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tokio::net::TcpStream;
use tokio::time;
use tracing::debug;

use zonesnatcher_common::dns::TransferError;

/// Node name used for the zone origin itself.
pub const ORIGIN_NODE: &str = "@";

const LENGTH_PREFIX_LEN: usize = 2;

/// Connects to `server` and transfers `zone`, returning its node names.
pub async fn transfer(
    server: SocketAddr,
    zone: &str,
    timeout: Duration,
) -> Result<Vec<String>, TransferError> {
    let origin: Name = parse_origin(zone)?;

    let mut stream = time::timeout(timeout, TcpStream::connect(server))
        .await
        .map_err(|_| TransferError::Timeout)?
        .map_err(|source| TransferError::Connect {
            server: server.to_string(),
            source,
        })?;

    let records: Vec<Record> = exchange(&mut stream, &origin, timeout).await?;
    debug!("{} records transferred for {origin} from {server}", records.len());
    zone_nodes(&origin, &records)
}

/// Runs the AXFR exchange over an already connected stream and returns every record received.
pub async fn exchange<S>(
    stream: &mut S,
    origin: &Name,
    timeout: Duration,
) -> Result<Vec<Record>, TransferError>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    let id: u16 = rand::random();
    let request: Vec<u8> = frame(&build_query(origin, id)?)?;
    stream.write_all(&request).await?;
    stream.flush().await?;

    let mut collector = RecordCollector::new(id);
    loop {
        let message: Message = read_message(stream, timeout).await?;
        if collector.accept(message)? {
            return Ok(collector.into_records());
        }
    }
}

pub fn parse_origin(zone: &str) -> Result<Name, TransferError> {
    let mut origin = Name::from_ascii(zone).map_err(|e| TransferError::InvalidZone {
        zone: zone.to_string(),
        reason: e.to_string(),
    })?;
    origin.set_fqdn(true);
    Ok(origin)
}

pub fn build_query(origin: &Name, id: u16) -> Result<Vec<u8>, TransferError> {
    let mut message = Message::new();
    message
        .set_id(id)
        .set_message_type(MessageType::Query)
        .set_op_code(OpCode::Query)
        .set_recursion_desired(false);
    message.add_query(Query::query(origin.clone(), RecordType::AXFR));
    message.to_vec().map_err(TransferError::malformed)
}

/// Prepends the two byte length that DNS over TCP requires.
pub fn frame(payload: &[u8]) -> Result<Vec<u8>, TransferError> {
    let len = u16::try_from(payload.len())
        .map_err(|_| TransferError::malformed("message exceeds 65535 bytes"))?;
    let mut framed: Vec<u8> = Vec::with_capacity(LENGTH_PREFIX_LEN + payload.len());
    framed.extend_from_slice(&len.to_be_bytes());
    framed.extend_from_slice(payload);
    Ok(framed)
}

async fn read_message<S>(stream: &mut S, timeout: Duration) -> Result<Message, TransferError>
where
    S: AsyncRead + Unpin,
{
    let mut len_bytes = [0u8; LENGTH_PREFIX_LEN];
    read_exact(stream, &mut len_bytes, timeout).await?;

    let mut buffer: Vec<u8> = vec![0u8; u16::from_be_bytes(len_bytes) as usize];
    read_exact(stream, &mut buffer, timeout).await?;

    Message::from_vec(&buffer).map_err(TransferError::malformed)
}

async fn read_exact<S>(stream: &mut S, buf: &mut [u8], timeout: Duration) -> Result<(), TransferError>
where
    S: AsyncRead + Unpin,
{
    match time::timeout(timeout, stream.read_exact(buf)).await {
        Ok(Ok(_)) => Ok(()),
        Ok(Err(e)) if e.kind() == std::io::ErrorKind::UnexpectedEof => Err(
            TransferError::malformed("connection closed before the closing SOA"),
        ),
        Ok(Err(e)) => Err(TransferError::Io(e)),
        Err(_) => Err(TransferError::Timeout),
    }
}

/// Accumulates the answer records of an AXFR response stream.
struct RecordCollector {
    id: u16,
    records: Vec<Record>,
}

impl RecordCollector {
    fn new(id: u16) -> Self {
        Self {
            id,
            records: Vec::new(),
        }
    }

    /// Takes the next response message; `Ok(true)` once the closing SOA arrived.
    fn accept(&mut self, message: Message) -> Result<bool, TransferError> {
        if message.id() != self.id {
            return Err(TransferError::malformed(format!(
                "response id {} does not match query id {}",
                message.id(),
                self.id
            )));
        }

        let rcode: ResponseCode = message.response_code();
        if rcode != ResponseCode::NoError {
            return Err(TransferError::Refused(rcode.to_string()));
        }

        if self.records.is_empty() && message.answers().is_empty() {
            return Err(TransferError::malformed("empty answer section"));
        }

        for record in message.answers() {
            let is_soa: bool = record.record_type() == RecordType::SOA;
            if self.records.is_empty() && !is_soa {
                return Err(TransferError::malformed("first record is not an SOA"));
            }
            self.records.push(record.clone());
            if is_soa && self.records.len() > 1 {
                return Ok(true);
            }
        }
        Ok(false)
    }

    fn into_records(self) -> Vec<Record> {
        self.records
    }
}

/// Turns transferred records into node names relative to `origin`.
///
/// Names keep the order of their first appearance and are unique
/// (compared case-insensitively). The origin is reported as [`ORIGIN_NODE`].
pub fn zone_nodes(origin: &Name, records: &[Record]) -> Result<Vec<String>, TransferError> {
    let origin_labels: usize = origin.iter().count();
    let mut seen: HashSet<String> = HashSet::new();
    let mut nodes: Vec<String> = Vec::new();
    let mut has_soa = false;
    let mut has_ns = false;

    for record in records {
        let name: &Name = record.name();
        if !origin.zone_of(name) {
            return Err(TransferError::malformed(format!("{name} is outside of {origin}")));
        }

        let relative_labels: usize = name.iter().count() - origin_labels;
        if relative_labels == 0 {
            match record.record_type() {
                RecordType::SOA => has_soa = true,
                RecordType::NS => has_ns = true,
                _ => {}
            }
        }

        let node: String = relative_name(name, relative_labels)?;
        if seen.insert(node.to_ascii_lowercase()) {
            nodes.push(node);
        }
    }

    if !has_soa {
        return Err(TransferError::malformed(format!("no SOA at {origin}")));
    }
    if !has_ns {
        return Err(TransferError::malformed(format!("no NS at {origin}")));
    }
    Ok(nodes)
}

/// Presentation form of the first `relative_labels` labels, escaped so that
/// a dot inside a label never reads as a label separator.
fn relative_name(name: &Name, relative_labels: usize) -> Result<String, TransferError> {
    if relative_labels == 0 {
        return Ok(ORIGIN_NODE.to_string());
    }
    let labels: Vec<String> = name
        .iter()
        .take(relative_labels)
        .map(|raw| Label::from_raw_bytes(raw).map(|label| label.to_ascii()))
        .collect::<Result<_, _>>()
        .map_err(TransferError::malformed)?;
    Ok(labels.join("."))
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
