//! TCP connection collaborator.
//!
//! The core hands a finished byte buffer to [`Connection::send`]; the
//! connection owns no protocol logic and does not reconnect. Received data
//! is printed by a background reader task as it arrives.

use std::net::SocketAddr;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::tcp::{OwnedReadHalf, OwnedWriteHalf};
use tokio::net::TcpStream;
use tokio::task::JoinHandle;

use crate::error::Result;
use crate::ui::Output;

/// An open TCP connection with a background reader.
pub struct Connection {
    peer: SocketAddr,
    writer: OwnedWriteHalf,
    reader: JoinHandle<()>,
}

impl Connection {
    /// Connect to `host:port` and start the reader task.
    pub async fn open(address: &str, output: Output) -> Result<Self> {
        let stream = TcpStream::connect(address).await?;
        let peer = stream.peer_addr()?;
        tracing::debug!(%peer, "connected");

        let (read_half, writer) = stream.into_split();
        let reader = tokio::spawn(read_loop(read_half, peer, output));

        Ok(Self {
            peer,
            writer,
            reader,
        })
    }

    /// The remote address.
    pub fn peer(&self) -> SocketAddr {
        self.peer
    }

    /// Write a payload and flush it.
    pub async fn send(&mut self, bytes: &[u8]) -> Result<()> {
        self.writer.write_all(bytes).await?;
        self.writer.flush().await?;
        tracing::debug!(len = bytes.len(), peer = %self.peer, "payload sent");
        Ok(())
    }

    /// Drop the connection, stopping the reader task.
    pub fn close(self) {
        self.reader.abort();
        tracing::debug!(peer = %self.peer, "disconnected");
    }
}

/// Print incoming data until the peer closes or the task is aborted.
async fn read_loop(mut read_half: OwnedReadHalf, peer: SocketAddr, output: Output) {
    let mut buf = vec![0u8; 8192];
    loop {
        match read_half.read(&mut buf).await {
            Ok(0) => {
                output.warning(&format!("connection closed by {}", peer));
                break;
            }
            Ok(n) => output.incoming(&buf[..n]),
            Err(e) => {
                output.error(&format!("read error from {}: {}", peer, e));
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::OutputMode;
    use tokio::net::TcpListener;

    #[tokio::test]
    async fn send_reaches_the_peer() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let accept = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut received = Vec::new();
            let mut buf = [0u8; 64];
            loop {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                received.extend_from_slice(&buf[..n]);
                if received.len() >= 4 {
                    break;
                }
            }
            received
        });

        let output = Output::new(OutputMode::Quiet, false);
        let mut connection = Connection::open(&addr.to_string(), output).await.unwrap();
        connection.send(&[0xde, 0xad, 0xbe, 0xef]).await.unwrap();

        let received = accept.await.unwrap();
        assert_eq!(received, vec![0xde, 0xad, 0xbe, 0xef]);
        connection.close();
    }

    #[tokio::test]
    async fn open_fails_on_refused_connection() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let output = Output::new(OutputMode::Quiet, false);
        let result = Connection::open(&addr.to_string(), output).await;
        assert!(result.is_err());
    }
}
