use std::{
    io,
    net::{SocketAddr, UdpSocket},
};

use badge_core::radio::{BROADCAST, Packet, Radio};
use log::{info, trace, warn};

/// Source id, destination id, both big endian.
const HEADER_LEN: usize = 4;
const MAX_FRAME: usize = 1024;

/// Stands in for the badge radio: every frame is sent to each configured peer
/// over UDP, so several simulators on one machine can talk to each other.
pub struct UdpRadio {
    socket: UdpSocket,
    badge_id: u16,
    peers: Vec<SocketAddr>,
}

impl UdpRadio {
    pub fn bind(listen: SocketAddr, badge_id: u16, peers: Vec<SocketAddr>) -> io::Result<Self> {
        let socket = UdpSocket::bind(listen)?;
        socket.set_nonblocking(true)?;
        info!("Radio {:04X} listening on {}", badge_id, socket.local_addr()?);
        Ok(UdpRadio { socket, badge_id, peers })
    }

    #[cfg(test)]
    fn local_addr(&self) -> SocketAddr {
        self.socket.local_addr().unwrap()
    }
}

fn encode_frame(source: u16, dest: u16, data: &[u8]) -> Vec<u8> {
    let mut frame = Vec::with_capacity(HEADER_LEN + data.len());
    frame.extend_from_slice(&source.to_be_bytes());
    frame.extend_from_slice(&dest.to_be_bytes());
    frame.extend_from_slice(data);
    frame
}

/// Unpacks a frame addressed to `me` or to everyone.
fn decode_frame(frame: &[u8], me: u16) -> Option<Packet> {
    let (header, data) = frame.split_at_checked(HEADER_LEN)?;
    let source = u16::from_be_bytes([header[0], header[1]]);
    let dest = u16::from_be_bytes([header[2], header[3]]);
    if dest != BROADCAST && dest != me {
        trace!("Ignoring frame from {:04X} for {:04X}", source, dest);
        return None;
    }
    Some(Packet { source, data: data.to_vec() })
}

impl Radio for UdpRadio {
    type Error = io::Error;

    fn send(&mut self, dest: u16, data: &[u8]) -> io::Result<()> {
        let frame = encode_frame(self.badge_id, dest, data);
        for peer in &self.peers {
            self.socket.send_to(&frame, peer)?;
        }
        trace!("Sent {} bytes to {} peers", frame.len(), self.peers.len());
        Ok(())
    }

    fn receive(&mut self) -> Option<Packet> {
        let mut buf = [0u8; MAX_FRAME];
        loop {
            match self.socket.recv_from(&mut buf) {
                Ok((len, from)) => match decode_frame(&buf[..len], self.badge_id) {
                    Some(packet) => return Some(packet),
                    None => trace!("Dropped frame from {}", from),
                },
                Err(err) if err.kind() == io::ErrorKind::WouldBlock => return None,
                Err(err) => {
                    warn!("Radio receive failed: {}", err);
                    return None;
                }
            }
        }
    }
}
