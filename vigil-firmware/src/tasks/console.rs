//! Serial console task
//!
//! Answers plain-text HTTP/1.0 requests on UART0, one request line at a
//! time. See `vigil_core::query` for the routes.

use defmt::*;
use embassy_rp::uart::BufferedUart;
use embedded_io_async::{Read, Write};
use heapless::{String, Vec};

use vigil_core::query::handle_line;

use crate::channels::CLOCK_SET;

/// Buffer size for UART receive
const RX_BUF_SIZE: usize = 64;

/// Longest accepted request line
const MAX_LINE_LEN: usize = 128;

/// Encoded response buffer size (headers plus the largest body)
const TX_BUF_SIZE: usize = 256;

/// Console task
#[embassy_executor::task]
pub async fn console_task(mut uart: BufferedUart) {
    info!("Console task started");

    let mut buf = [0u8; RX_BUF_SIZE];
    let mut line: Vec<u8, MAX_LINE_LEN> = Vec::new();
    // Set while skipping the rest of an overlong line
    let mut discarding = false;

    loop {
        let n = match uart.read(&mut buf).await {
            Ok(n) => n,
            Err(e) => {
                warn!("UART read error: {:?}", e);
                continue;
            }
        };

        for &byte in &buf[..n] {
            match byte {
                b'\n' => {
                    if !discarding {
                        respond(&mut uart, &line).await;
                    }
                    line.clear();
                    discarding = false;
                }
                b'\r' => {}
                _ if discarding => {}
                _ => {
                    if line.push(byte).is_err() {
                        warn!("Console line too long, dropped");
                        line.clear();
                        discarding = true;
                    }
                }
            }
        }
    }
}

/// Handle one complete line and write the response, if any
async fn respond(uart: &mut BufferedUart, line: &[u8]) {
    let Ok(line) = core::str::from_utf8(line) else {
        warn!("Console line is not UTF-8");
        return;
    };

    let Some(reply) = handle_line(line) else {
        return;
    };

    debug!("{} -> {}", line, reply.response.status.code());

    if let Some(time) = reply.set_clock {
        CLOCK_SET.signal(time);
    }

    let mut out: String<TX_BUF_SIZE> = String::new();
    if reply.response.encode(&mut out).is_err() {
        warn!("Response does not fit the transmit buffer");
        return;
    }

    if let Err(e) = uart.write_all(out.as_bytes()).await {
        warn!("UART write error: {:?}", e);
    }
}
