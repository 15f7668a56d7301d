//! Command line receive task
//!
//! Moves one byte at a time from the UART into the shared line receiver.
//! Parsing happens later in the dispatch loop.

use defmt::*;
use embassy_rp::uart::BufferedUartRx;
use embedded_io_async::Read;
use segclock_protocol::Received;

use crate::shared::SHARED;

/// Serial RX task - feeds the line receiver
#[embassy_executor::task]
pub async fn serial_rx_task(mut rx: BufferedUartRx) {
    trace!("Serial RX task started");

    let mut byte = [0u8; 1];

    loop {
        match rx.read(&mut byte).await {
            Ok(1) => {
                if SHARED.line().push(byte[0]) == Received::Overflowed {
                    warn!(
                        "Receive buffer overflow, partial line dropped ({} total)",
                        SHARED.line().overflow_count()
                    );
                }
            }
            Ok(_) => {
                // No bytes read, continue
            }
            Err(e) => {
                warn!("UART read error: {:?}", e);
            }
        }
    }
}
