//! UART transmit and configuration mapping

use embassy_rp::uart::{self, BufferedUartTx};
use segclock_hal::uart::{DataBits, Parity, StopBits};
use segclock_hal::{SerialTx, UartConfig};

/// Map the board-agnostic line settings onto an embassy-rp UART config
pub fn uart_config(config: &UartConfig) -> uart::Config {
    let mut cfg = uart::Config::default();
    cfg.baudrate = config.baudrate;
    cfg.data_bits = match config.data_bits {
        DataBits::Seven => uart::DataBits::DataBits7,
        DataBits::Eight => uart::DataBits::DataBits8,
    };
    cfg.parity = match config.parity {
        Parity::None => uart::Parity::ParityNone,
        Parity::Even => uart::Parity::ParityEven,
        Parity::Odd => uart::Parity::ParityOdd,
    };
    cfg.stop_bits = match config.stop_bits {
        StopBits::One => uart::StopBits::STOP1,
        StopBits::Two => uart::StopBits::STOP2,
    };
    cfg
}

/// Reply transmitter over the buffered UART
///
/// Bytes go into the driver's ring buffer and are moved to the FIFO by the
/// UART interrupt. A GET reply is far smaller than the ring, so the writer
/// is always ready.
pub struct UartSerialTx {
    tx: BufferedUartTx,
}

impl UartSerialTx {
    pub fn new(tx: BufferedUartTx) -> Self {
        Self { tx }
    }
}

impl SerialTx for UartSerialTx {
    type Error = uart::Error;

    fn is_ready(&self) -> bool {
        true
    }

    fn write_byte(&mut self, byte: u8) -> Result<(), Self::Error> {
        self.tx.blocking_write(&[byte]).map(|_| ())
    }
}
