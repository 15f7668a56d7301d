//! Board pin map and peripheral bring-up
//!
//! | Function            | GPIO        |
//! |---------------------|-------------|
//! | UART0 TX / RX       | 0 / 1       |
//! | Segments a..g, dp   | 2..9        |
//! | Digit strobes 0..5  | 10..15      |
//! | Display enable (lo) | 16          |
//! | Strobed key line    | 17          |
//! | History next / prev | 18 / 19     |
//! | LCD RS / RW / E     | 20 / 21 / 22|
//! | LCD D4..D7          | 26, 27, 28, 23 |
//! | Activity indicator  | 25 (on-board LED) |

use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Flex, Input, Level, Output, Pull};
use embassy_rp::peripherals::UART0;
use embassy_rp::uart::{BufferedInterruptHandler, BufferedUartRx, Uart};
use embassy_rp::Peripherals;
use segclock_hal::UartConfig;
use segclock_hal_rp2040::display::GpioSegmentDisplay;
use segclock_hal_rp2040::keypad::{GpioKeyLine, GpioKeyMatrix};
use segclock_hal_rp2040::lcd::GpioLcd;
use segclock_hal_rp2040::uart::{uart_config, UartSerialTx};
use static_cell::StaticCell;

bind_interrupts!(pub struct Irqs {
    UART0_IRQ => BufferedInterruptHandler<UART0>;
});

/// Segment display as wired on this board
pub type SegmentBus = GpioSegmentDisplay<Output<'static>>;

/// Ring buffer sizes for the command line UART
const TX_BUF_SIZE: usize = 32;
const RX_BUF_SIZE: usize = 32;

// Static cells for UART buffers (must live forever)
static TX_BUF: StaticCell<[u8; TX_BUF_SIZE]> = StaticCell::new();
static RX_BUF: StaticCell<[u8; RX_BUF_SIZE]> = StaticCell::new();

/// Peripherals used by the tick task
pub struct TickPorts {
    pub display: SegmentBus,
    pub key_line: GpioKeyLine<'static>,
    pub matrix: GpioKeyMatrix<'static>,
}

/// Everything the firmware drives
pub struct Board {
    pub tick: TickPorts,
    pub lcd: GpioLcd<'static>,
    /// Toggles on every handled command frame
    pub indicator: Output<'static>,
    pub serial_tx: UartSerialTx,
    pub serial_rx: BufferedUartRx,
}

impl Board {
    /// Configure every pin and the UART
    pub fn new(p: Peripherals, line: &UartConfig) -> Self {
        let segments = [
            Output::new(p.PIN_2, Level::Low),
            Output::new(p.PIN_3, Level::Low),
            Output::new(p.PIN_4, Level::Low),
            Output::new(p.PIN_5, Level::Low),
            Output::new(p.PIN_6, Level::Low),
            Output::new(p.PIN_7, Level::Low),
            Output::new(p.PIN_8, Level::Low),
            Output::new(p.PIN_9, Level::Low),
        ];
        let strobes = [
            Output::new(p.PIN_10, Level::Low),
            Output::new(p.PIN_11, Level::Low),
            Output::new(p.PIN_12, Level::Low),
            Output::new(p.PIN_13, Level::Low),
            Output::new(p.PIN_14, Level::Low),
            Output::new(p.PIN_15, Level::Low),
        ];
        let enable = Output::new(p.PIN_16, Level::High);

        let tick = TickPorts {
            display: GpioSegmentDisplay::new(segments, strobes, enable),
            key_line: GpioKeyLine::new(Input::new(p.PIN_17, Pull::Down)),
            matrix: GpioKeyMatrix::new(
                Input::new(p.PIN_18, Pull::Up),
                Input::new(p.PIN_19, Pull::Up),
            ),
        };

        let lcd = GpioLcd::new(
            Output::new(p.PIN_20, Level::Low),
            Output::new(p.PIN_21, Level::Low),
            Output::new(p.PIN_22, Level::Low),
            [
                Flex::new(p.PIN_26),
                Flex::new(p.PIN_27),
                Flex::new(p.PIN_28),
                Flex::new(p.PIN_23),
            ],
        );

        let indicator = Output::new(p.PIN_25, Level::Low);

        let tx_buf = TX_BUF.init([0u8; TX_BUF_SIZE]);
        let rx_buf = RX_BUF.init([0u8; RX_BUF_SIZE]);
        let uart = Uart::new_blocking(p.UART0, p.PIN_0, p.PIN_1, uart_config(line));
        let uart = uart.into_buffered(Irqs, tx_buf, rx_buf);
        let (tx, rx) = uart.split();

        Self {
            tick,
            lcd,
            indicator,
            serial_tx: UartSerialTx::new(tx),
            serial_rx: rx,
        }
    }
}
