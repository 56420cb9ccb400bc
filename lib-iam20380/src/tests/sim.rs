//! Register-file model of the chip behind an `embedded-hal` I2C bus.

use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::{self, ErrorKind, ErrorType, I2c, NoAcknowledgeSource, Operation};

use crate::registers::*;
use crate::IAM20380_DEFAULT_I2C_ADDR;

/// `PWR_MGMT_1` after power up: asleep, auto clock select.
pub const PWR_MGMT_1_RESET: u8 = 0x41;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimError {
    Nack,
}

impl i2c::Error for SimError {
    fn kind(&self) -> ErrorKind {
        ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address)
    }
}

pub struct SimBus {
    pub regs: [u8; 128],
    pub address: u8,
    pub device_id: u8,
    /// Every register write that reached the chip, as `(register, value)`.
    pub writes: Vec<(u8, u8)>,
    pub resets: usize,
    /// Makes every following transaction fail.
    pub fail: bool,
    pointer: u8,
}

impl SimBus {
    pub fn new(device_id: u8) -> Self {
        let mut bus = SimBus {
            regs: [0; 128],
            address: IAM20380_DEFAULT_I2C_ADDR,
            device_id,
            writes: Vec::new(),
            resets: 0,
            fail: false,
            pointer: 0,
        };
        bus.power_on();
        bus
    }

    fn power_on(&mut self) {
        self.regs = [0; 128];
        self.regs[PWR_MGMT_1 as usize] = PWR_MGMT_1_RESET;
        self.regs[WHO_AM_I as usize] = self.device_id;
    }

    pub fn reg(&self, register: u8) -> u8 {
        self.regs[register as usize]
    }

    /// Pokes a register without going through the bus.
    pub fn set_reg(&mut self, register: u8, value: u8) {
        self.regs[register as usize] = value;
    }

    pub fn set_regs(&mut self, start: u8, values: &[u8]) {
        for (i, v) in values.iter().enumerate() {
            self.set_reg(start + i as u8, *v);
        }
    }

    fn store(&mut self, register: u8, value: u8) {
        self.writes.push((register, value));
        match register {
            PWR_MGMT_1 if value & 0x80 != 0 => {
                self.resets += 1;
                self.power_on();
            }
            WHO_AM_I => {}
            _ => self.regs[register as usize] = value,
        }
    }

    fn advance(&mut self) {
        self.pointer = (self.pointer + 1) & 0x7F;
    }
}

impl ErrorType for SimBus {
    type Error = SimError;
}

impl I2c for SimBus {
    fn transaction(&mut self, address: u8, operations: &mut [Operation<'_>]) -> Result<(), Self::Error> {
        if self.fail || address != self.address {
            return Err(SimError::Nack);
        }
        for op in operations {
            match op {
                Operation::Write(bytes) => {
                    if let Some((register, data)) = bytes.split_first() {
                        self.pointer = *register & 0x7F;
                        for value in data {
                            let register = self.pointer;
                            self.store(register, *value);
                            self.advance();
                        }
                    }
                }
                Operation::Read(buf) => {
                    for b in buf.iter_mut() {
                        *b = self.regs[self.pointer as usize];
                        self.advance();
                    }
                }
            }
        }
        Ok(())
    }
}

/// Delay that returns immediately and remembers how long it was asked to wait.
#[derive(Default)]
pub struct NoDelay {
    pub total_ns: u64,
}

impl DelayNs for NoDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.total_ns += ns as u64;
    }
}
