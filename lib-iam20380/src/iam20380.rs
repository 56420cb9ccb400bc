use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;

use crate::registers::*;
use crate::utils::*;
use crate::{
    Averaging, ChipVariant, Config, DlpfMode, Error, FchoiceBypass, GyroScaleRange, RawGyro,
    Result, Rotation, SensorData, IAM20380_DEFAULT_I2C_ADDR, RESET_SETTLE_MS,
};

/// Last known configuration of the chip. Only updated after the bus transfer that changes or
/// reads it succeeded.
///
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Settings
{
    pub gyro_scale: GyroScaleRange,
    pub dlpf_mode: DlpfMode,
    pub fchoice_bypass: FchoiceBypass,
    pub sample_rate_divider: u8,
    pub averaging: Averaging,
    pub gyro_cycle: bool,
    pub sleeping: bool,
}

impl Settings {
    /// Register contents right after power up or a soft reset.
    ///
    fn after_reset() -> Self {
        Settings { sleeping: true, ..Settings::default() }
    }
}

/// Driver for one IAM-20380 gyroscope.
///
/// The driver assumes it is the only user of the bus for the duration of each call, bit-field
/// writes are a read followed by a write and are not atomic.
///
pub struct Iam20380<I, D>
{
    /// i2c channel that we actually use to communicate with the chip, pass `&mut bus` to keep
    /// ownership of the bus outside of the driver.
    pub(crate) i2c: I,

    /// Delay source for the soft reset settle time.
    delay: D,

    /// i2c address that chip is located at.
    address: u8,

    config: Config,
    variant: ChipVariant,
    settings: Settings,

    /// Zero rate offset in deg/s, subtracted from every rotation reading.
    bias: Rotation,
}

impl<I: I2c, D: DelayNs> Iam20380<I, D>
{
    /// Soft resets the chip at the default address, checks its identity and applies the default
    /// configuration.
    ///
    pub fn new(i2c: I, delay: D) -> Result<Self, I::Error> {
        Self::with_address(i2c, delay, IAM20380_DEFAULT_I2C_ADDR, Config::default())
    }

    /// Like [`Iam20380::new`] but with an explicit address and configuration. Fails with
    /// [`Error::DeviceNotFound`] if the chip does not identify as a supported variant, in that
    /// case no driver is returned.
    ///
    pub fn with_address(i2c: I, delay: D, address: u8, config: Config) -> Result<Self, I::Error> {
        let mut iam = Iam20380 {
            i2c,
            delay,
            address,
            config,
            variant: ChipVariant::Standard,
            settings: Settings::after_reset(),
            bias: Rotation::zero(),
        };

        // WHO_AM_I is only reliable after a soft reset.
        iam.soft_reset()?;
        let id = iam.get_device_id()?;
        iam.variant = ChipVariant::from_device_id(id).ok_or(Error::DeviceNotFound(id))?;
        log::info!("Found {:?} IAM-20380 at {:#04x}", iam.variant, address);

        iam.apply_defaults()?;
        Ok(iam)
    }

    /// Gives back the bus and delay source.
    ///
    pub fn release(self) -> (I, D) {
        (self.i2c, self.delay)
    }

    pub fn address(&self) -> u8 {
        self.address
    }

    pub fn config(&self) -> Config {
        self.config
    }

    pub fn variant(&self) -> ChipVariant {
        self.variant
    }

    pub fn settings(&self) -> Settings {
        self.settings
    }

    /// Soft resets the chip and programs the configured default profile: 250 deg/s, sample
    /// rate divider 255, no DLPF bypass and the profile's averaging and cycle mode. The chip is
    /// woken up before anything else is written and any gyro bias is cleared.
    ///
    pub fn reset(&mut self) -> Result<(), I::Error> {
        self.soft_reset()?;
        self.apply_defaults()
    }

    fn soft_reset(&mut self) -> Result<(), I::Error> {
        self.set_field(DEVICE_RESET, 1)?;
        // There is no ready flag to poll, just wait out the start-up time.
        self.delay.delay_ms(RESET_SETTLE_MS);
        self.settings = Settings::after_reset();
        Ok(())
    }

    fn apply_defaults(&mut self) -> Result<(), I::Error> {
        let profile = self.config.profile;
        log::info!("Applying {:?} defaults", profile);

        self.set_register_value(PWR_MGMT_1, PWR_MGMT_1_WAKE)?;
        self.settings.sleeping = false;
        self.bias = Rotation::zero();

        self.set_gyro_scale(GyroScaleRange::D250)?;
        self.set_sample_rate_divider(255)?;
        self.set_fchoice_bypass(FchoiceBypass::Disabled)?;
        if let Some(mode) = profile.dlpf_mode() {
            self.set_dlpf_mode(mode)?;
        }
        self.set_averaging_mode(profile.averaging())?;
        self.set_gyro_cycle(profile.gyro_cycle())
    }

    pub fn get_device_id(&mut self) -> Result<u8, I::Error> {
        self.get_register_value(WHO_AM_I)
    }

    /// Sets the full scale range from a value in deg/s, one of 250, 500, 1000 or 2000.
    ///
    pub fn set_full_scale_range(&mut self, dps: u16) -> Result<(), I::Error> {
        let scale = GyroScaleRange::from_dps(dps).ok_or(Error::InvalidArgument)?;
        self.set_gyro_scale(scale)
    }

    /// Reads the full scale range in deg/s back from the chip.
    ///
    pub fn get_full_scale_range(&mut self) -> Result<u16, I::Error> {
        Ok(self.get_gyro_scale()?.as_dps())
    }

    pub fn set_gyro_scale(&mut self, scale: GyroScaleRange) -> Result<(), I::Error> {
        self.ensure_awake()?;
        log::debug!("Setting gyro scale={:?}", scale);
        self.set_field(FS_SEL, scale.as_bits())?;
        self.settings.gyro_scale = scale;
        Ok(())
    }

    pub fn get_gyro_scale(&mut self) -> Result<GyroScaleRange, I::Error> {
        let scale = GyroScaleRange::from_bits(self.get_field(FS_SEL)?);
        self.settings.gyro_scale = scale;
        Ok(scale)
    }

    /// Sensitivity of the currently configured range in LSB / (deg/s).
    ///
    pub fn sensitivity(&self) -> f32 {
        self.settings.gyro_scale.as_scale_factor()
    }

    /// Sets the DLPF from its raw `DLPF_CFG` code (0-7).
    ///
    pub fn set_low_pass_filter(&mut self, code: u8) -> Result<(), I::Error> {
        let mode = DlpfMode::from_code(code).ok_or(Error::InvalidArgument)?;
        self.set_dlpf_mode(mode)
    }

    pub fn get_low_pass_filter(&mut self) -> Result<DlpfMode, I::Error> {
        let mode = DlpfMode::from_bits(self.get_field(DLPF_CFG)?);
        self.settings.dlpf_mode = mode;
        Ok(mode)
    }

    pub fn set_dlpf_mode(&mut self, mode: DlpfMode) -> Result<(), I::Error> {
        self.ensure_awake()?;
        log::debug!("Setting DLPF mode={:?}", mode);
        self.set_field(DLPF_CFG, mode.as_code())?;
        self.settings.dlpf_mode = mode;
        Ok(())
    }

    pub fn set_fchoice_bypass(&mut self, bypass: FchoiceBypass) -> Result<(), I::Error> {
        self.ensure_awake()?;
        log::debug!("Setting FCHOICE_B={:?}", bypass);
        self.set_field(FCHOICE_B, bypass.as_bits())?;
        self.settings.fchoice_bypass = bypass;
        Ok(())
    }

    pub fn get_fchoice_bypass(&mut self) -> Result<FchoiceBypass, I::Error> {
        let bypass = FchoiceBypass::from_bits(self.get_field(FCHOICE_B)?);
        self.settings.fchoice_bypass = bypass;
        Ok(bypass)
    }

    /// Sets the number of averaged samples, one of 1, 2, 4, 8, 16, 32, 64 or 128.
    ///
    pub fn set_averaging(&mut self, count: u8) -> Result<(), I::Error> {
        let averaging = Averaging::from_count(count).ok_or(Error::InvalidArgument)?;
        self.set_averaging_mode(averaging)
    }

    /// Reads the number of averaged samples back from the chip.
    ///
    pub fn get_averaging(&mut self) -> Result<u8, I::Error> {
        let averaging = Averaging::from_bits(self.get_field(G_AVGCFG)?);
        self.settings.averaging = averaging;
        Ok(averaging.as_count())
    }

    pub fn set_averaging_mode(&mut self, averaging: Averaging) -> Result<(), I::Error> {
        self.ensure_awake()?;
        log::debug!("Setting averaging={:?}", averaging);
        self.set_field(G_AVGCFG, averaging.as_bits())?;
        self.settings.averaging = averaging;
        Ok(())
    }

    /// Enables or disables low power gyro cycle mode.
    ///
    pub fn set_gyro_cycle(&mut self, enabled: bool) -> Result<(), I::Error> {
        self.ensure_awake()?;
        log::debug!("Setting gyro cycle enabled={}", enabled);
        self.set_field(GYRO_CYCLE, enabled as u8)?;
        self.settings.gyro_cycle = enabled;
        Ok(())
    }

    pub fn get_gyro_cycle(&mut self) -> Result<bool, I::Error> {
        let enabled = self.get_field(GYRO_CYCLE)? != 0;
        self.settings.gyro_cycle = enabled;
        Ok(enabled)
    }

    pub fn set_sample_rate_divider(&mut self, divider: u8) -> Result<(), I::Error> {
        self.ensure_awake()?;
        log::debug!("Setting sample rate divider={}", divider);
        self.set_field(SMPLRT_DIV_FIELD, divider)?;
        self.settings.sample_rate_divider = divider;
        Ok(())
    }

    pub fn get_sample_rate_divider(&mut self) -> Result<u8, I::Error> {
        let divider = self.get_field(SMPLRT_DIV_FIELD)?;
        self.settings.sample_rate_divider = divider;
        Ok(divider)
    }

    /// Output data rate in Hz, `1000 / SMPLRT_DIV`. A divider of 0 has no defined rate and gives
    /// [`Error::InvalidState`].
    ///
    pub fn get_output_data_rate(&mut self) -> Result<f32, I::Error> {
        match self.get_sample_rate_divider()? {
            0 => Err(Error::InvalidState),
            divider => Ok(1000.0 / divider as f32),
        }
    }

    /// Puts the chip to sleep or wakes it up. Only the `SLEEP` bit is touched.
    ///
    pub fn set_sleep(&mut self, sleep: bool) -> Result<(), I::Error> {
        log::debug!("Setting sleep={}", sleep);
        self.set_field(SLEEP, sleep as u8)?;
        self.settings.sleeping = sleep;
        Ok(())
    }

    pub fn get_sleep(&mut self) -> Result<bool, I::Error> {
        let sleeping = self.get_field(SLEEP)? != 0;
        self.settings.sleeping = sleeping;
        Ok(sleeping)
    }

    /// Reads all three gyroscope output words in one burst, so they belong to the same sample.
    ///
    pub fn read_raw(&mut self) -> Result<RawGyro, I::Error> {
        let mut data = [ 0u8; 6 ];
        self.i2c.write_read(self.address, &[ GYRO_XOUT_H ], &mut data)?;
        Ok(RawGyro::from_be_bytes(&data))
    }

    /// Get the current gyroscope sensor values (in deg/s), bias corrected.
    ///
    pub fn read_rotation(&mut self) -> Result<Rotation, I::Error> {
        let raw = self.read_raw()?;
        Ok(Rotation::from_raw(raw, self.sensitivity()) - self.bias)
    }

    /// Get temperature of the on chip temperature sensor, result is returned in degrees celsius.
    ///
    pub fn read_temperature(&mut self) -> Result<f32, I::Error> {
        let mut data = [ 0u8; 2 ];
        self.i2c.write_read(self.address, &[ TEMP_OUT_H ], &mut data)?;
        Ok(temp_to_celsius(data[0], data[1]))
    }

    /// Gets temperature and rotation in a single i2c transaction, the temperature registers sit
    /// directly in front of the gyroscope registers.
    ///
    pub fn read_all(&mut self) -> Result<SensorData, I::Error> {
        let mut data = [ 0u8; 2+6 ];
        self.i2c.write_read(self.address, &[ TEMP_OUT_H ], &mut data)?;

        let temp = temp_to_celsius(data[0], data[1]);

        let mut gyro = [ 0u8; 6 ];
        gyro.copy_from_slice(&data[2..]);
        let raw = RawGyro::from_be_bytes(&gyro);

        Ok(SensorData {
            gyros: Rotation::from_raw(raw, self.sensitivity()) - self.bias,
            temp,
        })
    }

    pub fn gyro_bias(&self) -> Rotation {
        self.bias
    }

    pub fn set_gyro_bias(&mut self, bias: Rotation) {
        self.bias = bias;
    }

    /// Averages `samples` readings taken `interval_ms` apart into the gyro bias. The chip must be
    /// lying still. Returns the new bias.
    ///
    pub fn calibrate_gyro(&mut self, samples: u16, interval_ms: u32) -> Result<Rotation, I::Error> {
        if samples == 0 {
            return Err(Error::InvalidArgument);
        }
        self.ensure_awake()?;

        let mut sum = [ 0.0f32; 3 ];
        for _ in 0..samples {
            let rotation = Rotation::from_raw(self.read_raw()?, self.sensitivity());
            for (acc, v) in sum.iter_mut().zip(rotation.as_array()) {
                *acc += v;
            }
            self.delay.delay_ms(interval_ms);
        }

        let n = samples as f32;
        self.bias = Rotation::new(sum[0] / n, sum[1] / n, sum[2] / n);
        log::info!("Calibrated gyro bias={:?}", self.bias);
        Ok(self.bias)
    }

    fn ensure_awake(&self) -> Result<(), I::Error> {
        if self.settings.sleeping {
            return Err(Error::InvalidState);
        }
        Ok(())
    }

    fn get_register_value(&mut self, register: u8) -> Result<u8, I::Error> {
        let mut buf = [ 0u8 ];
        self.i2c.write_read(self.address, &[ register ], &mut buf)?;
        Ok(buf[0])
    }

    fn set_register_value(&mut self, register: u8, value: u8) -> Result<(), I::Error> {
        self.i2c.write(self.address, &[ register, value ])?;
        Ok(())
    }

    fn get_field(&mut self, field: BitField) -> Result<u8, I::Error> {
        Ok(field.extract(self.get_register_value(field.register)?))
    }

    /// Writes a bit-field, preserving the other bits of its register through a read-modify-write.
    ///
    fn set_field(&mut self, field: BitField, value: u8) -> Result<(), I::Error> {
        let current = if field.spans_register() {
            0
        } else {
            self.get_register_value(field.register)?
        };
        self.set_register_value(field.register, field.insert(current, value))
    }
}
