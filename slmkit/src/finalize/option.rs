use std::str::FromStr;

use derive_more::Display;
use slmkit_core::{colormap::Colormap, device::DeviceClass, error::ConfigError};

use super::{Modulo, RotationPack};

/// Joint amplitude and phase encoding on a phase device.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum EncodeMethod {
    /// Amplitude is encoded as the contrast of a checkerboard carrier.
    #[default]
    #[display("checker")]
    Checker,
    /// Not implemented.
    #[display("grating")]
    Grating,
    /// Not implemented.
    #[display("magnitude")]
    Magnitude,
}

impl FromStr for EncodeMethod {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "checker" => Ok(Self::Checker),
            "grating" => Ok(Self::Grating),
            "magnitude" => Ok(Self::Magnitude),
            _ => Err(ConfigError::UnknownEncodeMethod(s.to_string())),
        }
    }
}

/// The option of [`PatternEncoder`].
///
/// [`PatternEncoder`]: crate::finalize::PatternEncoder
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FinalizeOption {
    /// The class of the target device.
    pub device: DeviceClass,
    /// The modulo applied before quantization.
    pub modulo: Modulo,
    /// The quantization preset.
    pub colormap: Colormap,
    /// The geometric remap of the output.
    pub rpack: RotationPack,
    /// The joint encoding method. Only used for a phase device.
    pub encode_method: EncodeMethod,
}

impl FinalizeOption {
    /// The default option of `device`.
    #[must_use]
    pub const fn new(device: DeviceClass) -> Self {
        match device {
            DeviceClass::Phase => Self {
                device,
                modulo: Modulo::Value(1.),
                colormap: Colormap::Pmpi,
                rpack: RotationPack::Disabled,
                encode_method: EncodeMethod::Checker,
            },
            DeviceClass::Amplitude => Self {
                device,
                modulo: Modulo::Disabled,
                colormap: Colormap::Gray,
                rpack: RotationPack::Deg45,
                encode_method: EncodeMethod::Checker,
            },
        }
    }

    /// Creates the option from named string values on top of the defaults of `device`.
    ///
    /// Recognised keys are `modulo`, `colormap`, `rpack` and `encodemethod`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownDevice`] if `device` is unknown, whatever the other options are.
    /// Returns [`ConfigError::UnknownOption`] for an unknown key, and the parse error of the option for an unrecognised value.
    pub fn from_named<'a>(
        device: &str,
        options: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Result<Self, ConfigError> {
        let mut option = Self::new(device.parse()?);
        options
            .into_iter()
            .try_for_each(|(key, value)| -> Result<(), ConfigError> {
                match key {
                    "modulo" => option.modulo = value.parse()?,
                    "colormap" => option.colormap = value.parse()?,
                    "rpack" => option.rpack = value.parse()?,
                    "encodemethod" => option.encode_method = value.parse()?,
                    _ => return Err(ConfigError::UnknownOption(key.to_string())),
                }
                Ok(())
            })?;
        Ok(option)
    }

    /// Checks the option.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidModulo`] if the modulo is not finite and positive.
    /// Returns [`ConfigError::InvalidLookup`] if rotation packing is enabled with a custom colormap
    /// that does not have the level `0`, which fills the cells outside the packed pattern.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.modulo.validate()?;
        if let (RotationPack::Deg45, Colormap::Custom(lut)) = (self.rpack, &self.colormap) {
            if !lut.contains(0.) {
                return Err(ConfigError::InvalidLookup(
                    "levels must contain 0 for rotation packing",
                ));
            }
        }
        Ok(())
    }
}

impl Default for FinalizeOption {
    fn default() -> Self {
        Self::new(DeviceClass::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use slmkit_core::colormap::ColorLookup;

    #[test]
    fn phase_defaults() {
        let option = FinalizeOption::new(DeviceClass::Phase);
        assert_eq!(Modulo::Value(1.), option.modulo);
        assert_eq!(Colormap::Pmpi, option.colormap);
        assert_eq!(RotationPack::Disabled, option.rpack);
        assert_eq!(EncodeMethod::Checker, option.encode_method);
        assert_eq!(option, FinalizeOption::default());
    }

    #[test]
    fn amplitude_defaults() {
        let option = FinalizeOption::new(DeviceClass::Amplitude);
        assert_eq!(DeviceClass::Amplitude, option.device);
        assert_eq!(Modulo::Disabled, option.modulo);
        assert_eq!(Colormap::Gray, option.colormap);
        assert_eq!(RotationPack::Deg45, option.rpack);
    }

    #[rstest::rstest]
    #[test]
    #[case(Ok(EncodeMethod::Checker), "checker")]
    #[case(Ok(EncodeMethod::Grating), "grating")]
    #[case(Ok(EncodeMethod::Magnitude), "magnitude")]
    #[case(Err(ConfigError::UnknownEncodeMethod("phase".to_string())), "phase")]
    fn encode_method(#[case] expect: Result<EncodeMethod, ConfigError>, #[case] s: &str) {
        assert_eq!(expect, s.parse::<EncodeMethod>());
    }

    #[test]
    fn from_named() -> anyhow::Result<()> {
        let option = FinalizeOption::from_named(
            "phase",
            [("modulo", "none"), ("colormap", "2pi"), ("rpack", "45deg")],
        )?;
        assert_eq!(
            FinalizeOption {
                device: DeviceClass::Phase,
                modulo: Modulo::Disabled,
                colormap: Colormap::TwoPi,
                rpack: RotationPack::Deg45,
                encode_method: EncodeMethod::Checker,
            },
            option
        );

        let option = FinalizeOption::from_named("amplitude", [("modulo", "0.5")])?;
        assert_eq!(Modulo::Value(0.5), option.modulo);
        assert_eq!(Colormap::Gray, option.colormap);

        assert_eq!(
            FinalizeOption::new(DeviceClass::Amplitude),
            FinalizeOption::from_named("amplitude", [])?
        );
        Ok(())
    }

    #[rstest::rstest]
    #[test]
    #[case(vec![])]
    #[case(vec![("colormap", "gray")])]
    #[case(vec![("colormap", "unknown"), ("rpack", "none")])]
    #[case(vec![("foo", "bar")])]
    #[case(vec![("modulo", "-1")])]
    fn unknown_device(#[case] options: Vec<(&'static str, &'static str)>) {
        ["slm", "dmd", "Phase", ""].into_iter().for_each(|device| {
            assert_eq!(
                Err(ConfigError::UnknownDevice(device.to_string())),
                FinalizeOption::from_named(device, options.clone())
            );
        });
    }

    #[rstest::rstest]
    #[test]
    #[case(ConfigError::UnknownColormap("jet".to_string()), ("colormap", "jet"))]
    #[case(ConfigError::UnknownRotationPack("90deg".to_string()), ("rpack", "90deg"))]
    #[case(ConfigError::InvalidModulo("pi".to_string()), ("modulo", "pi"))]
    #[case(ConfigError::UnknownEncodeMethod("dither".to_string()), ("encodemethod", "dither"))]
    #[case(ConfigError::UnknownOption("device".to_string()), ("device", "phase"))]
    fn invalid_value(#[case] expect: ConfigError, #[case] option: (&'static str, &'static str)) {
        assert_eq!(Err(expect), FinalizeOption::from_named("phase", [option]));
    }

    #[test]
    fn validate() {
        let mut option = FinalizeOption::default();
        assert_eq!(Ok(()), option.validate());
        option.modulo = Modulo::Value(-0.5);
        assert_eq!(
            Err(ConfigError::InvalidModulo("-0.5".to_string())),
            option.validate()
        );
    }

    #[rstest::rstest]
    #[test]
    #[case(Ok(()), RotationPack::Deg45, vec![0., 1., 2.])]
    #[case(Ok(()), RotationPack::Disabled, vec![1., 2.])]
    #[case(
        Err(ConfigError::InvalidLookup("levels must contain 0 for rotation packing")),
        RotationPack::Deg45,
        vec![1., 2.]
    )]
    fn validate_custom_colormap(
        #[case] expect: Result<(), ConfigError>,
        #[case] rpack: RotationPack,
        #[case] levels: Vec<f64>,
    ) -> anyhow::Result<()> {
        let option = FinalizeOption {
            colormap: Colormap::Custom(ColorLookup::new((1., 2.), levels)?),
            rpack,
            ..Default::default()
        };
        assert_eq!(expect, option.validate());
        Ok(())
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde() -> anyhow::Result<()> {
        let option = FinalizeOption::new(DeviceClass::Amplitude);
        let json = serde_json::to_string(&option)?;
        assert_eq!(option, serde_json::from_str(&json)?);

        let option: FinalizeOption = serde_json::from_str(
            r#"{"device":"phase","modulo":{"value":2.0},"colormap":"2pi","rpack":"45deg","encode_method":"checker"}"#,
        )?;
        assert_eq!(Modulo::Value(2.), option.modulo);
        assert_eq!(Colormap::TwoPi, option.colormap);
        assert_eq!(RotationPack::Deg45, option.rpack);
        Ok(())
    }
}
