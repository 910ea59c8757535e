pub use crate::{
    device::{Nop, ShowableExt},
    error::SlmError,
    finalize::{finalize, EncodeMethod, FinalizeOption, Modulo, PatternEncoder, RotationPack},
};

pub use slmkit_core::{
    colormap::{ColorLookup, Colormap},
    device::{DeviceClass, Showable},
    error::{ConfigError, RangeWarning, ShapeError, ShowError},
    field::{checkerboard, Grid},
    pattern::{CanvasSize, Complex, ComplexPattern, EncodedPattern, Pattern},
};

pub use slmkit_holo::{
    lenses_and_prisms, BasisFields, BasisOverrides, HoloError, LensesAndPrisms,
    LensesAndPrismsOption, NalgebraBackend, TargetBeam, Targets,
};
